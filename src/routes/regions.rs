use axum::Json;
use axum::extract::{Path, State};

use crate::board::ViewModel;
use crate::catalog::{self, REGIONS, RegionDescriptor};
use crate::error::AppError;
use crate::projects::aggregate::{self, StatusTotals};
use crate::state::SharedState;

pub async fn list() -> Json<&'static [RegionDescriptor]> {
    Json(&REGIONS)
}

pub async fn summary(State(state): State<SharedState>) -> Json<StatusTotals> {
    Json(aggregate::load_totals(state.source.as_ref()).await)
}

pub async fn load(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<Json<ViewModel>, AppError> {
    let region = catalog::find_region(&code)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region: {code}")))?;
    Ok(Json(state.board.select_region(region.code).await))
}

pub async fn board(State(state): State<SharedState>) -> Json<ViewModel> {
    Json(state.board.snapshot().await)
}
