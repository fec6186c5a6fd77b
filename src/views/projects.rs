use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};

use crate::board::ViewModel;
use crate::catalog::{self, REGIONS, RegionDescriptor, StatusCategory};
use crate::error::AppError;
use crate::projects::fields;
use crate::state::SharedState;

struct ProjectRow {
    project_name: String,
    implementation_manager: String,
    project_manager: String,
    current_status: String,
    status_class: &'static str,
    scope_items: Vec<String>,
}

#[derive(Template)]
#[template(path = "dashboard/projects.html")]
struct ProjectsTemplate {
    regions: &'static [RegionDescriptor],
    region: String,
    loading: bool,
    error: Option<String>,
    go_live_ready_count: usize,
    testing_count: usize,
    rows: Vec<ProjectRow>,
    loaded_at: String,
}

impl From<ViewModel> for ProjectsTemplate {
    fn from(view: ViewModel) -> Self {
        let count = |status: StatusCategory| view.counts.get(&status).copied().unwrap_or(0);
        let go_live_ready_count = count(StatusCategory::GoLiveReady);
        let testing_count = count(StatusCategory::Testing);

        let rows = view
            .items
            .iter()
            .map(|p| ProjectRow {
                project_name: p.project_name.clone(),
                implementation_manager: p.implementation_manager.clone(),
                project_manager: p.project_manager.clone(),
                current_status: p.current_status.clone(),
                status_class: fields::status_class(&p.current_status),
                scope_items: p.scope_items(),
            })
            .collect();

        ProjectsTemplate {
            regions: &REGIONS,
            region: view.region.unwrap_or_default(),
            loading: view.loading,
            error: view.error,
            go_live_ready_count,
            testing_count,
            rows,
            loaded_at: view
                .loaded_at
                .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Select a region and render the outcome of that load.
pub async fn show(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let region = catalog::find_region(&code)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region: {code}")))?;

    let view = state.board.select_region(region.code).await;
    let template = ProjectsTemplate::from(view);
    Ok(Html(template.render().unwrap_or_default()))
}

/// Render the board as it currently stands without starting a load.
pub async fn current(State(state): State<SharedState>) -> impl IntoResponse {
    let template = ProjectsTemplate::from(state.board.snapshot().await);
    Html(template.render().unwrap_or_default())
}
