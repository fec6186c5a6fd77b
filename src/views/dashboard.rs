use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::catalog::{REGIONS, RegionDescriptor, StatusCategory};
use crate::projects::aggregate;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    go_live_ready_total: usize,
    testing_total: usize,
    regions: &'static [RegionDescriptor],
}

pub async fn index(State(state): State<SharedState>) -> impl IntoResponse {
    let totals = aggregate::load_totals(state.source.as_ref()).await;

    let template = DashboardTemplate {
        go_live_ready_total: totals.count(StatusCategory::GoLiveReady),
        testing_total: totals.count(StatusCategory::Testing),
        regions: &REGIONS,
    };
    Html(template.render().unwrap_or_default())
}
