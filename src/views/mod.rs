pub mod dashboard;
pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/projects/{code}", get(projects::show))
        .route("/board", get(projects::current))
}
