pub mod regions;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/regions", get(regions::list))
        .route("/api/v1/regions/{code}/projects", get(regions::load))
        .route("/api/v1/summary", get(regions::summary))
        .route("/api/v1/board", get(regions::board))
}
