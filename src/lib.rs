pub mod config;
pub mod error;
pub mod state;
pub mod catalog;
pub mod models;
pub mod rocketlane;
pub mod projects;
pub mod board;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::board::RegionBoard;
use crate::config::Config;
use crate::rocketlane::{ProjectSource, RocketlaneClient};
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let source: Arc<dyn ProjectSource> = Arc::new(RocketlaneClient::from_config(&config));
    build_app_with_source(config, source)
}

pub fn build_app_with_source(config: Config, source: Arc<dyn ProjectSource>) -> Router {
    tracing::info!(
        projects_url = %config.projects_url(),
        "Project service configured"
    );

    let state: SharedState = Arc::new(AppState {
        board: RegionBoard::new(source.clone()),
        source,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
