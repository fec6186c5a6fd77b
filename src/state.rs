use std::sync::Arc;

use crate::board::RegionBoard;
use crate::rocketlane::ProjectSource;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub source: Arc<dyn ProjectSource>,
    pub board: RegionBoard,
}
