//! Region view model and its load cycle.
//!
//! The board owns exactly one [`ViewState`]. Every region selection bumps a
//! query generation and replaces the state wholesale with `Loading`; a load
//! result is only published if its generation is still the latest, so a slow
//! response for an earlier region never overwrites a newer one. The caller
//! that issued a load always gets that load's own outcome back.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::FETCH_FAILED_MESSAGE;
use crate::models::SimplifiedProject;
use crate::projects::aggregate::{self, LoadFailure, RegionData, StatusCounts};
use crate::rocketlane::ProjectSource;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading {
        region: String,
    },
    Ready {
        region: String,
        data: RegionData,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        region: String,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub region: Option<String>,
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<SimplifiedProject>,
    pub counts: StatusCounts,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl ViewState {
    /// Final state for a finished region load.
    pub fn settled(region_code: &str, result: Result<RegionData, LoadFailure>) -> Self {
        match result {
            Ok(data) => {
                tracing::info!(
                    region = region_code,
                    rows = data.items.len(),
                    "Region load ready"
                );
                ViewState::Ready {
                    region: region_code.to_string(),
                    data,
                    loaded_at: Utc::now(),
                }
            }
            Err(failure) => {
                tracing::warn!(region = region_code, "Region load failed: {failure}");
                ViewState::Failed {
                    region: region_code.to_string(),
                    message: FETCH_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}

impl From<&ViewState> for ViewModel {
    fn from(state: &ViewState) -> Self {
        let empty = |region: Option<&String>, phase: Phase, error: Option<String>| ViewModel {
            region: region.cloned(),
            phase,
            loading: phase == Phase::Loading,
            error,
            items: Vec::new(),
            counts: aggregate::zero_counts(),
            loaded_at: None,
        };

        match state {
            ViewState::Idle => empty(None, Phase::Idle, None),
            ViewState::Loading { region } => empty(Some(region), Phase::Loading, None),
            ViewState::Failed { region, message } => {
                empty(Some(region), Phase::Failed, Some(message.clone()))
            }
            ViewState::Ready {
                region,
                data,
                loaded_at,
            } => ViewModel {
                region: Some(region.clone()),
                phase: Phase::Ready,
                loading: false,
                error: None,
                items: data.items.clone(),
                counts: data.counts.clone(),
                loaded_at: Some(*loaded_at),
            },
        }
    }
}

pub struct RegionBoard {
    source: Arc<dyn ProjectSource>,
    generation: AtomicU64,
    state: RwLock<ViewState>,
}

impl RegionBoard {
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            state: RwLock::new(ViewState::Idle),
        }
    }

    pub async fn snapshot(&self) -> ViewModel {
        ViewModel::from(&*self.state.read().await)
    }

    /// Select a region: reset to `Loading`, fetch, then publish if still current.
    /// Returns the outcome of this load for `region_code`, even when a newer
    /// selection has since taken over the board.
    pub async fn select_region(&self, region_code: &str) -> ViewModel {
        let generation = self.begin(region_code).await;
        tracing::info!(region = region_code, generation, "Loading region");

        let result = aggregate::load_region(self.source.as_ref(), region_code).await;
        let settled = ViewState::settled(region_code, result);
        let view = ViewModel::from(&settled);
        self.publish(generation, settled).await;

        view
    }

    /// Start a new query generation and enter `Loading` for `region_code`.
    pub async fn begin(&self, region_code: &str) -> u64 {
        let mut state = self.state.write().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *state = ViewState::Loading {
            region: region_code.to_string(),
        };
        generation
    }

    /// Apply a finished load. Returns `false` if a newer selection has been
    /// made since `generation` was issued; the board is left untouched.
    pub async fn publish(&self, generation: u64, settled: ViewState) -> bool {
        let mut state = self.state.write().await;
        let current = self.generation.load(Ordering::SeqCst);
        if current != generation {
            tracing::debug!(generation, current, "Discarding stale region load");
            return false;
        }

        *state = settled;
        true
    }
}
