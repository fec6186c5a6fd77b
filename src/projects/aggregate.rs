use std::collections::BTreeMap;

use futures_util::future::join_all;
use serde::Serialize;

use crate::catalog::StatusCategory;
use crate::error::FetchError;
use crate::models::SimplifiedProject;
use crate::rocketlane::ProjectSource;

use super::fetcher::{self, FetchOutcome};

/// Project count per tracked status category.
pub type StatusCounts = BTreeMap<StatusCategory, usize>;

pub fn zero_counts() -> StatusCounts {
    StatusCategory::ALL.into_iter().map(|s| (s, 0)).collect()
}

/// Successful region load: rows in category order plus per-category counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionData {
    pub items: Vec<SimplifiedProject>,
    pub counts: StatusCounts,
}

/// At least one status fetch failed. The whole region load is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub failures: Vec<(StatusCategory, FetchError)>,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .failures
            .iter()
            .map(|(status, e)| format!("{status}: {e}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Fetch every tracked status for `region_code` concurrently and combine.
pub async fn load_region(
    source: &dyn ProjectSource,
    region_code: &str,
) -> Result<RegionData, LoadFailure> {
    let outcomes: Vec<FetchOutcome> = join_all(
        StatusCategory::ALL
            .into_iter()
            .map(|status| fetcher::fetch_by_status(source, status, region_code)),
    )
    .await;

    combine(outcomes)
}

/// Concatenate per-status outcomes in the order given. Counts come from each
/// outcome's own list, not from recounting the combined rows.
pub fn combine(outcomes: Vec<FetchOutcome>) -> Result<RegionData, LoadFailure> {
    let failures: Vec<(StatusCategory, FetchError)> = outcomes
        .iter()
        .filter_map(|o| o.error.clone().map(|e| (o.status, e)))
        .collect();
    if !failures.is_empty() {
        return Err(LoadFailure { failures });
    }

    let mut counts = zero_counts();
    let mut items = Vec::new();
    for outcome in outcomes {
        counts.insert(outcome.status, outcome.projects.len());
        items.extend(outcome.projects);
    }

    Ok(RegionData { items, counts })
}

/// Summary header counts across all regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTotals {
    pub counts: StatusCounts,
    /// Set when any count could not be fetched; every count then reads 0.
    pub error: bool,
}

impl StatusTotals {
    pub fn count(&self, status: StatusCategory) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}

pub async fn load_totals(source: &dyn ProjectSource) -> StatusTotals {
    let results = join_all(
        StatusCategory::ALL
            .into_iter()
            .map(|status| async move { (status, fetcher::count_by_status(source, status).await) }),
    )
    .await;

    let mut counts = zero_counts();
    for (status, result) in results {
        match result {
            Ok(n) => {
                counts.insert(status, n);
            }
            Err(_) => {
                return StatusTotals {
                    counts: zero_counts(),
                    error: true,
                };
            }
        }
    }

    StatusTotals {
        counts,
        error: false,
    }
}
