use crate::catalog::StatusCategory;
use crate::error::FetchError;
use crate::models::SimplifiedProject;
use crate::rocketlane::{ProjectQuery, ProjectSource};

use super::fields;

/// Result of one per-status fetch. `projects` is always usable; on failure it
/// is empty and `error` carries the cause.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub status: StatusCategory,
    pub projects: Vec<SimplifiedProject>,
    pub error: Option<FetchError>,
}

/// Fetch one status category and keep only projects in `region_code`.
pub async fn fetch_by_status(
    source: &dyn ProjectSource,
    status: StatusCategory,
    region_code: &str,
) -> FetchOutcome {
    match source.list_projects(&ProjectQuery::with_fields(status)).await {
        Ok(raw) => {
            let projects: Vec<SimplifiedProject> = fields::filter_by_region(&raw, region_code)
                .map(fields::simplify)
                .collect();
            tracing::debug!(
                %status,
                region = region_code,
                fetched = raw.len(),
                kept = projects.len(),
                "Filtered projects by region"
            );
            FetchOutcome {
                status,
                projects,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(%status, region = region_code, "Error fetching projects: {e}");
            FetchOutcome {
                status,
                projects: Vec::new(),
                error: Some(e),
            }
        }
    }
}

/// Number of projects in a status category across every region.
pub async fn count_by_status(
    source: &dyn ProjectSource,
    status: StatusCategory,
) -> Result<usize, FetchError> {
    source
        .list_projects(&ProjectQuery::count_only(status))
        .await
        .map(|raw| raw.len())
        .inspect_err(|e| tracing::error!(%status, "Error fetching total project count: {e}"))
}
