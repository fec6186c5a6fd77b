pub mod client;

use async_trait::async_trait;

use crate::catalog::StatusCategory;
use crate::error::FetchError;
use crate::models::RawProject;

pub use client::RocketlaneClient;

/// One listing request against the project service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectQuery {
    pub status: StatusCategory,
    /// Ask for the custom field bag. Summary counts skip it.
    pub include_fields: bool,
}

impl ProjectQuery {
    pub fn with_fields(status: StatusCategory) -> Self {
        Self {
            status,
            include_fields: true,
        }
    }

    pub fn count_only(status: StatusCategory) -> Self {
        Self {
            status,
            include_fields: false,
        }
    }
}

/// Source of raw project records. The live implementation is
/// [`RocketlaneClient`]; tests plug in an in-memory one.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<RawProject>, FetchError>;
}
