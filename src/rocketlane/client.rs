//! HTTP client for the Rocketlane projects API.
//!
//! Authenticates with a static `api-key` header. No retries and no timeout
//! beyond reqwest's defaults.

use async_trait::async_trait;

use crate::catalog::{self, STATUS_FILTER_PARAM};
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{ProjectsEnvelope, RawProject};

use super::{ProjectQuery, ProjectSource};

pub struct RocketlaneClient {
    client: reqwest::Client,
    projects_url: String,
    api_key: String,
}

impl RocketlaneClient {
    pub fn new(projects_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            projects_url: projects_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.projects_url(), config.api_key.clone())
    }
}

#[async_trait]
impl ProjectSource for RocketlaneClient {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<RawProject>, FetchError> {
        let mut params = vec![(STATUS_FILTER_PARAM, query.status.filter_value().to_string())];
        if query.include_fields {
            params.push(("includeFields", catalog::include_fields_param()));
        }

        let resp = self
            .client
            .get(&self.projects_url)
            .header("api-key", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let envelope: ProjectsEnvelope =
            serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        tracing::debug!(
            status = %query.status,
            count = envelope.data.data.len(),
            "Fetched projects"
        );

        Ok(envelope.data.data)
    }
}
