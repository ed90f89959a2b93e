// ABOUTME: ApiClient for the lead API: GET /api/leads with optional query params, POST /api/score.
// ABOUTME: Blank query values are omitted from the URL; non-2xx responses become typed errors.

use std::env;

use leadscope_core::Lead;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Default API base when `LEADSCOPE_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Errors from talking to the lead API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(StatusCode),
}

/// Optional server-side filter parameters for the leads endpoint.
/// Unset or blank values are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadQuery {
    pub industry: Option<String>,
    pub region: Option<String>,
    pub min_score: Option<i64>,
}

impl LeadQuery {
    /// Query pairs to append to the URL, skipping unset and blank values.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(industry) = self.industry.as_deref().filter(|v| !v.is_empty()) {
            params.push(("industry", industry.to_string()));
        }
        if let Some(region) = self.region.as_deref().filter(|v| !v.is_empty()) {
            params.push(("region", region.to_string()));
        }
        if let Some(min_score) = self.min_score {
            params.push(("min_score", min_score.to_string()));
        }
        params
    }
}

/// Response body of the score endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoreResponse {
    pub score: i64,
}

/// HTTP client bound to one API base URL.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL. A trailing slash is trimmed so
    /// path joins stay predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from `LEADSCOPE_API_BASE`, falling back to the default.
    pub fn from_env() -> Self {
        let base = env::var("LEADSCOPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/leads — fetch scored leads, optionally filtered server-side.
    pub async fn fetch_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>, ApiError> {
        let url = format!("{}/api/leads", self.base_url);
        tracing::debug!(%url, "fetching leads");

        let resp = self.http.get(&url).query(&query.params()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "lead fetch rejected");
            return Err(ApiError::Status(status));
        }

        let leads: Vec<Lead> = resp.json().await?;
        tracing::debug!(count = leads.len(), "fetched leads");
        Ok(leads)
    }

    /// POST /api/score — score one lead payload. The body is arbitrary JSON so
    /// callers can score drafts that are not yet full `Lead` records.
    pub async fn score_lead(&self, lead: &serde_json::Value) -> Result<ScoreResponse, ApiError> {
        let url = format!("{}/api/score", self.base_url);
        tracing::debug!(%url, "scoring lead");

        let resp = self.http.post(&url).json(lead).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "score request rejected");
            return Err(ApiError::Status(status));
        }

        Ok(resp.json().await?)
    }
}
