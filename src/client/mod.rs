//! HTTP client for the payroll backend.
//!
//! One method per backend operation, spread over the per-resource modules.
//! Every call goes through [`handle_response`], which turns non-2xx statuses
//! into [`ApiError::Http`] and non-JSON success bodies into `None`.

mod bank_account;
mod batch;
mod employee;
mod error;

pub use error::ApiError;

use reqwest::Response;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a backend response to its JSON body, or `None` when the success
/// response is not JSON (e.g. `204 No Content` on deletes).
async fn handle_response<T: DeserializeOwned>(
    path: &str,
    resp: Response,
) -> Result<Option<T>, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), path, body = %text, "API error response");
        let body = if text.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            text
        };
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }

    let is_json = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return Ok(None);
    }

    resp.json::<T>().await.map(Some).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// For operations whose reply must carry an entity.
fn require_body<T>(path: &str, body: Option<T>) -> Result<T, ApiError> {
    body.ok_or_else(|| ApiError::Decode {
        path: path.to_string(),
        reason: "expected a JSON body, got none".to_string(),
    })
}
