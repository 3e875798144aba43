//! HTTP client for the scanning backend

use crate::config::Config;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::types::*;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure categories for backend calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Api,
    Request,
    Decode,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("email text is empty")]
    Validation,
    #[error("no response from {op} endpoint: {source}")]
    Network {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{op} request failed with HTTP {status}")]
    Api {
        op: Operation,
        status: u16,
        message: Option<String>,
    },
    #[error("could not build {op} request: {source}")]
    Request {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected {op} response body: {source}")]
    Decode {
        op: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation => ErrorKind::Validation,
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Api { .. } => ErrorKind::Api,
            ApiError::Request { .. } => ErrorKind::Request,
            ApiError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// One line suitable for the error panel
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation => "Please enter email text to scan.".to_string(),
            ApiError::Network { op, .. } => no_response_message(*op).to_string(),
            ApiError::Api { op, message, .. } => message
                .clone()
                .unwrap_or_else(|| api_default_message(*op).to_string()),
            ApiError::Request { op, .. } => setup_message(*op).to_string(),
            ApiError::Decode { op, .. } => api_default_message(*op).to_string(),
        }
    }

    fn from_transport(op: Operation, source: reqwest::Error) -> Self {
        if source.is_builder() {
            ApiError::Request { op, source }
        } else {
            ApiError::Network { op, source }
        }
    }
}

fn api_default_message(op: Operation) -> &'static str {
    match op {
        Operation::Scan => "An error occurred with the API response.",
        Operation::History => "An error occurred fetching history.",
        Operation::Health => "An error occurred checking backend status.",
    }
}

fn no_response_message(op: Operation) -> &'static str {
    match op {
        Operation::Scan => "No response from API. Is the backend running?",
        Operation::History => "No response from API when fetching history. Is the backend running?",
        Operation::Health => {
            "No response from API when checking backend status. Is the backend running?"
        }
    }
}

fn setup_message(op: Operation) -> &'static str {
    match op {
        Operation::Scan => "Error setting up the request.",
        Operation::History => "Error setting up the history request.",
        Operation::Health => "Error setting up the status request.",
    }
}

/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{}/{}", APP_NAME.replace(' ', "-"), APP_VERSION))
            .build()?;
        Ok(Self::with_http(config, http))
    }

    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /scan`. Blank input is rejected before anything is sent.
    pub async fn submit_scan(&self, email_text: &str) -> Result<ScanResult, ApiError> {
        if email_text.trim().is_empty() {
            return Err(ApiError::Validation);
        }
        let body = ScanRequest {
            email_text: email_text.to_string(),
        };
        let request = self
            .http
            .post(self.endpoint("scan"))
            .bearer_auth(&self.api_key)
            .json(&body);
        self.send(Operation::Scan, request).await
    }

    /// `GET /history`, in the order the backend returns it.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let request = self
            .http
            .get(self.endpoint("history"))
            .bearer_auth(&self.api_key);
        let response: HistoryResponse = self.send(Operation::History, request).await?;
        Ok(response.history)
    }

    /// `GET /`, which the backend serves without authentication.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let request = self.http.get(self.endpoint(""));
        self.send(Operation::Health, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(op, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Network { op, source })?;
        debug!(%op, status = status.as_u16(), bytes = body.len(), "Backend response received");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            warn!(%op, status = status.as_u16(), message = ?message, "Backend rejected request");
            return Err(ApiError::Api {
                op,
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { op, source })
    }
}
