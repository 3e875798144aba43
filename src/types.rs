//! Wire types exchanged with the scanning backend

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which backend call a status or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Scan,
    History,
    Health,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Scan => "scan",
            Operation::History => "history",
            Operation::Health => "health",
        })
    }
}

/// Body of `POST /scan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    pub email_text: String,
}

/// Classification returned by `POST /scan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub classification: String,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

/// One row of `GET /history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    // Missing or null fields degrade this row only, never the whole list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub classification: String,
    #[serde(default = "unknown_confidence", deserialize_with = "null_as_unknown")]
    pub confidence: f64,
    // The reference backend stores a pre-truncated `text_snippet`
    #[serde(default, alias = "text_snippet")]
    pub input: Option<String>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

fn unknown_confidence() -> f64 {
    f64::NAN
}

fn null_as_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(unknown_confidence))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope of `GET /history`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Error envelope the backend sends with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend timestamps are ISO-8601 strings or numeric epoch values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Text(String),
}
