//! What the main page shows, derived from the scan session

use crate::api::ErrorKind;
use crate::app::state::{ScanSession, Status};
use crate::constants::MISSING_VALUE;
use crate::types::Operation;
use crate::ui::components::{format_confidence, format_timestamp, snippet};
use chrono::TimeZone;
use std::fmt::Display;

pub const HISTORY_PLACEHOLDER: &str = "No scan history yet. Scan an email to see results here!";
pub const HISTORY_LOADING: &str = "Loading history...";

/// Hint for the submit shortcut, bound to `Modifiers::COMMAND`
pub fn scan_shortcut_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd+Enter to scan"
    } else {
        "Ctrl+Enter to scan"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl ActionButton {
    pub fn scan(session: &ScanSession) -> Self {
        Self {
            label: if session.scan_loading() {
                "Scanning..."
            } else {
                "Scan Email"
            },
            enabled: session.can_submit(),
        }
    }

    pub fn refresh(session: &ScanSession) -> Self {
        let loading = session.history_loading();
        Self {
            label: if loading { "Refreshing..." } else { "Refresh History" },
            enabled: !loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard<'a> {
    pub classification: &'a str,
    pub confidence: String,
    pub explanation: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    pub classification: &'a str,
    pub confidence: String,
    pub snippet: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendBadge {
    Checking,
    Online { model_loaded: bool },
    Unreachable(String),
    /// Reachable, but answered with an error or an unexpected body
    Faulty(String),
    Unknown,
}

impl BackendBadge {
    pub fn from_session(session: &ScanSession) -> Self {
        match session.health() {
            Status::Idle => BackendBadge::Unknown,
            Status::Pending => BackendBadge::Checking,
            Status::Ready(health) => BackendBadge::Online {
                model_loaded: health.model_loaded,
            },
            Status::Failed {
                kind: ErrorKind::Network,
                message,
            } => BackendBadge::Unreachable(message.clone()),
            Status::Failed { message, .. } => BackendBadge::Faulty(message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub scan_button: ActionButton,
    pub refresh_button: ActionButton,
    pub error: Option<&'a str>,
    /// Which action produced the error, for the caption under the banner
    pub error_context: Option<&'static str>,
    pub result: Option<ResultCard<'a>>,
    pub history_loading: bool,
    pub history_placeholder: bool,
    pub history: Vec<HistoryRow<'a>>,
    /// Local time of the last successful refresh
    pub history_updated: Option<String>,
    /// The last refresh failed and older rows are still on screen
    pub history_stale: bool,
}

impl<'a> PageView<'a> {
    pub fn project<Tz>(session: &'a ScanSession, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let history_loading = session.history_loading();
        let history = session
            .history()
            .iter()
            .map(|entry| HistoryRow {
                classification: match entry.classification.trim() {
                    "" => MISSING_VALUE,
                    label => label,
                },
                confidence: format_confidence(entry.confidence),
                snippet: snippet(entry.input.as_deref()),
                timestamp: format_timestamp(entry.timestamp.as_ref(), tz),
            })
            .collect::<Vec<_>>();

        Self {
            scan_button: ActionButton::scan(session),
            refresh_button: ActionButton::refresh(session),
            error: session.error().map(|slot| slot.message.as_str()),
            error_context: session.error().map(|slot| match slot.operation {
                Operation::Scan => "while scanning",
                Operation::History => "while fetching history",
                Operation::Health => "while checking the backend",
            }),
            result: session.result().map(|r| ResultCard {
                classification: &r.classification,
                confidence: format_confidence(r.confidence),
                explanation: &r.explanation,
            }),
            history_loading,
            history_placeholder: history.is_empty() && !history_loading,
            history_stale: !history.is_empty() && session.history_status().failure().is_some(),
            history,
            history_updated: session
                .history_status()
                .ready()
                .map(|at| at.with_timezone(tz).format("%H:%M:%S").to_string()),
        }
    }
}
