//! Scan session state: input, per-operation status and the shared error banner

use crate::api::{ApiError, ErrorKind};
use crate::types::*;
use chrono::{DateTime, Local};

/// Lifecycle of one backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum Status<T> {
    Idle,
    Pending,
    Ready(T),
    Failed { kind: ErrorKind, message: String },
}

impl<T> Default for Status<T> {
    fn default() -> Self {
        Status::Idle
    }
}

impl<T> Status<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Status::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Status::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn failed(err: &ApiError) -> Self {
        Status::Failed {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

/// Most recent failure of any operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSlot {
    pub operation: Operation,
    pub message: String,
}

/// Follow-up work requested by a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchHistory,
}

#[derive(Debug, Default)]
pub struct ScanSession {
    pub input: String,
    scan: Status<ScanResult>,
    history: Vec<HistoryEntry>,
    history_status: Status<DateTime<Local>>,
    history_in_flight: usize,
    health: Status<HealthStatus>,
    error: Option<ErrorSlot>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Scan
    // ------------------------------------------------------------------

    pub fn scan_loading(&self) -> bool {
        self.scan.is_pending()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.scan.ready()
    }

    pub fn can_submit(&self) -> bool {
        !self.scan_loading() && !self.input.trim().is_empty()
    }

    /// Start a scan of the current input. Returns `None` when the action is disabled.
    pub fn begin_scan(&mut self) -> Option<ScanRequest> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        self.scan = Status::Pending;
        Some(ScanRequest {
            email_text: self.input.clone(),
        })
    }

    pub fn finish_scan(&mut self, result: Result<ScanResult, ApiError>) -> Option<Effect> {
        match result {
            Ok(scan) => {
                self.scan = Status::Ready(scan);
                Some(Effect::FetchHistory)
            }
            Err(err) => {
                self.scan = Status::failed(&err);
                self.record_error(Operation::Scan, &err);
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_loading(&self) -> bool {
        self.history_in_flight > 0
    }

    pub fn history_status(&self) -> &Status<DateTime<Local>> {
        &self.history_status
    }

    pub fn begin_history(&mut self) {
        self.error = None;
        self.history_in_flight += 1;
        self.history_status = Status::Pending;
    }

    pub fn finish_history(&mut self, result: Result<Vec<HistoryEntry>, ApiError>) {
        self.history_in_flight = self.history_in_flight.saturating_sub(1);
        let settled = self.history_in_flight == 0;
        match result {
            Ok(entries) => {
                self.history = entries;
                if settled {
                    self.history_status = Status::Ready(Local::now());
                }
            }
            Err(err) => {
                if settled {
                    self.history_status = Status::failed(&err);
                }
                self.record_error(Operation::History, &err);
            }
        }
    }

    // ------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------

    pub fn health(&self) -> &Status<HealthStatus> {
        &self.health
    }

    pub fn begin_health(&mut self) -> bool {
        if self.health.is_pending() {
            return false;
        }
        self.health = Status::Pending;
        true
    }

    // Only drives the status badge; never touches the error banner
    pub fn finish_health(&mut self, result: Result<HealthStatus, ApiError>) {
        self.health = match result {
            Ok(status) => Status::Ready(status),
            Err(err) => Status::failed(&err),
        };
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    pub fn error(&self) -> Option<&ErrorSlot> {
        self.error.as_ref()
    }

    fn record_error(&mut self, operation: Operation, err: &ApiError) {
        self.error = Some(ErrorSlot {
            operation,
            message: err.user_message(),
        });
    }
}
