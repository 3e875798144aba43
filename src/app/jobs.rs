//! Background backend calls and their completion messages

use crate::api::{ApiClient, ApiError};
use crate::types::*;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one backend call, applied on the UI thread
#[derive(Debug)]
pub enum JobMessage {
    ScanFinished(Result<ScanResult, ApiError>),
    HistoryLoaded(Result<Vec<HistoryEntry>, ApiError>),
    HealthChecked(Result<HealthStatus, ApiError>),
}

/// Wakes the UI after a job completes
pub type Repaint = Arc<dyn Fn() + Send + Sync>;

pub struct Jobs {
    client: ApiClient,
    runtime: tokio::runtime::Handle,
    tx: Sender<JobMessage>,
    rx: Receiver<JobMessage>,
    repaint: Repaint,
}

impl Jobs {
    pub fn new(client: ApiClient, runtime: tokio::runtime::Handle, repaint: Repaint) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            runtime,
            tx,
            rx,
            repaint,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn spawn_scan(&self, request: ScanRequest) {
        let client = self.client.clone();
        info!(chars = request.email_text.chars().count(), "Submitting email for scan");
        self.spawn(async move {
            let result = client.submit_scan(&request.email_text).await;
            match &result {
                Ok(scan) => info!(
                    classification = %scan.classification,
                    confidence = scan.confidence,
                    "Scan completed"
                ),
                Err(e) => warn!(error = %e, "Scan failed"),
            }
            JobMessage::ScanFinished(result)
        });
    }

    pub fn spawn_history(&self) {
        let client = self.client.clone();
        debug!("Fetching scan history");
        self.spawn(async move {
            let result = client.fetch_history().await;
            match &result {
                Ok(entries) => debug!(count = entries.len(), "History fetched"),
                Err(e) => warn!(error = %e, "History fetch failed"),
            }
            JobMessage::HistoryLoaded(result)
        });
    }

    pub fn spawn_health(&self) {
        let client = self.client.clone();
        self.spawn(async move {
            let result = client.health().await;
            match &result {
                Ok(health) => info!(
                    status = %health.status,
                    model_loaded = health.model_loaded,
                    "Backend health checked"
                ),
                Err(e) => warn!(error = %e, "Backend health check failed"),
            }
            JobMessage::HealthChecked(result)
        });
    }

    fn spawn<F>(&self, job: F)
    where
        F: std::future::Future<Output = JobMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let message = job.await;
            // Receiver only disappears when the window is closing
            if tx.send(message).is_ok() {
                repaint();
            }
        });
    }

    /// Next completed job, if any.
    pub fn try_recv(&self) -> Option<JobMessage> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<JobMessage> {
        self.rx.recv_timeout(timeout).ok()
    }
}
