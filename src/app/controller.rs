//! Applies user actions and job completions to the scan session

use super::jobs::{JobMessage, Jobs};
use super::state::{Effect, ScanSession};
use tracing::debug;

pub struct Controller {
    pub session: ScanSession,
    jobs: Jobs,
}

impl Controller {
    pub fn new(jobs: Jobs) -> Self {
        Self {
            session: ScanSession::new(),
            jobs,
        }
    }

    pub fn backend_url(&self) -> &str {
        self.jobs.client().base_url()
    }

    /// First-frame work: load history and probe the backend.
    pub fn mount(&mut self) {
        self.check_health();
        self.refresh_history();
    }

    /// Returns false when the scan action is disabled.
    pub fn submit_scan(&mut self) -> bool {
        let Some(request) = self.session.begin_scan() else {
            return false;
        };
        self.jobs.spawn_scan(request);
        true
    }

    /// Returns false while a history fetch is already running.
    pub fn refresh_history(&mut self) -> bool {
        if self.session.history_loading() {
            return false;
        }
        self.dispatch_history();
        true
    }

    pub fn check_health(&mut self) {
        if self.session.begin_health() {
            self.jobs.spawn_health();
        }
    }

    fn dispatch_history(&mut self) {
        self.session.begin_history();
        self.jobs.spawn_history();
    }

    /// Apply every completed job. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(message) = self.jobs.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    pub(crate) fn apply(&mut self, message: JobMessage) {
        match message {
            JobMessage::ScanFinished(result) => {
                if let Some(Effect::FetchHistory) = self.session.finish_scan(result) {
                    debug!("Refreshing history after scan");
                    // Implicit refresh runs even if a manual one is in flight
                    self.dispatch_history();
                }
            }
            JobMessage::HistoryLoaded(result) => self.session.finish_history(result),
            JobMessage::HealthChecked(result) => self.session.finish_health(result),
        }
    }

    #[cfg(test)]
    fn wait_for(&mut self, count: usize) {
        let timeout = std::time::Duration::from_secs(10);
        for _ in 0..count {
            let message = self
                .jobs
                .recv_timeout(timeout)
                .expect("job did not finish in time");
            self.apply(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, unreachable_base_url, FakeBackend};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn controller(client: crate::api::ApiClient, runtime: &tokio::runtime::Runtime) -> Controller {
        Controller::new(Jobs::new(client, runtime.handle().clone(), Arc::new(|| {})))
    }

    /// Backend that records scans and echoes them back from `/history`.
    fn echoing_backend() -> FakeBackend {
        let history = Arc::new(Mutex::new(Vec::<serde_json::Value>::new()));
        FakeBackend::start(move |req| match req.path.as_str() {
            "/scan" => {
                let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
                history.lock().unwrap().insert(
                    0,
                    serde_json::json!({
                        "classification": "phishing",
                        "confidence": 0.97,
                        "input": body["email_text"],
                        "timestamp": "2024-05-01T10:15:30"
                    }),
                );
                (
                    200,
                    r#"{"classification":"phishing","confidence":0.97,"explanation":"Contains urgency and prize language"}"#
                        .to_string(),
                )
            }
            "/history" => {
                let entries = history.lock().unwrap().clone();
                (200, serde_json::json!({ "history": entries }).to_string())
            }
            _ => (200, r#"{"status":"ok","model_loaded":true}"#.to_string()),
        })
    }

    #[test]
    fn scan_then_history_round_trip() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let backend = echoing_backend();
        let mut ctl = controller(backend.client(), &runtime);

        ctl.session.input = "Win a free prize now!!!".into();
        assert!(ctl.submit_scan());
        assert!(ctl.session.scan_loading());

        // Scan completion, then the implicit history refresh
        ctl.wait_for(2);

        let result = ctl.session.result().unwrap();
        assert_eq!(result.classification, "phishing");
        assert_eq!(result.explanation, "Contains urgency and prize language");
        assert!(!ctl.session.scan_loading());
        assert!(!ctl.session.history_loading());
        assert_eq!(ctl.session.history().len(), 1);
        assert_eq!(
            ctl.session.history()[0].input.as_deref(),
            Some("Win a free prize now!!!")
        );
        assert_eq!(backend.hits("/scan"), 1);
        assert_eq!(backend.hits("/history"), 1);
    }

    #[test]
    fn blank_input_never_reaches_the_backend() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let backend = echoing_backend();
        let mut ctl = controller(backend.client(), &runtime);

        ctl.session.input = "   ".into();
        assert!(!ctl.submit_scan());
        assert!(!ctl.session.scan_loading());
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert_eq!(ctl.pump(), 0);
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn unreachable_backend_shows_error_and_clears_loading() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut ctl = controller(client_for(&unreachable_base_url()), &runtime);

        ctl.session.input = "hello".into();
        assert!(ctl.submit_scan());
        ctl.wait_for(1);

        assert!(!ctl.session.scan_loading());
        assert!(ctl.session.result().is_none());
        assert_eq!(
            ctl.session.error().unwrap().message,
            "No response from API. Is the backend running?"
        );
    }

    #[test]
    fn mount_fetches_history_and_health_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let backend = echoing_backend();
        let mut ctl = controller(backend.client(), &runtime);

        ctl.mount();
        assert!(!ctl.refresh_history());
        ctl.wait_for(2);

        assert!(ctl.session.health().ready().unwrap().model_loaded);
        assert!(ctl.session.history().is_empty());
        assert!(!ctl.session.history_loading());
        assert_eq!(backend.hits("/history"), 1);
        assert_eq!(backend.hits("/"), 1);
    }

    #[test]
    fn repaint_is_requested_per_completed_job() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let backend = echoing_backend();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();
        let jobs = Jobs::new(
            backend.client(),
            runtime.handle().clone(),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let mut ctl = Controller::new(jobs);

        ctl.refresh_history();
        ctl.wait_for(1);
        // The repaint fires right after the message is sent
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while repaints.load(Ordering::SeqCst) == 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }
}
