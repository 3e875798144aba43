//! Application constants and configuration defaults

pub const APP_NAME: &str = "Email Guard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_KEY: &str = "your_super_secret_email_guard_key_123";

pub const ENV_BACKEND_URL: &str = "EMAIL_GUARD_BACKEND_URL";
pub const ENV_API_KEY: &str = "EMAIL_GUARD_API_KEY";

/// History rows show at most this many characters of the scanned input
pub const SNIPPET_MAX_CHARS: usize = 100;
pub const SNIPPET_ELLIPSIS: &str = "...";

/// Shown wherever a value is missing from the backend response
pub const MISSING_VALUE: &str = "N/A";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
