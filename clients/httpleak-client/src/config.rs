//! Run configuration.

use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:5055/ping";
pub const DEFAULT_REQUESTS: u64 = 20_000;
pub const DEFAULT_PARALLEL: usize = 200;
pub const DEFAULT_LOG_EVERY: u64 = 1_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Immutable configuration for one load run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub requests: u64,
    pub parallel: usize,
    pub log_every: u64,
    pub timeout: Duration,
}

impl RunConfig {
    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("url must not be empty");
        }
        if self.parallel == 0 {
            anyhow::bail!("parallel must be > 0");
        }
        if self.log_every == 0 {
            anyhow::bail!("log_every must be > 0");
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            requests: DEFAULT_REQUESTS,
            parallel: DEFAULT_PARALLEL,
            log_every: DEFAULT_LOG_EVERY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Parse an optional integer flag value, falling back to `default` when the
/// flag is absent or not a valid integer.
pub fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
