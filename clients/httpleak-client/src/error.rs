//! Request outcome classification.

use thiserror::Error;

/// Why a single request was counted as a failure.
///
/// All variants fold into the same failure tally; the distinction only
/// shows up in the detailed log lines for the first few failures.
#[derive(Debug, Error)]
pub enum RequestError {
    /// No response within the configured per-request timeout.
    #[error("timeout: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure, reset, or other transport fault.
    #[error("transport: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("status: HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

impl RequestError {
    /// Short category label used in the detailed error lines.
    pub fn category(&self) -> &'static str {
        match self {
            RequestError::Timeout(_) => "timeout",
            RequestError::Transport(_) => "transport",
            RequestError::Status(_) => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(RequestError::Timeout("t".into()).category(), "timeout");
        assert_eq!(RequestError::Transport("t".into()).category(), "transport");
        assert_eq!(RequestError::Status(500).category(), "status");
    }

    #[test]
    fn test_status_display() {
        let err = RequestError::Status(503);
        assert_eq!(err.to_string(), "status: HTTP 503");
    }
}
