//! Configuration for the member list client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Members endpoint served to the dashboard.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Upper bound for a single backoff delay.
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Client settings, stored in the `[fetch]` table of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Absolute http(s) URL of the member list.
    pub endpoint: String,

    /// Whole-request timeout, in seconds.
    pub timeout_secs: u64,

    /// TCP/TLS connect timeout, in seconds.
    pub connect_timeout_secs: u64,

    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds. Doubles per retry.
    pub retry_backoff_ms: u64,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            max_attempts: 3,
            retry_backoff_ms: 500,
            system_proxy: true,
        }
    }
}

impl FetchSettings {
    /// Settings pointing at another endpoint, other values default.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Whole-request timeout, at least one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Connect timeout, at least one second.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }

    /// Number of attempts to make, at least one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u64::MAX);
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor)).min(MAX_BACKOFF)
    }
}
