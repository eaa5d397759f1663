//! Shared HTTP agent construction.

use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "distance_calculator";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Build a connection-pooled agent with a whole-request timeout.
///
/// One agent is created per provider for the lifetime of a run and handed to
/// the provider constructor.
pub fn agent(user_agent: &str, timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// Trim a trailing slash so paths can be appended with `format!`.
pub(crate) fn base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
