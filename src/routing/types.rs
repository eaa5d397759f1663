/// Summary metrics of one driving route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Routing errors.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The provider answered but gave no usable route.
    #[error("OSRM API error: {code}{}", .message.as_deref().map(|m| format!(" ({})", m)).unwrap_or_default())]
    NoRoute { code: String, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid router response: {0}")]
    InvalidResponse(String),
}

impl RouteError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
