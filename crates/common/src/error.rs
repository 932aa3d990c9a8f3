//! Common error types and handling for Tourdesk
//!
//! The backend owns all validation and business rules, so the only failure a
//! client call can observe is a transport failure. The variants below split
//! that failure by where it happened, never by business meaning.

/// Common result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Transport-level failure surfaced by every client operation
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Client configuration error: {0}")]
    Configuration(String),

    /// No response was produced: the body failed to encode or sending failed
    #[error("Request error: {0}")]
    Request(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Response error: {0}")]
    Response(String),
}

impl ClientError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Uses the `message` field when the body is a JSON object carrying one,
    /// the raw body text otherwise.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        ClientError::Status { status, message }
    }

    /// HTTP status code, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Response(format!("Failed to decode response: {}", e))
    }
}
