//! Transport types
//!
//! Common types shared across transport implementations.

/// HTTP response with status preserved.
///
/// Transports do not interpret status codes; callers decide what a
/// non-2xx response means for their operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Transport errors
///
/// Only failures below the HTTP layer land here. A response with an
/// error status is still `Ok`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network error (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err.to_string())
    }
}

/// Synchronous HTTP transport
///
/// Abstraction over HTTP client to enable testing with FakeTransport.
pub trait SyncTransport: Send + Sync {
    /// GET request and return status plus body
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;

    /// POST JSON request and return status plus body
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, TransportError>;
}
