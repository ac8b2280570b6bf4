//! HTTP transport
//!
//! Synchronous blocking HTTP with a fake implementation for tests.
//! Uses ureq for real I/O.

pub mod fake_transport;
pub mod types;
pub mod ureq_transport;

pub use fake_transport::FakeTransport;
pub use types::{HttpResponse, SyncTransport, TransportError};
pub use ureq_transport::UreqTransport;

/// Concrete transport enum
///
/// Wraps all transport types, avoiding dyn compatibility issues.
#[derive(Debug, Clone)]
pub enum Transport {
    Real(UreqTransport),
    Fake(FakeTransport),
}

impl SyncTransport for Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        match self {
            Transport::Real(t) => t.get(url, headers),
            Transport::Fake(t) => t.get(url, headers),
        }
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        match self {
            Transport::Real(t) => t.post_json(url, headers, body),
            Transport::Fake(t) => t.post_json(url, headers, body),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Real(UreqTransport::new())
    }
}
