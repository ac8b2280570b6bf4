//! Fake transport for testing
//!
//! Uses fixture responses instead of real HTTP calls and counts how
//! often each verb is used, so tests can assert a call was suppressed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::transport::types::{HttpResponse, SyncTransport, TransportError};

/// Fake transport for testing (uses fixture responses)
#[derive(Debug, Clone)]
pub struct FakeTransport {
    get_response: HttpResponse,
    post_response: HttpResponse,
    error_message: Option<String>,
    get_calls: Arc<AtomicUsize>,
    post_calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    /// Create fake transport returning the same response for every verb
    pub fn new(status: u16, body: &str) -> Self {
        let response = HttpResponse {
            status,
            body: body.to_string(),
        };
        Self {
            get_response: response.clone(),
            post_response: response,
            error_message: None,
            get_calls: Arc::new(AtomicUsize::new(0)),
            post_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create fake transport with separate GET and POST responses
    pub fn with_responses(
        get_status: u16,
        get_body: &str,
        post_status: u16,
        post_body: &str,
    ) -> Self {
        Self {
            get_response: HttpResponse {
                status: get_status,
                body: get_body.to_string(),
            },
            post_response: HttpResponse {
                status: post_status,
                body: post_body.to_string(),
            },
            error_message: None,
            get_calls: Arc::new(AtomicUsize::new(0)),
            post_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create fake transport that returns a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            get_response: HttpResponse {
                status: 0,
                body: String::new(),
            },
            post_response: HttpResponse {
                status: 0,
                body: String::new(),
            },
            error_message: Some(msg.to_string()),
            get_calls: Arc::new(AtomicUsize::new(0)),
            post_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of GET requests issued so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of POST requests issued so far
    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }
}

impl SyncTransport for FakeTransport {
    fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = self.error_message {
            return Err(TransportError::Network(msg.clone()));
        }
        Ok(self.get_response.clone())
    }

    fn post_json(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
        _body: &str,
    ) -> Result<HttpResponse, TransportError> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = self.error_message {
            return Err(TransportError::Network(msg.clone()));
        }
        Ok(self.post_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_transport_basic() {
        let transport = FakeTransport::new(200, "test response");
        let result = transport.get("http://test", &[]).unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(result.body, "test response");
    }

    #[test]
    fn test_fake_transport_with_error() {
        let transport = FakeTransport::with_error("test error");
        let result = transport.post_json("http://test", &[], "{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_fake_transport_counts_calls() {
        let transport = FakeTransport::new(200, "{}");
        assert_eq!(transport.get_calls(), 0);
        assert_eq!(transport.post_calls(), 0);

        transport.get("http://test", &[]).unwrap();
        transport.get("http://test", &[]).unwrap();
        transport.post_json("http://test", &[], "{}").unwrap();

        assert_eq!(transport.get_calls(), 2);
        assert_eq!(transport.post_calls(), 1);
    }

    #[test]
    fn test_fake_transport_clones_share_counters() {
        let transport = FakeTransport::new(200, "{}");
        let clone = transport.clone();

        clone.get("http://test", &[]).unwrap();

        assert_eq!(transport.get_calls(), 1);
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network error: connection refused");

        let err = TransportError::Io("broken pipe".to_string());
        assert_eq!(format!("{}", err), "IO error: broken pipe");
    }
}
