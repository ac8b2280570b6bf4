//! Stub backend
//!
//! Returns canned test cases without network calls. Used for tests and
//! for trying the tool without an API key.

use crate::generator::{GenerateBackend, GeneratorError};

/// Stub backend for testing (returns canned test cases)
#[derive(Debug)]
pub struct StubBackend {
    /// Canned response to return
    response: String,
}

impl StubBackend {
    /// Create new stub backend with the default canned response
    pub fn new() -> Self {
        Self {
            response: Self::default_response(),
        }
    }

    /// Create stub backend with custom response
    pub fn with_response(response: String) -> Self {
        Self { response }
    }

    /// Two blank-line separated cases in the template shape
    fn default_response() -> String {
        [
            "Test Case 1:",
            "**Scenario:** Valid login",
            "**Steps to Reproduce:**",
            "1. Open the login page",
            "2. Submit valid credentials",
            "**Expected Result:** The dashboard is shown",
            "",
            "Test Case 2:",
            "**Scenario:** Wrong password",
            "**Steps to Reproduce:**",
            "1. Open the login page",
            "2. Submit an incorrect password",
            "**Expected Result:** An error message is shown",
        ]
        .join("\n")
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateBackend for StubBackend {
    fn generate(&self, _requirement: &str) -> Result<String, GeneratorError> {
        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_returns_two_cases() {
        let backend = StubBackend::new();
        let output = backend.generate("anything").unwrap();

        assert!(output.contains("Test Case 1:"));
        assert!(output.contains("Test Case 2:"));
        assert_eq!(output.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_stub_with_custom_response() {
        let backend = StubBackend::with_response("custom".to_string());
        assert_eq!(backend.generate("req").unwrap(), "custom");
    }

    #[test]
    fn test_stub_provider_name() {
        assert_eq!(StubBackend::new().provider_name(), "stub");
    }
}
