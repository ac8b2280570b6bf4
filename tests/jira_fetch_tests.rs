//! Jira fetch integration tests
//!
//! Run the full fetch path against the fake transport: status
//! handling, ADF flattening, the no-description sentinel, and the
//! in-band error line for non-200 replies.

use std::path::PathBuf;

use caseforge::{fetch_description, FakeTransport, Transport, TransportError, NO_DESCRIPTION};

/// Load a fixture file from tests/fixtures/
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

fn fetch_with(transport: &Transport) -> Result<String, TransportError> {
    fetch_description(
        transport,
        "example.atlassian.net",
        "PROJ-7",
        "user@example.com",
        "secret-token",
    )
}

/// ============================================================================
/// Test A: 200 with an ADF payload → flattened description
/// ============================================================================

#[test]
fn test_fetch_extracts_description_from_issue_payload() {
    let fake = FakeTransport::new(200, &load_fixture("jira_issue.json"));
    let transport = Transport::Fake(fake.clone());

    let text = fetch_with(&transport).unwrap();
    assert_eq!(
        text,
        "As a registered user I want to reset my password so that I can regain access. The reset link expires after 24 hours."
    );
    assert_eq!(fake.get_calls(), 1, "fetch should issue exactly one GET");
    assert_eq!(fake.post_calls(), 0, "fetch must not POST");
}

/// ============================================================================
/// Test B: 200 with empty description content → sentinel
/// ============================================================================

#[test]
fn test_fetch_returns_sentinel_for_empty_description() {
    let fake = FakeTransport::new(200, &load_fixture("jira_issue_empty.json"));
    let transport = Transport::Fake(fake);

    assert_eq!(fetch_with(&transport).unwrap(), NO_DESCRIPTION);
}

/// ============================================================================
/// Test C: non-200 statuses → in-band error line, not a fetch failure
/// ============================================================================

#[test]
fn test_fetch_folds_404_into_error_line() {
    let body = r#"{"errorMessages": ["Issue does not exist or you do not have permission to see it."]}"#;
    let fake = FakeTransport::new(404, body);
    let transport = Transport::Fake(fake);

    let text = fetch_with(&transport).unwrap();
    assert!(text.starts_with("Error: 404, "), "got: {}", text);
    assert!(text.contains("Issue does not exist"));
}

#[test]
fn test_fetch_folds_401_into_error_line() {
    let fake = FakeTransport::new(401, "Unauthorized");
    let transport = Transport::Fake(fake);

    assert_eq!(fetch_with(&transport).unwrap(), "Error: 401, Unauthorized");
}

/// ============================================================================
/// Test D: transport-level failures surface as errors
/// ============================================================================

#[test]
fn test_fetch_propagates_network_error() {
    let fake = FakeTransport::with_error("connection refused");
    let transport = Transport::Fake(fake.clone());

    let err = fetch_with(&transport).unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
    assert!(format!("{}", err).contains("connection refused"));
    assert_eq!(fake.get_calls(), 1);
}

/// ============================================================================
/// Test E: malformed 200 bodies fall back to the sentinel
/// ============================================================================

#[test]
fn test_fetch_treats_unparseable_body_as_no_description() {
    let fake = FakeTransport::new(200, "<html>gateway error page</html>");
    let transport = Transport::Fake(fake);

    assert_eq!(fetch_with(&transport).unwrap(), NO_DESCRIPTION);
}
