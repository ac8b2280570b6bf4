//! Generator integration tests
//!
//! Cover backend selection, the chat-completion round trip against a
//! captured provider payload, status-to-error mapping, and block
//! segmentation of the generated output.

use std::path::PathBuf;

use caseforge::generator::{create_generator, DEFAULT_MODEL};
use caseforge::{split_blocks, FakeTransport, GenerateBackend, Generator, GeneratorError, Transport};

/// Load a fixture file from tests/fixtures/
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

fn openai_with(fake: &FakeTransport) -> Generator {
    create_generator(
        "openai",
        "",
        "",
        "sk-test",
        Transport::Fake(fake.clone()),
    )
    .expect("openai should be a known provider")
}

/// ============================================================================
/// Test A: backend selection
/// ============================================================================

#[test]
fn test_factory_selects_openai_with_defaults() {
    let generator = openai_with(&FakeTransport::new(200, "{}"));
    assert_eq!(generator.provider_name(), "openai");
    match generator {
        Generator::OpenAi(backend) => assert_eq!(backend.model(), DEFAULT_MODEL),
        other => panic!("expected the OpenAI backend, got {:?}", other),
    }
}

#[test]
fn test_factory_selects_stub() {
    let generator = create_generator("stub", "", "", "", Transport::default()).unwrap();
    assert_eq!(generator.provider_name(), "stub");
}

#[test]
fn test_factory_rejects_unknown_provider() {
    let err = create_generator("mystery", "", "", "", Transport::default()).unwrap_err();
    assert!(matches!(err, GeneratorError::Configuration(_)));
    assert!(format!("{}", err).contains("mystery"));
}

/// ============================================================================
/// Test B: chat-completion round trip with a captured payload
/// ============================================================================

#[test]
fn test_generate_round_trip_with_captured_payload() {
    let fake = FakeTransport::new(200, &load_fixture("chat_completion.json"));
    let generator = openai_with(&fake);

    let raw = generator
        .generate("Users must be able to reset their password.")
        .unwrap();

    assert_eq!(fake.post_calls(), 1, "generation should issue exactly one POST");
    assert_eq!(fake.get_calls(), 0);

    let blocks = split_blocks(&raw);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].label(), "Test Case 1");
    assert_eq!(blocks[1].label(), "Test Case 2");
    assert!(blocks[0].text.starts_with("Test Case 1:"));
    assert!(blocks[0].text.contains("Successful password reset"));
    assert!(blocks[1].text.contains("Expired reset link"));
}

#[test]
fn test_stub_generate_needs_no_network() {
    let fake = FakeTransport::new(200, "{}");
    let generator = create_generator("stub", "", "", "", Transport::Fake(fake.clone())).unwrap();

    let raw = generator.generate("anything").unwrap();
    assert_eq!(fake.post_calls(), 0, "stub backend must not touch the network");

    let blocks = split_blocks(&raw);
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.text.starts_with("Test Case")));
}

/// ============================================================================
/// Test C: status-to-error mapping
/// ============================================================================

#[test]
fn test_generate_maps_401_to_authentication() {
    let fake = FakeTransport::new(401, r#"{"error": {"message": "Incorrect API key"}}"#);
    let generator = openai_with(&fake);

    let err = generator.generate("req").unwrap_err();
    assert!(matches!(err, GeneratorError::Authentication(_)));
}

#[test]
fn test_generate_carries_status_and_body_for_http_errors() {
    let fake = FakeTransport::new(429, "rate limited");
    let generator = openai_with(&fake);

    match generator.generate("req").unwrap_err() {
        GeneratorError::Http { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[test]
fn test_generate_rejects_payload_without_choices() {
    let fake = FakeTransport::new(200, r#"{"object": "chat.completion", "choices": []}"#);
    let generator = openai_with(&fake);

    let err = generator.generate("req").unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidResponse(_)));
}

#[test]
fn test_generate_propagates_network_error() {
    let fake = FakeTransport::with_error("dns failure");
    let generator = openai_with(&fake);

    let err = generator.generate("req").unwrap_err();
    assert!(matches!(err, GeneratorError::Network(_)));
}
