//! ADF text extraction tests
//!
//! Exercise the rich-document flattener against a captured Jira issue
//! payload and synthetic document shapes (nested lists, headings,
//! mixed inline content).

use std::path::PathBuf;

use caseforge::{extract_text, AdfNode};
use serde_json::Value as JsonValue;

/// Load a fixture file from tests/fixtures/
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Pull fields.description.content out of an issue fixture
fn description_content(fixture: &str) -> JsonValue {
    let issue: JsonValue = serde_json::from_str(fixture).expect("Fixture should be valid JSON");
    issue["fields"]["description"]["content"].clone()
}

#[test]
fn test_extracts_captured_issue_description() {
    let fixture = load_fixture("jira_issue.json");
    let content = description_content(&fixture);

    let text = extract_text(&AdfNode::from_value(&content));
    assert_eq!(
        text,
        "As a registered user I want to reset my password so that I can regain access. The reset link expires after 24 hours."
    );
}

#[test]
fn test_empty_issue_description_flattens_to_nothing() {
    let fixture = load_fixture("jira_issue_empty.json");
    let content = description_content(&fixture);

    assert_eq!(extract_text(&AdfNode::from_value(&content)), "");
}

#[test]
fn test_flattens_nested_bullet_list() {
    let content: JsonValue = serde_json::from_str(
        r#"[
            {
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [
                            {"type": "paragraph", "content": [{"type": "text", "text": "First point"}]}
                        ]
                    },
                    {
                        "type": "listItem",
                        "content": [
                            {"type": "paragraph", "content": [{"type": "text", "text": "Second point"}]}
                        ]
                    }
                ]
            }
        ]"#,
    )
    .unwrap();

    let text = extract_text(&AdfNode::from_value(&content));
    assert_eq!(text, "First point Second point");
}

#[test]
fn test_heading_and_paragraph_are_space_joined() {
    let content: JsonValue = serde_json::from_str(
        r#"[
            {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Background"}]},
            {"type": "paragraph", "content": [{"type": "text", "text": "Existing users cannot log in."}]}
        ]"#,
    )
    .unwrap();

    let text = extract_text(&AdfNode::from_value(&content));
    assert_eq!(text, "Background Existing users cannot log in.");
}

#[test]
fn test_inline_marks_are_ignored() {
    let content: JsonValue = serde_json::from_str(
        r#"[
            {"type": "paragraph", "content": [
                {"type": "text", "text": "Use the "},
                {"type": "text", "text": "admin", "marks": [{"type": "strong"}]},
                {"type": "text", "text": " console."}
            ]}
        ]"#,
    )
    .unwrap();

    let text = extract_text(&AdfNode::from_value(&content));
    assert_eq!(text, "Use the admin console.");
}

#[test]
fn test_hard_break_leaves_a_gap() {
    // A hardBreak node carries neither text nor children and flattens
    // to an empty sibling, which the joiner renders as a double space.
    let content: JsonValue = serde_json::from_str(
        r#"[
            {"type": "paragraph", "content": [
                {"type": "text", "text": "line one"},
                {"type": "hardBreak"},
                {"type": "text", "text": "line two"}
            ]}
        ]"#,
    )
    .unwrap();

    let text = extract_text(&AdfNode::from_value(&content));
    assert_eq!(text, "line one  line two");
}
