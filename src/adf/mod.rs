//! Atlassian Document Format text extraction
//!
//! Jira issue descriptions arrive as a tree of typed nodes (paragraphs,
//! text runs, lists). This module flattens that tree into plain text:
//! leaf text is kept, siblings in a sequence are joined with single
//! spaces, and every level strips its own leading/trailing whitespace.

use serde_json::Value as JsonValue;

/// One node of a rich-text document.
///
/// The shape mirrors what actually matters for extraction: a node may
/// carry leaf text, child content, both, or neither. Anything that is
/// not an object or an array is `Empty` and contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdfNode {
    /// Ordered run of sibling nodes (a JSON array)
    Sequence(Vec<AdfNode>),
    /// Document node (a JSON object), possibly with leaf text and children
    Node {
        text: Option<String>,
        content: Option<Vec<AdfNode>>,
    },
    /// Anything else; extracts to the empty string
    Empty,
}

impl AdfNode {
    /// Build the node tree from parsed JSON.
    ///
    /// Never fails: unrecognized shapes become `Empty`, and a non-string
    /// `text` or non-array `content` field is treated as absent.
    pub fn from_value(value: &JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => {
                AdfNode::Sequence(items.iter().map(AdfNode::from_value).collect())
            }
            JsonValue::Object(map) => AdfNode::Node {
                text: map.get("text").and_then(|v| v.as_str()).map(String::from),
                content: map
                    .get("content")
                    .and_then(|v| v.as_array())
                    .map(|items| items.iter().map(AdfNode::from_value).collect()),
            },
            _ => AdfNode::Empty,
        }
    }
}

/// Flatten a node tree into plain text.
///
/// A node's leaf text comes before the text of its children. Siblings
/// in a sequence are separated by single spaces. The result carries no
/// leading or trailing whitespace.
pub fn extract_text(node: &AdfNode) -> String {
    match node {
        AdfNode::Sequence(items) => extract_items(items),
        AdfNode::Node { text, content } => {
            let mut out = String::new();
            if let Some(text) = text {
                out.push_str(text);
            }
            if let Some(content) = content {
                out.push_str(&extract_items(content));
            }
            out.trim().to_string()
        }
        AdfNode::Empty => String::new(),
    }
}

fn extract_items(items: &[AdfNode]) -> String {
    let mut text = String::new();
    for item in items {
        text.push_str(&extract_text(item));
        text.push(' ');
    }
    text.trim().to_string()
}
