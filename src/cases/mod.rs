//! Generated test-case segmentation and display formatting
//!
//! The generator returns one string containing every test case,
//! separated by blank lines. Splitting on those boundaries is the only
//! structure imposed on the output; the emphasis pass is literal
//! substring substitution for display.

/// One display block of generated output.
///
/// `index` is the 1-based position among the rendered blocks and
/// drives the block's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBlock {
    pub index: usize,
    pub text: String,
}

impl CaseBlock {
    /// Label shown on the block's collapsible header
    pub fn label(&self) -> String {
        format!("Test Case {}", self.index)
    }
}

/// Split raw generator output on blank-line boundaries.
///
/// Whitespace-only segments (trailing separators, stray blank runs)
/// are dropped; the surviving blocks are numbered from 1.
pub fn split_blocks(raw: &str) -> Vec<CaseBlock> {
    raw.split("\n\n")
        .filter(|segment| !segment.trim().is_empty())
        .enumerate()
        .map(|(i, segment)| CaseBlock {
            index: i + 1,
            text: segment.to_string(),
        })
        .collect()
}

/// Apply the display emphasis replacements to one block's text.
pub fn emphasize(text: &str) -> String {
    text.replace("Test Case", "**Test Case**")
        .replace("Scenario:", "**Scenario:**")
        .replace("Steps to Reproduce:", "**Steps to Reproduce:**")
        .replace("Expected Result:", "**Expected Result:**")
}
