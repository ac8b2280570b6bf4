//! Prompt construction for test-case generation
//!
//! The instructions pin the output shape the display layer depends on:
//! numbered cases separated by blank lines, each with scenario, steps,
//! and expected result markers.

/// Default chat-completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System message sent with every generation request
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant capable of generating software test cases in a structured format.";

/// User message carrying the requirement and the output template
pub fn user_instruction(requirement: &str) -> String {
    format!(
        "Generate well-structured test cases for the following requirement:\n\
         {}\n\
         Format them like:\n\
         Test Case 1:\n\
         **Scenario:** [Scenario Name]\n\
         **Steps to Reproduce:**\n\
         1. [Step 1]\n\
         2. [Step 2]\n\
         **Expected Result:** [Expected Outcome]",
        requirement
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_instruction_embeds_requirement() {
        let instruction = user_instruction("The login page requires a password.");
        assert!(instruction.contains("The login page requires a password."));
        assert!(instruction.starts_with("Generate well-structured test cases"));
    }

    #[test]
    fn test_user_instruction_pins_output_template() {
        let instruction = user_instruction("req");
        assert!(instruction.contains("Test Case 1:"));
        assert!(instruction.contains("**Scenario:** [Scenario Name]"));
        assert!(instruction.contains("**Steps to Reproduce:**"));
        assert!(instruction.contains("**Expected Result:** [Expected Outcome]"));
    }
}
