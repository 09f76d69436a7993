//! Interactive confirmation prompts

use anyhow::{Context, Result};
use dialoguer::Input;

/// Asks yes/no questions before the run touches anything
pub struct InteractivePrompter {
    assume_yes: bool,
}

impl InteractivePrompter {
    /// Create a new prompter; with `assume_yes` every question is accepted
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Show `question` and wait for an answer
    ///
    /// Returns true only for `y` or `yes`, in any case.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal interaction fails.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        if self.assume_yes {
            println!("{question} (y/n): y");
            return Ok(true);
        }

        let input: String = Input::new()
            .with_prompt(format!("{question} (y/n)"))
            .allow_empty(true)
            .interact_text()
            .context("Failed to show prompt")?;

        Ok(parse_answer(&input))
    }
}

/// Whether `input` accepts the question
fn parse_answer(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
