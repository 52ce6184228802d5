//! Terminal prompts backed by [`dialoguer`].

use dialoguer::{Confirm, Input};

use projforge_core::error::{ForgeError, Result};
use projforge_core::prompt::Prompter;

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ForgeError::Prompt(e.to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ForgeError::Prompt(e.to_string()))
    }
}
