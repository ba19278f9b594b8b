use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_with_default(&self, label: &str, default: &str) -> Result<String, AppError> {
        let answer: String = Input::new()
            .with_prompt(label)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::PromptFailed {
                label: label.to_string(),
                details: err.to_string(),
            })?;
        let answer = answer.trim();
        Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
    }
}

/// Accepts every default without reading input (`init --yes`).
#[derive(Debug, Clone, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn ask_with_default(&self, label: &str, default: &str) -> Result<String, AppError> {
        println!("{label} [{default}]: {default}");
        Ok(default.to_string())
    }
}
