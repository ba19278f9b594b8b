use crate::domain::AppError;

/// Port for collecting answers from the user.
pub trait Prompter {
    /// Ask for a value, returning `default` when the answer is empty.
    fn ask_with_default(&self, label: &str, default: &str) -> Result<String, AppError>;

    /// Ask a `y/n` question. Only `y` and `yes` (any case) count as yes.
    fn ask_yes_no(&self, label: &str, default: bool) -> Result<bool, AppError> {
        let answer =
            self.ask_with_default(&format!("{label} (y/n)"), if default { "y" } else { "n" })?;
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
