pub mod config_store;
pub mod process_command;
pub mod template_assets;
pub mod terminal_prompter;

pub use process_command::SystemCommandRunner;
pub use terminal_prompter::{DefaultsPrompter, DialoguerPrompter};
