mod command_runner;
mod prompter;

pub use command_runner::{CommandRunner, ExternalCommand};
pub use prompter::Prompter;
