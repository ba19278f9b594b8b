mod recording_runner;
mod scripted_prompter;

#[allow(unused_imports)]
pub use recording_runner::{RecordedCall, RecordingRunner};
#[allow(unused_imports)]
pub use scripted_prompter::ScriptedPrompter;
