use std::cell::RefCell;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use crate::domain::AppError;
use crate::ports::{CommandRunner, ExternalCommand};

/// A command observed by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: ExternalCommand,
    /// Content piped to stdin, for `run_with_input`.
    pub stdin: Option<String>,
}

/// Command runner double that records invocations instead of spawning.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingRunner {
    calls: RefCell<Vec<RecordedCall>>,
    available: HashSet<String>,
    capture_output: Vec<u8>,
    failing_program: Option<String>,
    write_mkcert_outputs: bool,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `program` as present on `PATH`.
    pub fn with_available(mut self, program: &str) -> Self {
        self.available.insert(program.to_string());
        self
    }

    /// Bytes returned from `capture`.
    pub fn with_capture_output(mut self, output: &[u8]) -> Self {
        self.capture_output = output.to_vec();
        self
    }

    /// Every invocation of `program` fails with a non-zero exit.
    pub fn failing(mut self, program: &str) -> Self {
        self.failing_program = Some(program.to_string());
        self
    }

    /// Create the `-cert-file`/`-key-file` targets of mkcert invocations.
    pub fn writing_mkcert_outputs(mut self) -> Self {
        self.write_mkcert_outputs = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Recorded command lines, program included.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|call| call.command.display()).collect()
    }

    fn record(&self, command: &ExternalCommand, stdin: Option<String>) -> Result<(), AppError> {
        self.calls.borrow_mut().push(RecordedCall { command: command.clone(), stdin });
        if self.failing_program.as_deref() == Some(command.program.as_str()) {
            return Err(AppError::subprocess(command.display(), "exited with status 1"));
        }
        if self.write_mkcert_outputs && command.program == "mkcert" {
            let mut args = command.args.iter();
            while let Some(arg) = args.next() {
                if (arg == "-cert-file" || arg == "-key-file")
                    && let Some(path) = args.next()
                {
                    std::fs::write(path, "pem")?;
                }
            }
        }
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }

    fn run(&self, command: &ExternalCommand) -> Result<(), AppError> {
        self.record(command, None)
    }

    fn run_with_input(&self, command: &ExternalCommand, mut input: File) -> Result<(), AppError> {
        let mut content = String::new();
        input.read_to_string(&mut content)?;
        self.record(command, Some(content))
    }

    fn capture(&self, command: &ExternalCommand) -> Result<Vec<u8>, AppError> {
        self.record(command, None)?;
        Ok(self.capture_output.clone())
    }
}
