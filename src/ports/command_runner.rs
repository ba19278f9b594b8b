use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// An external command line to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), current_dir: None }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Shell-like rendering for messages and logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port for running external programs synchronously.
///
/// Every method blocks until the child exits. A non-zero exit status or a
/// missing executable is reported as `AppError::SubprocessError`.
pub trait CommandRunner {
    /// Check whether `program` can be found on `PATH`.
    fn is_available(&self, program: &str) -> bool;

    /// Run with inherited stdin/stdout/stderr.
    fn run(&self, command: &ExternalCommand) -> Result<(), AppError>;

    /// Run with `input` connected to the child's stdin; stdout/stderr inherited.
    fn run_with_input(&self, command: &ExternalCommand, input: File) -> Result<(), AppError>;

    /// Run and return captured stdout; stderr stays inherited.
    fn capture(&self, command: &ExternalCommand) -> Result<Vec<u8>, AppError>;
}
