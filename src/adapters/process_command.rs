use std::env;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandRunner, ExternalCommand};

/// Runs external programs with `std::process`.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(&self, command: &ExternalCommand) -> Command {
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if let Some(dir) = &command.current_dir {
            process.current_dir(dir);
        }
        debug!(command = %command.display(), cwd = ?command.current_dir, "spawning");
        process
    }

    fn spawn_error(command: &ExternalCommand, err: std::io::Error) -> AppError {
        let details = if err.kind() == ErrorKind::NotFound {
            format!("executable '{}' not found on PATH", command.program)
        } else {
            err.to_string()
        };
        AppError::subprocess(command.display(), details)
    }

    fn check_status(command: &ExternalCommand, status: ExitStatus) -> Result<(), AppError> {
        if status.success() {
            return Ok(());
        }
        let details = match status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(AppError::subprocess(command.display(), details))
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        if program.contains(std::path::MAIN_SEPARATOR) {
            return Path::new(program).is_file();
        }
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };
        env::split_paths(&paths).any(|dir| {
            let candidate = dir.join(program);
            candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
        })
    }

    fn run(&self, command: &ExternalCommand) -> Result<(), AppError> {
        let status = self
            .build(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| Self::spawn_error(command, err))?;
        Self::check_status(command, status)
    }

    fn run_with_input(&self, command: &ExternalCommand, input: File) -> Result<(), AppError> {
        let status = self
            .build(command)
            .stdin(Stdio::from(input))
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| Self::spawn_error(command, err))?;
        Self::check_status(command, status)
    }

    fn capture(&self, command: &ExternalCommand) -> Result<Vec<u8>, AppError> {
        let output = self
            .build(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| Self::spawn_error(command, err))?;
        Self::check_status(command, output.status)?;
        Ok(output.stdout)
    }
}
