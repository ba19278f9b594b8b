//! Shared testing utilities for wpdev CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory and `PATH`.
///
/// Only tools installed with [`TestContext::install_tool`] are visible to the
/// binary, so docker and mkcert are absent unless a test fakes them.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("site");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// File where fake tools append their invocations.
    pub fn tool_log(&self) -> PathBuf {
        self.root.path().join("tools.log")
    }

    /// Build a command for invoking the compiled `wpdev` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wpdev").expect("Failed to locate wpdev binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", &self.bin_dir)
            .env("FAKE_TOOL_LOG", self.tool_log())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Install an executable shell script named `name` on the test `PATH`.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
    }

    /// Fake `docker` that logs its arguments, prints a dump for dump clients,
    /// and appends stdin to the log for import clients.
    #[cfg(unix)]
    pub fn install_fake_docker(&self) {
        self.install_tool(
            "docker",
            r#"echo "docker $*" >> "$FAKE_TOOL_LOG"
case "$*" in
  *mariadb-dump*|*mysqldump*) echo "-- fake dump" ;;
  *"exec -T db mariadb "*|*"exec -T db mysql "*) /bin/cat >> "$FAKE_TOOL_LOG" ;;
esac"#,
        );
    }

    /// Invocations recorded by fake tools, one per line.
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.tool_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write `.wpdev.yml` with the given YAML content.
    pub fn write_config(&self, yaml: &str) {
        fs::write(self.work_dir.join(".wpdev.yml"), yaml).expect("Failed to write config");
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {relative}: {err}"))
    }

    /// Initialize the project non-interactively.
    pub fn init_defaults(&self) {
        self.cli().args(["init", "--yes"]).assert().success();
    }
}
