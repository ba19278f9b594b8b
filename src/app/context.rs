use crate::adapters::config_store;
use crate::domain::{AppError, ProjectConfig, ProjectLayout};
use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    layout: ProjectLayout,
    runner: R,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(layout: ProjectLayout, runner: R) -> Self {
        Self { layout, runner }
    }

    /// Paths of the project being operated on.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Get a reference to the external command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Load the project configuration (defaults when the file is absent).
    pub fn load_config(&self) -> Result<ProjectConfig, AppError> {
        config_store::load(self.layout.config_path())
    }

    /// Persist the project configuration.
    pub fn save_config(&self, config: &ProjectConfig) -> Result<(), AppError> {
        config_store::save(self.layout.config_path(), config)
    }
}
