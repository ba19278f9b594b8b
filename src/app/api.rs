//! API Facade for the application.
//!
//! Each function wires the production adapters into an `AppContext` for a
//! project layout and runs the matching command.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::adapters::{DefaultsPrompter, DialoguerPrompter, SystemCommandRunner};
use crate::app::{
    AppContext,
    commands::{db, init, rebuild, start, stop, tls, xdebug},
};

pub use crate::app::commands::init::{CertificateStep, ConfigWrite, InitOutcome};
pub use crate::app::commands::tls::TlsOutcome;
pub use crate::app::commands::xdebug::XdebugOutcome;
pub use crate::domain::{AppError, ProjectLayout, XdebugMode};
pub use crate::services::renderer::RenderedArtifact;

fn create_context(layout: ProjectLayout) -> AppContext<SystemCommandRunner> {
    AppContext::new(layout, SystemCommandRunner::new())
}

/// Layout rooted at the current directory, with an optional config file override.
pub fn current_layout(config: Option<&Path>) -> Result<ProjectLayout, AppError> {
    Ok(ProjectLayout::with_config(std::env::current_dir()?, config))
}

/// Run the interactive setup. `assume_yes` accepts every default without prompting.
pub fn init(layout: ProjectLayout, assume_yes: bool) -> Result<InitOutcome, AppError> {
    let ctx = create_context(layout);
    if assume_yes {
        init::execute(&ctx, &DefaultsPrompter::new())
    } else {
        println!("Welcome to wpdev init, press ENTER to accept defaults.");
        init::execute(&ctx, &DialoguerPrompter::new())
    }
}

/// Render artifacts and bring the stack up.
pub fn start(layout: ProjectLayout) -> Result<Vec<RenderedArtifact>, AppError> {
    start::execute(&create_context(layout))
}

/// Bring the stack down.
pub fn stop(layout: ProjectLayout) -> Result<(), AppError> {
    stop::execute(&create_context(layout))
}

/// Re-render and rebuild `services` (every service when empty).
pub fn rebuild(
    layout: ProjectLayout,
    services: &[String],
) -> Result<Vec<RenderedArtifact>, AppError> {
    rebuild::execute(&create_context(layout), services)
}

/// Toggle Xdebug. `mode` must be `on` or `off`.
pub fn xdebug(layout: ProjectLayout, mode: &str) -> Result<XdebugOutcome, AppError> {
    let mode: XdebugMode = mode.parse()?;
    xdebug::execute(&create_context(layout), mode)
}

/// Dump the database to a timestamped file under `.wpdev/db/`.
pub fn db_dump(layout: ProjectLayout) -> Result<PathBuf, AppError> {
    db::dump(&create_context(layout), Local::now().naive_local())
}

/// Import a SQL file into the database.
pub fn db_import(layout: ProjectLayout, path: &Path) -> Result<(), AppError> {
    db::import(&create_context(layout), path)
}

/// Generate local TLS certificates when TLS is enabled.
pub fn tls_init(layout: ProjectLayout) -> Result<TlsOutcome, AppError> {
    tls::execute(&create_context(layout))
}
