use std::fs;

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::compose;
use crate::domain::{AppError, ProjectConfig};
use crate::ports::CommandRunner;
use crate::services::renderer::{self, RenderedArtifact};

/// Validate the config, create the bind data directory, and render all artifacts.
///
/// Shared by `start`, `rebuild` and `xdebug`.
pub(crate) fn prepare<R: CommandRunner>(
    ctx: &AppContext<R>,
    config: &ProjectConfig,
) -> Result<Vec<RenderedArtifact>, AppError> {
    config.validate_for_start()?;
    if let Some(data_path) = config.bind_data_path() {
        let dir = ctx.layout().resolve(data_path);
        fs::create_dir_all(&dir).map_err(|err| AppError::file_io("Failed to create", &dir, err))?;
    }
    let rendered = renderer::render(config, ctx.layout())?;
    info!(count = rendered.len(), "artifacts rendered");
    Ok(rendered)
}

/// Execute the start command.
pub fn execute<R: CommandRunner>(ctx: &AppContext<R>) -> Result<Vec<RenderedArtifact>, AppError> {
    let config = ctx.load_config()?;
    let rendered = prepare(ctx, &config)?;

    println!("Bringing up containers...");
    ctx.runner().run(&compose::up(ctx.layout()))?;
    Ok(rendered)
}
