use crate::app::AppContext;
use crate::app::commands::{compose, start};
use crate::domain::AppError;
use crate::ports::CommandRunner;
use crate::services::renderer::RenderedArtifact;

/// Execute the rebuild command.
///
/// Re-renders in case the configuration changed since the last start, then
/// rebuilds `services` (all services when empty).
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    services: &[String],
) -> Result<Vec<RenderedArtifact>, AppError> {
    let config = ctx.load_config()?;
    let rendered = start::prepare(ctx, &config)?;
    ctx.runner().run(&compose::rebuild(ctx.layout(), services))?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{config_store, template_assets};
    use crate::domain::{Persistence, ProjectConfig, ProjectLayout};
    use crate::testing::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn picks_up_config_changes_since_last_render() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        template_assets::ensure_defaults(&layout.templates_dir()).unwrap();
        let mut config = ProjectConfig::default();
        config.database.persist = Persistence::Volume;
        config_store::save(layout.config_path(), &config).unwrap();
        let ctx = AppContext::new(layout, RecordingRunner::new());

        execute(&ctx, &[]).unwrap();
        let compose_file = ctx.layout().compose_file();
        assert!(std::fs::read_to_string(&compose_file).unwrap().contains("dbdata:"));

        config.database.persist = Persistence::Bind;
        config.database.data_path = "mysql-data".into();
        config_store::save(ctx.layout().config_path(), &config).unwrap();
        execute(&ctx, &["db".to_string()]).unwrap();

        let compose = std::fs::read_to_string(&compose_file).unwrap();
        assert!(compose.contains("./mysql-data:/var/lib/mysql"));
        assert!(!compose.contains("dbdata:"));
        assert_eq!(
            ctx.runner().command_lines(),
            vec![
                "docker compose up -d --build --remove-orphans",
                "docker compose up -d --build --remove-orphans db",
            ]
        );
    }
}
