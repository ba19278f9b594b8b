//! Database dump and import through the running `db` service.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::app::AppContext;
use crate::app::commands::compose::{self, DATABASE_NAME, ROOT_PASSWORD};
use crate::domain::AppError;
use crate::ports::CommandRunner;

fn credentials() -> [String; 2] {
    ["-uroot".to_string(), format!("-p{ROOT_PASSWORD}")]
}

/// File name for a dump taken at `taken_at`.
pub fn dump_file_name(taken_at: NaiveDateTime) -> String {
    format!("dump-{}.sql", taken_at.format("%Y%m%d-%H%M%S"))
}

/// Dump the project database into `.wpdev/db/` and return the written path.
pub fn dump<R: CommandRunner>(
    ctx: &AppContext<R>,
    taken_at: NaiveDateTime,
) -> Result<PathBuf, AppError> {
    let config = ctx.load_config()?;
    let engine = config.database.engine;

    let command = compose::exec_db(
        ctx.layout(),
        engine.dump_client(),
        credentials().into_iter().chain(["--databases".to_string(), DATABASE_NAME.to_string()]),
    );
    let output = ctx.runner().capture(&command)?;

    let dumps_dir = ctx.layout().dumps_dir();
    fs::create_dir_all(&dumps_dir)
        .map_err(|err| AppError::file_io("Failed to create", &dumps_dir, err))?;
    let path = dumps_dir.join(dump_file_name(taken_at));
    fs::write(&path, output).map_err(|err| AppError::file_io("Failed to write", &path, err))?;

    info!(path = %path.display(), "database dumped");
    Ok(path)
}

/// Stream the SQL file at `path` into the database client.
///
/// The file is opened before anything is spawned, so a bad path fails early.
pub fn import<R: CommandRunner>(ctx: &AppContext<R>, path: &Path) -> Result<(), AppError> {
    let resolved = ctx.layout().root().join(path);
    let input =
        File::open(&resolved).map_err(|err| AppError::file_io("Failed to open", &resolved, err))?;

    let config = ctx.load_config()?;
    let command = compose::exec_db(ctx.layout(), config.database.engine.client(), credentials());
    ctx.runner().run_with_input(&command, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::config_store;
    use crate::domain::{DbEngine, ProjectConfig, ProjectLayout};
    use crate::testing::RecordingRunner;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn project(
        engine: DbEngine,
        runner: RecordingRunner,
    ) -> (TempDir, AppContext<RecordingRunner>) {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let mut config = ProjectConfig::default();
        config.database.engine = engine;
        config_store::save(layout.config_path(), &config).unwrap();
        (dir, AppContext::new(layout, runner))
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(12, 5, 9).unwrap()
    }

    #[test]
    fn dump_writes_timestamped_file() {
        let runner = RecordingRunner::new().with_capture_output(b"CREATE TABLE wp_posts;\n");
        let (dir, ctx) = project(DbEngine::Mariadb, runner);

        let path = dump(&ctx, noon()).unwrap();

        assert_eq!(path, dir.path().join(".wpdev/db/dump-20260314-120509.sql"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "CREATE TABLE wp_posts;\n");
        assert_eq!(
            ctx.runner().command_lines(),
            vec!["docker compose exec -T db mariadb-dump -uroot -proot --databases wordpress"]
        );
    }

    #[test]
    fn failed_dump_writes_nothing() {
        let (dir, ctx) = project(DbEngine::Mysql, RecordingRunner::new().failing("docker"));

        assert!(matches!(dump(&ctx, noon()), Err(AppError::SubprocessError { .. })));
        assert!(!dir.path().join(".wpdev/db").exists());
    }

    #[test]
    fn import_streams_file_to_engine_client() {
        let (dir, ctx) = project(DbEngine::Mysql, RecordingRunner::new());
        fs::write(dir.path().join("backup.sql"), "INSERT INTO wp_options VALUES (1);").unwrap();

        import(&ctx, Path::new("backup.sql")).unwrap();

        let calls = ctx.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command.display(), "docker compose exec -T db mysql -uroot -proot");
        assert_eq!(calls[0].stdin.as_deref(), Some("INSERT INTO wp_options VALUES (1);"));
    }

    #[test]
    fn import_of_missing_file_fails_before_spawning() {
        let (_dir, ctx) = project(DbEngine::Mariadb, RecordingRunner::new());

        let err = import(&ctx, Path::new("nonexistent.sql")).unwrap_err();

        assert!(err.is_io());
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(ctx.runner().calls().is_empty());
    }
}
