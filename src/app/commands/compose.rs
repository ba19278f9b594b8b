//! `docker compose` command lines.

use crate::domain::ProjectLayout;
use crate::ports::ExternalCommand;

/// Compose service running the database engine.
pub const DB_SERVICE: &str = "db";

/// Compose service running PHP.
pub const PHP_SERVICE: &str = "php";

/// Database created by the orchestration file.
pub const DATABASE_NAME: &str = "wordpress";

/// Root password set by the orchestration file.
pub const ROOT_PASSWORD: &str = "root";

fn compose(layout: &ProjectLayout) -> ExternalCommand {
    ExternalCommand::new("docker").arg("compose").in_dir(layout.root())
}

/// `docker compose up -d`
pub fn up(layout: &ProjectLayout) -> ExternalCommand {
    compose(layout).args(["up", "-d"])
}

/// `docker compose down`
pub fn down(layout: &ProjectLayout) -> ExternalCommand {
    compose(layout).arg("down")
}

/// `docker compose up -d --build --remove-orphans [services...]`
pub fn rebuild(layout: &ProjectLayout, services: &[String]) -> ExternalCommand {
    compose(layout).args(["up", "-d", "--build", "--remove-orphans"]).args(services.iter().cloned())
}

/// `docker compose exec -T db <program> <args...>`
pub fn exec_db<I, S>(layout: &ProjectLayout, program: &str, args: I) -> ExternalCommand
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    compose(layout).args(["exec", "-T", DB_SERVICE, program]).args(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_run_in_project_root() {
        let layout = ProjectLayout::new("/srv/shop");
        let command = up(&layout);
        assert_eq!(command.display(), "docker compose up -d");
        assert_eq!(command.current_dir.as_deref(), Some(layout.root()));
    }

    #[test]
    fn rebuild_appends_services() {
        let layout = ProjectLayout::new("/srv/shop");
        assert_eq!(
            rebuild(&layout, &[]).display(),
            "docker compose up -d --build --remove-orphans"
        );
        assert_eq!(
            rebuild(&layout, &["php".to_string()]).display(),
            "docker compose up -d --build --remove-orphans php"
        );
    }

    #[test]
    fn exec_db_disables_tty() {
        let layout = ProjectLayout::new("/srv/shop");
        assert_eq!(
            exec_db(&layout, "mysql", ["-uroot"]).display(),
            "docker compose exec -T db mysql -uroot"
        );
    }
}
