use std::path::{Path, PathBuf};

/// Default configuration file name at the project root.
pub const CONFIG_FILE: &str = ".wpdev.yml";

/// Working directory for templates, generated artifacts, certificates and dumps.
pub const WPDEV_DIR: &str = ".wpdev";

/// Orchestration file written at the project root.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Path catalog for one project.
///
/// The configuration path is carried explicitly so a `--config` override
/// reaches every operation without process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    config_path: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root` using the default `.wpdev.yml`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);
        Self { root, config_path }
    }

    /// Layout rooted at `root` with an optional config override.
    ///
    /// Relative overrides resolve against `root`.
    pub fn with_config(root: impl Into<PathBuf>, config: Option<&Path>) -> Self {
        let mut layout = Self::new(root);
        if let Some(path) = config {
            layout.config_path =
                if path.is_absolute() { path.to_path_buf() } else { layout.root.join(path) };
        }
        layout
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `.wpdev/`
    pub fn wpdev_dir(&self) -> PathBuf {
        self.root.join(WPDEV_DIR)
    }

    /// `.wpdev/templates/`
    pub fn templates_dir(&self) -> PathBuf {
        self.wpdev_dir().join("templates")
    }

    /// `.wpdev/generated/`
    pub fn generated_dir(&self) -> PathBuf {
        self.wpdev_dir().join("generated")
    }

    /// `.wpdev/certs/`
    pub fn certs_dir(&self) -> PathBuf {
        self.wpdev_dir().join("certs")
    }

    /// `.wpdev/db/`
    pub fn dumps_dir(&self) -> PathBuf {
        self.wpdev_dir().join("db")
    }

    /// `docker-compose.yml`
    pub fn compose_file(&self) -> PathBuf {
        self.root.join(COMPOSE_FILE)
    }

    /// Resolve a project-relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
