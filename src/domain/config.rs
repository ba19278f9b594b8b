//! Project configuration record persisted in `.wpdev.yml`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Web server fronting PHP inside the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WebServer {
    /// `php:<version>-apache` image serves requests directly.
    #[default]
    Apache,
    /// `php:<version>-fpm` image behind a separate nginx container.
    Nginx,
}

impl WebServer {
    pub const ALL: [WebServer; 2] = [WebServer::Apache, WebServer::Nginx];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebServer::Apache => "apache",
            WebServer::Nginx => "nginx",
        }
    }

    /// Parse user input, falling back to the default variant when unrecognized.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "nginx" => WebServer::Nginx,
            _ => WebServer::Apache,
        }
    }
}

impl From<String> for WebServer {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for WebServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database engine image family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DbEngine {
    #[default]
    Mariadb,
    Mysql,
}

impl DbEngine {
    pub const ALL: [DbEngine; 2] = [DbEngine::Mariadb, DbEngine::Mysql];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbEngine::Mariadb => "mariadb",
            DbEngine::Mysql => "mysql",
        }
    }

    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "mysql" => DbEngine::Mysql,
            _ => DbEngine::Mariadb,
        }
    }

    /// Version offered by `init` for this engine.
    pub fn default_version(&self) -> &'static str {
        match self {
            DbEngine::Mariadb => "11.4",
            DbEngine::Mysql => "8.4",
        }
    }

    /// Native dump client shipped in the engine's image.
    pub fn dump_client(&self) -> &'static str {
        match self {
            DbEngine::Mariadb => "mariadb-dump",
            DbEngine::Mysql => "mysqldump",
        }
    }

    /// Native interactive client shipped in the engine's image.
    pub fn client(&self) -> &'static str {
        match self {
            DbEngine::Mariadb => "mariadb",
            DbEngine::Mysql => "mysql",
        }
    }
}

impl From<String> for DbEngine {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for DbEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How database files are stored on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Persistence {
    /// Host directory mounted at `/var/lib/mysql`.
    #[default]
    Bind,
    /// Docker-managed named volume.
    Volume,
}

impl Persistence {
    pub const ALL: [Persistence; 2] = [Persistence::Bind, Persistence::Volume];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persistence::Bind => "bind",
            Persistence::Volume => "volume",
        }
    }

    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "volume" => Persistence::Volume,
            _ => Persistence::Bind,
        }
    }
}

impl From<String> for Persistence {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub server: WebServer,
    pub php: String,
    pub docroot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub engine: DbEngine,
    pub version: String,
    pub portforward: String,
    pub persist: Persistence,
    pub data_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub redis: bool,
    pub mailpit: bool,
    pub adminer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XdebugConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfConfig {
    pub sync: String,
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub enabled: bool,
}

/// The single persisted configuration record of a project.
///
/// Every section defaults independently so partially written files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub domain: String,
    pub web: WebConfig,
    pub database: DatabaseConfig,
    pub services: ServicesConfig,
    pub xdebug: XdebugConfig,
    pub perf: PerfConfig,
    pub tls: TlsConfig,
}

impl ProjectConfig {
    /// Parse YAML content.
    pub fn parse_yaml(content: &str, source: &str) -> Result<Self, AppError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|err| AppError::ParseError {
            what: source.to_string(),
            details: err.to_string(),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|err| AppError::ParseError {
            what: "configuration".to_string(),
            details: err.to_string(),
        })
    }

    /// Data directory the database binds to, if bind persistence is selected.
    pub fn bind_data_path(&self) -> Option<&str> {
        match self.database.persist {
            Persistence::Bind => Some(self.database.data_path.as_str()),
            Persistence::Volume => None,
        }
    }

    /// Check the invariants that must hold before containers start.
    pub fn validate_for_start(&self) -> Result<(), AppError> {
        if let Some(path) = self.bind_data_path()
            && path.trim().is_empty()
        {
            return Err(AppError::Validation(
                "database.persist is 'bind' but database.data_path is empty".into(),
            ));
        }
        Ok(())
    }

    /// Document root relative to the project root; empty means the root itself.
    pub fn docroot_or_root(&self) -> &str {
        let docroot = self.web.docroot.trim();
        if docroot.is_empty() { "." } else { docroot }
    }
}

/// Values offered as prompt defaults by `init`.
pub mod defaults {
    pub const NAME: &str = "mysite";
    pub const TLD: &str = ".test";
    pub const PHP: &str = "8.3";
    pub const DOCROOT: &str = "wp";
    pub const PORTFORWARD: &str = "3307";
    pub const DATA_PATH: &str = "database";
    pub const SYNC: &str = "bind";
    pub const EXCLUDES: [&str; 3] = ["node_modules", "vendor", ".git"];
}
