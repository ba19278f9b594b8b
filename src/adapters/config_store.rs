//! Load and save `.wpdev.yml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ProjectConfig};

/// Read the configuration at `path`.
///
/// A missing file is a first run and yields the default record.
pub fn load(path: &Path) -> Result<ProjectConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config not found, using defaults");
            return Ok(ProjectConfig::default());
        }
        Err(err) => return Err(AppError::file_io("Failed to read", path, err)),
    };
    ProjectConfig::parse_yaml(&content, &path.display().to_string())
}

/// Write the configuration to `path`, replacing any existing file.
pub fn save(path: &Path, config: &ProjectConfig) -> Result<(), AppError> {
    let yaml = config.to_yaml()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|err| AppError::file_io("Failed to create", parent, err))?;
    }
    fs::write(path, yaml).map_err(|err| AppError::file_io("Failed to write", path, err))?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}
