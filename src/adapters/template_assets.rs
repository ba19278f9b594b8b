//! Built-in template defaults embedded in the binary.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use tracing::debug;

use crate::domain::{AppError, TemplateName};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Built-in content for a well-known template.
pub fn default_content(name: TemplateName) -> Result<&'static str, AppError> {
    TEMPLATES_DIR.get_file(name.file_name()).and_then(|file| file.contents_utf8()).ok_or_else(
        || AppError::RenderError {
            template: name.file_name().to_string(),
            details: "built-in default is missing from the binary".to_string(),
        },
    )
}

/// Seed `dir` with the built-in templates, leaving existing files untouched.
///
/// Returns the paths that were written.
pub fn ensure_defaults(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir).map_err(|err| AppError::file_io("Failed to create", dir, err))?;

    let mut written = Vec::new();
    for name in TemplateName::ALL {
        let path = dir.join(name.file_name());
        if path.exists() {
            debug!(template = name.file_name(), "template exists, keeping user copy");
            continue;
        }
        fs::write(&path, default_content(name)?)
            .map_err(|err| AppError::file_io("Failed to write", &path, err))?;
        written.push(path);
    }
    Ok(written)
}
