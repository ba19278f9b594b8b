//! Render the project templates into generated artifacts.
//!
//! All conditional logic lives in the template files. The renderer only picks
//! which proxy template to use, based on `tls.enabled`.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior, Value};
use tracing::debug;

use crate::domain::{AppError, Artifact, ProjectConfig, ProjectLayout, TemplateName};

/// One artifact written by [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub artifact: Artifact,
    pub template: TemplateName,
    pub path: PathBuf,
}

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

fn render_error(name: TemplateName, details: impl ToString) -> AppError {
    AppError::RenderError { template: name.file_name().to_string(), details: details.to_string() }
}

/// Execute one template from `template_dir` against `config`.
pub fn render_template(
    config: &ProjectConfig,
    template_dir: &Path,
    name: TemplateName,
) -> Result<String, AppError> {
    let path = template_dir.join(name.file_name());
    let source = fs::read_to_string(&path)
        .map_err(|err| render_error(name, format!("cannot read {}: {}", path.display(), err)))?;

    let env = build_environment();
    env.render_named_str(name.file_name(), &source, Value::from_serialize(config))
        .map_err(|err| render_error(name, err))
}

/// Render every artifact for `config`, stopping at the first failure.
///
/// Artifacts already written before a failure are left in place.
pub fn render(
    config: &ProjectConfig,
    layout: &ProjectLayout,
) -> Result<Vec<RenderedArtifact>, AppError> {
    let template_dir = layout.templates_dir();
    let generated_dir = layout.generated_dir();
    fs::create_dir_all(&generated_dir)
        .map_err(|err| AppError::file_io("Failed to create", &generated_dir, err))?;

    let mut rendered = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let template = artifact.template(config.tls.enabled);
        let output = render_template(config, &template_dir, template)?;
        let path = artifact.output_path(layout);
        fs::write(&path, output).map_err(|err| AppError::file_io("Failed to write", &path, err))?;
        debug!(template = template.file_name(), path = %path.display(), "rendered");
        rendered.push(RenderedArtifact { artifact, template, path });
    }
    Ok(rendered)
}
