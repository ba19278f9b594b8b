use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::adapters::template_assets;
use crate::app::AppContext;
use crate::app::commands::tls;
use crate::domain::config::defaults;
use crate::domain::{AppError, DbEngine, Persistence, ProjectConfig, WebServer};
use crate::ports::{CommandRunner, Prompter};

const INDEX_PLACEHOLDER: &str = "<?php phpinfo();\n";

/// What happened to the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWrite {
    Created,
    Overwritten,
    /// An existing file was kept; init continued with its content.
    Kept,
}

/// Result of the certificate step of init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateStep {
    NotRequested,
    AlreadyPresent,
    Generated,
    /// Generation failed; init still completed.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub config: ProjectConfig,
    pub config_write: ConfigWrite,
    pub templates_written: Vec<PathBuf>,
    pub index_written: Option<PathBuf>,
    pub certificates: CertificateStep,
}

fn choices<T: Display>(label: &str, options: &[T]) -> String {
    let joined = options.iter().map(ToString::to_string).collect::<Vec<_>>().join("/");
    format!("{label} ({joined})")
}

/// Collect every configuration field, applying defaults and enum normalization.
pub fn collect_config(prompter: &impl Prompter) -> Result<ProjectConfig, AppError> {
    let mut config = ProjectConfig::default();

    config.name = prompter.ask_with_default("Project name", defaults::NAME)?;
    config.domain =
        prompter.ask_with_default("Domain", &format!("{}{}", config.name, defaults::TLD))?;
    config.web.php = prompter.ask_with_default("PHP version", defaults::PHP)?;
    config.web.server = WebServer::parse_lenient(&prompter.ask_with_default(
        &choices("Web server", &WebServer::ALL),
        WebServer::default().as_str(),
    )?);
    config.web.docroot = prompter.ask_with_default("Document root", defaults::DOCROOT)?;

    config.database.engine = DbEngine::parse_lenient(&prompter.ask_with_default(
        &choices("Database engine", &DbEngine::ALL),
        DbEngine::default().as_str(),
    )?);
    config.database.version = prompter
        .ask_with_default("Database version", config.database.engine.default_version())?;
    config.database.portforward =
        prompter.ask_with_default("Database port on host", defaults::PORTFORWARD)?;
    config.database.persist = Persistence::parse_lenient(&prompter.ask_with_default(
        &choices("Persist DB data as", &Persistence::ALL),
        Persistence::default().as_str(),
    )?);

    config.tls.enabled = prompter.ask_yes_no("Enable TLS (mkcert)?", true)?;
    config.services.redis = prompter.ask_yes_no("Enable Redis?", true)?;
    config.services.mailpit = prompter.ask_yes_no("Enable Mailpit?", true)?;
    config.services.adminer = prompter.ask_yes_no("Enable Adminer?", true)?;

    config.xdebug.enabled = false;
    config.perf.sync = defaults::SYNC.to_string();
    config.perf.excludes = defaults::EXCLUDES.iter().map(|s| s.to_string()).collect();

    if config.database.persist == Persistence::Bind {
        let data_path = prompter
            .ask_with_default("DB data folder (relative to project root)", defaults::DATA_PATH)?;
        config.database.data_path =
            if data_path.trim().is_empty() { defaults::DATA_PATH.to_string() } else { data_path };
    }

    Ok(config)
}

/// Execute the init command.
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    prompter: &impl Prompter,
) -> Result<InitOutcome, AppError> {
    let layout = ctx.layout();
    let collected = collect_config(prompter)?;

    let config_name = layout
        .config_path()
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| layout.config_path().display().to_string());

    let (config, config_write) = if layout.config_path().exists() {
        if prompter.ask_yes_no(&format!("{config_name} exists. Overwrite?"), false)? {
            ctx.save_config(&collected)?;
            (collected, ConfigWrite::Overwritten)
        } else {
            (ctx.load_config()?, ConfigWrite::Kept)
        }
    } else {
        ctx.save_config(&collected)?;
        (collected, ConfigWrite::Created)
    };

    if let Some(data_path) = config.bind_data_path().filter(|path| !path.trim().is_empty()) {
        let dir = layout.resolve(data_path);
        fs::create_dir_all(&dir).map_err(|err| AppError::file_io("Failed to create", &dir, err))?;
    }

    let templates_written = template_assets::ensure_defaults(&layout.templates_dir())?;

    let docroot = layout.resolve(config.docroot_or_root());
    let index_path = docroot.join("index.php");
    let index_written = if index_path.exists() {
        None
    } else {
        fs::create_dir_all(&docroot)
            .map_err(|err| AppError::file_io("Failed to create", &docroot, err))?;
        fs::write(&index_path, INDEX_PLACEHOLDER)
            .map_err(|err| AppError::file_io("Failed to write", &index_path, err))?;
        Some(index_path)
    };

    let certificates = if !config.tls.enabled {
        CertificateStep::NotRequested
    } else if tls::certificate_paths(layout, &config.domain).all_present() {
        CertificateStep::AlreadyPresent
    } else {
        println!("TLS enabled: generating mkcert certificates...");
        match tls::generate_certificates(ctx, &config.domain) {
            Ok(_) => CertificateStep::Generated,
            Err(err) => {
                warn!(error = %err, "certificate generation failed during init");
                CertificateStep::Failed(err.to_string())
            }
        }
    };

    Ok(InitOutcome { config, config_write, templates_written, index_written, certificates })
}
