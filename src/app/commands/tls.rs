use std::fs;
use std::path::Path;

use tracing::info;

use crate::app::AppContext;
use crate::domain::certificates::{self, CertificatePaths};
use crate::domain::{AppError, ProjectLayout};
use crate::ports::{CommandRunner, ExternalCommand};

const MKCERT: &str = "mkcert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsOutcome {
    /// `tls.enabled` is false; nothing was done.
    Disabled,
    /// All four certificate files already exist.
    AlreadyPresent(CertificatePaths),
    Generated(CertificatePaths),
}

/// Certificate files for `domain` in this project.
pub fn certificate_paths(layout: &ProjectLayout, domain: &str) -> CertificatePaths {
    CertificatePaths::for_domain(&layout.certs_dir(), domain)
}

fn mkcert_issue(cert: &Path, key: &Path, host: &str) -> ExternalCommand {
    ExternalCommand::new(MKCERT)
        .arg("-cert-file")
        .arg(cert.to_string_lossy())
        .arg("-key-file")
        .arg(key.to_string_lossy())
        .arg(host)
}

/// Install the local CA and issue leaf + wildcard certificates for `domain`.
pub fn generate_certificates<R: CommandRunner>(
    ctx: &AppContext<R>,
    domain: &str,
) -> Result<CertificatePaths, AppError> {
    certificates::validate_tls_domain(domain)?;
    if !ctx.runner().is_available(MKCERT) {
        return Err(AppError::subprocess(
            MKCERT,
            "mkcert not found. Install it first (brew install mkcert, choco install mkcert, etc.)",
        ));
    }

    let certs_dir = ctx.layout().certs_dir();
    fs::create_dir_all(&certs_dir)
        .map_err(|err| AppError::file_io("Failed to create", &certs_dir, err))?;

    ctx.runner().run(&ExternalCommand::new(MKCERT).arg("-install"))?;

    let paths = certificate_paths(ctx.layout(), domain);
    let wildcard = certificates::wildcard_host(domain);
    println!("Generating certs for {domain} and {wildcard}");
    ctx.runner().run(&mkcert_issue(&paths.cert, &paths.key, domain))?;
    ctx.runner().run(&mkcert_issue(&paths.wildcard_cert, &paths.wildcard_key, &wildcard))?;

    info!(domain, "certificates issued");
    Ok(paths)
}

/// Execute `tls init`.
pub fn execute<R: CommandRunner>(ctx: &AppContext<R>) -> Result<TlsOutcome, AppError> {
    let config = ctx.load_config()?;
    if !config.tls.enabled {
        return Ok(TlsOutcome::Disabled);
    }
    certificates::validate_tls_domain(&config.domain)?;

    let paths = certificate_paths(ctx.layout(), &config.domain);
    if paths.all_present() {
        return Ok(TlsOutcome::AlreadyPresent(paths));
    }

    generate_certificates(ctx, &config.domain).map(TlsOutcome::Generated)
}
