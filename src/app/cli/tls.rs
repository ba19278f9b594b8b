//! TLS command implementation.

use clap::Subcommand;

use crate::app::api::{self, TlsOutcome};
use crate::domain::{AppError, ProjectLayout};

#[derive(Subcommand)]
pub enum TlsCommands {
    /// Generate mkcert certificates for the project domain and its wildcard
    Init,
}

pub fn run_tls(layout: ProjectLayout, command: TlsCommands) -> Result<(), AppError> {
    match command {
        TlsCommands::Init => match api::tls_init(layout)? {
            TlsOutcome::Disabled => println!("TLS disabled in config; nothing to do"),
            TlsOutcome::AlreadyPresent(_) => println!("✅ Certificates already present"),
            TlsOutcome::Generated(paths) => {
                let dir = paths.cert.parent().unwrap_or(&paths.cert);
                println!("✅ Certificates written to {}", dir.display());
            }
        },
    }
    Ok(())
}
