//! Init command implementation.

use crate::app::api::{self, CertificateStep, ConfigWrite};
use crate::domain::{AppError, ProjectLayout};

pub fn run_init(layout: ProjectLayout, assume_yes: bool) -> Result<(), AppError> {
    let root = layout.root().to_path_buf();
    let config_path = layout.config_path().to_path_buf();
    let outcome = api::init(layout, assume_yes)?;

    let config_display = super::relative(&root, &config_path).display();
    match outcome.config_write {
        ConfigWrite::Created => println!("✅ Wrote {config_display}"),
        ConfigWrite::Overwritten => println!("✅ Overwrote {config_display}"),
        ConfigWrite::Kept => println!("Kept existing {config_display}"),
    }
    if !outcome.templates_written.is_empty() {
        println!("✅ Installed {} default template(s)", outcome.templates_written.len());
    }
    if let Some(index) = &outcome.index_written {
        println!("✅ Created {}", super::relative(&root, index).display());
    }
    match &outcome.certificates {
        CertificateStep::NotRequested | CertificateStep::AlreadyPresent => {}
        CertificateStep::Generated => println!("✅ Generated TLS certificates"),
        CertificateStep::Failed(reason) => {
            println!("⚠️  Certificate generation failed: {reason}");
            println!("  Run `wpdev tls init` after installing mkcert.");
        }
    }
    println!("Next: wpdev start");
    Ok(())
}
