use std::path::{Path, PathBuf};

use super::AppError;

/// The four certificate files issued for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificatePaths {
    pub cert: PathBuf,
    pub key: PathBuf,
    pub wildcard_cert: PathBuf,
    pub wildcard_key: PathBuf,
}

impl CertificatePaths {
    /// Deterministic file names under `certs_dir`, matching what the proxy config mounts.
    pub fn for_domain(certs_dir: &Path, domain: &str) -> Self {
        Self {
            cert: certs_dir.join(format!("{domain}.pem")),
            key: certs_dir.join(format!("{domain}-key.pem")),
            wildcard_cert: certs_dir.join(format!("_wildcard.{domain}.pem")),
            wildcard_key: certs_dir.join(format!("_wildcard.{domain}-key.pem")),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [&self.cert, &self.key, &self.wildcard_cert, &self.wildcard_key]
    }

    /// True when every file exists.
    pub fn all_present(&self) -> bool {
        self.all().iter().all(|path| path.exists())
    }
}

/// Wildcard host covering every subdomain.
pub fn wildcard_host(domain: &str) -> String {
    format!("*.{domain}")
}

/// Reject domains a locally trusted certificate cannot be issued for.
pub fn validate_tls_domain(domain: &str) -> Result<(), AppError> {
    let domain = domain.trim();
    if domain.is_empty() || domain.eq_ignore_ascii_case("localhost") {
        return Err(AppError::Validation(
            "Set a valid domain in the config file (e.g., myshop.test)".into(),
        ));
    }
    Ok(())
}
