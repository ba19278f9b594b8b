//! wpdev: bootstrap and drive a local WordPress development stack.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CertificateStep, ConfigWrite, InitOutcome, RenderedArtifact, TlsOutcome, XdebugOutcome,
    current_layout, db_dump, db_import, init, rebuild, start, stop, tls_init, xdebug,
};
pub use domain::{AppError, ProjectConfig, ProjectLayout, XdebugMode};
