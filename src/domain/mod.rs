pub mod artifacts;
pub mod certificates;
pub mod config;
pub mod error;
pub mod layout;
pub mod xdebug;

pub use artifacts::{Artifact, TemplateName};
pub use certificates::CertificatePaths;
pub use config::{DbEngine, Persistence, ProjectConfig, WebServer};
pub use error::AppError;
pub use layout::ProjectLayout;
pub use xdebug::XdebugMode;
