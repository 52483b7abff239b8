//! Site assembly errors.

use docs_config::ConfigError;
use docs_nav::ConfigurationError;
use docs_projects::{LoadError, ValidationError};

/// Error assembling the site manifest.
///
/// Raised at configuration load time; the site must not be built when any
/// of these occur.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Navigation(#[from] ConfigurationError),

    #[error("{0}")]
    Projects(#[from] LoadError),

    #[error("{0}")]
    ProjectValidation(#[from] ValidationError),

    #[error("Failed to serialize site manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
