//! Loading project catalogs from YAML or JSON files.
//!
//! Files use the same shape as the serialized catalog:
//!
//! ```yaml
//! openSource:
//!   - name: Sails Wish
//!     description: OAuth authentication hook for Sails.js
//!     link: /wish/
//!     github: https://github.com/sailscastshq/sails-hook-wish
//! commercial:
//!   - name: Hagfish
//!     description: Invoices for professional creators
//!     link: https://hagfish.app
//!     external: true
//! ```
//!
//! Transient read failures are retried according to [`RetryPolicy`].
//! Parse and validation failures are permanent.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use crate::catalog::{ProjectCatalog, RawCatalog};
use crate::error::{DataLoadError, LoadError};

/// Retry settings for reading project data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total read attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; grows linearly with each retry.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(50),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Delay after the given failed attempt, saturating at [`Duration::MAX`].
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }
}

/// Supported project data formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    /// `.yaml` or `.yml` files.
    Yaml,
    /// `.json` files.
    Json,
}

impl DataFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

impl ProjectCatalog {
    /// Parse and validate a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Data`] on malformed YAML and
    /// [`LoadError::Validation`] when a record misses a required field.
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        parse(content, DataFormat::Yaml)
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Data`] on malformed JSON and
    /// [`LoadError::Validation`] when a record misses a required field.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        parse(content, DataFormat::Json)
    }

    /// Load a catalog from a `.yaml`, `.yml` or `.json` file.
    ///
    /// Uses the default [`RetryPolicy`].
    ///
    /// # Errors
    ///
    /// See [`ProjectCatalog::load_from_path_with_retry`].
    pub fn load_from_path(path: &Path) -> Result<Self, LoadError> {
        Self::load_from_path_with_retry(path, RetryPolicy::default())
    }

    /// Load a catalog from a file, retrying transient read failures.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError::UnsupportedFormat`] for unknown extensions,
    /// [`DataLoadError::Io`] once reading fails permanently or retries are
    /// exhausted, and the errors of [`ProjectCatalog::from_yaml_str`] /
    /// [`ProjectCatalog::from_json_str`] for the content.
    pub fn load_from_path_with_retry(path: &Path, policy: RetryPolicy) -> Result<Self, LoadError> {
        let format = DataFormat::from_path(path)
            .ok_or_else(|| DataLoadError::UnsupportedFormat(path.to_path_buf()))?;
        let content = read_with_retry(path, policy)?;
        let catalog = parse(&content, format)?;

        tracing::info!(
            path = %path.display(),
            open_source = catalog.open_source.len(),
            commercial = catalog.commercial.len(),
            "Loaded project catalog"
        );
        Ok(catalog)
    }
}

fn parse(content: &str, format: DataFormat) -> Result<ProjectCatalog, LoadError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(ProjectCatalog::default());
    }

    let raw: RawCatalog = match format {
        DataFormat::Yaml => serde_yaml::from_str(trimmed).map_err(|e| e.to_string()),
        DataFormat::Json => serde_json::from_str(trimmed).map_err(|e| e.to_string()),
    }
    .map_err(|message| DataLoadError::Parse {
        format: format.name(),
        message,
    })?;

    Ok(raw.into_catalog()?)
}

fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
    )
}

fn read_with_retry(path: &Path, policy: RetryPolicy) -> Result<String, DataLoadError> {
    read_with(path, policy, |p| std::fs::read_to_string(p))
}

/// Retry loop, parameterized over the read so it can be exercised in tests.
fn read_with(
    path: &Path,
    policy: RetryPolicy,
    mut read: impl FnMut(&Path) -> std::io::Result<String>,
) -> Result<String, DataLoadError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match read(path) {
            Ok(content) => return Ok(content),
            Err(e) if is_transient(e.kind()) && attempt < max_attempts => {
                tracing::warn!(
                    path = %path.display(),
                    attempt,
                    error = %e,
                    "Transient error reading project data, retrying"
                );
                std::thread::sleep(policy.delay_after(attempt));
                attempt += 1;
            }
            Err(source) => {
                return Err(DataLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
}
