//! Project data errors.

use std::path::PathBuf;

/// Failure to read or parse project data.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Content is not valid for its format.
    #[error("Invalid {format} project data: {message}")]
    Parse {
        /// Format name ("YAML" or "JSON").
        format: &'static str,
        /// Parser message.
        message: String,
    },
    /// File extension does not map to a supported format.
    #[error("Unsupported project data format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// A project record that does not match the descriptor shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid project at {list}[{index}]: field '{field}' {reason}")]
pub struct ValidationError {
    /// List holding the record ("openSource" or "commercial").
    pub list: &'static str,
    /// Position of the record in its list.
    pub index: usize,
    /// Offending field name.
    pub field: &'static str,
    /// What is wrong with the field.
    pub reason: &'static str,
}

/// Error loading a project catalog from an external source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read or parsed.
    #[error(transparent)]
    Data(#[from] DataLoadError),
    /// A record is missing a required field or holds an invalid value.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
