//! Navigation configuration errors.

/// Error raised while assembling navigation configuration.
///
/// All variants describe programming or configuration mistakes. They are
/// meant to abort site configuration loading, never to be recovered from
/// at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A sidebar section references a key with no guide builder.
    #[error("Unknown sidebar section '{0}'")]
    UnknownSection(String),
    /// The same path prefix was declared twice.
    #[error("Duplicate sidebar prefix '{0}'")]
    DuplicatePrefix(String),
    /// Path prefix is not of the form `/segment/`.
    #[error("Invalid sidebar prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// Offending prefix.
        prefix: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// One sidebar prefix is a strict prefix of another.
    #[error("Ambiguous sidebar prefixes: '{shorter}' is a prefix of '{longer}'")]
    AmbiguousPrefix {
        /// The shorter, enclosing prefix.
        shorter: String,
        /// The longer prefix shadowed by declaration order.
        longer: String,
    },
    /// A navigation entry breaks a tree invariant.
    #[error("Invalid navigation entry at {location}: {reason}")]
    InvalidEntry {
        /// Slash-separated label path to the entry (e.g. "Getting started/Introduction").
        location: String,
        /// Why the entry was rejected.
        reason: String,
    },
    /// An internal top navigation link points outside every sidebar.
    #[error("Nav link '{text}' ({link}) is not covered by any sidebar prefix")]
    UncoveredNavLink {
        /// Display text of the link.
        text: String,
        /// Link target.
        link: String,
    },
}
