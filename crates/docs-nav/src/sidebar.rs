//! Sidebar map keyed by URL path prefix.
//!
//! The documentation framework picks the sidebar whose prefix the current
//! page path starts with. When several prefixes match, the first one in
//! declaration order wins; [`SidebarMap::resolve`] follows the same rule and
//! [`SidebarMap::check_unambiguous`] rejects maps where that tie-break would
//! ever be needed.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::area::Area;
use crate::entry::NavEntry;
use crate::error::ConfigurationError;
use crate::guides::build_guide;

/// Ordered mapping from path prefix to sidebar entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarMap {
    sections: Vec<(String, Vec<NavEntry>)>,
}

impl SidebarMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map with one sidebar per area, keyed by the area's path prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicatePrefix`] if an area is listed twice.
    pub fn from_areas(areas: impl IntoIterator<Item = Area>) -> Result<Self, ConfigurationError> {
        let mut map = Self::new();
        for area in areas {
            map.insert(area.path_prefix(), build_guide(area))?;
        }
        Ok(map)
    }

    /// Build a map from `(prefix, section key)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownSection`] when a key has no guide,
    /// and the errors of [`SidebarMap::insert`] for malformed or repeated prefixes.
    pub fn from_sections<P, K>(
        sections: impl IntoIterator<Item = (P, K)>,
    ) -> Result<Self, ConfigurationError>
    where
        P: Into<String>,
        K: AsRef<str>,
    {
        let mut map = Self::new();
        for (prefix, key) in sections {
            let area: Area = key.as_ref().parse()?;
            map.insert(prefix, build_guide(area))?;
        }
        Ok(map)
    }

    /// Append a sidebar for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPrefix`] unless the prefix starts
    /// and ends with `/`, and [`ConfigurationError::DuplicatePrefix`] if it is
    /// already present.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        entries: Vec<NavEntry>,
    ) -> Result<(), ConfigurationError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        if self.get(&prefix).is_some() {
            return Err(ConfigurationError::DuplicatePrefix(prefix));
        }
        tracing::debug!(prefix = %prefix, entries = entries.len(), "Registered sidebar");
        self.sections.push((prefix, entries));
        Ok(())
    }

    /// Sidebar registered for exactly this prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[NavEntry]> {
        self.sections
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Sidebar active for a page path.
    ///
    /// Returns the first prefix, in declaration order, that `page_path`
    /// starts with, together with its entries.
    #[must_use]
    pub fn resolve(&self, page_path: &str) -> Option<(&str, &[NavEntry])> {
        self.sections
            .iter()
            .find(|(prefix, _)| page_path.starts_with(prefix.as_str()))
            .map(|(prefix, entries)| (prefix.as_str(), entries.as_slice()))
    }

    /// Check that no prefix is a strict prefix of another.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::AmbiguousPrefix`] for the first offending pair.
    pub fn check_unambiguous(&self) -> Result<(), ConfigurationError> {
        for (i, (a, _)) in self.sections.iter().enumerate() {
            for (b, _) in &self.sections[i + 1..] {
                let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                if longer.starts_with(shorter.as_str()) {
                    return Err(ConfigurationError::AmbiguousPrefix {
                        shorter: shorter.clone(),
                        longer: longer.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Prefixes in declaration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(prefix, _)| prefix.as_str())
    }

    /// `(prefix, entries)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.sections
            .iter()
            .map(|(prefix, entries)| (prefix.as_str(), entries.as_slice()))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the map has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ConfigurationError> {
    let reason = if !prefix.starts_with('/') {
        "must start with '/'"
    } else if !prefix.ends_with('/') {
        "must end with '/'"
    } else if prefix.len() < 2 {
        "must name a section"
    } else {
        return Ok(());
    };

    Err(ConfigurationError::InvalidPrefix {
        prefix: prefix.to_owned(),
        reason,
    })
}

impl Serialize for SidebarMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (prefix, entries) in &self.sections {
            map.serialize_entry(prefix, entries)?;
        }
        map.end()
    }
}

/// Canonical sidebar map: one sidebar per [`Area`], in declaration order.
#[must_use]
pub fn sidebar_map() -> SidebarMap {
    let mut map = SidebarMap::new();
    for area in Area::ALL {
        map.sections.push((area.path_prefix(), build_guide(area)));
    }
    map
}
