//! Sidebar navigation entries.
//!
//! A sidebar is an ordered list of [`NavEntry`] trees. Leaves always carry a
//! link; groups carry children and, optionally, a link of their own and a
//! collapse state.
//!
//! Entries serialize to the shape the documentation framework expects:
//!
//! ```json
//! { "text": "Getting started", "items": [ { "text": "Introduction", "link": "/wish/" } ], "collapsed": false }
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ConfigurationError;

/// Sidebar navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Labelled link without children.
    Leaf(NavLink),
    /// Labelled group of entries.
    Group(NavGroup),
}

/// Leaf entry: a labelled link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display text.
    #[serde(rename = "text")]
    pub label: String,
    /// Root-relative path (e.g. "/wish/github") or absolute URL.
    pub link: String,
}

/// Group entry with ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display text.
    #[serde(rename = "text")]
    pub label: String,
    /// Optional landing page for the group itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child entries in display order.
    #[serde(rename = "items")]
    pub children: Vec<NavEntry>,
    /// `None` when the group cannot be collapsed, otherwise its initial state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl NavLink {
    /// Create a leaf link.
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

impl NavGroup {
    /// Create an expanded, collapsible group.
    pub fn new(label: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            label: label.into(),
            link: None,
            children,
            collapsed: Some(false),
        }
    }

    /// Set the initial collapse state (keeps the group collapsible).
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Make the group always expanded, without a collapse toggle.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.collapsed = None;
        self
    }

    /// Attach a landing page link to the group.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

impl From<NavLink> for NavEntry {
    fn from(link: NavLink) -> Self {
        Self::Leaf(link)
    }
}

impl From<NavGroup> for NavEntry {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

impl NavEntry {
    /// Shorthand for a leaf entry.
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf(NavLink::new(label, link))
    }

    /// Display text.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::Group(group) => &group.label,
        }
    }

    /// Link target, if any. Always `Some` for leaves.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.link),
            Self::Group(group) => group.link.as_deref(),
        }
    }

    /// Child entries (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Leaf(_) => &[],
            Self::Group(group) => &group.children,
        }
    }

    /// Whether the entry renders a collapse toggle.
    #[must_use]
    pub fn collapsible(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Group(group) => group.collapsed.is_some(),
        }
    }

    /// Whether the entry starts collapsed.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Group(group) => group.collapsed.unwrap_or(false),
        }
    }

    /// Visit this entry and all descendants in depth-first pre-order.
    pub fn for_each(&self, visit: &mut impl FnMut(&NavEntry)) {
        visit(self);
        for child in self.children() {
            child.for_each(visit);
        }
    }
}

/// Count entries across a list of trees, descendants included.
#[must_use]
pub fn count_entries(entries: &[NavEntry]) -> usize {
    let mut count = 0;
    for entry in entries {
        entry.for_each(&mut |_| count += 1);
    }
    count
}

/// Check tree invariants for a sidebar.
///
/// - labels are non-empty
/// - entries without children have a non-empty link
/// - labels are unique among siblings
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidEntry`] for the first violation found,
/// in depth-first order.
pub fn validate_entries(entries: &[NavEntry]) -> Result<(), ConfigurationError> {
    validate_siblings(entries, "")
}

fn validate_siblings(entries: &[NavEntry], parent: &str) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let location = if parent.is_empty() {
            entry.label().to_owned()
        } else {
            format!("{parent}/{}", entry.label())
        };

        if entry.label().trim().is_empty() {
            return Err(invalid(
                format!("{parent}[{index}]"),
                "label cannot be empty".to_owned(),
            ));
        }
        if !seen.insert(entry.label()) {
            return Err(invalid(
                location,
                "label is not unique among its siblings".to_owned(),
            ));
        }
        if entry.link().is_some_and(str::is_empty) {
            return Err(invalid(location, "link cannot be empty".to_owned()));
        }
        if entry.children().is_empty() && entry.link().is_none() {
            return Err(invalid(
                location,
                "entry without children must have a link".to_owned(),
            ));
        }

        validate_siblings(entry.children(), &location)?;
    }

    Ok(())
}

fn invalid(location: String, reason: String) -> ConfigurationError {
    ConfigurationError::InvalidEntry { location, reason }
}
