//! Documented product areas.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// A documented product with its own sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    /// Captain Vane test data factories.
    CaptainVane,
    /// Guppy, the Sails REPL app.
    Guppy,
    /// Sails Wish OAuth hook.
    Wish,
    /// Create Sails project scaffolder.
    CreateSails,
    /// Inertia.js adapter for Sails.
    InertiaSails,
    /// Sails Mail email hook.
    Mail,
    /// The Boring JavaScript Stack.
    BoringStack,
    /// Sails Content markdown collections.
    Content,
    /// Sails Stash caching hook.
    SailsStash,
    /// Sails Pay payments hook.
    SailsPay,
    /// Sails Flash messages hook.
    SailsFlash,
    /// Sails Clearance authorization hook.
    Clearance,
    /// SQLite adapter for Sails.
    SailsSqlite,
    /// Sails Quest job scheduler.
    SailsQuest,
}

impl Area {
    /// All areas, in sidebar declaration order.
    pub const ALL: [Self; 14] = [
        Self::CaptainVane,
        Self::Guppy,
        Self::Wish,
        Self::CreateSails,
        Self::InertiaSails,
        Self::Mail,
        Self::BoringStack,
        Self::Content,
        Self::SailsStash,
        Self::SailsPay,
        Self::SailsFlash,
        Self::Clearance,
        Self::SailsSqlite,
        Self::SailsQuest,
    ];

    /// Section key, also the first URL path segment.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CaptainVane => "captain-vane",
            Self::Guppy => "guppy",
            Self::Wish => "wish",
            Self::CreateSails => "create-sails",
            Self::InertiaSails => "inertia-sails",
            Self::Mail => "mail",
            Self::BoringStack => "boring-stack",
            Self::Content => "content",
            Self::SailsStash => "sails-stash",
            Self::SailsPay => "sails-pay",
            Self::SailsFlash => "sails-flash",
            Self::Clearance => "clearance",
            Self::SailsSqlite => "sails-sqlite",
            Self::SailsQuest => "sails-quest",
        }
    }

    /// URL path prefix owning this area's pages (e.g. `/wish/`).
    #[must_use]
    pub fn path_prefix(self) -> String {
        format!("/{}/", self.id())
    }

    /// Root-relative link to a page of this area.
    ///
    /// An empty slug links to the area's index page.
    #[must_use]
    pub fn page(self, slug: &str) -> String {
        format!("/{}/{slug}", self.id())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Area {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|area| area.id() == s)
            .ok_or_else(|| ConfigurationError::UnknownSection(s.to_owned()))
    }
}
