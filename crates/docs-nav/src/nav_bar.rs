//! Global top navigation bar.

use serde::Serialize;

use crate::area::Area;

/// Top-level navigation bar entry.
///
/// The bar is one level deep: menus hold plain links, never nested menus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavBarEntry {
    /// Single link.
    Link(NavBarLink),
    /// Dropdown menu of links.
    Menu {
        /// Menu title.
        text: String,
        /// Menu links in display order.
        items: Vec<NavBarLink>,
    },
}

/// Link in the navigation bar or in one of its menus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavBarLink {
    /// Display text.
    pub text: String,
    /// Root-relative path or absolute URL.
    pub link: String,
    /// Path prefix that highlights this link as active.
    #[serde(rename = "activeMatch", skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

impl NavBarLink {
    /// Link to an external page.
    pub fn external(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Link to an area's index page, active anywhere under the area.
    pub fn area(text: impl Into<String>, area: Area) -> Self {
        let prefix = area.path_prefix();
        Self {
            text: text.into(),
            link: prefix.clone(),
            active_match: Some(prefix),
        }
    }

    /// Whether the link stays on the docs site.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.link.starts_with('/')
    }
}

impl NavBarEntry {
    /// Display text of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Menu { text, .. } => text,
        }
    }

    /// All links reachable from this entry.
    #[must_use]
    pub fn links(&self) -> &[NavBarLink] {
        match self {
            Self::Link(link) => std::slice::from_ref(link),
            Self::Menu { items, .. } => items,
        }
    }
}

/// Build the global top navigation.
#[must_use]
pub fn build_nav_bar() -> Vec<NavBarEntry> {
    let open_source = [
        ("Boring Stack", Area::BoringStack),
        ("Create Sails", Area::CreateSails),
        ("Inertia Sails", Area::InertiaSails),
        ("Sails Wish", Area::Wish),
        ("Captain Vane", Area::CaptainVane),
        ("Sails Mail", Area::Mail),
        ("Sails Content", Area::Content),
        ("Sails Stash", Area::SailsStash),
        ("Sails Pay", Area::SailsPay),
        ("Sails Flash", Area::SailsFlash),
        ("Sails Clearance", Area::Clearance),
        ("Sails SQLite", Area::SailsSqlite),
        ("Sails Quest", Area::SailsQuest),
    ];

    vec![
        NavBarEntry::Menu {
            text: "Commercial products".to_owned(),
            items: vec![
                NavBarLink::external("Sailscasts", "https://sailscasts.com"),
                NavBarLink::external("Hagfish", "https://hagfish.app"),
                NavBarLink::external("The African Engineer", "https://africanengineer.com"),
            ],
        },
        NavBarEntry::Menu {
            text: "Open Source".to_owned(),
            items: open_source
                .into_iter()
                .map(|(text, area)| NavBarLink::area(text, area))
                .collect(),
        },
        NavBarEntry::Link(NavBarLink::external(
            "Courses",
            "https://sailscasts.com/courses",
        )),
        NavBarEntry::Link(NavBarLink::external(
            "Screencasts",
            "https://sailscasts.com/screencasts",
        )),
        NavBarEntry::Link(NavBarLink::external("Blog", "https://blog.sailscasts.com")),
    ]
}
