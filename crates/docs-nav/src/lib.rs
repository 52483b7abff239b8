//! Navigation configuration for the Sailscasts docs.
//!
//! This crate provides:
//! - [`NavEntry`]: sidebar entries, leaves always carrying a link
//! - [`build_guide`]: the sidebar of each documented [`Area`]
//! - [`build_nav_bar`]: the global top navigation
//! - [`SidebarMap`]: sidebars keyed by URL path prefix
//!
//! All builders are pure and return freshly constructed values.
//!
//! # Quick Start
//!
//! ```
//! use docs_nav::{Area, build_guide, sidebar_map};
//!
//! let guide = build_guide(Area::Wish);
//! assert_eq!(guide[0].label(), "Getting started");
//!
//! let map = sidebar_map();
//! let (prefix, _entries) = map.resolve("/wish/github").unwrap();
//! assert_eq!(prefix, "/wish/");
//! ```

mod area;
mod entry;
mod error;
mod guides;
mod nav_bar;
mod sidebar;

pub use area::Area;
pub use entry::{NavEntry, NavGroup, NavLink, count_entries, validate_entries};
pub use error::ConfigurationError;
pub use guides::{build_guide, build_guide_by_id};
pub use nav_bar::{NavBarEntry, NavBarLink, build_nav_bar};
pub use sidebar::{SidebarMap, sidebar_map};
