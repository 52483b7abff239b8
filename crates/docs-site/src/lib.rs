//! Site manifest assembly for the Sailscasts docs.
//!
//! This crate provides:
//! - [`build_site`]: validates a [`SiteConfig`](docs_config::SiteConfig) and
//!   assembles navigation, sidebars and project data into a [`SiteManifest`]
//! - [`SiteError`]: every configuration mistake, detected at load time
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), docs_site::SiteError> {
//! use docs_config::SiteConfig;
//! use docs_site::build_site;
//!
//! let site = build_site(&SiteConfig::default())?;
//!
//! // Hand-off object for the documentation framework
//! let manifest = site.to_json_pretty()?;
//! assert!(manifest.contains("themeConfig"));
//!
//! // Data for the project grid
//! assert!(site.projects().find("Boring Stack").is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod manifest;

pub use error::SiteError;
pub use manifest::{SiteManifest, ThemeConfig, build_site};

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::SiteManifest: Send, Sync);
    static_assertions::assert_impl_all!(super::SiteError: Send, Sync);
}
