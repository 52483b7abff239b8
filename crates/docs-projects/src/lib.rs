//! Project listing data for the Sailscasts docs.
//!
//! Provides the open-source and commercial project lists rendered by the
//! project grid. The canonical lists are embedded; [`ProjectCatalog`] can also
//! be loaded from YAML or JSON files, in which case every record is checked
//! against the [`ProjectDescriptor`] shape.
//!
//! # Example
//!
//! ```
//! use docs_projects::load_projects;
//!
//! let projects = load_projects();
//! let boring = projects.find("Boring Stack").unwrap();
//! assert_eq!(boring.link, "/boring-stack/");
//! ```

mod catalog;
mod data;
mod error;
mod loader;

pub use catalog::{ProjectCatalog, ProjectDescriptor};
pub use data::{catalog, load_projects};
pub use error::{DataLoadError, LoadError, ValidationError};
pub use loader::{DataFormat, RetryPolicy};
