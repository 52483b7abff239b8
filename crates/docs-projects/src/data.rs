//! Embedded project listing.

use std::sync::LazyLock;

use crate::catalog::{ProjectCatalog, ProjectDescriptor};

static CATALOG: LazyLock<ProjectCatalog> = LazyLock::new(|| {
    let catalog = ProjectCatalog {
        open_source: open_source(),
        commercial: commercial(),
    };
    tracing::debug!(
        open_source = catalog.open_source.len(),
        commercial = catalog.commercial.len(),
        "Built embedded project catalog"
    );
    catalog
});

/// Embedded project catalog, built once per process.
#[must_use]
pub fn catalog() -> &'static ProjectCatalog {
    &CATALOG
}

/// Owned copy of the embedded project catalog.
///
/// Every call returns a structurally equal value.
#[must_use]
pub fn load_projects() -> ProjectCatalog {
    catalog().clone()
}

fn open_source() -> Vec<ProjectDescriptor> {
    const GITHUB: &str = "https://github.com/sailscastshq";

    [
        (
            "Boring Stack",
            "A full-stack JavaScript framework for building modern web applications with Sails and Inertia.js",
            "/boring-stack/",
            "boring-stack",
        ),
        (
            "Pellicule",
            "A Vue-native video rendering library for creating videos programmatically with Vue components",
            "/pellicule/",
            "pellicule",
        ),
        (
            "Inertia Sails",
            "The official Sails.js adapter for Inertia.js, enabling modern SPAs without building an API",
            "/inertia-sails/",
            "inertia-sails",
        ),
        (
            "Create Sails",
            "Scaffold new Sails.js projects with sensible defaults and modern tooling",
            "/create-sails/",
            "create-sails",
        ),
        (
            "Sails Mail",
            "Elegant email sending for Sails.js with support for multiple transports",
            "/mail/",
            "sails-hook-mail",
        ),
        (
            "Sails Wish",
            "OAuth authentication hook for Sails.js with GitHub, Google, and more providers",
            "/wish/",
            "sails-hook-wish",
        ),
        (
            "Sails Stash",
            "Caching solution for Sails.js with Memory, Redis, and Memcached support",
            "/sails-stash/",
            "sails-hook-stash",
        ),
        (
            "Sails Pay",
            "Payment processing for Sails.js with Lemon Squeezy, Paystack, Flutterwave, and more",
            "/sails-pay/",
            "sails-hook-pay",
        ),
        (
            "Sails Quest",
            "Job scheduling and background processing for Sails.js applications",
            "/sails-quest/",
            "sails-hook-quest",
        ),
        (
            "Sails Content",
            "Content management with markdown collections for Sails.js",
            "/content/",
            "sails-hook-content",
        ),
        (
            "Sails Flash",
            "Flash messaging for Sails.js applications",
            "/sails-flash/",
            "sails-hook-flash",
        ),
        (
            "Sails Clearance",
            "Authorization and access control for Sails.js",
            "/clearance/",
            "clearance",
        ),
        (
            "Sails SQLite",
            "SQLite adapter for Sails.js with full Waterline ORM support",
            "/sails-sqlite/",
            "sails-sqlite",
        ),
        (
            "Sentry Sails",
            "Sentry error tracking integration for Sails.js applications",
            "/sentry-sails/",
            "sentry-sails",
        ),
        (
            "Captain Vane",
            "Test data generation library for JavaScript applications",
            "/captain-vane/",
            "captain-vane",
        ),
    ]
    .into_iter()
    .map(|(name, description, link, repo)| {
        ProjectDescriptor::open_source(name, description, link, format!("{GITHUB}/{repo}"))
    })
    .collect()
}

fn commercial() -> Vec<ProjectDescriptor> {
    vec![
        ProjectDescriptor::commercial(
            "Sailscasts",
            "Practical, high-quality video tutorials and workshops for pragmatic full-stack JavaScript web developers.",
            "https://sailscasts.com",
        ),
        ProjectDescriptor::commercial(
            "Hagfish",
            "Hagfish helps professional creators send beautiful invoices, track expenses, and get paid faster.",
            "https://hagfish.app",
        ),
        ProjectDescriptor::commercial(
            "The African Engineer",
            "Deep dives into Big Tech & startups. Hard-won lessons. No hype\u{2014}just real engineering insights you can't find anywhere else.",
            "https://africanengineer.com",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lists_are_non_empty() {
        let projects = load_projects();

        assert_eq!(projects.open_source.len(), 15);
        assert_eq!(projects.commercial.len(), 3);
    }

    #[test]
    fn test_required_fields_are_non_empty() {
        let projects = load_projects();

        for project in projects.open_source.iter().chain(&projects.commercial) {
            assert!(!project.name.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.link.is_empty());
        }
    }

    #[test]
    fn test_embedded_catalog_validates() {
        assert_eq!(catalog().validate(), Ok(()));
    }

    #[test]
    fn test_load_projects_is_idempotent() {
        assert_eq!(load_projects(), load_projects());
    }

    #[test]
    fn test_boring_stack_github() {
        let projects = load_projects();

        let boring = projects
            .open_source
            .iter()
            .find(|p| p.name == "Boring Stack")
            .unwrap();
        assert_eq!(
            boring.github.as_deref(),
            Some("https://github.com/sailscastshq/boring-stack")
        );
        assert!(!boring.external);
    }

    #[test]
    fn test_commercial_products_are_external() {
        let projects = load_projects();

        for project in &projects.commercial {
            assert!(project.external, "{} should be external", project.name);
            assert!(project.github.is_none());
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn test_open_source_links_are_internal() {
        for project in &catalog().open_source {
            assert!(project.link.starts_with('/') && project.link.ends_with('/'));
            assert!(!project.external);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = catalog();
        let mut names: Vec<_> = catalog
            .open_source
            .iter()
            .chain(&catalog.commercial)
            .map(|p| p.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), catalog.len());
    }
}
