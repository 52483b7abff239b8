//! Site manifest assembly.
//!
//! Combines [`SiteConfig`], the navigation builders and the project catalog
//! into the configuration object handed to the documentation framework.
//! Every consistency check runs here so that mistakes abort configuration
//! loading instead of surfacing while pages render.

use docs_config::{
    EditLinkConfig, FooterConfig, HeadTag, SearchConfig, SiteConfig, SitemapConfig, SocialLink,
};
use docs_nav::{
    ConfigurationError, NavBarEntry, NavEntry, SidebarMap, build_nav_bar, count_entries,
    validate_entries,
};
use docs_projects::{ProjectCatalog, load_projects};
use serde::Serialize;

use crate::error::SiteError;

/// Configuration object consumed by the documentation framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    /// Site language tag.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Show last updated timestamps.
    pub last_updated: bool,
    /// Generate links without `.html` suffixes.
    pub clean_urls: bool,
    /// Extra head tags.
    pub head: Vec<HeadTag>,
    /// Theme settings, navigation included.
    pub theme_config: ThemeConfig,
    /// Data for the project grid; handed over separately.
    #[serde(skip)]
    projects: ProjectCatalog,
}

/// Theme settings section of the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Search settings.
    pub search: SearchConfig,
    /// Global top navigation.
    pub nav: Vec<NavBarEntry>,
    /// Sidebars keyed by path prefix.
    pub sidebar: SidebarMap,
    /// Sitemap settings.
    pub sitemap: SitemapConfig,
    /// "Edit this page" link.
    pub edit_link: EditLinkConfig,
    /// Social links.
    pub social_links: Vec<SocialLink>,
    /// Footer.
    pub footer: FooterConfig,
}

impl SiteManifest {
    /// Project lists for the project grid.
    #[must_use]
    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    /// Sidebar entries active for a page path.
    #[must_use]
    pub fn sidebar_for(&self, page_path: &str) -> Option<&[NavEntry]> {
        self.theme_config
            .sidebar
            .resolve(page_path)
            .map(|(_, entries)| entries)
    }

    /// Manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Project grid data as JSON (`{ "openSource": [...], "commercial": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn projects_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string(&self.projects)?)
    }
}

/// Build and check the site manifest.
///
/// Project data comes from `config.projects_source` when set, otherwise from
/// the embedded catalog.
///
/// # Errors
///
/// - [`SiteError::Config`] if the configuration is invalid
/// - [`SiteError::Navigation`] for unknown sidebar sections, duplicate or
///   ambiguous prefixes, malformed sidebar entries, or nav bar links no
///   sidebar covers
/// - [`SiteError::Projects`] if the project data file cannot be loaded
/// - [`SiteError::ProjectValidation`] if a project record is invalid
pub fn build_site(config: &SiteConfig) -> Result<SiteManifest, SiteError> {
    config.validate()?;

    let sidebar = build_sidebar(config)?;
    let nav = build_nav_bar();
    check_nav_coverage(&nav, &sidebar)?;

    let projects = match &config.projects_source {
        Some(path) => ProjectCatalog::load_from_path(path)?,
        None => load_projects(),
    };
    projects.validate()?;
    warn_uncovered_projects(&projects, &sidebar);

    tracing::info!(
        sidebars = sidebar.len(),
        nav_entries = nav.len(),
        projects = projects.len(),
        "Built site manifest"
    );

    Ok(SiteManifest {
        lang: config.lang.clone(),
        title: config.title.clone(),
        description: config.description.clone(),
        last_updated: config.last_updated,
        clean_urls: config.clean_urls,
        head: config.head.clone(),
        theme_config: ThemeConfig {
            search: config.search.clone(),
            nav,
            sidebar,
            sitemap: config.sitemap.clone(),
            edit_link: config.edit_link.clone(),
            social_links: config.social_links.clone(),
            footer: config.footer.clone(),
        },
        projects,
    })
}

/// Build the sidebar map and check every tree in it.
fn build_sidebar(config: &SiteConfig) -> Result<SidebarMap, ConfigurationError> {
    let sidebar = SidebarMap::from_sections(config.sidebar_sections())?;
    sidebar.check_unambiguous()?;

    for (prefix, entries) in sidebar.iter() {
        validate_entries(entries).map_err(|e| match e {
            ConfigurationError::InvalidEntry { location, reason } => {
                ConfigurationError::InvalidEntry {
                    location: format!("{prefix}{location}"),
                    reason,
                }
            }
            other => other,
        })?;
        tracing::debug!(prefix, entries = count_entries(entries), "Checked sidebar");
    }

    Ok(sidebar)
}

/// Every internal nav bar link other than the site root must land under a sidebar.
fn check_nav_coverage(
    nav: &[NavBarEntry],
    sidebar: &SidebarMap,
) -> Result<(), ConfigurationError> {
    for link in nav.iter().flat_map(NavBarEntry::links) {
        if !link.is_internal() || link.link == "/" {
            continue;
        }
        if sidebar.resolve(&link.link).is_none() {
            tracing::warn!(text = %link.text, link = %link.link, "Nav link has no sidebar");
            return Err(ConfigurationError::UncoveredNavLink {
                text: link.text.clone(),
                link: link.link.clone(),
            });
        }
    }
    Ok(())
}

fn warn_uncovered_projects(projects: &ProjectCatalog, sidebar: &SidebarMap) {
    for project in &projects.open_source {
        if project.link.starts_with('/') && sidebar.resolve(&project.link).is_none() {
            tracing::debug!(
                name = %project.name,
                link = %project.link,
                "Project page has no sidebar"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use docs_config::SidebarSection;
    use docs_nav::{Area, NavBarLink, build_guide};
    use pretty_assertions::assert_eq;

    use super::*;

    fn section(prefix: &str, key: &str) -> SidebarSection {
        SidebarSection {
            prefix: prefix.to_owned(),
            section: key.to_owned(),
        }
    }

    #[test]
    fn test_build_default_site() {
        let site = build_site(&SiteConfig::default()).unwrap();

        assert_eq!(site.title, "Sailscasts Docs");
        assert_eq!(site.theme_config.sidebar.len(), Area::ALL.len());
        assert_eq!(site.theme_config.nav.len(), 5);
        assert_eq!(site.projects(), &load_projects());
    }

    #[test]
    fn test_sidebar_for_page() {
        let site = build_site(&SiteConfig::default()).unwrap();

        assert_eq!(
            site.sidebar_for("/sails-pay/checkout"),
            Some(build_guide(Area::SailsPay).as_slice())
        );
        assert!(site.sidebar_for("/pellicule/").is_none());
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = SiteConfig::default();

        assert_eq!(build_site(&config).unwrap(), build_site(&config).unwrap());
    }

    #[test]
    fn test_unknown_section_fails_fast() {
        let mut config = SiteConfig::default();
        config.sidebar.push(section("/sails-auth/", "sails-auth"));

        let err = build_site(&config).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Navigation(ConfigurationError::UnknownSection(ref key)) if key == "sails-auth"
        ));
    }

    #[test]
    fn test_duplicate_prefix_fails_fast() {
        let mut config = SiteConfig::default();
        config.sidebar.push(section("/wish/", "guppy"));

        let err = build_site(&config).unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("duplicate sidebar prefix"));
    }

    #[test]
    fn test_ambiguous_prefix_fails_fast() {
        let mut config = SiteConfig::default();
        config.sidebar = vec![section("/wish/", "wish"), section("/wish/google/", "guppy")];

        let err = build_site(&config).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Navigation(ConfigurationError::AmbiguousPrefix { .. })
        ));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = SiteConfig::default();
        config.sitemap.hostname = String::new();

        assert!(matches!(build_site(&config), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_uncovered_nav_link_fails_fast() {
        let mut config = SiteConfig::default();
        config.sidebar = vec![section("/wish/", "wish")];

        let err = build_site(&config).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Navigation(ConfigurationError::UncoveredNavLink { ref link, .. })
                if link == "/boring-stack/"
        ));
    }

    #[test]
    fn test_nav_coverage_ignores_external_and_root_links() {
        let nav = vec![
            NavBarEntry::Link(NavBarLink::external("Blog", "https://blog.sailscasts.com")),
            NavBarEntry::Link(NavBarLink::external("Home", "/")),
        ];

        assert_eq!(check_nav_coverage(&nav, &SidebarMap::new()), Ok(()));
    }

    #[test]
    fn test_nav_coverage_accepts_covered_links() {
        let nav = vec![NavBarEntry::Link(NavBarLink::area("Sails Wish", Area::Wish))];
        let sidebar = SidebarMap::from_areas([Area::Wish]).unwrap();

        assert_eq!(check_nav_coverage(&nav, &sidebar), Ok(()));
    }

    #[test]
    fn test_projects_loaded_from_configured_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.yaml");
        std::fs::write(
            &path,
            "openSource:\n  - name: Sails Wish\n    description: OAuth for Sails\n    link: /wish/\n",
        )
        .unwrap();
        let mut config = SiteConfig::default();
        config.projects_source = Some(path);

        let site = build_site(&config).unwrap();

        assert_eq!(site.projects().len(), 1);
        assert_eq!(site.projects().open_source[0].name, "Sails Wish");
    }

    #[test]
    fn test_invalid_project_source_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"{ "openSource": [ { "name": "Nameless link" } ] }"#).unwrap();
        let mut config = SiteConfig::default();
        config.projects_source = Some(path);

        let err = build_site(&config).unwrap_err();

        assert!(matches!(err, SiteError::Projects(_)));
        assert!(err.to_string().contains("'description' is missing"));
    }

    #[test]
    fn test_missing_project_source_fails_fast() {
        let mut config = SiteConfig::default();
        config.projects_source = Some(PathBuf::from("/nonexistent/projects.yaml"));

        assert!(matches!(build_site(&config), Err(SiteError::Projects(_))));
    }

    #[test]
    fn test_manifest_json_shape() {
        let site = build_site(&SiteConfig::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&site.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["lang"], "en-US");
        assert_eq!(json["lastUpdated"], true);
        assert_eq!(json["cleanUrls"], true);
        assert_eq!(
            json["head"][0],
            serde_json::json!(["meta", { "content": "#fecb05", "name": "theme-color" }])
        );
        assert_eq!(json["themeConfig"]["search"]["provider"], "local");
        assert_eq!(json["themeConfig"]["nav"][1]["text"], "Open Source");
        assert_eq!(
            json["themeConfig"]["sidebar"]["/wish/"][0]["text"],
            "Getting started"
        );
        assert_eq!(
            json["themeConfig"]["editLink"]["text"],
            "Edit this page on GitHub"
        );
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "github");
        assert_eq!(
            json["themeConfig"]["sitemap"]["hostname"],
            "https://docs.sailscasts.com"
        );
        assert!(json.get("projects").is_none());
    }

    #[test]
    fn test_projects_json_shape() {
        let site = build_site(&SiteConfig::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&site.projects_json().unwrap()).unwrap();

        assert_eq!(json["openSource"][0]["name"], "Boring Stack");
        assert_eq!(json["commercial"][0]["external"], true);
    }
}
