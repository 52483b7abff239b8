//! Site configuration for the Sailscasts docs.
//!
//! [`SiteConfig`] is the single, versioned description of the documentation
//! site: metadata, head tags, theme settings and which sidebar section is
//! active under which URL prefix. Its [`Default`] is the canonical Sailscasts
//! configuration, so a missing config file still yields a complete site.
//!
//! Configuration can be overridden with a `docs.toml` file, auto-discovered in
//! the current directory or its parents:
//!
//! ```toml
//! title = "Sailscasts Docs"
//!
//! [sitemap]
//! hostname = "https://docs.sailscasts.com"
//!
//! [[social_links]]
//! icon = "github"
//! link = "https://github.com/sailscastshq/docs.sailscasts.com"
//!
//! [[sidebar]]
//! prefix = "/wish/"
//! section = "wish"
//!
//! [projects]
//! source = "data/projects.yaml"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use docs_nav::Area;
use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docs.toml";

/// Configuration schema version understood by this crate.
pub const CURRENT_VERSION: u32 = 1;

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Site language tag.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description for search engines.
    pub description: String,
    /// Show the last updated timestamp on pages.
    pub last_updated: bool,
    /// Generate links without `.html` suffixes.
    pub clean_urls: bool,
    /// Extra tags injected into every page head.
    pub head: Vec<HeadTag>,
    /// Search configuration.
    pub search: SearchConfig,
    /// Sitemap configuration.
    pub sitemap: SitemapConfig,
    /// "Edit this page" link configuration.
    pub edit_link: EditLinkConfig,
    /// Social links shown in the top bar.
    pub social_links: Vec<SocialLink>,
    /// Footer configuration.
    pub footer: FooterConfig,
    /// Sidebar sections in declaration order.
    pub sidebar: Vec<SidebarSection>,
    /// Project data configuration (paths are relative strings from TOML).
    projects: ProjectsConfigRaw,

    /// Resolved project data file (set after loading).
    #[serde(skip)]
    pub projects_source: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tag injected into the page head, e.g. `<meta name="..." content="...">`.
///
/// Serializes as a `[tag, attributes]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadTag {
    /// Element name.
    pub tag: String,
    /// Element attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    /// Create a head tag from attribute pairs.
    pub fn new(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: attrs
                .iter()
                .map(|&(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}

impl Serialize for HeadTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.tag, &self.attrs).serialize(serializer)
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search provider.
    pub provider: SearchProvider,
}

/// Search provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Index built by the framework at build time.
    #[default]
    Local,
}

/// Sitemap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Public site URL.
    pub hostname: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            hostname: "https://docs.sailscasts.com".to_owned(),
        }
    }
}

/// "Edit this page" link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLinkConfig {
    /// URL pattern; `:path` is replaced with the page source path.
    pub pattern: String,
    /// Link text.
    pub text: String,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            pattern: "https://github.com/sailscastshq/docs.sailscasts.com/edit/develop/docs/:path"
                .to_owned(),
            text: "Edit this page on GitHub".to_owned(),
        }
    }
}

/// Social link shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon to render.
    pub icon: SocialIcon,
    /// Target URL.
    pub link: String,
}

/// Built-in social icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// GitHub mark.
    Github,
    /// Twitter/X bird.
    Twitter,
    /// Discord logo.
    Discord,
    /// YouTube logo.
    Youtube,
}

/// Footer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer message.
    pub message: String,
    /// Copyright line.
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            message: "All open source projects are released under the MIT License.".to_owned(),
            copyright: "Copyright © 2022-present The Sailscasts Company".to_owned(),
        }
    }
}

/// Sidebar section bound to a URL path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidebarSection {
    /// URL path prefix (e.g. "/wish/").
    pub prefix: String,
    /// Section key naming the guide to show (e.g. "wish").
    pub section: String,
}

impl From<Area> for SidebarSection {
    fn from(area: Area) -> Self {
        Self {
            prefix: area.path_prefix(),
            section: area.id().to_owned(),
        }
    }
}

/// Raw project data configuration as parsed from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ProjectsConfigRaw {
    source: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            lang: "en-US".to_owned(),
            title: "Sailscasts Docs".to_owned(),
            description: "Docs on everything we are working on at Sailscasts".to_owned(),
            last_updated: true,
            clean_urls: true,
            head: default_head(),
            search: SearchConfig::default(),
            sitemap: SitemapConfig::default(),
            edit_link: EditLinkConfig::default(),
            social_links: default_social_links(),
            footer: FooterConfig::default(),
            sidebar: Area::ALL.into_iter().map(SidebarSection::from).collect(),
            projects: ProjectsConfigRaw::default(),
            projects_source: None,
            config_path: None,
        }
    }
}

fn default_head() -> Vec<HeadTag> {
    vec![
        HeadTag::new("meta", &[("name", "theme-color"), ("content", "#fecb05")]),
        HeadTag::new("meta", &[("name", "og:type"), ("content", "website")]),
        HeadTag::new("meta", &[("name", "og:locale"), ("content", "en")]),
        HeadTag::new("meta", &[("name", "og:site_name"), ("content", "Sailscasts Docs")]),
        HeadTag::new(
            "meta",
            &[("name", "og:url"), ("content", "https://docs.sailscasts.com")],
        ),
        HeadTag::new(
            "meta",
            &[
                ("property", "twitter:url"),
                ("content", "https://docs.sailscasts.com"),
            ],
        ),
        HeadTag::new(
            "meta",
            &[("property", "twitter:creator"), ("content", "@Dominus_Kelvin")],
        ),
        HeadTag::new(
            "meta",
            &[("property", "twitter:card"), ("content", "summary_large_image")],
        ),
        HeadTag::new(
            "meta",
            &[
                ("property", "og:image"),
                ("content", "https://docs.sailscasts.com/social.png"),
            ],
        ),
        HeadTag::new(
            "script",
            &[
                ("src", "https://tinylytics.app/embed/vL3m1tsfEzLruHrKLMHB.js"),
                ("defer", ""),
            ],
        ),
        HeadTag::new(
            "link",
            &[("rel", "icon"), ("href", "/favicon.png"), ("type", "image/png")],
        ),
    ]
}

fn default_social_links() -> Vec<SocialLink> {
    [
        (
            SocialIcon::Github,
            "https://github.com/sailscastshq/docs.sailscasts.com",
        ),
        (SocialIcon::Twitter, "https://twitter.com/sailscastshq"),
        (SocialIcon::Discord, "https://sailscasts.com/chat"),
        (SocialIcon::Youtube, "https://youtube.com/@sailscasts"),
    ]
    .into_iter()
    .map(|(icon, link)| SocialLink {
        icon,
        link: link.to_owned(),
    })
    .collect()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docs.toml` in current directory and parents,
    /// falling back to the canonical defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from TOML content.
    ///
    /// Relative paths stay relative; use [`SiteConfig::load`] to resolve them
    /// against the config file location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::Validation` on invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve_paths(Path::new(""));
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded site configuration");
        Ok(config)
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.projects_source = self
            .projects
            .source
            .as_deref()
            .map(|source| config_dir.join(source));
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading. Sidebar section keys are checked
    /// when the sidebar map is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CURRENT_VERSION {
            return Err(ConfigError::Validation(format!(
                "unsupported config version {} (expected {CURRENT_VERSION})",
                self.version
            )));
        }
        require_non_empty(&self.lang, "lang")?;
        require_non_empty(&self.title, "title")?;
        self.validate_head()?;
        self.validate_links()?;
        self.validate_sidebar()?;
        Ok(())
    }

    fn validate_head(&self) -> Result<(), ConfigError> {
        for (i, tag) in self.head.iter().enumerate() {
            require_non_empty(&tag.tag, &format!("head[{i}].tag"))?;
        }
        Ok(())
    }

    fn validate_links(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.sitemap.hostname, "sitemap.hostname")?;
        require_http_url(&self.sitemap.hostname, "sitemap.hostname")?;

        require_http_url(&self.edit_link.pattern, "edit_link.pattern")?;
        if !self.edit_link.pattern.contains(":path") {
            return Err(ConfigError::Validation(
                "edit_link.pattern must contain :path".to_owned(),
            ));
        }
        require_non_empty(&self.edit_link.text, "edit_link.text")?;

        for (i, social) in self.social_links.iter().enumerate() {
            require_http_url(&social.link, &format!("social_links[{i}].link"))?;
        }
        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, section) in self.sidebar.iter().enumerate() {
            require_non_empty(&section.prefix, &format!("sidebar[{i}].prefix"))?;
            require_non_empty(&section.section, &format!("sidebar[{i}].section"))?;
            if !seen.insert(section.prefix.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate sidebar prefix '{}' at sidebar[{i}]",
                    section.prefix
                )));
            }
        }
        Ok(())
    }

    /// Sidebar sections as `(prefix, section key)` pairs.
    pub fn sidebar_sections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sidebar
            .iter()
            .map(|s| (s.prefix.as_str(), s.section.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.lang, "en-US");
        assert_eq!(config.title, "Sailscasts Docs");
        assert!(config.last_updated);
        assert!(config.clean_urls);
        assert_eq!(config.head.len(), 11);
        assert_eq!(config.search.provider, SearchProvider::Local);
        assert_eq!(config.sitemap.hostname, "https://docs.sailscasts.com");
        assert_eq!(config.social_links.len(), 4);
        assert_eq!(config.sidebar.len(), Area::ALL.len());
        assert!(config.projects_source.is_none());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_sidebar_follows_area_order() {
        let config = SiteConfig::default();

        let first: Vec<_> = config.sidebar_sections().take(3).collect();
        assert_eq!(
            first,
            [
                ("/captain-vane/", "captain-vane"),
                ("/guppy/", "guppy"),
                ("/wish/", "wish")
            ]
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r##"
title = "Sails Docs"
last_updated = false

[sitemap]
hostname = "https://docs.example.com"

[[social_links]]
icon = "discord"
link = "https://discord.com/invite/gbJZuNm"

[[sidebar]]
prefix = "/wish/"
section = "wish"

[[head]]
tag = "meta"
attrs = { name = "theme-color", content = "#000000" }
"##;
        let config = SiteConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.title, "Sails Docs");
        assert!(!config.last_updated);
        assert_eq!(config.sitemap.hostname, "https://docs.example.com");
        assert_eq!(
            config.social_links,
            vec![SocialLink {
                icon: SocialIcon::Discord,
                link: "https://discord.com/invite/gbJZuNm".to_owned(),
            }]
        );
        assert_eq!(config.sidebar_sections().collect::<Vec<_>>(), [("/wish/", "wish")]);
        assert_eq!(
            config.head,
            vec![HeadTag::new(
                "meta",
                &[("name", "theme-color"), ("content", "#000000")]
            )]
        );
        // Untouched sections keep canonical values
        assert_eq!(config.footer, FooterConfig::default());
    }

    #[test]
    fn test_parse_unknown_social_icon_fails() {
        let toml = r#"
[[social_links]]
icon = "myspace"
link = "https://myspace.com/sailscasts"
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_unknown_search_provider_fails() {
        let toml = r#"
[search]
provider = "algolia"
"#;
        assert!(matches!(
            SiteConfig::from_toml_str(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_head_tag_serializes_as_pair() {
        let tag = HeadTag::new("link", &[("rel", "icon"), ("href", "/favicon.png")]);

        let json = serde_json::to_value(&tag).unwrap();

        assert_eq!(
            json,
            serde_json::json!(["link", { "href": "/favicon.png", "rel": "icon" }])
        );
    }

    #[test]
    fn test_social_icon_serializes_lowercase() {
        let json = serde_json::to_value(SocialIcon::Youtube).unwrap();
        assert_eq!(json, "youtube");
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = SiteConfig::load(Some(Path::new("/nonexistent/docs.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_resolves_projects_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[projects]\nsource = \"data/projects.yaml\"\n").unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();

        assert_eq!(
            config.projects_source,
            Some(dir.path().join("data/projects.yaml"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = \"\"\n").unwrap();

        let err = SiteConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guides");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = SiteConfig::discover_config(&nested);

        assert_eq!(found, Some(dir.path().join(CONFIG_FILENAME)));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &SiteConfig, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_unsupported_version() {
        let config = SiteConfig {
            version: 2,
            ..SiteConfig::default()
        };
        assert_validation_error(&config, &["version 2"]);
    }

    #[test]
    fn test_validate_title_empty() {
        let config = SiteConfig {
            title: "  ".to_owned(),
            ..SiteConfig::default()
        };
        assert_validation_error(&config, &["title", "empty"]);
    }

    #[test]
    fn test_validate_hostname_invalid_scheme() {
        let mut config = SiteConfig::default();
        config.sitemap.hostname = "docs.sailscasts.com".to_owned();
        assert_validation_error(&config, &["sitemap.hostname", "http"]);
    }

    #[test]
    fn test_validate_edit_link_requires_path_placeholder() {
        let mut config = SiteConfig::default();
        config.edit_link.pattern = "https://github.com/sailscastshq/docs.sailscasts.com".to_owned();
        assert_validation_error(&config, &["edit_link.pattern", ":path"]);
    }

    #[test]
    fn test_validate_social_link_invalid() {
        let mut config = SiteConfig::default();
        config.social_links[2].link = "sailscasts.com/chat".to_owned();
        assert_validation_error(&config, &["social_links[2].link"]);
    }

    #[test]
    fn test_validate_empty_head_tag() {
        let mut config = SiteConfig::default();
        config.head.push(HeadTag::new("", &[]));
        assert_validation_error(&config, &["head[11].tag"]);
    }

    #[test]
    fn test_validate_empty_sidebar_section() {
        let mut config = SiteConfig::default();
        config.sidebar[0].section = String::new();
        assert_validation_error(&config, &["sidebar[0].section"]);
    }

    #[test]
    fn test_validate_duplicate_sidebar_prefix() {
        let mut config = SiteConfig::default();
        config.sidebar.push(SidebarSection {
            prefix: "/wish/".to_owned(),
            section: "guppy".to_owned(),
        });
        assert_validation_error(&config, &["duplicate sidebar prefix", "/wish/"]);
    }

    #[test]
    fn test_parse_duplicate_sidebar_prefix_fails() {
        let toml = r#"
[[sidebar]]
prefix = "/wish/"
section = "wish"

[[sidebar]]
prefix = "/wish/"
section = "guppy"
"#;
        let err = SiteConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("sidebar[1]"));
    }
}
