//! Project descriptor and catalog types.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Project shown in the project grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Display name.
    pub name: String,
    /// One-sentence summary.
    pub description: String,
    /// Root-relative docs path or absolute URL.
    pub link: String,
    /// Source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Whether `link` leaves the docs site.
    #[serde(skip_serializing_if = "is_false")]
    pub external: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl ProjectDescriptor {
    /// Open-source project documented on this site.
    pub fn open_source(
        name: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        github: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            link: link.into(),
            github: Some(github.into()),
            external: false,
        }
    }

    /// Product hosted outside the docs site.
    pub fn commercial(
        name: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            link: link.into(),
            github: None,
            external: true,
        }
    }

    /// Check field contents, returning the offending field and reason.
    pub(crate) fn check(&self) -> Result<(), (&'static str, &'static str)> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("link", &self.link),
        ] {
            if value.trim().is_empty() {
                return Err((field, "cannot be empty"));
            }
        }
        if !is_internal_link(&self.link) && !is_http_url(&self.link) {
            return Err((
                "link",
                "must be a root-relative path or an http(s) URL",
            ));
        }
        if let Some(github) = &self.github
            && !github.starts_with("https://")
        {
            return Err(("github", "must be an https URL"));
        }
        Ok(())
    }
}

fn is_internal_link(link: &str) -> bool {
    link.starts_with('/')
}

fn is_http_url(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Projects rendered by the project grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCatalog {
    /// Open-source projects, in display order.
    #[serde(rename = "openSource")]
    pub open_source: Vec<ProjectDescriptor>,
    /// Commercial products, in display order.
    pub commercial: Vec<ProjectDescriptor>,
}

impl ProjectCatalog {
    /// Find a project by exact name in either list.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ProjectDescriptor> {
        self.open_source
            .iter()
            .chain(&self.commercial)
            .find(|project| project.name == name)
    }

    /// Total number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open_source.len() + self.commercial.len()
    }

    /// Whether both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open_source.is_empty() && self.commercial.is_empty()
    }

    /// Check every record against the descriptor shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first invalid record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (list, projects) in [
            (OPEN_SOURCE, &self.open_source),
            (COMMERCIAL, &self.commercial),
        ] {
            for (index, project) in projects.iter().enumerate() {
                project.check().map_err(|(field, reason)| ValidationError {
                    list,
                    index,
                    field,
                    reason,
                })?;
            }
        }
        Ok(())
    }
}

pub(crate) const OPEN_SOURCE: &str = "openSource";
pub(crate) const COMMERCIAL: &str = "commercial";

/// Catalog as read from an external source, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCatalog {
    #[serde(rename = "openSource", alias = "open_source")]
    open_source: Vec<RawProject>,
    commercial: Vec<RawProject>,
}

/// Project record with every field optional, so that missing fields are
/// reported by name instead of as a generic parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawProject {
    name: Option<String>,
    description: Option<String>,
    link: Option<String>,
    github: Option<String>,
    external: bool,
}

impl RawCatalog {
    /// Validate every record and build the catalog.
    pub(crate) fn into_catalog(self) -> Result<ProjectCatalog, ValidationError> {
        Ok(ProjectCatalog {
            open_source: convert_list(OPEN_SOURCE, self.open_source)?,
            commercial: convert_list(COMMERCIAL, self.commercial)?,
        })
    }
}

fn convert_list(
    list: &'static str,
    raw: Vec<RawProject>,
) -> Result<Vec<ProjectDescriptor>, ValidationError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, project)| {
            project
                .into_descriptor()
                .map_err(|(field, reason)| ValidationError {
                    list,
                    index,
                    field,
                    reason,
                })
        })
        .collect()
}

impl RawProject {
    fn into_descriptor(self) -> Result<ProjectDescriptor, (&'static str, &'static str)> {
        let require = |value: Option<String>, field| value.ok_or((field, "is missing"));

        let descriptor = ProjectDescriptor {
            name: require(self.name, "name")?,
            description: require(self.description, "description")?,
            link: require(self.link, "link")?,
            github: self.github,
            external: self.external,
        };
        descriptor.check()?;
        Ok(descriptor)
    }
}
