//! Per-area sidebar guides.
//!
//! Each guide is embedded literal configuration. Early guides (captain-vane
//! through inertia-sails) keep every group expanded; the newer hook guides
//! group pages by topic and may start some groups collapsed.

use crate::area::Area;
use crate::entry::{NavEntry, NavGroup};
use crate::error::ConfigurationError;

/// Build the sidebar for a documented area.
///
/// Deterministic and never empty.
#[must_use]
pub fn build_guide(area: Area) -> Vec<NavEntry> {
    match area {
        Area::CaptainVane => captain_vane(),
        Area::Guppy => guppy(),
        Area::Wish => wish(),
        Area::CreateSails => create_sails(),
        Area::InertiaSails => inertia_sails(),
        Area::Mail => mail(),
        Area::BoringStack => boring_stack(),
        Area::Content => content(),
        Area::SailsStash => sails_stash(),
        Area::SailsPay => sails_pay(),
        Area::SailsFlash => sails_flash(),
        Area::Clearance => clearance(),
        Area::SailsSqlite => sails_sqlite(),
        Area::SailsQuest => sails_quest(),
    }
}

/// Build the sidebar for an area given its section key.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownSection`] if no area has this key.
pub fn build_guide_by_id(id: &str) -> Result<Vec<NavEntry>, ConfigurationError> {
    let area: Area = id.parse()?;
    Ok(build_guide(area))
}

/// Group of pages under one area. `pages` are `(label, slug)` pairs.
fn section(area: Area, label: &str, pages: &[(&str, &str)]) -> NavGroup {
    let children = pages
        .iter()
        .map(|&(text, slug)| NavEntry::leaf(text, area.page(slug)))
        .collect();
    NavGroup::new(label, children)
}

fn captain_vane() -> Vec<NavEntry> {
    let area = Area::CaptainVane;
    vec![
        section(
            area,
            "Getting started",
            &[
                ("Introduction", ""),
                ("What is captain-vane?", "what-is-captain-vane"),
                ("Installation", "installation"),
            ],
        )
        .into(),
        section(area, "Basic usage", &[("Basic usage", "basic-usage")]).into(),
    ]
}

fn guppy() -> Vec<NavEntry> {
    let area = Area::Guppy;
    let changelogs = [
        ("v1.1.2", "https://glink.so/kelvin/guppy/changelogs/v1-1-2"),
        ("v1.1.1", "https://glink.so/kelvin/guppy/changelogs/guppy-v1-1-1"),
        ("v1.1.0", "https://glink.so/kelvin/guppy/changelogs/guppy-v1-1-0"),
        ("v1.0.1", "https://glink.so/kelvin/guppy/changelogs/guppy-v1-0-1"),
        ("v1.0.0", "https://glink.so/kelvin/guppy/changelogs/guppy-v1-0-0"),
        ("Changelogs", "https://glink.so/kelvin/guppy/changelogs"),
    ];

    vec![
        section(
            area,
            "Getting started",
            &[
                ("Introduction", ""),
                ("What is guppy?", "what-is-guppy"),
                ("Installation", "installation"),
                ("Activating guppy", "activating-guppy"),
                ("Deactivating guppy", "deactivating-guppy"),
            ],
        )
        .into(),
        section(area, "Basic usage", &[("Running code", "running-code")]).into(),
        NavGroup::new(
            "Changelogs",
            changelogs
                .iter()
                .map(|&(text, url)| NavEntry::leaf(text, url))
                .collect(),
        )
        .into(),
    ]
}

fn wish() -> Vec<NavEntry> {
    let area = Area::Wish;
    vec![
        section(
            area,
            "Getting started",
            &[
                ("Introduction", ""),
                ("What is Wish?", "what-is-wish"),
                ("Installation", "installation"),
            ],
        )
        .into(),
        section(
            area,
            "Basic usage",
            &[("GitHub OAuth", "github"), ("Google OAuth", "google")],
        )
        .into(),
    ]
}

fn create_sails() -> Vec<NavEntry> {
    let area = Area::CreateSails;
    vec![
        section(
            area,
            "Getting started",
            &[
                ("Introduction", ""),
                ("What is create-sails?", "what-is-create-sails"),
            ],
        )
        .into(),
        section(area, "Basic usage", &[("Basic usage", "basic-usage")]).into(),
    ]
}

fn inertia_sails() -> Vec<NavEntry> {
    let area = Area::InertiaSails;
    vec![
        section(
            area,
            "Getting started",
            &[
                ("Introduction", ""),
                ("What is inertia-sails?", "what-is-inertia-sails"),
                ("Installation", "installation"),
            ],
        )
        .into(),
        section(area, "Basic usage", &[("Basic usage", "basic-usage")]).into(),
    ]
}

fn mail() -> Vec<NavEntry> {
    let area = Area::Mail;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("Getting Started", "getting-started"),
                ("Configuration", "configuration"),
            ],
        )
        .into(),
        section(
            area,
            "Transports",
            &[
                ("SMTP", "smtp-transport"),
                ("Mailtrap", "mailtrap-transport"),
                ("Resend", "resend-transport"),
                ("Local Development", "local-development"),
            ],
        )
        .into(),
        section(
            area,
            "Writing Emails",
            &[("Template", "email-template"), ("Layout", "email-layout")],
        )
        .into(),
        section(area, "Sending Emails", &[("Send Helper", "send-helper")]).into(),
    ]
}

fn boring_stack() -> Vec<NavEntry> {
    let area = Area::BoringStack;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("Why the name", "why-the-name"),
                ("Who is it for", "who-is-it-for"),
                ("What's in the stack", "whats-in-the-stack"),
                ("Getting started", "getting-started"),
            ],
        )
        .into(),
        section(
            area,
            "The Basics",
            &[
                ("Routing", "routing"),
                ("Navigation", "navigation"),
                ("Pages", "pages"),
                ("Layouts", "layouts"),
                ("Redirects", "redirects"),
                ("Validation", "validation"),
                ("Flash messages", "flash-messages"),
            ],
        )
        .into(),
        section(
            area,
            "Data & Props",
            &[
                ("Sharing data", "sharing-data"),
                ("Deferred props", "deferred-props"),
                ("Merging props", "merging-props"),
            ],
        )
        .into(),
        section(
            area,
            "Guides",
            &[
                ("Authentication", "authentication"),
                ("Authorization", "authorization"),
                ("Database", "database"),
                ("Email", "email"),
                ("Session", "session"),
                ("File uploads", "file-uploads"),
            ],
        )
        .into(),
        section(
            area,
            "Templates",
            &[("Mellow", "mellow"), ("Ascent", "ascent")],
        )
        .into(),
        section(
            area,
            "Deploy",
            &[
                ("Render", "render"),
                ("Railway", "railway"),
                ("Coolify", "coolify"),
            ],
        )
        .into(),
        section(
            area,
            "Configuration",
            &[("Type checking JS files", "type-checking-js-files")],
        )
        .collapsed(true)
        .into(),
    ]
}

fn content() -> Vec<NavEntry> {
    let area = Area::Content;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("Motivation", "motivation"),
                ("Getting started", "getting-started"),
            ],
        )
        .into(),
        section(
            area,
            "The Basics",
            &[
                ("Content collections", "collections"),
                ("Querying collections", "querying-collections"),
                ("Configuration", "configuration"),
            ],
        )
        .into(),
    ]
}

fn sails_stash() -> Vec<NavEntry> {
    let area = Area::SailsStash;
    vec![
        section(area, "Introduction", &[("Getting started", "getting-started")]).into(),
        section(
            area,
            "Stores",
            &[
                ("Memory", "memory"),
                ("Redis", "redis"),
                ("Memcached", "memcached"),
            ],
        )
        .into(),
        section(
            area,
            "The Basics",
            &[
                ("Cache usage", "cache-usage"),
                ("Configuration", "configuration"),
            ],
        )
        .into(),
    ]
}

fn sails_pay() -> Vec<NavEntry> {
    let area = Area::SailsPay;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("Getting started", "getting-started"),
                ("Providers", "providers"),
            ],
        )
        .into(),
        section(
            area,
            "Payment Providers",
            &[
                ("Lemon Squeezy", "lemonsqueezy"),
                ("Flutterwave", "flutterwave"),
                ("Paga", "paga"),
                ("Paystack", "paystack"),
            ],
        )
        .into(),
        section(area, "Checkout", &[("Creating checkouts", "checkout")]).into(),
        section(
            area,
            "Subscriptions",
            &[("Retrieving subscriptions", "subscriptions")],
        )
        .into(),
    ]
}

fn sails_flash() -> Vec<NavEntry> {
    vec![
        section(
            Area::SailsFlash,
            "Introduction",
            &[("Getting started", "getting-started")],
        )
        .into(),
    ]
}

fn clearance() -> Vec<NavEntry> {
    vec![
        section(
            Area::Clearance,
            "Introduction",
            &[("Getting started", "getting-started"), ("Usage", "usage")],
        )
        .into(),
    ]
}

fn sails_sqlite() -> Vec<NavEntry> {
    let area = Area::SailsSqlite;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("Getting started", "getting-started"),
                ("Configuration", "configuration"),
            ],
        )
        .into(),
        section(
            area,
            "Usage",
            &[
                ("Model definitions", "model-definitions"),
                ("Advanced features", "advanced-features"),
                ("Performance optimization", "performance-optimization"),
            ],
        )
        .into(),
        section(
            area,
            "Production",
            &[("Deployment", "deployment"), ("Monitoring", "monitoring")],
        )
        .into(),
    ]
}

fn sails_quest() -> Vec<NavEntry> {
    let area = Area::SailsQuest;
    vec![
        section(
            area,
            "Introduction",
            &[
                ("What is job scheduling?", "introduction"),
                ("How Quest works", "how-it-works"),
                ("Getting started", "getting-started"),
                ("Configuration", "configuration"),
            ],
        )
        .into(),
        section(
            area,
            "Writing Jobs",
            &[
                ("Creating jobs", "creating-jobs"),
                ("Scheduling", "scheduling"),
                ("Job inputs", "job-inputs"),
            ],
        )
        .into(),
        section(
            area,
            "Managing Jobs",
            &[
                ("Job management", "job-management"),
                ("Events", "events"),
                ("Examples", "examples"),
            ],
        )
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::validate_entries;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_area_has_non_empty_guide() {
        for area in Area::ALL {
            assert!(!build_guide(area).is_empty(), "{area} guide is empty");
        }
    }

    #[test]
    fn test_every_childless_entry_has_link() {
        for area in Area::ALL {
            for entry in build_guide(area) {
                entry.for_each(&mut |e| {
                    if e.children().is_empty() {
                        assert!(e.link().is_some(), "{area}: '{}' has no link", e.label());
                    }
                });
            }
        }
    }

    #[test]
    fn test_every_guide_passes_validation() {
        for area in Area::ALL {
            let guide = build_guide(area);
            assert!(
                validate_entries(&guide).is_ok(),
                "{area}: {:?}",
                validate_entries(&guide)
            );
        }
    }

    #[test]
    fn test_internal_links_stay_inside_area() {
        for area in Area::ALL {
            let prefix = area.path_prefix();
            for entry in build_guide(area) {
                entry.for_each(&mut |e| {
                    if let Some(link) = e.link()
                        && link.starts_with('/')
                    {
                        assert!(link.starts_with(&prefix), "{area}: {link}");
                    }
                });
            }
        }
    }

    #[test]
    fn test_build_guide_is_deterministic() {
        for area in Area::ALL {
            assert_eq!(build_guide(area), build_guide(area));
        }
    }

    #[test]
    fn test_wish_getting_started() {
        let guide = build_guide(Area::Wish);

        let first = &guide[0];
        assert_eq!(first.label(), "Getting started");
        assert!(first.children().iter().any(|e| {
            e.link()
                .is_some_and(|l| l.ends_with("/wish/") || l.ends_with("/wish/what-is-wish"))
        }));
    }

    #[test]
    fn test_wish_basic_usage_links() {
        let guide = build_guide(Area::Wish);

        let links: Vec<_> = guide[1].children().iter().filter_map(NavEntry::link).collect();
        assert_eq!(links, ["/wish/github", "/wish/google"]);
    }

    #[test]
    fn test_boring_stack_configuration_starts_collapsed() {
        let guide = build_guide(Area::BoringStack);

        let collapsed: Vec<_> = guide
            .iter()
            .filter(|e| e.collapsed())
            .map(NavEntry::label)
            .collect();
        assert_eq!(collapsed, ["Configuration"]);
        assert!(guide.iter().all(NavEntry::collapsible));
    }

    #[test]
    fn test_mail_links_are_root_relative() {
        let guide = build_guide(Area::Mail);

        assert_eq!(
            guide[0].children()[0].link(),
            Some("/mail/getting-started")
        );
    }

    #[test]
    fn test_guppy_changelogs_are_external() {
        let guide = build_guide(Area::Guppy);

        let changelogs = guide.iter().find(|e| e.label() == "Changelogs").unwrap();
        assert_eq!(changelogs.children().len(), 6);
        assert!(
            changelogs
                .children()
                .iter()
                .all(|e| e.link().is_some_and(|l| l.starts_with("https://glink.so/")))
        );
    }

    #[test]
    fn test_build_guide_by_id() {
        assert_eq!(build_guide_by_id("sails-quest"), Ok(build_guide(Area::SailsQuest)));
    }

    #[test]
    fn test_build_guide_by_unknown_id() {
        assert_eq!(
            build_guide_by_id("sails-hook-nope"),
            Err(ConfigurationError::UnknownSection("sails-hook-nope".to_owned()))
        );
    }
}
