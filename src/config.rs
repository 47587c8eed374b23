// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing an ecosystem README.
//!
//! The types mirror the structure of `ecosystem.json`. Mappings keep their
//! declaration order so sections, repositories and quick links are rendered
//! exactly as the author listed them.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Root configuration document describing the rendered ecosystem.
///
/// # Examples
///
/// ```
/// use ecosystem_readme::parse_config;
///
/// let json = r#"{
///     "name": "Demo",
///     "description": "Desc",
///     "sections": { "Tools": { "repos": ["acme/widget"] } }
/// }"#;
/// let config = parse_config(json).expect("valid configuration");
/// assert_eq!(config.sections["Tools"].repos, vec!["acme/widget"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EcosystemConfig {
    /// Ecosystem name used for the top-level heading.
    pub name:          String,
    /// Introductory paragraph rendered below the heading.
    pub description:   String,
    /// Template label; carried for documentation only.
    #[serde(default)]
    pub template:      Option<String>,
    /// Optional banner image URL rendered above the description.
    #[serde(default)]
    pub landing_image: Option<String>,
    /// Quick links rendered as a bullet list, in declaration order.
    #[serde(default)]
    pub links:         IndexMap<String, String>,
    /// Badge kinds enabled for every repository block.
    #[serde(default)]
    pub badges:        BadgeToggles,
    /// Sections in declaration order.
    pub sections:      IndexMap<String, SectionConfig>
}

/// A named group of repositories sharing a heading.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Optional paragraph rendered below the section heading.
    #[serde(default)]
    pub description: Option<String>,
    /// Repository identifiers in `owner/name` form.
    #[serde(default)]
    pub repos:       Vec<String>
}

/// Enable flags for each badge kind. Unlisted kinds stay disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BadgeToggles {
    /// License badge.
    #[serde(default)]
    pub license:      bool,
    /// Latest release badge.
    #[serde(default)]
    pub version:      bool,
    /// Star badge and the stats line below it.
    #[serde(default)]
    pub stars:        bool,
    /// Last updated badge.
    #[serde(default)]
    pub last_updated: bool,
    /// Open issue count badge.
    #[serde(default)]
    pub issue_count:  bool
}

impl BadgeToggles {
    /// Returns toggles with every badge kind enabled.
    pub fn all() -> Self {
        Self {
            license:      true,
            version:      true,
            stars:        true,
            last_updated: true,
            issue_count:  true
        }
    }
}

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`] when
/// it is not a valid configuration document and [`Error::Validation`] when
/// the ecosystem name is blank.
pub fn load_config(path: &Path) -> Result<EcosystemConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses and validates a configuration document held in memory.
///
/// # Errors
///
/// See [`load_config`].
pub fn parse_config(contents: &str) -> Result<EcosystemConfig, Error> {
    let config: EcosystemConfig = serde_json::from_str(contents)?;

    if config.name.trim().is_empty() {
        return Err(Error::validation("configuration name must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const FULL: &str = r#"{
        "name": "Acme Tools",
        "description": "Everything Acme ships.",
        "template": "ecosystem",
        "landing_image": "https://example.com/banner.png",
        "links": { "Docs": "https://docs.acme.dev", "Chat": "https://chat.acme.dev" },
        "badges": { "license": true, "stars": true, "issue_count": false },
        "sections": {
            "Zeta": { "description": "Last alphabetically", "repos": ["acme/zeta"] },
            "Alpha": { "repos": ["acme/alpha", "acme/beta"] }
        }
    }"#;

    #[test]
    fn parses_full_document() {
        let config = parse_config(FULL).expect("expected config to parse");

        assert_eq!(config.name, "Acme Tools");
        assert_eq!(config.template.as_deref(), Some("ecosystem"));
        assert_eq!(
            config.landing_image.as_deref(),
            Some("https://example.com/banner.png")
        );
        assert!(config.badges.license);
        assert!(config.badges.stars);
        assert!(!config.badges.version);
        assert!(!config.badges.last_updated);
        assert!(!config.badges.issue_count);
    }

    #[test]
    fn preserves_section_and_link_order() {
        let config = parse_config(FULL).expect("expected config to parse");

        let sections: Vec<&str> = config.sections.keys().map(String::as_str).collect();
        assert_eq!(sections, vec!["Zeta", "Alpha"]);

        let links: Vec<&str> = config.links.keys().map(String::as_str).collect();
        assert_eq!(links, vec!["Docs", "Chat"]);

        assert_eq!(config.sections["Alpha"].repos, vec!["acme/alpha", "acme/beta"]);
        assert!(config.sections["Alpha"].description.is_none());
    }

    #[test]
    fn optional_keys_default() {
        let config = parse_config(r#"{"name":"Demo","description":"Desc","sections":{}}"#)
            .expect("expected config to parse");

        assert!(config.links.is_empty());
        assert!(config.landing_image.is_none());
        assert_eq!(config.badges, BadgeToggles::default());
    }

    #[test]
    fn section_without_repos_is_empty() {
        let config =
            parse_config(r#"{"name":"Demo","description":"Desc","sections":{"Empty":{}}}"#)
                .expect("expected config to parse");
        assert!(config.sections["Empty"].repos.is_empty());
    }

    #[test]
    fn missing_sections_is_a_parse_error() {
        let error = parse_config(r#"{"name":"Demo","description":"Desc"}"#)
            .expect_err("expected missing sections to fail");
        assert!(matches!(error, Error::Parse { .. }));
        assert!(error.to_string().contains("sections"));
    }

    #[test]
    fn missing_description_is_a_parse_error() {
        let error = parse_config(r#"{"name":"Demo","sections":{}}"#)
            .expect_err("expected missing description to fail");
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let error = parse_config(r#"{"name":"  ","description":"Desc","sections":{}}"#)
            .expect_err("expected blank name to fail");
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn load_config_reads_from_disk() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("ecosystem.json");
        fs::write(&path, FULL).expect("failed to write config");

        let config = load_config(&path).expect("expected config to load");
        assert_eq!(config.sections.len(), 2);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("absent.json");

        let error = load_config(&path).expect_err("expected read failure");
        match error {
            Error::Io {
                path: stored, ..
            } => assert_eq!(stored, path),
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn all_toggles_enable_every_kind() {
        let toggles = BadgeToggles::all();
        assert!(toggles.license && toggles.version && toggles.stars);
        assert!(toggles.last_updated && toggles.issue_count);
    }
}
