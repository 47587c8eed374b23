// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Per-repository Markdown blocks.
use std::fmt::Write as _;

use crate::{badge::render_badges, config::BadgeToggles, record::RepoRecord};

/// Renders the Markdown block for one repository.
///
/// The block holds a linked heading, the description, the badge line when
/// any badge rendered, and a stats line when the stars badge is enabled.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ecosystem_readme::{BadgeToggles, RepoRecord, render_repo_section};
///
/// let record = RepoRecord::fallback("acme/widget", Utc::now());
/// let block = render_repo_section(&record, &BadgeToggles::default());
/// assert!(block.starts_with("### [widget](https://github.com/acme/widget)\n"));
/// ```
pub fn render_repo_section(record: &RepoRecord, toggles: &BadgeToggles) -> String {
    let mut section = String::with_capacity(256);

    let _ = writeln!(section, "### [{}]({})", record.name, record.html_url);
    let _ = write!(section, "{}\n\n", record.description);

    let badges = render_badges(record, toggles);
    if !badges.is_empty() {
        let _ = write!(section, "{badges}\n\n");
    }

    if toggles.stars {
        let _ = write!(section, "⭐ {} stars", record.stargazers_count);
        if let Some(version) = record.latest_release.as_deref() {
            let _ = write!(section, " • 📦 Latest: {version}");
        }
        section.push_str("\n\n");
    }

    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RepoRecord {
        RepoRecord {
            name:              "widget".to_owned(),
            full_name:         "acme/widget".to_owned(),
            description:       "A widget".to_owned(),
            html_url:          "https://github.com/acme/widget".to_owned(),
            stargazers_count:  42,
            updated_at:        "2024-03-05T10:00:00Z".to_owned(),
            license:           None,
            latest_release:    None,
            open_issues_count: None
        }
    }

    #[test]
    fn plain_block_has_heading_and_description_only() {
        let block = render_repo_section(&sample_record(), &BadgeToggles::default());
        assert_eq!(
            block,
            "### [widget](https://github.com/acme/widget)\nA widget\n\n"
        );
    }

    #[test]
    fn stars_toggle_adds_badge_and_stats() {
        let toggles = BadgeToggles {
            stars: true,
            ..BadgeToggles::default()
        };
        let block = render_repo_section(&sample_record(), &toggles);

        assert_eq!(
            block,
            "### [widget](https://github.com/acme/widget)\nA widget\n\n\
             ![Stars](https://img.shields.io/github/stars/acme/widget.svg?style=social)\n\n\
             ⭐ 42 stars\n\n"
        );
    }

    #[test]
    fn stats_line_mentions_latest_release() {
        let mut record = sample_record();
        record.latest_release = Some("v2.0.0".to_owned());
        let toggles = BadgeToggles {
            stars: true,
            ..BadgeToggles::default()
        };

        let block = render_repo_section(&record, &toggles);
        assert!(block.contains("⭐ 42 stars • 📦 Latest: v2.0.0\n\n"));
    }

    #[test]
    fn badges_without_stars_skip_stats_line() {
        let toggles = BadgeToggles {
            last_updated: true,
            ..BadgeToggles::default()
        };
        let block = render_repo_section(&sample_record(), &toggles);

        assert!(block.contains("updated-2024_03_05-lightgrey"));
        assert!(!block.contains("⭐"));
        assert!(block.ends_with(".svg)\n\n"));
    }
}
