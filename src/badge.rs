// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Inline badge markup for repository blocks.
//!
//! Badges are Markdown image references served by shields.io. Fragments are
//! always emitted in the same order: license, version, stars, last updated,
//! issue count.

use crate::{config::BadgeToggles, record::RepoRecord};

const SHIELDS_BASE: &str = "https://img.shields.io";

/// Open issue count above which the badge turns red.
pub const ISSUES_RED_THRESHOLD: u64 = 10;
/// Open issue count above which the badge turns yellow.
pub const ISSUES_YELLOW_THRESHOLD: u64 = 5;

/// Renders the badge line for a repository.
///
/// Returns an empty string when no enabled badge has data to show.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ecosystem_readme::{BadgeToggles, RepoRecord, render_badges};
///
/// let record = RepoRecord::fallback("acme/widget", Utc::now());
/// assert!(render_badges(&record, &BadgeToggles::default()).is_empty());
/// ```
pub fn render_badges(record: &RepoRecord, toggles: &BadgeToggles) -> String {
    let mut badges = Vec::with_capacity(5);

    if toggles.license
        && let Some(license) = record.license.as_deref()
    {
        badges.push(license_badge(license));
    }

    if toggles.version
        && let Some(version) = record.latest_release.as_deref()
    {
        badges.push(version_badge(version));
    }

    if toggles.stars {
        badges.push(stars_badge(&record.full_name));
    }

    if toggles.last_updated {
        badges.push(updated_badge(&record.updated_at));
    }

    if toggles.issue_count
        && let Some(issues) = record.open_issues_count
    {
        badges.push(issues_badge(issues));
    }

    badges.join(" ")
}

/// Picks the issue badge color for an open issue count.
///
/// # Examples
///
/// ```
/// use ecosystem_readme::issue_color;
///
/// assert_eq!(issue_color(11), "red");
/// assert_eq!(issue_color(6), "yellow");
/// assert_eq!(issue_color(5), "green");
/// ```
pub fn issue_color(open_issues: u64) -> &'static str {
    if open_issues > ISSUES_RED_THRESHOLD {
        "red"
    } else if open_issues > ISSUES_YELLOW_THRESHOLD {
        "yellow"
    } else {
        "green"
    }
}

/// Converts an ISO-8601 timestamp into the `YYYY_MM_DD` badge token.
pub fn updated_token(timestamp: &str) -> String {
    let date = timestamp.get(..10).unwrap_or(timestamp);
    date.replace('-', "_")
}

fn license_badge(license: &str) -> String {
    let label = license.replace(' ', "_");
    format!("![License]({SHIELDS_BASE}/badge/license-{label}-blue.svg)")
}

fn version_badge(version: &str) -> String {
    format!("![Version]({SHIELDS_BASE}/badge/version-{version}-green.svg)")
}

fn stars_badge(full_name: &str) -> String {
    format!("![Stars]({SHIELDS_BASE}/github/stars/{full_name}.svg?style=social)")
}

fn updated_badge(updated_at: &str) -> String {
    let token = updated_token(updated_at);
    format!("![Updated]({SHIELDS_BASE}/badge/updated-{token}-lightgrey.svg)")
}

fn issues_badge(issues: u64) -> String {
    let color = issue_color(issues);
    format!("![Issues]({SHIELDS_BASE}/badge/issues-{issues}-{color}.svg)")
}
