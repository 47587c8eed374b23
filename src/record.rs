// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Normalized repository data consumed by the renderers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Description used when the metadata request fails.
pub const UNAVAILABLE_DESCRIPTION: &str = "Repository information unavailable";
/// Description used when the repository has no description set.
pub const MISSING_DESCRIPTION: &str = "No description available";

/// Normalized result of fetching one repository.
///
/// `name`, `html_url` and `description` are always populated, whether the
/// live fetch succeeded or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRecord {
    /// Short repository name.
    pub name:              String,
    /// `owner/name` identifier.
    pub full_name:         String,
    /// Human readable description.
    pub description:       String,
    /// Repository page URL.
    pub html_url:          String,
    /// Star count.
    pub stargazers_count:  u64,
    /// ISO-8601 timestamp of the last update.
    pub updated_at:        String,
    /// License display name.
    pub license:           Option<String>,
    /// Tag of the latest release.
    pub latest_release:    Option<String>,
    /// Number of open issues, when issues are enabled and the lookup worked.
    pub open_issues_count: Option<u64>
}

impl RepoRecord {
    /// Builds the synthetic record used when metadata cannot be fetched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use ecosystem_readme::{RepoRecord, UNAVAILABLE_DESCRIPTION};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
    /// let record = RepoRecord::fallback("acme/widget", now);
    /// assert_eq!(record.name, "widget");
    /// assert_eq!(record.description, UNAVAILABLE_DESCRIPTION);
    /// assert_eq!(record.stargazers_count, 0);
    /// ```
    pub fn fallback(identifier: &str, now: DateTime<Utc>) -> Self {
        Self {
            name:              short_name(identifier).to_owned(),
            full_name:         identifier.to_owned(),
            description:       UNAVAILABLE_DESCRIPTION.to_owned(),
            html_url:          format!("https://github.com/{identifier}"),
            stargazers_count:  0,
            updated_at:        now.to_rfc3339_opts(SecondsFormat::Secs, true),
            license:           None,
            latest_release:    None,
            open_issues_count: None
        }
    }
}

/// Returns the segment after the final `/` of an identifier.
pub fn short_name(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    proptest! {
        #[test]
        fn fallback_name_is_last_segment(owner in "[a-z0-9-]{1,16}", repo in "[a-z0-9._-]{1,24}") {
            let identifier = format!("{owner}/{repo}");
            let record = RepoRecord::fallback(&identifier, fixed_now());
            prop_assert_eq!(record.name, repo);
            prop_assert_eq!(record.description, UNAVAILABLE_DESCRIPTION);
            prop_assert_eq!(record.stargazers_count, 0);
        }
    }

    #[test]
    fn fallback_populates_urls_and_timestamp() {
        let record = RepoRecord::fallback("acme/widget", fixed_now());

        assert_eq!(record.full_name, "acme/widget");
        assert_eq!(record.html_url, "https://github.com/acme/widget");
        assert_eq!(record.updated_at, "2024-03-05T10:00:00Z");
        assert!(record.license.is_none());
        assert!(record.latest_release.is_none());
        assert!(record.open_issues_count.is_none());
    }

    #[test]
    fn short_name_without_slash_is_identity() {
        assert_eq!(short_name("widget"), "widget");
        assert_eq!(short_name("a/b/c"), "c");
    }
}
