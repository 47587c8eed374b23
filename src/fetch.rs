// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Repository metadata fetching through the GitHub REST API.
///
/// Each repository costs up to three reads: the base metadata, the latest
/// release and, when issues are enabled, the open issue listing. Only the
/// base read decides whether live data is used; the other two are
/// best-effort enrichments.
use chrono::{DateTime, Utc};
use http::header::{ACCEPT, AUTHORIZATION};
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    error::Error,
    record::{MISSING_DESCRIPTION, RepoRecord},
    settings::Settings
};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Anything able to turn a repository identifier into a [`RepoRecord`].
///
/// Implementations never fail outward; failures are folded into the record.
#[allow(async_fn_in_trait)]
pub trait RepositorySource {
    /// Fetches one repository. `now` stamps fallback records.
    async fn fetch(&self, identifier: &str, now: DateTime<Utc>) -> RepoRecord;
}

/// [`RepositorySource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubFetcher {
    client: Octocrab
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name:             String,
    full_name:        String,
    #[serde(default)]
    description:      Option<String>,
    html_url:         String,
    #[serde(default)]
    stargazers_count: u64,
    updated_at:       String,
    #[serde(default)]
    license:          Option<LicensePayload>,
    #[serde(default)]
    has_issues:       bool
}

#[derive(Debug, Deserialize)]
struct LicensePayload {
    name: String
}

#[derive(Debug, Deserialize)]
struct ReleasePayload {
    tag_name: String
}

#[derive(Serialize)]
struct IssueQuery {
    state: &'static str
}

impl RepositoryPayload {
    fn into_record(
        self,
        latest_release: Option<String>,
        open_issues_count: Option<u64>
    ) -> RepoRecord {
        RepoRecord {
            name: self.name,
            full_name: self.full_name,
            description: self
                .description
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_owned()),
            html_url: self.html_url,
            stargazers_count: self.stargazers_count,
            updated_at: self.updated_at,
            license: self.license.map(|license| license.name),
            latest_release,
            open_issues_count
        }
    }
}

impl GitHubFetcher {
    /// Builds a client that authenticates every request with the configured
    /// token.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] when the API base is not a valid URI or the
    /// HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ecosystem_readme::{GitHubFetcher, Settings};
    ///
    /// # async fn example() -> Result<(), ecosystem_readme::Error> {
    /// let settings = Settings::from_env()?;
    /// let fetcher = GitHubFetcher::new(&settings)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let client = Octocrab::builder()
            .base_uri(settings.api_base.as_str())
            .map_err(|e| Error::service(format!("invalid GitHub API base URL: {e}")))?
            .add_header(AUTHORIZATION, format!("token {}", settings.token))
            .add_header(ACCEPT, GITHUB_MEDIA_TYPE.to_owned())
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| Error::service(format!("failed to initialize GitHub client: {e}")))?;

        Ok(Self {
            client
        })
    }

    async fn fetch_metadata(&self, identifier: &str) -> octocrab::Result<RepositoryPayload> {
        self.client
            .get(format!("/repos/{identifier}"), None::<&()>)
            .await
    }

    async fn fetch_latest_release(&self, identifier: &str) -> Option<String> {
        let route = format!("/repos/{identifier}/releases/latest");
        match self.client.get::<ReleasePayload, _, ()>(route, None).await {
            Ok(release) => Some(release.tag_name),
            Err(e) => {
                debug!("No latest release for {identifier}: {e}");
                None
            }
        }
    }

    async fn fetch_open_issue_count(&self, identifier: &str) -> Option<u64> {
        let route = format!("/repos/{identifier}/issues");
        let query = IssueQuery {
            state: "open"
        };
        match self
            .client
            .get::<Vec<serde_json::Value>, _, _>(route, Some(&query))
            .await
        {
            Ok(issues) => Some(issues.len() as u64),
            Err(e) => {
                debug!("Open issue lookup failed for {identifier}: {e}");
                None
            }
        }
    }
}

impl RepositorySource for GitHubFetcher {
    async fn fetch(&self, identifier: &str, now: DateTime<Utc>) -> RepoRecord {
        info!("Fetching data for {identifier}...");

        let metadata = match self.fetch_metadata(identifier).await {
            Ok(metadata) => metadata,
            Err(e) => {
                error!("Error fetching data for {identifier}: {e}");
                return RepoRecord::fallback(identifier, now);
            }
        };

        let latest_release = self.fetch_latest_release(identifier).await;
        let open_issues_count = if metadata.has_issues {
            self.fetch_open_issue_count(identifier).await
        } else {
            None
        };

        metadata.into_record(latest_release, open_issues_count)
    }
}
