// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Runtime settings sourced from the process environment.

use std::fmt;

use crate::error::Error;

/// Environment variable carrying the GitHub API credential.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Optional environment variable overriding the REST API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";
/// Public GitHub REST API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Credential and endpoint used by the fetcher.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Token sent as `Authorization: token <value>`.
    pub token:    String,
    /// REST API base without a trailing slash.
    pub api_base: String
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Settings {
    /// Builds settings for the public API with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token:    token.into(),
            api_base: DEFAULT_API_URL.to_owned()
        }
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `GITHUB_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>
    {
        let token = lookup(TOKEN_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                Error::validation(format!("{TOKEN_ENV} environment variable is required"))
            })?;

        let api_base = lookup(API_URL_ENV)
            .map(|value| value.trim().trim_end_matches('/').to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        Ok(Self {
            token,
            api_base
        })
    }
}
