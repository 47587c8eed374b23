//! Utilities for generating ecosystem README documents.
//!
//! The library loads an `ecosystem.json` description, fetches live metadata
//! for every listed repository from the GitHub REST API and renders a
//! Markdown document with badges and stats. Fetch failures never abort a run:
//! each repository degrades to a fallback record instead.

mod badge;
mod config;
mod error;
mod fetch;
mod readme;
mod record;
mod render;
mod settings;

pub use badge::{issue_color, render_badges, updated_token};
pub use config::{BadgeToggles, EcosystemConfig, SectionConfig, load_config, parse_config};
pub use error::{Error, io_error, output_io_error};
pub use fetch::{GitHubFetcher, RepositorySource};
pub use readme::{OUTPUT_FILE, render_document, write_document};
pub use record::{MISSING_DESCRIPTION, RepoRecord, UNAVAILABLE_DESCRIPTION, short_name};
pub use render::render_repo_section;
pub use settings::{API_URL_ENV, DEFAULT_API_URL, Settings, TOKEN_ENV};
