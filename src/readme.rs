// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Assembles the ecosystem README from configuration and live data.
///
/// The document consists of:
/// - a title with optional landing image and description
/// - an optional quick links list
/// - one block per section, each listing its repositories
/// - a generated-at footer
use std::{fmt::Write as _, fs, path::Path};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    config::EcosystemConfig,
    error::{self, Error},
    fetch::RepositorySource,
    render::render_repo_section
};

/// File name the CLI writes the document to.
pub const OUTPUT_FILE: &str = "README.md";

const FOOTER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders the complete document for `config`.
///
/// Repositories are fetched one at a time, in declaration order, through
/// `source`. `generated_at` stamps the footer and any fallback records.
///
/// # Example
///
/// ```no_run
/// use chrono::Utc;
/// use ecosystem_readme::{GitHubFetcher, Settings, load_config, render_document};
///
/// # async fn example() -> Result<(), ecosystem_readme::Error> {
/// let config = load_config(std::path::Path::new("ecosystem.json"))?;
/// let fetcher = GitHubFetcher::new(&Settings::from_env()?)?;
/// let readme = render_document(&config, &fetcher, Utc::now()).await;
/// println!("{readme}");
/// # Ok(())
/// # }
/// ```
pub async fn render_document<S>(
    config: &EcosystemConfig,
    source: &S,
    generated_at: DateTime<Utc>
) -> String
where
    S: RepositorySource
{
    let mut readme = String::with_capacity(4096);

    let _ = write!(readme, "# {}\n\n", config.name);

    if let Some(image) = config.landing_image.as_deref().filter(|url| !url.is_empty()) {
        let _ = write!(readme, "![{}]({image})\n\n", config.name);
    }

    let _ = write!(readme, "{}\n\n", config.description);

    if !config.links.is_empty() {
        readme.push_str("## Quick Links\n\n");
        for (label, url) in &config.links {
            let _ = writeln!(readme, "- [{label}]({url})");
        }
        readme.push('\n');
    }

    for (section_name, section) in &config.sections {
        debug!(
            "Rendering section {section_name} with {} repositories",
            section.repos.len()
        );
        let _ = write!(readme, "## {section_name}\n\n");

        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            let _ = write!(readme, "{description}\n\n");
        }

        for identifier in &section.repos {
            let record = source.fetch(identifier, generated_at).await;
            readme.push_str(&render_repo_section(&record, &config.badges));
        }
    }

    readme.push_str("---\n\n");
    let _ = writeln!(
        readme,
        "*Generated automatically on {}*",
        generated_at.format(FOOTER_TIME_FORMAT)
    );

    readme
}

/// Writes the document to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns [`Error::OutputIo`] when the file cannot be written.
pub fn write_document(path: &Path, contents: &str) -> Result<(), Error> {
    info!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).map_err(|source| error::output_io_error(path, source))
}
