//! Command-line interface for the ecosystem README generator.
//!
//! The binary takes the path to an `ecosystem.json` file, reads the GitHub
//! token from the environment and writes `README.md` into the working
//! directory.

use std::{
    path::{Path, PathBuf},
    process
};

use chrono::Utc;
use clap::{Parser, error::ErrorKind};
use ecosystem_readme::{
    EcosystemConfig, Error, GitHubFetcher, OUTPUT_FILE, Settings, load_config, render_document,
    write_document
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render an ecosystem README from live GitHub repository metadata.
#[derive(Debug, Parser)]
#[command(name = "ecosystem-readme", version)]
struct Cli {
    /// Path to the ecosystem JSON configuration.
    #[arg(value_name = "ECOSYSTEM_JSON")]
    config: PathBuf
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = error.print();
                process::exit(0);
            }
            _ => {
                println!("{}", usage());
                process::exit(1);
            }
        }
    };

    if let Err(message) = run(&cli) {
        eprintln!("{message}");
        process::exit(1);
    }

    println!("{OUTPUT_FILE} generated successfully!");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn usage() -> String {
    format!("Usage: {} <ecosystem.json>", env!("CARGO_PKG_NAME"))
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Returns the user-facing message for missing credentials, configuration
/// loading failures and output write failures.
fn run(cli: &Cli) -> Result<(), String> {
    let settings = Settings::from_env().map_err(|error| general_failure(&error))?;
    let config =
        load_config(&cli.config).map_err(|error| load_failure(&cli.config, &error))?;

    generate(&config, &settings, Path::new(OUTPUT_FILE)).map_err(|error| general_failure(&error))
}

fn general_failure(error: &Error) -> String {
    format!("Error: {}", error.to_display_string())
}

fn load_failure(config_path: &Path, error: &Error) -> String {
    let cause = match error {
        Error::Io {
            source, ..
        } => source.to_string(),
        Error::Parse {
            source
        } => source.to_string(),
        other => other.to_display_string()
    };
    format!("Error loading {}: {cause}", config_path.display())
}

fn generate(config: &EcosystemConfig, settings: &Settings, output: &Path) -> Result<(), Error> {
    info!("Generating README for {}...", config.name);
    if let Some(template) = config.template.as_deref() {
        info!("Using template {template}");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::service(format!("failed to start runtime: {e}")))?;

    let readme = runtime.block_on(async {
        let fetcher = GitHubFetcher::new(settings)?;
        Ok::<_, Error>(render_document(config, &fetcher, Utc::now()).await)
    })?;

    write_document(output, &readme)
}
