//! Folio - browse, filter and inspect a book catalog from the terminal
//!
//! Main entry point: parses flags, sets up tracing, loads settings and the
//! catalog, then hands off to the subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use folio_core::settings::Settings;
use folio_core::CatalogStore;

mod browse;
mod catalog_cli;
mod settings_cli;

/// Catalog used when neither --catalog nor settings name one
const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.yaml");

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    about = "Browse, filter and inspect a book catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog file (.yaml, .yml or .json); defaults to the bundled sample
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Books per window (overrides settings)
    #[clap(long, global = true)]
    page_size: Option<NonZeroUsize>,

    /// Settings file (defaults to settings.yaml in the config directory)
    #[clap(long, global = true)]
    settings: Option<PathBuf>,

    /// Log level
    #[clap(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the catalog and print the first window(s) of matches
    Search(catalog_cli::SearchArgs),

    /// Show the detail view of a book
    Show {
        /// Book id (the preview marker)
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the author and genre filter options
    Options {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Interactive session: search, show more, open and close previews
    Browse,

    /// Show effective settings
    Config {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so command output on stdout stays clean.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Settings with command-line overrides applied
fn load_settings(cli: &Cli) -> Result<(Settings, PathBuf)> {
    let path = match &cli.settings {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    let mut settings = Settings::read_from_path(&path)?;
    if let Some(size) = cli.page_size {
        settings.page_size = size.get();
    }
    if let Some(catalog) = &cli.catalog {
        settings.catalog = Some(catalog.clone());
    }
    settings
        .validate()
        .with_context(|| format!("Invalid settings: {}", path.display()))?;

    Ok((settings, path))
}

fn load_catalog(settings: &Settings) -> Result<CatalogStore> {
    match &settings.catalog {
        Some(path) => CatalogStore::from_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display())),
        None => {
            debug!("Using bundled sample catalog");
            CatalogStore::from_yaml(SAMPLE_CATALOG).context("Bundled sample catalog is invalid")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let (settings, settings_path) = load_settings(&cli)?;

    if let Command::Config { json } = cli.command {
        return settings_cli::execute_config(&settings, &settings_path, json);
    }

    let store = load_catalog(&settings)?;
    let page_size = settings.page_size()?;

    match cli.command {
        Command::Search(args) => catalog_cli::execute_search(&store, page_size, &args),
        Command::Show { id, json } => catalog_cli::execute_show(&store, page_size, &id, json),
        Command::Options { json } => catalog_cli::execute_options(&store, json),
        Command::Browse => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            browse::BrowseSession::new(&store, page_size).run(stdin.lock(), &mut stdout)
        }
        Command::Config { .. } => unreachable!("handled before loading the catalog"),
    }
}
