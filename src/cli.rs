//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Migrate legacy static pages into the WordPress database
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Directory containing the legacy HTML pages
    #[arg(short, long, default_value = "sowads.com", value_hint = clap::ValueHint::DirPath)]
    pub source: PathBuf,

    /// Canonical base URL of the new deployment
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: String,

    /// Path to the WordPress SQLite database
    #[arg(
        short,
        long,
        default_value = "wp-content/database/.ht.sqlite",
        value_hint = clap::ValueHint::FilePath
    )]
    pub database: PathBuf,

    /// Extract and rewrite only; never open or touch the database
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(long)]
    pub verbose: bool,
}
