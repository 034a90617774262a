//! Migra - one-shot content migration from the legacy static site into WordPress.

#![allow(dead_code)]

mod cli;
mod extract;
mod logger;
mod migrate;
mod registry;
mod rewrite;
mod store;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use rewrite::Rewriter;
use store::{ContentStore, WpSqliteStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // The content store is wired up once, before the batch runs.
    // Under --dry-run the database is never touched, not even opened.
    let store = if cli.dry_run {
        None
    } else {
        Some(WpSqliteStore::open(&cli.database)?)
    };

    let rewriter = Rewriter::new(&cli.site_url, &registry::ROUTES);
    let report = migrate::run(
        &registry::PAGES,
        &cli.source,
        &rewriter,
        store.as_ref().map(|s| s as &dyn ContentStore),
    );

    log!("migra"; "{} pagina(s) publicada(s), {} ignorada(s)", report.published, report.skipped);
    Ok(())
}
