//! Command-line shell for the PubChem scraper.
//!
//! Parses arguments, runs the pre-flight guards, scrapes every exposure name
//! of the input CSV in one browser session and writes the results.

pub mod args;
pub mod guard;

use anyhow::{Context, Result};
use args::Cli;
use pubchem_core::{ScrapedRecord, Settings};
use pubchem_csv::{read_rows, write_records};
use std::io::Write;
use tracing::info;

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load runtime settings, applying environment and command-line overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()))?,
        None => Settings::load().context("failed to load settings")?,
    };

    let mut settings = settings.with_env_overrides();
    if cli.headless {
        settings.browser.headless = true;
    }
    Ok(settings)
}

/// Run one scrape from parsed arguments.
pub async fn run(cli: Cli) -> Result<()> {
    info!("Starting PubChem scraper v{}", env!("CARGO_PKG_VERSION"));

    let constants = guard::guard_constants(&cli.constants)?;
    guard::guard_csv(&cli.input, &constants)?;
    guard::guard_webdriver(&cli.webdriver)?;

    let settings = load_settings(&cli)?;

    let in_headers = &constants.csv.in_file.headers;
    let rows = read_rows(&cli.input, in_headers)
        .with_context(|| format!("failed to read '{}'", cli.input.display()))?;
    let names = rows
        .exposure_names()
        .context("input contains an invalid exposure name")?;

    let records = pubchem_scraper::scrape(&names, &cli.webdriver, &constants, &settings)
        .await
        .context("scrape aborted")?;

    let found = records.iter().filter(|r| !r.is_empty()).count();
    info!(total = records.len(), found, "scrape finished");

    match &cli.out {
        Some(path) => {
            let key_header = constants
                .key_header()
                .context("constants define no input headers")?;
            write_records(path, &constants.csv.out_file.headers, key_header, &rows, &records)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }
        None => print_json_lines(std::io::stdout().lock(), &records)?,
    }

    Ok(())
}

/// Write one JSON object per record.
pub fn print_json_lines<W: Write>(mut out: W, records: &[ScrapedRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
