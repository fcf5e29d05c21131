use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pubchem-scraper")]
#[command(about = "Look up PubChem compound IDs and IUPAC names for a CSV of exposure names")]
#[command(version)]
pub struct Cli {
    /// Input CSV containing the exposure names
    #[arg(long = "in", value_name = "CSV")]
    pub input: PathBuf,

    /// Scrape constants (target URL, selectors, patterns, CSV headers)
    #[arg(long, value_name = "YML", default_value = "constants.yml")]
    pub constants: PathBuf,

    /// Directory holding exactly one chromedriver or geckodriver executable
    #[arg(long, value_name = "DIR", default_value = "webdriver")]
    pub webdriver: PathBuf,

    /// Output CSV (prints JSON lines to stdout when omitted)
    #[arg(long, value_name = "CSV")]
    pub out: Option<PathBuf>,

    /// Runtime settings file (defaults to the platform config directory)
    #[arg(long, value_name = "TOML")]
    pub settings: Option<PathBuf>,

    /// Run the browser without a window
    #[arg(long)]
    pub headless: bool,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter for the requested verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info,pubchem=debug",
            1 => "debug",
            _ => "trace",
        }
    }
}
