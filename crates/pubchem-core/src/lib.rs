//! PubChem Core - Foundation crate for the PubChem scraper.
//!
//! This crate provides shared types, error handling and configuration
//! that all other scraper crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML runtime settings with XDG paths
//! - [`constants`] - YAML scrape constants (target URL, selectors, patterns, CSV headers)
//! - [`types`] - Shared newtypes and records (`ExposureName`, `ScrapedRecord`, `SelectorChain`)
//!
//! # Example
//!
//! ```rust
//! use pubchem_core::{Constants, Settings};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::default().with_env_overrides();
//! let constants = Constants::from_yaml_str("target:\n  name: pubchem\n")?;
//!
//! if !constants.is_valid() {
//!     println!("constants are incomplete");
//! }
//! println!("waiting up to {:?} per selector", settings.resolver.element_timeout());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{BrowserConfig, ResolverConfig, Settings};
pub use constants::{
    Constants, CsvConstants, CsvProperties, PatternConstants, TargetConstants,
    DEFAULT_CID_PATTERN, DEFAULT_IUPAC_PATTERN,
};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use types::{ExposureName, ScrapedRecord, SelectorChain, SelectorTier};
