//! PubChem Scraper - Result-card resolution and field extraction.
//!
//! This crate turns exposure names into PubChem compound identifiers. For each
//! name it builds a search URL, drives a browser session to the result page,
//! resolves the best-match result card through a three-tier selector chain,
//! follows a substance card to its compound page at most once, and extracts
//! the CID and IUPAC name from the card text.
//!
//! # Features
//!
//! - Bounded element polling with a configurable timeout and poll interval
//! - Main / fallback / alternate-fallback selector chain
//! - Single-hop substance-to-compound redirect
//! - Extraction patterns compiled once and passed explicitly
//! - Exactly one record per exposure name, in input order
//!
//! # Example
//!
//! ```rust,ignore
//! use pubchem_scraper::scrape;
//!
//! let records = scrape(&exposure_names, Path::new("webdriver"), &constants, &settings).await?;
//! for record in records {
//!     println!("{} -> {} ({})", record.name, record.cid, record.iupac);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod card;
#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod extract;
pub mod orchestrator;
#[allow(missing_docs)]
pub mod resolver;
#[allow(missing_docs)]
pub mod url_builder;

// Re-export commonly used types
pub use card::{CardResolver, ResultCard, SUBSTANCE_MARKER};
pub use error::{Result, ScrapeError};
pub use extract::ExtractionRules;
pub use orchestrator::{scrape, Scraper};
pub use resolver::{find_element, WaitPolicy};
pub use url_builder::build_url;
