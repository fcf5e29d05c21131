//! Shared types used across the PubChem scraper.
//!
//! This module defines the newtypes and records that flow between the
//! CSV reader, the scraper core and the output writers.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for an exposure name used to query the chemical database.
///
/// Exposure names must contain at least one non-whitespace character.
/// The original spelling is kept verbatim, including inner whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExposureName(String);

impl ExposureName {
    /// Create a new `ExposureName` from a string.
    ///
    /// # Errors
    /// Returns error if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "exposure name cannot be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExposureName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExposureName> for String {
    fn from(name: ExposureName) -> Self {
        name.0
    }
}

impl fmt::Display for ExposureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scraped result per exposure name.
///
/// `cid` and `iupac` are empty strings when the value could not be found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRecord {
    /// Original exposure name, stamped by the orchestrator
    pub name: String,
    /// PubChem compound identifier
    pub cid: String,
    /// IUPAC name of the compound
    pub iupac: String,
}

impl ScrapedRecord {
    /// Whether neither field could be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cid.is_empty() && self.iupac.is_empty()
    }
}

/// Position of a selector inside a [`SelectorChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorTier {
    /// The precise "best match" card
    Main,
    /// First, looser page region
    Fallback,
    /// Second, loosest page region
    AltFallback,
}

impl SelectorTier {
    /// Short label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Fallback => "fallback",
            Self::AltFallback => "alt-fallback",
        }
    }
}

impl fmt::Display for SelectorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered triple of CSS selectors locating the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorChain {
    /// Selector for the "best match" card
    pub main: String,
    /// First fallback selector
    pub fallback: String,
    /// Second fallback selector
    pub alternate_fallback: String,
}

impl SelectorChain {
    /// Selectors in the order they must be attempted.
    #[must_use]
    pub fn tiers(&self) -> [(SelectorTier, &str); 3] {
        [
            (SelectorTier::Main, self.main.as_str()),
            (SelectorTier::Fallback, self.fallback.as_str()),
            (SelectorTier::AltFallback, self.alternate_fallback.as_str()),
        ]
    }
}
