//! Field extraction from result-card text.

use pubchem_core::{ConfigError, PatternConstants, ScrapedRecord};
use pubchem_core::{DEFAULT_CID_PATTERN, DEFAULT_IUPAC_PATTERN};
use regex::Regex;

/// Compiled CID and IUPAC patterns, built once per run.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    cid: Regex,
    iupac: Regex,
}

impl ExtractionRules {
    pub fn new(cid_pattern: &str, iupac_pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            cid: compile("target.patterns.cid", cid_pattern)?,
            iupac: compile("target.patterns.iupac", iupac_pattern)?,
        })
    }

    pub fn from_patterns(patterns: &PatternConstants) -> Result<Self, ConfigError> {
        Self::new(&patterns.cid, &patterns.iupac)
    }

    /// First captured CID, or an empty string.
    pub fn cid(&self, text: &str) -> String {
        first_capture(&self.cid, text)
    }

    /// First captured IUPAC name, or an empty string.
    pub fn iupac(&self, text: &str) -> String {
        first_capture(&self.iupac, text)
    }

    /// Extract both fields. The record's `name` is left empty for the caller.
    pub fn extract(&self, text: &str) -> ScrapedRecord {
        ScrapedRecord {
            name: String::new(),
            cid: self.cid(text),
            iupac: self.iupac(text),
        }
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::new(DEFAULT_CID_PATTERN, DEFAULT_IUPAC_PATTERN).expect("valid built-in patterns")
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex, ConfigError> {
    let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        reason: format!("invalid regular expression: {e}"),
    })?;
    if regex.captures_len() < 2 {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "pattern must contain a capture group".to_string(),
        });
    }
    Ok(regex)
}

fn first_capture(regex: &Regex, text: &str) -> String {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
