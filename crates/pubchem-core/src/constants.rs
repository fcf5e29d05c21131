//! Scrape constants loaded from a YAML file.
//!
//! The constants describe the scrape target (search URL, selector chain and
//! extraction patterns) and the CSV headers expected on input and written on
//! output. Missing keys deserialize to empty values so that validation can
//! report exactly which field is absent.

use crate::error::{ConfigError, ConfigResult};
use crate::types::SelectorChain;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in pattern capturing the digits after "Compound CID:".
pub const DEFAULT_CID_PATTERN: &str = r"(?i)compound\scid:\s(\d+)";

/// Built-in pattern capturing the IUPAC name up to trailing blank-line padding.
///
/// The engine has no look-around, so the terminating `\s+\n` is consumed
/// after the lazy capture instead of being asserted.
pub const DEFAULT_IUPAC_PATTERN: &str = r"(?i)iupac\sname:\s([\d\w,\-\s]+?)\s+\n";

/// Complete set of scrape constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Scrape target description
    pub target: TargetConstants,
    /// CSV header expectations
    pub csv: CsvConstants,
}

impl Constants {
    /// Load constants from a YAML file.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or not valid YAML.
    /// The loaded constants are not validated; call [`Constants::validate`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading constants from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents).map_err(|source| ConfigError::YamlError {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse constants from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document is treated like an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Whether every field is populated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check that every field is populated and the patterns compile.
    ///
    /// # Errors
    /// Returns the first invalid field as [`ConfigError::InvalidValue`].
    pub fn validate(&self) -> ConfigResult<()> {
        self.target.validate()?;
        self.csv.validate()
    }

    /// Selector chain in fallback order.
    #[must_use]
    pub fn selector_chain(&self) -> SelectorChain {
        SelectorChain {
            main: self.target.main_selector.clone(),
            fallback: self.target.fallback_selector.clone(),
            alternate_fallback: self.target.other_fallback_selector.clone(),
        }
    }

    /// Input header whose values identify rows (the exposure name column).
    #[must_use]
    pub fn key_header(&self) -> Option<&str> {
        self.csv.in_file.headers.first().map(String::as_str)
    }
}

/// Scrape target description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConstants {
    /// Human-readable target name
    pub name: String,
    /// Base search URL, ending in the delimiter the query is appended to
    pub url: String,
    /// Selector for the "best match" result card
    pub main_selector: String,
    /// First fallback selector
    pub fallback_selector: String,
    /// Second fallback selector
    pub other_fallback_selector: String,
    /// Extraction patterns
    pub patterns: PatternConstants,
}

impl TargetConstants {
    fn validate(&self) -> ConfigResult<()> {
        require_non_empty("target.name", &self.name)?;
        require_non_empty("target.url", &self.url)?;
        require_non_empty("target.main_selector", &self.main_selector)?;
        require_non_empty("target.fallback_selector", &self.fallback_selector)?;
        require_non_empty("target.other_fallback_selector", &self.other_fallback_selector)?;
        self.patterns.validate()
    }
}

/// Regular expressions applied to the result card text.
///
/// Each pattern must have at least one capture group; the first group is the
/// extracted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConstants {
    /// Pattern capturing the compound CID
    pub cid: String,
    /// Pattern capturing the IUPAC name
    pub iupac: String,
}

impl Default for PatternConstants {
    fn default() -> Self {
        Self {
            cid: DEFAULT_CID_PATTERN.to_string(),
            iupac: DEFAULT_IUPAC_PATTERN.to_string(),
        }
    }
}

impl PatternConstants {
    fn validate(&self) -> ConfigResult<()> {
        validate_pattern("target.patterns.cid", &self.cid)?;
        validate_pattern("target.patterns.iupac", &self.iupac)
    }
}

/// Expected CSV headers for input and output files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConstants {
    /// Headers the input CSV must contain; the first one is the key column
    pub in_file: CsvProperties,
    /// Headers written to the output CSV
    pub out_file: CsvProperties,
}

impl CsvConstants {
    fn validate(&self) -> ConfigResult<()> {
        self.in_file.validate("csv.in_file.headers")?;
        self.out_file.validate("csv.out_file.headers")
    }
}

/// Header list of one CSV file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvProperties {
    /// Column headers
    pub headers: Vec<String>,
}

impl CsvProperties {
    fn validate(&self, field: &str) -> ConfigResult<()> {
        if self.headers.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: "header list cannot be empty".to_string(),
            });
        }
        if let Some(index) = self.headers.iter().position(|h| h.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: format!("header {index} is empty"),
            });
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_pattern(field: &str, pattern: &str) -> ConfigResult<()> {
    require_non_empty(field, pattern)?;
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
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_YAML: &str = r##"
target:
  name: pubchem
  url: "https://pubchem.ncbi.nlm.nih.gov/#query="
  main_selector: "#featured-results .box-shadow"
  fallback_selector: "#collection-results-container"
  other_fallback_selector: "#main-results"
csv:
  in_file:
    headers: [exposure_name, category]
  out_file:
    headers: [exposure_name, cid, iupac]
"##;

    #[test]
    fn test_parse_valid_constants() {
        let constants = Constants::from_yaml_str(VALID_YAML).expect("parse constants");
        assert!(constants.is_valid());
        assert_eq!(constants.target.name, "pubchem");
        assert_eq!(constants.key_header(), Some("exposure_name"));
        assert_eq!(constants.target.patterns.cid, DEFAULT_CID_PATTERN);

        let chain = constants.selector_chain();
        assert_eq!(chain.main, "#featured-results .box-shadow");
        assert_eq!(chain.alternate_fallback, "#main-results");
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let yaml = VALID_YAML.replace("  other_fallback_selector: \"#main-results\"\n", "");
        let constants = Constants::from_yaml_str(&yaml).expect("parse constants");

        assert!(!constants.is_valid());
        let err = constants.validate().expect_err("missing selector");
        match err {
            ConfigError::InvalidValue { field, .. } => {
                assert_eq!(field, "target.other_fallback_selector");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_header_list_is_invalid() {
        let yaml = VALID_YAML.replace("[exposure_name, cid, iupac]", "[]");
        let constants = Constants::from_yaml_str(&yaml).expect("parse constants");
        assert!(!constants.is_valid());
    }

    #[test]
    fn test_pattern_without_group_is_invalid() {
        let mut constants = Constants::from_yaml_str(VALID_YAML).expect("parse constants");
        constants.target.patterns.cid = r"compound cid:\s\d+".to_string();
        assert!(!constants.is_valid());

        constants.target.patterns.cid = r"(unclosed".to_string();
        assert!(!constants.is_valid());
    }

    #[test]
    fn test_empty_document() {
        let constants = Constants::from_yaml_str("").expect("parse empty document");
        assert!(!constants.is_valid());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("constants.yml");
        std::fs::write(&path, VALID_YAML).expect("write constants");

        let constants = Constants::load(&path).expect("load constants");
        assert!(constants.is_valid());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let err = Constants::load(&tmp.path().join("absent.yml")).expect_err("missing file");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("constants.yml");
        std::fs::write(&path, "target: [unterminated").expect("write constants");

        let err = Constants::load(&path).expect_err("malformed yaml");
        assert!(matches!(err, ConfigError::YamlError { .. }));
    }
}
