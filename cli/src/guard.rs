//! Pre-flight checks run before any browser is launched.

use anyhow::{Context, Result};
use pubchem_browser::{locate_driver, DriverExecutable};
use pubchem_core::Constants;
use std::path::Path;
use tracing::debug;

/// Load constants and make sure every field is usable.
pub fn guard_constants(path: &Path) -> Result<Constants> {
    let constants = Constants::load(path)
        .with_context(|| format!("failed to load constants from '{}'", path.display()))?;
    constants
        .validate()
        .with_context(|| format!("constants in '{}' are incomplete", path.display()))?;
    debug!(target = %constants.target.name, "constants validated");
    Ok(constants)
}

/// Make sure the input CSV carries the headers the constants expect.
pub fn guard_csv(path: &Path, constants: &Constants) -> Result<()> {
    pubchem_csv::guard_csv(path, &constants.csv.in_file.headers)
        .with_context(|| format!("input CSV '{}' rejected", path.display()))
}

/// Make sure the webdriver directory holds exactly one known driver.
pub fn guard_webdriver(dir: &Path) -> Result<DriverExecutable> {
    locate_driver(dir).with_context(|| format!("no usable webdriver in '{}'", dir.display()))
}
