use pubchem_core::{Constants, ExposureName, Settings};
use pubchem_scraper::scrape;
use std::path::PathBuf;

const PUBCHEM_CONSTANTS: &str = include_str!("../../../constants.yml");

#[tokio::test]
#[ignore = "Requires a driver in PUBCHEM_WEBDRIVER_DIR and network access to PubChem"]
async fn test_full_scrape_flow() {
    let driver_dir = std::env::var("PUBCHEM_WEBDRIVER_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("webdriver"));

    let constants = Constants::from_yaml_str(PUBCHEM_CONSTANTS).expect("parse constants");
    constants.validate().expect("valid constants");

    let mut settings = Settings::default();
    settings.browser.headless = true;

    let names = vec![ExposureName::new("ethanol").expect("valid exposure name")];
    let records = scrape(&names, &driver_dir, &constants, &settings)
        .await
        .expect("scrape succeeds");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "ethanol");
    assert_eq!(records[0].cid, "702");
}
