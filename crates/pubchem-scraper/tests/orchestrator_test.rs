mod common;

use common::{query_url, MockSession, ALT_FALLBACK, BASE_URL, FALLBACK, MAIN};
use pubchem_core::{Constants, ExposureName, ResolverConfig, SelectorChain};
use pubchem_scraper::{CardResolver, ExtractionRules, ScrapeError, Scraper, WaitPolicy};

fn scraper() -> Scraper {
    let resolver = CardResolver::new(
        BASE_URL,
        SelectorChain {
            main: MAIN.to_string(),
            fallback: FALLBACK.to_string(),
            alternate_fallback: ALT_FALLBACK.to_string(),
        },
        WaitPolicy::default(),
    );
    Scraper::with_parts(resolver, ExtractionRules::default())
}

fn names(values: &[&str]) -> Vec<ExposureName> {
    values
        .iter()
        .map(|v| ExposureName::new(*v).expect("valid exposure name"))
        .collect()
}

fn pubchem_session() -> MockSession {
    MockSession::new()
        .with_page(
            &query_url("ethanol"),
            &[(MAIN, "Ethanol\nCompound CID: 702\nIUPAC Name: ethanol\n\n")],
        )
        .with_page(
            &query_url("ethyl benzene"),
            &[(
                FALLBACK,
                "Ethylbenzene\nCompound CID: 7500\nIUPAC Name: ethylbenzene \nMF: C8H10",
            )],
        )
        .with_page(&query_url("unobtainium"), &[])
        .with_page(
            &query_url("ethanol absolute"),
            &[(MAIN, "Substance SID: 135036917\nCompound CID: 702")],
        )
        .with_page(
            &query_url("702"),
            &[(MAIN, "Ethanol\nCompound CID: 702\nIUPAC Name: ethanol\n\n")],
        )
}

#[tokio::test(start_paused = true)]
async fn test_one_record_per_name_in_order() {
    let session = pubchem_session();
    let log = session.log();
    let input = names(&["ethyl benzene", "unobtainium", "ethanol"]);

    let records = scraper()
        .run(Box::new(session), &input)
        .await
        .expect("scrape succeeds");

    assert_eq!(records.len(), input.len());
    for (record, name) in records.iter().zip(&input) {
        assert_eq!(record.name, name.as_str());
    }

    assert_eq!(records[0].cid, "7500");
    assert_eq!(records[0].iupac, "ethylbenzene");
    assert_eq!(records[1].cid, "");
    assert_eq!(records[1].iupac, "");
    assert_eq!(records[2].cid, "702");
    assert_eq!(records[2].iupac, "ethanol");

    assert_eq!(log.lock().expect("log lock").closes, 1);
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_names_are_kept() {
    let session = pubchem_session();
    let input = names(&["ethanol", "ethanol"]);

    let records = scraper()
        .run(Box::new(session), &input)
        .await
        .expect("scrape succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}

#[tokio::test(start_paused = true)]
async fn test_substance_is_resolved_through_compound_page() {
    let session = pubchem_session();
    let log = session.log();
    let input = names(&["ethanol absolute"]);

    let records = scraper()
        .run(Box::new(session), &input)
        .await
        .expect("scrape succeeds");

    assert_eq!(records[0].name, "ethanol absolute");
    assert_eq!(records[0].cid, "702");
    assert_eq!(records[0].iupac, "ethanol");
    assert_eq!(
        log.lock().expect("log lock").navigations,
        vec![query_url("ethanol absolute"), query_url("702")]
    );
}

#[tokio::test(start_paused = true)]
async fn test_session_failure_aborts_run_and_closes_once() {
    let session = pubchem_session().failing_on(&query_url("ethyl benzene"));
    let log = session.log();
    let input = names(&["ethanol", "ethyl benzene", "unobtainium"]);

    let err = scraper()
        .run(Box::new(session), &input)
        .await
        .expect_err("browser failure aborts the run");

    assert!(matches!(err, ScrapeError::Browser(_)));

    let log = log.lock().expect("log lock");
    assert_eq!(log.closes, 1);
    assert_eq!(
        log.navigations,
        vec![query_url("ethanol"), query_url("ethyl benzene")]
    );
}

#[tokio::test]
async fn test_panic_mid_run_still_closes_session() {
    let session = pubchem_session().panicking_on(MAIN);
    let log = session.log();
    let input = names(&["ethanol", "ethyl benzene"]);
    let scraper = scraper();

    let handle = tokio::spawn(async move { scraper.run(Box::new(session), &input).await });

    let err = handle.await.expect_err("run panics");
    assert!(err.is_panic());

    let log = log.lock().expect("log lock");
    assert_eq!(log.closes, 1);
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_still_closes_session() {
    let session = MockSession::new();
    let log = session.log();

    let records = scraper()
        .run(Box::new(session), &[])
        .await
        .expect("scrape succeeds");

    assert!(records.is_empty());
    let log = log.lock().expect("log lock");
    assert_eq!(log.closes, 1);
    assert!(log.navigations.is_empty());
}

#[test]
fn test_scraper_from_constants() {
    let constants = Constants::from_yaml_str(&format!(
        r#"
target:
  name: pubchem
  url: "{BASE_URL}"
  main_selector: "{MAIN}"
  fallback_selector: "{FALLBACK}"
  other_fallback_selector: "{ALT_FALLBACK}"
csv:
  in_file:
    headers: [exposure_name]
  out_file:
    headers: [exposure_name, cid, iupac]
"#
    ))
    .expect("parse constants");

    assert!(Scraper::new(&constants, &ResolverConfig::default()).is_ok());
}

#[test]
fn test_scraper_rejects_invalid_patterns() {
    let mut constants = Constants::default();
    constants.target.patterns.iupac = "iupac name: no group".to_string();

    let err = Scraper::new(&constants, &ResolverConfig::default()).expect_err("invalid pattern");
    assert!(matches!(err, ScrapeError::Config(_)));
}
