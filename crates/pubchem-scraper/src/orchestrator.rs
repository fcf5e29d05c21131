//! Scrape orchestrator.
//!
//! This module provides the [`Scraper`] which drives one browser session
//! through every exposure name in order and collects one record per name.

use crate::card::CardResolver;
use crate::error::Result;
use crate::extract::ExtractionRules;
use crate::resolver::WaitPolicy;
use crate::url_builder::build_url;
use futures::FutureExt;
use pubchem_browser::{launch_from_directory, NavigableSession};
use pubchem_core::{Constants, ExposureName, ResolverConfig, ScrapedRecord, Settings};
use std::panic::AssertUnwindSafe;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Drives the page-resolution and extraction pipeline.
///
/// Failure policy is all-or-nothing: a session error on any exposure name
/// aborts the whole run and no partial results are returned. The session is
/// still closed exactly once.
#[derive(Debug, Clone)]
pub struct Scraper {
    resolver: CardResolver,
    rules: ExtractionRules,
}

impl Scraper {
    /// Create a scraper from validated constants.
    ///
    /// Compiles the extraction patterns; invalid patterns are a configuration
    /// error.
    pub fn new(constants: &Constants, resolver_config: &ResolverConfig) -> Result<Self> {
        let rules = ExtractionRules::from_patterns(&constants.target.patterns)?;
        let resolver = CardResolver::new(
            constants.target.url.clone(),
            constants.selector_chain(),
            WaitPolicy::from(resolver_config),
        );
        Ok(Self::with_parts(resolver, rules))
    }

    /// Create a scraper from already-built parts.
    #[must_use]
    pub fn with_parts(resolver: CardResolver, rules: ExtractionRules) -> Self {
        Self { resolver, rules }
    }

    /// Scrape every exposure name with `session`, then close it.
    ///
    /// The session is closed on every exit path, including a panic inside the
    /// pipeline, which is resumed once the session is closed. A close failure
    /// after a successful run is logged and the records are still returned.
    pub async fn run(
        &self,
        mut session: Box<dyn NavigableSession>,
        exposure_names: &[ExposureName],
    ) -> Result<Vec<ScrapedRecord>> {
        let outcome = AssertUnwindSafe(self.scrape_all(session.as_mut(), exposure_names))
            .catch_unwind()
            .await;
        let closed = session.close().await;

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(panic) => {
                match closed {
                    Ok(()) => error!("scrape panicked, browser session closed"),
                    Err(e) => error!(error = %e, "scrape panicked, failed to close browser session"),
                }
                std::panic::resume_unwind(panic);
            }
        };

        match (outcome, closed) {
            (Ok(records), Ok(())) => Ok(records),
            (Ok(records), Err(e)) => {
                warn!(error = %e, "failed to close browser session after scraping");
                Ok(records)
            }
            (Err(e), closed) => {
                if let Err(close_err) = closed {
                    warn!(error = %close_err, "failed to close browser session after error");
                }
                Err(e)
            }
        }
    }

    async fn scrape_all(
        &self,
        session: &mut dyn NavigableSession,
        exposure_names: &[ExposureName],
    ) -> Result<Vec<ScrapedRecord>> {
        let total = exposure_names.len();
        let mut records = Vec::with_capacity(total);

        for (index, exposure_name) in exposure_names.iter().enumerate() {
            debug!(index = index + 1, total, name = %exposure_name, "scraping exposure");

            let mut record = self.scrape_compound(session, exposure_name).await?;
            record.name = exposure_name.as_str().to_string();

            info!(
                name = %record.name,
                cid = %record.cid,
                iupac = %record.iupac,
                "scraped record"
            );
            records.push(record);
        }

        Ok(records)
    }

    /// Resolve and extract one exposure name on the given session.
    ///
    /// The returned record's `name` is empty; the caller stamps it.
    pub async fn scrape_compound(
        &self,
        session: &mut dyn NavigableSession,
        exposure_name: &ExposureName,
    ) -> Result<ScrapedRecord> {
        let url = build_url(self.resolver.base_url(), exposure_name.as_str());
        session.open(&url).await?;

        let card = self.resolver.resolve_card(session).await?;
        let text = self.resolver.resolve_text(card, session, &self.rules).await?;

        Ok(self.rules.extract(&text))
    }
}

/// Scrape exposure names with a browser launched from `webdriver_directory`.
///
/// Opens exactly one browser session for the whole call. Driver discovery
/// and pattern compilation errors are raised before any navigation.
pub async fn scrape(
    exposure_names: &[ExposureName],
    webdriver_directory: &Path,
    constants: &Constants,
    settings: &Settings,
) -> Result<Vec<ScrapedRecord>> {
    let scraper = Scraper::new(constants, &settings.resolver)?;
    let session = launch_from_directory(webdriver_directory, &settings.browser).await?;

    info!(count = exposure_names.len(), target = %constants.target.name, "starting scrape");
    scraper.run(session, exposure_names).await
}
