//! In-memory browser session for exercising the scraper without a driver.

#![allow(dead_code)]

use pubchem_browser::{BrowserError, NavigableSession};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://pubchem.test/#query=";
pub const MAIN: &str = "#featured-results .box-shadow";
pub const FALLBACK: &str = "#collection-results-container";
pub const ALT_FALLBACK: &str = "#main-results";

/// Everything the scraper did to the session.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub navigations: Vec<String>,
    pub lookups: Vec<String>,
    pub closes: usize,
}

impl SessionLog {
    pub fn lookups_of(&self, selector: &str) -> usize {
        self.lookups.iter().filter(|s| s.as_str() == selector).count()
    }
}

/// Pages keyed by URL, each mapping selectors to element text.
#[derive(Default)]
pub struct MockSession {
    pages: HashMap<String, HashMap<String, String>>,
    failing_urls: HashSet<String>,
    hidden_for: HashMap<String, usize>,
    panics_on: HashSet<String>,
    current: Option<String>,
    log: Arc<Mutex<SessionLog>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, elements: &[(&str, &str)]) -> Self {
        let page = elements
            .iter()
            .map(|(selector, text)| ((*selector).to_string(), (*text).to_string()))
            .collect();
        self.pages.insert(url.to_string(), page);
        self
    }

    /// Navigating to `url` fails as if the browser had crashed.
    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }

    /// `selector` stays invisible for the first `lookups` lookups.
    pub fn hidden_for(mut self, selector: &str, lookups: usize) -> Self {
        self.hidden_for.insert(selector.to_string(), lookups);
        self
    }

    /// Looking up `selector` panics, as a crashing driver binding would.
    pub fn panicking_on(mut self, selector: &str) -> Self {
        self.panics_on.insert(selector.to_string());
        self
    }

    pub fn log(&self) -> Arc<Mutex<SessionLog>> {
        Arc::clone(&self.log)
    }
}

#[async_trait::async_trait]
impl NavigableSession for MockSession {
    async fn open(&mut self, url: &str) -> Result<(), BrowserError> {
        self.log.lock().expect("log lock").navigations.push(url.to_string());
        if self.failing_urls.contains(url) {
            return Err(BrowserError::WebDriver("browser disconnected".to_string()));
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn current_text(&mut self, selector: &str) -> Result<Option<String>, BrowserError> {
        let seen = {
            let mut log = self.log.lock().expect("log lock");
            log.lookups.push(selector.to_string());
            log.lookups_of(selector)
        };

        if self.panics_on.contains(selector) {
            panic!("element lookup for '{selector}' crashed");
        }

        if let Some(hidden) = self.hidden_for.get(selector) {
            if seen <= *hidden {
                return Ok(None);
            }
        }

        Ok(self
            .current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .and_then(|page| page.get(selector))
            .cloned())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        self.log.lock().expect("log lock").closes += 1;
        Ok(())
    }
}

pub fn query_url(term: &str) -> String {
    pubchem_scraper::build_url(BASE_URL, term)
}
