//! Bounded polling for elements on the currently loaded page.

use crate::error::Result;
use pubchem_browser::NavigableSession;
use pubchem_core::ResolverConfig;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Default maximum wait per selector.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default delay between lookups.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Lower bound on the delay between lookups.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long, and how often, to look for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl From<&ResolverConfig> for WaitPolicy {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            timeout: config.element_timeout(),
            poll_interval: config.poll_interval(),
        }
    }
}

/// Poll the current page for `selector` and return the element's text.
///
/// Looks up immediately, then every `poll_interval` until `timeout` has
/// elapsed. A miss is not an error: it is logged as a warning, tagged with
/// `label` when given, and reported as `Ok(None)`. Session failures propagate.
pub async fn find_element(
    session: &mut dyn NavigableSession,
    selector: &str,
    policy: &WaitPolicy,
    label: Option<&str>,
) -> Result<Option<String>> {
    let deadline = Instant::now() + policy.timeout;

    loop {
        if let Some(text) = session.current_text(selector).await? {
            debug!(selector, tier = label.unwrap_or_default(), "element found");
            return Ok(Some(text));
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        let pause = policy.poll_interval.max(MIN_POLL_INTERVAL);
        tokio::time::sleep(pause.min(deadline - now)).await;
    }

    match label {
        Some(label) => warn!(
            selector,
            tier = label,
            "{label} selector could not find the element ('{selector}')"
        ),
        None => warn!(selector, "Selector could not find the element ('{selector}')"),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = WaitPolicy::default();
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_policy_from_config() {
        let config = ResolverConfig {
            element_timeout_secs: 3,
            poll_interval_ms: 100,
        };
        let policy = WaitPolicy::from(&config);
        assert_eq!(policy.timeout, Duration::from_secs(3));
        assert_eq!(policy.poll_interval, Duration::from_millis(100));
    }
}
