use crate::error::Result;

/// A stateful browser that can load pages and read element text.
///
/// Implementations are driven strictly sequentially: one page at a time,
/// never shared across tasks.
#[async_trait::async_trait]
pub trait NavigableSession: Send {
    /// Navigate to a URL and wait for the page to load.
    async fn open(&mut self, url: &str) -> Result<()>;

    /// Look up the first element matching a CSS selector on the current page.
    ///
    /// Returns `Ok(None)` when no element matches right now; this is a single
    /// lookup, callers do their own waiting. Any `Err` means the session itself
    /// failed.
    async fn current_text(&mut self, selector: &str) -> Result<Option<String>>;

    /// Shut the browser down. Calling it again is a no-op.
    async fn close(&mut self) -> Result<()>;
}
