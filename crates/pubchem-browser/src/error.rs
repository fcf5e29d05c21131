use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("webdriver error: {0}")]
    WebDriver(String),

    #[error("navigation failed: {0}")]
    NavigationError(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("webdriver directory not found: {path}")]
    DriverDirectory { path: String },

    #[error("expected 1 executable in {dir}, got {}: {found:?}", found.len())]
    DriverCount { dir: String, found: Vec<String> },

    #[error(
        "expected to find either a Firefox 'geckodriver' or Chrome 'chromedriver' binary, got {name}"
    )]
    UnrecognizedDriver { name: String },

    #[error("failed to launch driver: {0}")]
    DriverLaunch(String),

    #[error("browser session already closed")]
    SessionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
