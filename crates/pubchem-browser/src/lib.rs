//! Browser sessions for the PubChem scraper.
//!
//! Locates a `chromedriver` or `geckodriver` executable in a driver
//! directory, launches it, and exposes the resulting browser through the
//! [`NavigableSession`] capability so the scraper never depends on a
//! concrete browser family.

pub mod driver;
pub mod error;
pub mod session;
pub mod webdriver;

pub use driver::{locate_driver, DriverExecutable, DriverKind};
pub use error::{BrowserError, Result};
pub use session::NavigableSession;
pub use webdriver::{launch_from_directory, WebDriverSession};
