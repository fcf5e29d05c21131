use crate::driver::{locate_driver, DriverExecutable, DriverKind};
use crate::error::{BrowserError, Result};
use crate::session::NavigableSession;
use pubchem_core::BrowserConfig;
use std::net::TcpListener;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use thirtyfour::prelude::*;
use thirtyfour::ChromiumLikeCapabilities;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Delay between readiness probes while the driver starts up.
const DRIVER_PROBE_INTERVAL_MS: u64 = 200;

/// Browser session backed by a locally spawned WebDriver executable.
pub struct WebDriverSession {
    kind: DriverKind,
    driver: Option<WebDriver>,
    process: Option<Child>,
}

impl WebDriverSession {
    /// Spawn the driver executable and open a browser session through it.
    pub async fn launch(executable: &DriverExecutable, config: &BrowserConfig) -> Result<Self> {
        let port = free_local_port()?;
        let mut process = Command::new(&executable.path)
            .arg(format!("--port={port}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                BrowserError::DriverLaunch(format!(
                    "failed to spawn {}: {e}",
                    executable.path.display()
                ))
            })?;

        wait_until_ready(&mut process, port, config.driver_start_timeout()).await?;

        let server_url = format!("http://127.0.0.1:{port}");
        debug!(kind = %executable.kind, %server_url, "driver accepting connections");

        let driver = match executable.kind {
            DriverKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if config.headless {
                    caps.set_headless().map_err(webdriver_error)?;
                }
                WebDriver::new(server_url.as_str(), caps).await
            }
            DriverKind::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if config.headless {
                    caps.set_headless().map_err(webdriver_error)?;
                }
                WebDriver::new(server_url.as_str(), caps).await
            }
        }
        .map_err(webdriver_error)?;

        driver
            .set_page_load_timeout(config.navigation_timeout())
            .await
            .map_err(webdriver_error)?;

        info!(kind = %executable.kind, headless = config.headless, "browser session opened");

        Ok(Self {
            kind: executable.kind,
            driver: Some(driver),
            process: Some(process),
        })
    }

    fn driver(&self) -> Result<&WebDriver> {
        self.driver.as_ref().ok_or(BrowserError::SessionClosed)
    }
}

#[async_trait::async_trait]
impl NavigableSession for WebDriverSession {
    async fn open(&mut self, url: &str) -> Result<()> {
        debug!(%url, "navigating");
        self.driver()?
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationError(format!("{url}: {e}")))
    }

    async fn current_text(&mut self, selector: &str) -> Result<Option<String>> {
        let elements = self
            .driver()?
            .find_all(By::Css(selector))
            .await
            .map_err(webdriver_error)?;

        match elements.into_iter().next() {
            Some(element) => Ok(Some(element.text().await.map_err(webdriver_error)?)),
            None => Ok(None),
        }
    }

    async fn close(&mut self) -> Result<()> {
        let quit = match self.driver.take() {
            Some(driver) => driver.quit().await.map_err(webdriver_error),
            None => Ok(()),
        };

        if let Some(mut process) = self.process.take() {
            if let Err(e) = process.kill().await {
                warn!(kind = %self.kind, error = %e, "failed to stop driver process");
            }
        }

        if quit.is_ok() {
            info!(kind = %self.kind, "browser session closed");
        }
        quit
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        if self.driver.is_none() {
            return;
        }
        // Quitting needs an await, so only the driver process is stopped
        warn!(kind = %self.kind, "browser session dropped without close, stopping driver");
        if let Some(process) = self.process.as_mut() {
            if let Err(e) = process.start_kill() {
                warn!(kind = %self.kind, error = %e, "failed to stop driver process");
            }
        }
    }
}

/// Locate the driver in `dir` and launch a session through it.
pub async fn launch_from_directory(
    dir: &Path,
    config: &BrowserConfig,
) -> Result<Box<dyn NavigableSession>> {
    let executable = locate_driver(dir)?;
    let session = WebDriverSession::launch(&executable, config).await?;
    Ok(Box::new(session))
}

fn webdriver_error(e: WebDriverError) -> BrowserError {
    BrowserError::WebDriver(e.to_string())
}

/// Ask the OS for an unused local port.
fn free_local_port() -> Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}

/// Poll the driver port until it accepts connections, the process exits, or
/// `timeout` elapses.
async fn wait_until_ready(process: &mut Child, port: u16, timeout: Duration) -> Result<()> {
    let started = Instant::now();
    loop {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return Ok(());
        }

        if let Some(status) = process.try_wait()? {
            return Err(BrowserError::DriverLaunch(format!(
                "driver exited early with status {status}"
            )));
        }

        if started.elapsed() >= timeout {
            let _ = process.kill().await;
            return Err(BrowserError::Timeout(format!(
                "driver did not accept connections on port {port} within {timeout:?}"
            )));
        }

        tokio::time::sleep(Duration::from_millis(DRIVER_PROBE_INTERVAL_MS)).await;
    }
}
