//! Chromium-family backend over CDP
//!
//! Launches Chrome, Edge, or Opera through chromiumoxide. The pool's public
//! API is synchronous, so each session owns a small single-worker tokio
//! runtime: the CDP event handler runs on it continuously, and session
//! commands are `block_on`-driven from the calling test thread.
//!
//! Non-Chromium browsers are rejected with
//! [`SessionError::UnsupportedBrowser`] — plugging in a WebDriver-based
//! backend for those is a matter of implementing
//! [`SessionBackend`] elsewhere.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig as CdpBrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::ClearBrowserCookiesParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::browser::{BrowserType, Capabilities};
use crate::error::{Result, SessionError};
use crate::session::{DriverSession, SessionBackend};

/// How long to wait for the CDP handler task after closing the browser
const HANDLER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Backend that launches Chromium-family browsers via chromiumoxide
///
/// Edge and Opera are CDP-capable but are not auto-detected; drive them by
/// setting [`Capabilities::binary`] to the executable path.
#[derive(Debug, Default)]
pub struct ChromiumBackend;

impl ChromiumBackend {
    /// Create a new chromium backend
    pub fn new() -> Self {
        Self
    }
}

impl SessionBackend for ChromiumBackend {
    fn name(&self) -> &'static str {
        "chromium"
    }

    fn create(
        &self,
        browser: BrowserType,
        capabilities: &Capabilities,
    ) -> Result<Box<dyn DriverSession>> {
        if !browser.is_chromium_family() {
            return Err(SessionError::UnsupportedBrowser {
                browser,
                backend: self.name(),
            }
            .into());
        }

        let session = ChromiumSession::launch(browser, capabilities)?;
        Ok(Box::new(session))
    }
}

/// A live CDP session and the runtime that drives it
struct ChromiumSession {
    id: Uuid,
    browser_type: BrowserType,
    runtime: Runtime,
    browser: Browser,
    page: Page,
    handler_task: Option<JoinHandle<()>>,
    closed: bool,
}

impl ChromiumSession {
    fn launch(browser_type: BrowserType, capabilities: &Capabilities) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("driver-pool-cdp")
            .enable_all()
            .build()
            .map_err(|e| SessionError::RuntimeFailed(e.to_string()))?;

        let mut builder = CdpBrowserConfig::builder();

        if !capabilities.headless {
            builder = builder.with_head();
        }

        if let Some(ref path) = capabilities.binary {
            builder = builder.chrome_executable(path);
        }

        for arg in &capabilities.args {
            builder = builder.arg(arg);
        }

        let config = builder.build().map_err(|message| SessionError::LaunchFailed {
            browser: browser_type,
            message,
        })?;

        let (browser, mut handler) = runtime
            .block_on(Browser::launch(config))
            .map_err(|e| SessionError::LaunchFailed {
                browser: browser_type,
                message: e.to_string(),
            })?;

        // The handler must be polled for the life of the session; park it on
        // the session's own worker thread.
        let handler_task = runtime.spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    warn!("CDP handler event error");
                    break;
                }
            }
            debug!("CDP handler finished");
        });

        let page = runtime
            .block_on(browser.new_page("about:blank"))
            .map_err(|e| SessionError::LaunchFailed {
                browser: browser_type,
                message: e.to_string(),
            })?;

        let id = Uuid::new_v4();
        info!(session = %id, browser = %browser_type, "launched chromium session");

        Ok(Self {
            id,
            browser_type,
            runtime,
            browser,
            page,
            handler_task: Some(handler_task),
            closed: false,
        })
    }
}

impl DriverSession for ChromiumSession {
    fn id(&self) -> Uuid {
        self.id
    }

    fn browser(&self) -> BrowserType {
        self.browser_type
    }

    fn delete_all_cookies(&mut self) -> Result<()> {
        if self.closed {
            return Err(SessionError::AlreadyClosed.into());
        }
        self.runtime
            .block_on(self.page.execute(ClearBrowserCookiesParams::default()))
            .map_err(|e| SessionError::CommandFailed(e.to_string()))?;
        debug!(session = %self.id, "cleared cookies");
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        if self.closed {
            return Err(SessionError::AlreadyClosed.into());
        }
        self.closed = true;

        self.runtime
            .block_on(self.browser.close())
            .map_err(|e| SessionError::QuitFailed(e.to_string()))?;

        if let Some(task) = self.handler_task.take() {
            let _ = self
                .runtime
                .block_on(tokio::time::timeout(HANDLER_SHUTDOWN_TIMEOUT, task));
        }

        info!(session = %self.id, "chromium session closed");
        Ok(())
    }
}

impl Drop for ChromiumSession {
    fn drop(&mut self) {
        if !self.closed {
            warn!(session = %self.id, "chromium session dropped without quit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_chromium_browsers() {
        let backend = ChromiumBackend::new();
        for browser in [
            BrowserType::Firefox,
            BrowserType::Safari,
            BrowserType::InternetExplorer,
        ] {
            let err = backend
                .create(browser, &Capabilities::new())
                .err()
                .expect("non-chromium browsers must be rejected");
            assert!(err.to_string().contains("not supported"));
        }
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(ChromiumBackend::new().name(), "chromium");
    }
}
