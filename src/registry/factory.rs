//! Per-thread driver factory
//!
//! A [`DriverFactory`] owns at most one live session. It resolves its
//! browser once at construction, creates the session lazily on first use,
//! and clears its slot immediately when the session is quit so teardown can
//! never double-destroy a handle.

use std::sync::Arc;
use std::thread;

use sysinfo::System;
use tracing::{info, warn};
use uuid::Uuid;

use crate::browser::{BrowserChoice, BrowserType, Capabilities};
use crate::config::DriverConfig;
use crate::error::Result;
use crate::session::{DriverSession, SessionBackend};

/// Lazily creates and owns one browser session
pub struct DriverFactory {
    choice: BrowserChoice,
    capabilities: Capabilities,
    backend: Arc<dyn SessionBackend>,
    session: Option<Box<dyn DriverSession>>,
    creations: u64,
}

impl DriverFactory {
    /// Create a factory from run configuration
    ///
    /// Resolves the configured browser name here, once. A fallback to the
    /// default browser is logged but never an error.
    pub fn new(config: &DriverConfig, backend: Arc<dyn SessionBackend>) -> Self {
        let choice = BrowserType::resolve(config.browser.as_deref());
        if let BrowserChoice::Defaulted { browser, ref reason } = choice {
            warn!("{reason}, defaulting to '{browser}'");
        }

        let mut overlay = Capabilities::new().headless(config.headless);
        if let Some(ref path) = config.browser_path {
            overlay = overlay.binary(path);
        }
        for arg in &config.extra_args {
            overlay = overlay.arg(arg);
        }
        let capabilities = choice.browser().default_capabilities().merge(overlay);

        Self {
            choice,
            capabilities,
            backend,
            session: None,
            creations: 0,
        }
    }

    /// The browser this factory drives
    pub fn browser(&self) -> BrowserType {
        self.choice.browser()
    }

    /// How the browser was chosen (resolved vs defaulted)
    pub fn choice(&self) -> &BrowserChoice {
        &self.choice
    }

    /// The capability descriptor sessions are created with
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Whether a live session is currently held
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the live session, if any
    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id())
    }

    /// How many sessions this factory has created over its lifetime
    ///
    /// Diagnostics only; increments when `session()` re-creates after a quit.
    pub fn creations(&self) -> u64 {
        self.creations
    }

    /// Return the live session, creating it on first call
    ///
    /// Memoized: only the first call (and the first call after a `quit`)
    /// performs real work. A creation failure leaves the factory empty and
    /// is fatal only for the calling test.
    pub fn session(&mut self) -> Result<&mut dyn DriverSession> {
        if let Some(ref mut session) = self.session {
            return Ok(session.as_mut());
        }

        self.log_environment();
        let session = self.backend.create(self.browser(), &self.capabilities)?;
        self.creations += 1;
        info!(session = %session.id(), browser = %self.browser(), "session created");
        Ok(self.session.insert(session).as_mut())
    }

    /// Destroy the held session, if any
    ///
    /// The slot is cleared before the underlying quit runs, so calling this
    /// twice (or on an empty factory) is a no-op and a handle is never
    /// destroyed twice even when the quit itself fails.
    pub fn quit(&mut self) -> Result<()> {
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        let id = session.id();
        session.quit()?;
        info!(session = %id, "session quit");
        Ok(())
    }

    fn log_environment(&self) {
        let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        let arch = System::cpu_arch();
        info!(
            os = %os,
            arch = %arch,
            browser = %self.browser(),
            thread = ?thread::current().id(),
            "starting browser session"
        );
    }
}

impl std::fmt::Debug for DriverFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverFactory")
            .field("browser", &self.browser())
            .field("has_session", &self.has_session())
            .field("creations", &self.creations)
            .finish_non_exhaustive()
    }
}
