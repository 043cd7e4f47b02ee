//! Process-scoped driver registry
//!
//! The registry is the coordinator for a parallel test run: it binds each
//! test thread to its own [`DriverFactory`], keeps every factory ever
//! created in an append-only pool, and sweeps that pool at the end of the
//! run so no browser process outlives the suite.
//!
//! ```text
//! test thread ──▶ current() ──▶ slots[ThreadId] ──▶ DriverFactory ──▶ session
//!                                    │ (miss)
//!                                    ▼
//!                            new factory, appended to pool
//!
//! suite end   ──▶ shutdown_all() ──▶ pool sweep, quit every session
//! ```
//!
//! Per-thread identity is strict: a thread never observes another thread's
//! session, and the same thread keeps the same session across tests until it
//! is quit.

pub mod factory;

pub use factory::DriverFactory;

use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::backend::ChromiumBackend;
use crate::config::DriverConfig;
use crate::error::Result;
use crate::session::{DriverSession, SessionBackend};

/// A factory shared between its owning thread and the teardown sweep
pub type SharedFactory = Arc<Mutex<DriverFactory>>;

/// Thread-indexed driver registry with end-of-run teardown
pub struct DriverRegistry {
    config: DriverConfig,
    backend: Arc<dyn SessionBackend>,
    /// Current thread bindings; reset by `initialize`
    slots: Mutex<HashMap<ThreadId, SharedFactory>>,
    /// Every factory ever created, in insertion order; append-only during
    /// the run, only read by the teardown sweep
    pool: Mutex<Vec<SharedFactory>>,
}

impl DriverRegistry {
    /// Create a registry over an explicit backend
    pub fn new(config: DriverConfig, backend: Arc<dyn SessionBackend>) -> Self {
        Self {
            config,
            backend,
            slots: Mutex::new(HashMap::new()),
            pool: Mutex::new(Vec::new()),
        }
    }

    /// Create a registry over the chromiumoxide backend
    pub fn chromium(config: DriverConfig) -> Self {
        Self::new(config, Arc::new(ChromiumBackend::new()))
    }

    /// Reset thread bindings for a fresh run
    ///
    /// Idempotent. Prior bindings are dropped, so callers must not rely on
    /// previously bound sessions surviving; factories already in the pool
    /// stay there and are still swept by [`shutdown_all`](Self::shutdown_all).
    pub fn initialize(&self) {
        let mut slots = self.slots.lock();
        if !slots.is_empty() {
            debug!(bindings = slots.len(), "clearing prior thread bindings");
        }
        slots.clear();
        info!("driver registry initialized");
    }

    /// The calling thread's factory, created and registered on first access
    ///
    /// Appending to the pool happens under the slots lock, so a thread's
    /// factory is registered exactly once no matter how first accesses
    /// interleave across threads.
    pub fn current(&self) -> SharedFactory {
        let mut slots = self.slots.lock();
        let factory = slots.entry(thread::current().id()).or_insert_with(|| {
            let factory = Arc::new(Mutex::new(DriverFactory::new(
                &self.config,
                Arc::clone(&self.backend),
            )));
            self.pool.lock().push(Arc::clone(&factory));
            debug!(thread = ?thread::current().id(), "registered driver factory");
            factory
        });
        Arc::clone(factory)
    }

    /// Run `f` against the calling thread's session, creating it if needed
    ///
    /// This is the per-test entry point: the same thread always reaches the
    /// identical session until that session is quit.
    pub fn with_session<R>(
        &self,
        f: impl FnOnce(&mut dyn DriverSession) -> Result<R>,
    ) -> Result<R> {
        let factory = self.current();
        let mut factory = factory.lock();
        f(factory.session()?)
    }

    /// Clear transient state on the calling thread's session
    ///
    /// Runs after every test, including failed ones, so a contaminated
    /// session is never handed to the next test on the same thread. A thread
    /// that has no live session yet is a no-op — state is not worth creating
    /// a browser to clear.
    pub fn reset_state(&self) -> Result<()> {
        let factory = self.slots.lock().get(&thread::current().id()).cloned();
        let Some(factory) = factory else {
            return Ok(());
        };
        let mut factory = factory.lock();
        if factory.has_session() {
            factory.session()?.delete_all_cookies()?;
            debug!(thread = ?thread::current().id(), "session state reset");
        }
        Ok(())
    }

    /// Quit every session in the pool, regardless of creating thread
    ///
    /// Continue-on-error: a failing quit is logged and the sweep moves on,
    /// so one stuck browser cannot leak the rest. Afterwards every factory
    /// reports an absent session. Returns the number of sessions destroyed
    /// (counting ones whose quit reported an error — their handles are gone
    /// either way).
    pub fn shutdown_all(&self) -> usize {
        let pool: Vec<SharedFactory> = self.pool.lock().clone();
        let mut swept = 0;
        for factory in pool {
            let mut factory = factory.lock();
            if !factory.has_session() {
                continue;
            }
            swept += 1;
            if let Err(e) = factory.quit() {
                warn!(error = %e, browser = %factory.browser(), "quit failed during shutdown sweep");
            }
        }
        info!(sessions = swept, "driver registry shut down");
        swept
    }

    /// Number of factories registered since process start
    pub fn registered_factories(&self) -> usize {
        self.pool.lock().len()
    }

    /// Whether the calling thread currently holds a live session
    pub fn has_session(&self) -> bool {
        self.slots
            .lock()
            .get(&thread::current().id())
            .is_some_and(|factory| factory.lock().has_session())
    }
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("backend", &self.backend.name())
            .field("registered_factories", &self.registered_factories())
            .finish_non_exhaustive()
    }
}
