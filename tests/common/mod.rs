//! Shared test support: an in-memory session backend
//!
//! The mock records every lifecycle event so tests can assert on creation
//! counts, quit counts, and cookie clears, and can be told to fail the next
//! creation or the quit of a particular session.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use driver_pool::{
    BrowserType, Capabilities, DriverSession, Result, SessionBackend, SessionError,
};

/// Shared counters and failure knobs for a mock backend
#[derive(Default)]
pub struct MockState {
    /// Sessions created so far
    pub created: AtomicUsize,
    /// Quit attempts (successful or not)
    pub quits: AtomicUsize,
    /// Cookie clears across all sessions
    pub cookie_clears: AtomicUsize,
    /// When set, the next create call fails once
    pub fail_next_create: AtomicBool,
    /// Creation ordinals (1-based) whose quit reports an error
    pub fail_quit_ordinals: Mutex<Vec<usize>>,
}

/// In-memory [`SessionBackend`] for lifecycle tests
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Arc<MockState> {
        &self.state
    }

    pub fn fail_next_create(&self) {
        self.state.fail_next_create.store(true, Ordering::SeqCst);
    }

    pub fn fail_quit_of(&self, ordinal: usize) {
        self.state.fail_quit_ordinals.lock().push(ordinal);
    }

    pub fn created(&self) -> usize {
        self.state.created.load(Ordering::SeqCst)
    }

    pub fn quits(&self) -> usize {
        self.state.quits.load(Ordering::SeqCst)
    }

    pub fn cookie_clears(&self) -> usize {
        self.state.cookie_clears.load(Ordering::SeqCst)
    }
}

impl SessionBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn create(
        &self,
        browser: BrowserType,
        _capabilities: &Capabilities,
    ) -> Result<Box<dyn DriverSession>> {
        if self.state.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(SessionError::LaunchFailed {
                browser,
                message: "mock launch failure".to_string(),
            }
            .into());
        }
        let ordinal = self.state.created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Box::new(MockSession {
            id: Uuid::new_v4(),
            browser,
            ordinal,
            state: Arc::clone(&self.state),
        }))
    }
}

/// A fake live session
pub struct MockSession {
    id: Uuid,
    browser: BrowserType,
    ordinal: usize,
    state: Arc<MockState>,
}

impl DriverSession for MockSession {
    fn id(&self) -> Uuid {
        self.id
    }

    fn browser(&self) -> BrowserType {
        self.browser
    }

    fn delete_all_cookies(&mut self) -> Result<()> {
        self.state.cookie_clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        self.state.quits.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_quit_ordinals.lock().contains(&self.ordinal) {
            return Err(SessionError::QuitFailed("mock quit failure".to_string()).into());
        }
        Ok(())
    }
}
