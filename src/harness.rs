//! Suite lifecycle hooks
//!
//! Thin adapter between an external test runner and the
//! [`DriverRegistry`](crate::registry::DriverRegistry). The hooks are
//! infallible on the outside: teardown and reset must run "always" — after
//! failing tests, after failing hooks — so their errors are logged rather
//! than propagated.

use std::sync::Arc;

use tracing::warn;

use crate::registry::DriverRegistry;

/// Binds registry lifecycle to a test runner's suite hooks
///
/// Wire `on_suite_start` before any test, `on_test_end` after every test
/// body (including failed ones), and `on_suite_end` once after the last
/// test. The harness is cheap to clone-share via the inner `Arc`.
#[derive(Debug, Clone)]
pub struct TestHarness {
    registry: Arc<DriverRegistry>,
}

impl TestHarness {
    /// Create a harness over a registry
    pub fn new(registry: Arc<DriverRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry
    pub fn registry(&self) -> &Arc<DriverRegistry> {
        &self.registry
    }

    /// Suite start: reset thread bindings
    pub fn on_suite_start(&self) {
        self.registry.initialize();
    }

    /// Test end: clear the calling thread's session state
    ///
    /// Never fails; a reset error is logged and the session stays usable (or
    /// gets torn down at suite end like every other).
    pub fn on_test_end(&self) {
        if let Err(e) = self.registry.reset_state() {
            warn!(error = %e, "failed to reset session state after test");
        }
    }

    /// Suite end: quit every session ever created during the run
    pub fn on_suite_end(&self) {
        self.registry.shutdown_all();
    }
}
