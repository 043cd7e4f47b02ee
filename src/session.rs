//! Session trait seams
//!
//! The underlying automation client is opaque to the pool: all it needs is a
//! way to create a session for a browser type and a way to tear one down.
//! [`SessionBackend`] is the constructor side, [`DriverSession`] the live
//! handle. The crate ships a chromiumoxide-backed implementation in
//! [`crate::backend::chromium`]; test suites substitute their own.

use uuid::Uuid;

use crate::browser::{BrowserType, Capabilities};
use crate::error::Result;

/// A live browser automation session
///
/// Exactly one logical owner holds a session (its
/// [`DriverFactory`](crate::registry::DriverFactory)); the pool never clones
/// or shares one across threads. `quit` is called at most once per handle —
/// the owner clears its reference immediately after, so idempotence is
/// enforced one level up.
pub trait DriverSession: Send {
    /// Stable identifier for this session, unique within the process
    fn id(&self) -> Uuid;

    /// The browser this session is driving
    fn browser(&self) -> BrowserType;

    /// Clear all cookies without destroying the session
    ///
    /// Used between tests to reset the browser to a neutral state while
    /// keeping it warm for the next test on the same thread.
    fn delete_all_cookies(&mut self) -> Result<()>;

    /// Destroy the session and its browser process
    fn quit(&mut self) -> Result<()>;
}

/// Constructor side of the automation client
///
/// Implementations are shared across threads (the registry hands one
/// `Arc<dyn SessionBackend>` to every factory), so they must be `Send + Sync`
/// and treat `create` as a pure "launch and hand over ownership" operation.
pub trait SessionBackend: Send + Sync {
    /// Short name for diagnostics ("chromium", "mock", ...)
    fn name(&self) -> &'static str;

    /// Launch a new session for `browser` configured by `capabilities`
    ///
    /// A failure here is fatal for the calling test only; the pool's
    /// bookkeeping for other threads is unaffected.
    fn create(
        &self,
        browser: BrowserType,
        capabilities: &Capabilities,
    ) -> Result<Box<dyn DriverSession>>;
}
