//! Driver Pool - Per-Thread Browser Driver Pool for Parallel Test Suites
//!
//! This crate orchestrates browser automation sessions for a parallel test
//! run: it resolves a browser type from configuration, lazily creates one
//! session per test thread, and guarantees that every session is torn down
//! when the run ends — even when tests fail mid-run.
//!
//! # Features
//!
//! - **Per-thread sessions**: each test thread gets its own isolated browser
//!   session, lazily created on first access
//! - **Total browser resolution**: unknown or missing browser names fall back
//!   to the default with a visible, logged reason — never an error
//! - **Guaranteed teardown**: a pool of every session ever created is swept
//!   at suite end with continue-on-error semantics
//! - **Pluggable backends**: the automation client sits behind a trait; a
//!   chromiumoxide (CDP) backend ships in-tree
//!
//! # Architecture
//!
//! ```text
//! Test Runner ──▶ TestHarness ──▶ DriverRegistry
//!                                      │
//!                        ┌─────────────┴─────────────┐
//!                        ▼                           ▼
//!                 slots[ThreadId]              teardown pool
//!                        │                           │
//!                        ▼                           ▼
//!                 DriverFactory ──────────▶ SessionBackend (CDP)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use driver_pool::{DriverConfig, DriverRegistry, TestHarness};
//!
//! fn main() -> driver_pool::Result<()> {
//!     let registry = Arc::new(DriverRegistry::chromium(DriverConfig::from_env()));
//!     let harness = TestHarness::new(Arc::clone(&registry));
//!
//!     harness.on_suite_start();
//!
//!     // inside a test, on any thread:
//!     registry.with_session(|session| {
//!         println!("driving {}", session.browser());
//!         Ok(())
//!     })?;
//!
//!     harness.on_test_end();
//!     harness.on_suite_end();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod browser;
pub mod config;
pub mod error;
pub mod harness;
pub mod registry;
pub mod session;

// Re-exports for convenience
pub use backend::ChromiumBackend;
pub use browser::{BrowserChoice, BrowserType, Capabilities, FallbackReason};
pub use config::DriverConfig;
pub use error::{Error, Result, SessionError};
pub use harness::TestHarness;
pub use registry::{DriverFactory, DriverRegistry};
pub use session::{DriverSession, SessionBackend};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
