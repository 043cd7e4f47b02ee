//! Session backends
//!
//! Concrete implementations of [`crate::session::SessionBackend`]. The only
//! in-tree backend drives Chromium-family browsers over CDP via
//! chromiumoxide.

pub mod chromium;

pub use chromium::ChromiumBackend;
