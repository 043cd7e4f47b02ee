//! Browser selection and capabilities
//!
//! This module owns the closed set of supported browsers, the resolution of
//! a configured browser name into a [`BrowserChoice`], and the capability
//! descriptors handed to session backends.

pub mod capabilities;
pub mod kind;

pub use capabilities::Capabilities;
pub use kind::{BrowserChoice, BrowserType, FallbackReason};
