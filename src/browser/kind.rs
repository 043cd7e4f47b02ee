//! Browser type selection
//!
//! The set of supported browsers is closed: every variant of [`BrowserType`]
//! maps to a capability recipe (see [`crate::browser::Capabilities`]) and is
//! handed to a [`crate::session::SessionBackend`] for construction.
//!
//! Resolution from a configuration string never fails. An unknown or missing
//! value falls back to [`BrowserType::DEFAULT`], and the fallback is a
//! visible branch in the returned [`BrowserChoice`] rather than a swallowed
//! error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    /// Google Chrome / Chromium
    #[default]
    Chrome,
    /// Mozilla Firefox
    Firefox,
    /// Microsoft Edge
    Edge,
    /// Apple Safari
    Safari,
    /// Opera
    Opera,
    /// Internet Explorer
    #[serde(rename = "ie")]
    InternetExplorer,
}

impl BrowserType {
    /// The browser used when configuration names no usable type
    pub const DEFAULT: BrowserType = BrowserType::Chrome;

    /// All supported browsers, in declaration order
    pub const ALL: [BrowserType; 6] = [
        BrowserType::Chrome,
        BrowserType::Firefox,
        BrowserType::Edge,
        BrowserType::Safari,
        BrowserType::Opera,
        BrowserType::InternetExplorer,
    ];

    /// Canonical lowercase identifier, as accepted in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserType::Chrome => "chrome",
            BrowserType::Firefox => "firefox",
            BrowserType::Edge => "edge",
            BrowserType::Safari => "safari",
            BrowserType::Opera => "opera",
            BrowserType::InternetExplorer => "ie",
        }
    }

    /// Look up a browser by name, case-insensitively
    pub fn from_name(name: &str) -> Option<BrowserType> {
        let normalized = name.trim().to_ascii_lowercase();
        BrowserType::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == normalized)
    }

    /// Whether this browser speaks CDP and can be driven by the chromium backend
    pub fn is_chromium_family(&self) -> bool {
        matches!(
            self,
            BrowserType::Chrome | BrowserType::Edge | BrowserType::Opera
        )
    }

    /// Resolve a configuration value into a browser choice
    ///
    /// This is total: unknown values and absent values both select
    /// [`BrowserType::DEFAULT`], each with its own [`FallbackReason`] so the
    /// two conditions stay distinguishable in diagnostics.
    pub fn resolve(value: Option<&str>) -> BrowserChoice {
        match value {
            Some(raw) => match BrowserType::from_name(raw) {
                Some(browser) => BrowserChoice::Resolved(browser),
                None => BrowserChoice::Defaulted {
                    browser: BrowserType::DEFAULT,
                    reason: FallbackReason::UnknownValue(raw.to_string()),
                },
            },
            None => BrowserChoice::Defaulted {
                browser: BrowserType::DEFAULT,
                reason: FallbackReason::NotSpecified,
            },
        }
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrowserType::from_name(s).ok_or_else(|| format!("unknown browser: {s}"))
    }
}

/// Why resolution fell back to the default browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// A value was provided but matched no known browser
    UnknownValue(String),
    /// No value was provided at all
    NotSpecified,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::UnknownValue(raw) => write!(f, "unknown driver '{raw}'"),
            FallbackReason::NotSpecified => f.write_str("no driver specified"),
        }
    }
}

/// The outcome of browser resolution
///
/// Either the configured value matched a known browser, or the default was
/// substituted. Callers that want strictness can branch on
/// [`BrowserChoice::is_defaulted`]; the pool itself never treats a fallback
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserChoice {
    /// The configured value named a known browser
    Resolved(BrowserType),
    /// The default browser was substituted
    Defaulted {
        /// The substituted browser (always [`BrowserType::DEFAULT`])
        browser: BrowserType,
        /// Why the substitution happened
        reason: FallbackReason,
    },
}

impl BrowserChoice {
    /// The browser that will actually be driven
    pub fn browser(&self) -> BrowserType {
        match self {
            BrowserChoice::Resolved(browser) => *browser,
            BrowserChoice::Defaulted { browser, .. } => *browser,
        }
    }

    /// Whether the default was substituted for the configured value
    pub fn is_defaulted(&self) -> bool {
        matches!(self, BrowserChoice::Defaulted { .. })
    }
}
