//! Capability descriptors for session construction
//!
//! A [`Capabilities`] value is the configuration bundle handed to a
//! [`crate::session::SessionBackend`] when a session is created. Each
//! [`BrowserType`](crate::browser::BrowserType) contributes its own default
//! recipe; run-level configuration is merged on top.
//!
//! Preferences are carried as loose JSON values. Backends apply what they can
//! express and ignore the rest, so the preference map doubles as the merge
//! point for future browser-specific knobs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::BrowserType;

/// Configuration bundle passed to session construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Run the browser without a visible window
    #[serde(default)]
    pub headless: bool,

    /// Path to the browser executable, if not auto-detected
    pub binary: Option<String>,

    /// Extra command-line arguments for the browser process
    #[serde(default)]
    pub args: Vec<String>,

    /// Browser preferences, keyed by preference name
    #[serde(default)]
    pub prefs: BTreeMap<String, Value>,
}

impl Capabilities {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the browser executable path
    pub fn binary<S: Into<String>>(mut self, path: S) -> Self {
        self.binary = Some(path.into());
        self
    }

    /// Append a command-line argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set a preference value
    pub fn pref<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.prefs.insert(key.into(), value.into());
        self
    }

    /// Merge another descriptor into this one
    ///
    /// Arguments are appended, preferences from `other` win on key conflicts,
    /// and `binary`/`headless` are overridden when `other` sets them.
    pub fn merge(mut self, other: Capabilities) -> Self {
        self.headless = other.headless || self.headless;
        if other.binary.is_some() {
            self.binary = other.binary;
        }
        self.args.extend(other.args);
        self.prefs.extend(other.prefs);
        self
    }
}

impl BrowserType {
    /// Default capability recipe for this browser
    ///
    /// Carries the per-browser hygiene flags: Chrome skips the default-browser
    /// prompt and disables the password manager, Internet Explorer gets the
    /// clean-session and hover workarounds. The rest start from an empty
    /// descriptor.
    pub fn default_capabilities(&self) -> Capabilities {
        match self {
            BrowserType::Chrome => Capabilities::new()
                .arg("--no-default-browser-check")
                .pref("profile.password_manager_enabled", false),
            BrowserType::InternetExplorer => Capabilities::new()
                .pref("ie.ensureCleanSession", true)
                .pref("ie.enablePersistentHover", true)
                .pref("ie.requireWindowFocus", true),
            BrowserType::Firefox
            | BrowserType::Edge
            | BrowserType::Safari
            | BrowserType::Opera => Capabilities::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_builder() {
        let caps = Capabilities::new()
            .headless(true)
            .binary("/usr/bin/chromium")
            .arg("--disable-gpu")
            .pref("homepage", "about:blank");

        assert!(caps.headless);
        assert_eq!(caps.binary.as_deref(), Some("/usr/bin/chromium"));
        assert_eq!(caps.args, vec!["--disable-gpu"]);
        assert_eq!(caps.prefs["homepage"], Value::from("about:blank"));
    }

    #[test]
    fn test_merge_appends_args_and_overrides_prefs() {
        let base = Capabilities::new()
            .arg("--a")
            .pref("shared", 1)
            .pref("base_only", true);
        let overlay = Capabilities::new()
            .headless(true)
            .arg("--b")
            .pref("shared", 2);

        let merged = base.merge(overlay);
        assert!(merged.headless);
        assert_eq!(merged.args, vec!["--a", "--b"]);
        assert_eq!(merged.prefs["shared"], Value::from(2));
        assert_eq!(merged.prefs["base_only"], Value::from(true));
    }

    #[test]
    fn test_chrome_defaults() {
        let caps = BrowserType::Chrome.default_capabilities();
        assert!(caps.args.contains(&"--no-default-browser-check".to_string()));
        assert_eq!(
            caps.prefs["profile.password_manager_enabled"],
            Value::from(false)
        );
    }

    #[test]
    fn test_plain_browsers_start_empty() {
        for browser in [BrowserType::Firefox, BrowserType::Safari, BrowserType::Opera] {
            let caps = browser.default_capabilities();
            assert!(caps.args.is_empty());
            assert!(caps.prefs.is_empty());
        }
    }
}
