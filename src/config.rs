//! Run-level configuration
//!
//! One configuration value matters to the pool: the browser name, read once
//! per factory from the `BROWSER` environment variable (or supplied
//! programmatically). The rest is glue that flows into the capability
//! descriptor: headless mode, an explicit executable path, extra browser
//! arguments.

use std::env;

/// Environment variable naming the browser to drive
pub const BROWSER_ENV: &str = "BROWSER";

/// Environment variable toggling headless mode ("false"/"0" disable it)
pub const HEADLESS_ENV: &str = "HEADLESS";

/// Configuration for a driver pool run
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Requested browser name; `None` selects the default browser
    pub browser: Option<String>,
    /// Run browsers without a visible window (default: true)
    pub headless: bool,
    /// Path to the browser executable (None = auto-detect)
    pub browser_path: Option<String>,
    /// Extra command-line arguments for every session
    pub extra_args: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            browser: None,
            headless: true,
            browser_path: None,
            extra_args: Vec::new(),
        }
    }
}

impl DriverConfig {
    /// Create a config builder
    pub fn builder() -> DriverConfigBuilder {
        DriverConfigBuilder::default()
    }

    /// Read configuration from the environment
    ///
    /// `BROWSER` names the browser; `HEADLESS=false` (or `0`) opts into a
    /// headed run. Unset variables leave the defaults in place.
    pub fn from_env() -> Self {
        let browser = env::var(BROWSER_ENV).ok().filter(|v| !v.trim().is_empty());
        let headless = match env::var(HEADLESS_ENV) {
            Ok(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0"),
            Err(_) => true,
        };
        Self {
            browser,
            headless,
            browser_path: None,
            extra_args: Vec::new(),
        }
    }
}

/// Builder for [`DriverConfig`]
#[derive(Debug, Default)]
pub struct DriverConfigBuilder {
    config: DriverConfig,
}

impl DriverConfigBuilder {
    /// Set the requested browser name
    pub fn browser<S: Into<String>>(mut self, name: S) -> Self {
        self.config.browser = Some(name.into());
        self
    }

    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Set the browser executable path
    pub fn browser_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.browser_path = Some(path.into());
        self
    }

    /// Add an extra browser argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.config.extra_args.push(arg.into());
        self
    }

    /// Build the config
    pub fn build(self) -> DriverConfig {
        self.config
    }
}
