//! Driver Pool CLI
//!
//! Resolves the configured browser, prints the host environment, and can
//! smoke-test a launch/quit cycle against the chromium backend.

use std::sync::Arc;

use clap::Parser;
use sysinfo::System;

use driver_pool::{BrowserChoice, BrowserType, DriverConfig, DriverRegistry, TestHarness};

/// Driver pool environment check
#[derive(Parser, Debug)]
#[command(name = "driver-pool")]
#[command(version)]
#[command(about = "Per-thread browser driver pool for parallel test suites")]
struct Args {
    /// Browser to drive (chrome, firefox, edge, safari, opera, ie);
    /// falls back to $BROWSER, then to the default
    #[arg(short, long)]
    browser: Option<String>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Path to the browser executable
    #[arg(long)]
    browser_path: Option<String>,

    /// Launch one session and quit it again
    #[arg(long)]
    smoke: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = DriverConfig::from_env();
    if args.browser.is_some() {
        config.browser = args.browser;
    }
    if args.headed {
        config.headless = false;
    }
    if args.browser_path.is_some() {
        config.browser_path = args.browser_path;
    }

    let choice = BrowserType::resolve(config.browser.as_deref());
    let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());

    println!("Selected browser:  {}", choice.browser());
    if let BrowserChoice::Defaulted { ref reason, .. } = choice {
        println!("  (defaulted: {reason})");
    }
    println!("Operating system:  {os}");
    println!("Architecture:      {}", System::cpu_arch());
    println!("Headless:          {}", config.headless);

    if args.smoke {
        let registry = Arc::new(DriverRegistry::chromium(config));
        let harness = TestHarness::new(Arc::clone(&registry));

        harness.on_suite_start();
        registry.with_session(|session| {
            println!("Session launched:  {}", session.id());
            Ok(())
        })?;
        harness.on_test_end();
        harness.on_suite_end();
        println!("Smoke test passed.");
    }

    Ok(())
}
