//! # Storefront Library
//!
//! Cart store for the storefront UI, plus a headless driver that feeds it
//! JSON intents from stdin.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore: snapshot + subscribers
//! │   └── config.rs   ◄─── StoreConfig: currency, drawer default
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── Cart intent commands
//! ├── driver.rs       ◄─── NDJSON intents in, cart responses out
//! └── error.rs        ◄─── StoreError + ApiError
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod state;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use state::{CartStore, StoreConfig};

/// Runs the headless storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for storefront crates), RUST_LOG overrides   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • argv[1], $STOREFRONT_CONFIG, or the platform config dir           │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Create the CartStore ─────────────────────────────────────────────► │
/// │     • Empty cart, drawer as configured                                  │
/// │     • One logging subscriber                                            │
/// │                                                                         │
/// │  4. Drive ────────────────────────────────────────────────────────────► │
/// │     • One intent per stdin line, one JSON response per stdout line     │
/// │     • Unrecognized mutation: exit with failure                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting storefront cart");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = StoreConfig::load_or_default(config_path);
    debug!(?config, "Store config loaded");

    let mut store = CartStore::with_config(&config);
    store.subscribe(|cart| {
        debug!(
            count = cart.count(),
            total = cart.total().cents(),
            is_open = cart.is_open(),
            "Cart changed"
        );
    });

    let stdin = io::stdin();
    let stdout = io::stdout();

    match driver::drive(&mut store, &config, stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            info!(
                applied = summary.applied,
                rejected = summary.rejected,
                "Input exhausted"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Storefront stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Show trace for the core crate only
/// - Default: INFO, DEBUG for the storefront crates
///
/// Logs go to stderr; stdout carries the response stream.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_lib=debug,storefront_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
