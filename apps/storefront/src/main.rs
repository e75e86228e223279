//! # Storefront Entry Point
//!
//! ```text
//! intents.ndjson ──► storefront [config.toml] ──► responses.ndjson
//!                          │
//!                          └──► logs on stderr
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    storefront_lib::run()
}
