//! # Intent Driver
//!
//! Feeds newline-delimited JSON intents into a `CartStore` and writes one
//! JSON response per intent.
//!
//! ## Stream Format
//! ```text
//! stdin                                                   stdout
//! ─────                                                   ──────
//! {"type":"addItem","payload":{"id":1,...}}        ──►    {"items":[...],"count":1,...}
//! {"type":"removeItem","payload":7}                ──►    {"code":"CART_ERROR",...}
//! {"type":"emptyCart"}                             ──►    (stops: UnrecognizedMutation)
//! ```
//!
//! Blank lines are skipped. Recoverable failures are written as `ApiError`
//! lines and processing continues; a fatal one stops the driver and is
//! returned to the caller.

use std::io::{BufRead, Write};

use serde_json::Value;
use storefront_core::CartIntent;
use tracing::{debug, warn};

use crate::commands;
use crate::error::{ApiError, StoreError, StoreResult};
use crate::state::{CartStore, StoreConfig};

/// Counts for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveSummary {
    /// Intents that changed (or re-affirmed) the cart.
    pub applied: usize,

    /// Intents answered with an `ApiError` line.
    pub rejected: usize,
}

/// Decodes one intent line.
///
/// An unknown `type` tag is `UnrecognizedMutation`; a known tag with a bad
/// payload (or a line that is not an intent object at all) is
/// `MalformedIntent`.
pub fn parse_intent(line: &str) -> StoreResult<CartIntent> {
    let value: Value =
        serde_json::from_str(line).map_err(|e| StoreError::MalformedIntent(e.to_string()))?;

    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| StoreError::MalformedIntent("missing string field `type`".into()))?;

    if !CartIntent::TAGS.contains(&tag.as_str()) {
        return Err(StoreError::UnrecognizedMutation(tag));
    }

    serde_json::from_value(value)
        .map_err(|e| StoreError::MalformedIntent(format!("{}: {}", tag, e)))
}

/// Runs every intent from `input` against `store`.
///
/// ## Errors
/// Returns the first fatal error (unrecognized mutation, I/O failure). Intents
/// before it have already been applied and answered.
pub fn drive<R, W>(
    store: &mut CartStore,
    config: &StoreConfig,
    input: R,
    mut output: W,
) -> StoreResult<DriveSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = DriveSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let outcome = parse_intent(line).map(|intent| {
            debug!(line = line_no, intent = intent.kind(), "Read intent");
            commands::cart::dispatch(store, config, &intent)
        });

        let json = match outcome {
            Ok(Ok(response)) => {
                summary.applied += 1;
                serde_json::to_string(&response)?
            }
            Ok(Err(api_error)) => {
                summary.rejected += 1;
                serde_json::to_string(&api_error)?
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(line = line_no, "Skipping intent: {}", e);
                summary.rejected += 1;
                serde_json::to_string(&ApiError::from(e))?
            }
        };

        writeln!(output, "{}", json)?;
    }

    output.flush()?;
    Ok(summary)
}
