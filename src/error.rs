use thiserror::Error;

use crate::trigger;

/// The main error type for tripwire operations.
///
/// Only the CLI surface returns errors. The triggers themselves never do:
/// their faults reach the observing harness as sanitizer traps, panics, or
/// watchdog timeouts, never as `Result`s.
#[derive(Debug, Error)]
pub enum TripwireError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown trigger '{name}' (known triggers: {})", trigger::known_names().join(", "))]
    UnknownTrigger { name: String },

    #[error("Failed to encode trigger listing as JSON: {0}")]
    ListingEncode(#[source] serde_json::Error),
}
