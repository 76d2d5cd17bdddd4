//! Fuzz target that triggers a slow-unit finding.
//!
//! Any non-empty input blocks the target for ~10 seconds, which should
//! trip the slow-input watchdog on the first interesting run. The empty
//! input returns immediately.
//!
//! Run with:
//!   cargo +nightly fuzz run slow_input -- -report_slow_units=1 -runs=1

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::hang;

fuzz_target!(|data: &[u8]| {
    hang::slow(data.len());
});
