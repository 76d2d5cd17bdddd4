//! Fuzz target that spins forever on any non-empty input, tripping the
//! hard -timeout deadline.
//!
//! Run with:
//!   cargo +nightly fuzz run timeout -- -timeout=1 -runs=-1

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::hang;

fuzz_target!(|data: &[u8]| {
    hang::spin(data);
});
