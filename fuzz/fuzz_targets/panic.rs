//! Fuzz target that panics on any non-empty input, the Rust-native
//! fuzzer finding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::crash;

fuzz_target!(|data: &[u8]| {
    crash::panic_on_input(data);
});
