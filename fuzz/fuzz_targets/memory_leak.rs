//! Fuzz target that leaks the input, reported by LeakSanitizer.
//!
//! Run with:
//!   ASAN_OPTIONS=detect_leaks=1 cargo +nightly fuzz run memory_leak

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::memory;

fuzz_target!(|data: &[u8]| {
    memory::leak(data);
});
