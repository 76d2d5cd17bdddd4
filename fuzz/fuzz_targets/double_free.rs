//! Fuzz target that triggers a double free, reported by AddressSanitizer
//! on any non-empty input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::memory;

fuzz_target!(|data: &[u8]| {
    memory::double_free(data);
});
