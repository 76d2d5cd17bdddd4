//! Fuzz target that triggers a heap use-after-free, reported by
//! AddressSanitizer on any non-empty input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::memory;

fuzz_target!(|data: &[u8]| {
    memory::use_after_free(data);
});
