//! Fuzz target that dereferences a null pointer on any non-empty input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::crash;

fuzz_target!(|data: &[u8]| {
    crash::segfault(data);
});
