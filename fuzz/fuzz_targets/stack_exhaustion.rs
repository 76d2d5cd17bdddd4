//! Fuzz target that recurses until the stack guard page on any non-empty
//! input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::resource;

fuzz_target!(|data: &[u8]| {
    resource::exhaust_stack(data);
});
