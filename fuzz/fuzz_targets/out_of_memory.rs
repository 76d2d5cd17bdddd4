//! Fuzz target that grows touched heap memory without bound, reported by
//! libFuzzer once the process crosses -rss_limit_mb.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::trigger::resource;

fuzz_target!(|data: &[u8]| {
    resource::exhaust_memory(data);
});
