//! Fuzz target that triggers a heap buffer overflow.
//!
//! The input goes through the data provider's random-length string
//! decoding, then one byte past a heap buffer is read. Any non-empty
//! decoded string must be flagged by AddressSanitizer; the empty input
//! must not, so the fuzzer's first run stays clean and the finding is
//! attributed to the triggering input.
//!
//! Run with:
//!   cargo +nightly fuzz run heap_buffer_overflow

#![no_main]

use libfuzzer_sys::fuzz_target;
use tripwire::provider::DataProvider;
use tripwire::trigger::memory;

fuzz_target!(|data: &[u8]| {
    let mut provider = DataProvider::new(data);
    let input = provider.consume_remaining_as_string();
    memory::overflow(&input);
});
