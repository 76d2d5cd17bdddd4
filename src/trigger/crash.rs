//! Hard-crash triggers: faults that kill the process outright rather than
//! being caught by a heap sanitizer.

use std::hint::black_box;

/// Dereferences a null pointer.
///
/// Reported as `SEGV on unknown address 0x000000000000` under a sanitizer,
/// or a plain segmentation fault without one.
pub fn segfault(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let null = std::ptr::null::<u8>();
    let value = unsafe { null.read_volatile() };
    black_box(value);
}

/// Panics unconditionally on non-empty input.
///
/// The Rust-native fuzzer finding: libFuzzer's panic hook turns this into
/// an abort with the panic message in the crash report.
pub fn panic_on_input(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    panic!("tripwire: deliberate panic on {}-byte input", input.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segfault_ignores_empty_input() {
        segfault(b"");
    }

    #[test]
    fn panic_ignores_empty_input() {
        panic_on_input(b"");
    }

    #[test]
    #[should_panic(expected = "deliberate panic")]
    fn panic_fires_on_non_empty_input() {
        panic_on_input(b"A");
    }
}
