//! Heap memory-safety triggers.
//!
//! Every function here manufactures exactly one class of heap bug for a
//! sanitizer to flag. The access is the whole point: nothing is guarded,
//! recovered, or reported in-process. `read_volatile` keeps the faulting
//! access from being optimized away.
//!
//! Each trigger returns untouched on empty input, so that the harness can
//! attribute the fault to the concrete input that caused it.

use std::hint::black_box;

/// Reads one byte past the end of a heap buffer sized from the input.
///
/// Any non-empty input produces an out-of-bounds read that
/// AddressSanitizer reports as `heap-buffer-overflow`. Empty input returns
/// without touching memory.
pub fn overflow(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let buffer = input.to_vec();
    let past_end = unsafe { buffer.as_ptr().add(buffer.len()).read_volatile() };
    black_box(past_end);
}

/// Reads through a pointer into a freed heap allocation.
///
/// Reported by AddressSanitizer as `heap-use-after-free`.
pub fn use_after_free(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let buffer = input.to_vec().into_boxed_slice();
    let dangling = buffer.as_ptr();
    drop(buffer);
    let revived = unsafe { dangling.read_volatile() };
    black_box(revived);
}

/// Frees the same heap allocation twice.
///
/// Reported by AddressSanitizer as `attempting double-free`.
pub fn double_free(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let raw = Box::into_raw(Box::new(input[0]));
    unsafe {
        drop(Box::from_raw(raw));
        drop(Box::from_raw(raw));
    }
}

/// Leaks a heap copy of the input.
///
/// Reported by LeakSanitizer (`ASAN_OPTIONS=detect_leaks=1`) at process
/// exit as a direct leak of `input.len()` bytes.
pub fn leak(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    std::mem::forget(input.to_vec());
}
