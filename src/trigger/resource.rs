//! Resource exhaustion triggers.
//!
//! Neither function returns once fired: the harness is expected to kill the
//! process when its RSS limit or stack guard page is hit.

use std::hint::black_box;

/// Grows and touches heap memory without bound.
///
/// Reported by libFuzzer as `out-of-memory` once the process crosses
/// `-rss_limit_mb`. Memory is written, not just reserved, so lazy
/// allocation cannot hide the growth.
pub fn exhaust_memory(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let mut hoard: Vec<Vec<u8>> = Vec::new();
    loop {
        let mut chunk = vec![0u8; 1 << 20];
        chunk[0] = input[0];
        let last = chunk.len() - 1;
        chunk[last] = input[input.len() - 1];
        hoard.push(chunk);
        black_box(hoard.len());
    }
}

/// Recurses without bound, keeping a live frame at every depth.
///
/// Reported as `stack-overflow` by AddressSanitizer, or a segfault on the
/// guard page without instrumentation. The frame array and the use of the
/// recursive result prevent tail-call or inlining collapse.
pub fn exhaust_stack(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    black_box(descend(input[0] as u64));
}

// Recursing forever is the fixture.
#[allow(unconditional_recursion)]
#[inline(never)]
fn descend(depth: u64) -> u64 {
    let frame = [depth; 64];
    black_box(frame[0]).wrapping_add(descend(depth + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaust_memory_ignores_empty_input() {
        exhaust_memory(b"");
    }

    #[test]
    fn exhaust_stack_ignores_empty_input() {
        exhaust_stack(b"");
    }
}
