//! Hang triggers: inputs that stall the target instead of crashing it.
//!
//! `slow` exists to trip a per-input slow-unit watchdog
//! (`-report_slow_units`); `spin` exists to trip the hard `-timeout`
//! deadline. Both block the calling thread synchronously and offer no
//! cancellation: they ARE the condition under test.

use std::hint::black_box;
use std::time::Duration;

/// How long `slow` blocks for any nonzero size. Longer than any sane
/// per-input fuzzing budget.
pub const SLOW_INPUT_DELAY: Duration = Duration::from_secs(10);

/// Blocks the calling thread for [`SLOW_INPUT_DELAY`] if `size` is nonzero.
///
/// Size zero returns immediately, so that the harness can attribute the
/// slow unit to the concrete input that caused it rather than to the empty
/// input it tries first.
pub fn slow(size: usize) {
    slow_for(size, SLOW_INPUT_DELAY);
}

fn slow_for(size: usize, delay: Duration) {
    if size == 0 {
        return;
    }

    std::thread::sleep(delay);
}

/// Spins forever on non-empty input.
///
/// Never returns; the harness's wall-clock timeout is the only way out.
pub fn spin(input: &[u8]) {
    if input.is_empty() {
        return;
    }

    loop {
        black_box(());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn slow_returns_immediately_for_size_zero() {
        let start = Instant::now();
        slow(0);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn slow_blocks_for_at_least_the_requested_delay() {
        let delay = Duration::from_millis(50);
        let start = Instant::now();
        slow_for(1, delay);
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn slow_delay_exceeds_typical_per_input_budgets() {
        assert!(SLOW_INPUT_DELAY >= Duration::from_secs(2));
    }

    #[test]
    fn spin_ignores_empty_input() {
        spin(b"");
    }
}
