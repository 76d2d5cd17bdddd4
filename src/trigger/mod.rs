//! Deliberate fault triggers.
//!
//! Each trigger is a fixture for one finding class a fuzzing harness is
//! expected to detect and report. Triggers never return errors: the fault
//! itself (sanitizer trap, panic, hang, or runaway allocation) is the
//! observable outcome, surfaced only to whatever instrumentation watches
//! the process.
//!
//! Every trigger returns untouched on empty input. A fuzzer runs the empty
//! input before anything interesting, and the guard keeps that first run
//! clean so the finding is attributed to the input that actually caused it.
//!
//! # Modules
//!
//! - [`memory`]: heap bugs for AddressSanitizer / LeakSanitizer
//! - [`crash`]: null dereference and the Rust-native panic
//! - [`resource`]: unbounded heap and stack growth
//! - [`hang`]: slow units and hard timeouts

pub mod crash;
pub mod hang;
pub mod memory;
pub mod resource;

use serde::Serialize;

use crate::error::TripwireError;

/// Every trigger the crate ships, one per finding class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    HeapBufferOverflow,
    HeapUseAfterFree,
    DoubleFree,
    MemoryLeak,
    SegmentationFault,
    Panic,
    OutOfMemory,
    StackExhaustion,
    SlowInput,
    Timeout,
}

/// All triggers, in listing order.
pub const ALL: [TriggerKind; 10] = [
    TriggerKind::HeapBufferOverflow,
    TriggerKind::HeapUseAfterFree,
    TriggerKind::DoubleFree,
    TriggerKind::MemoryLeak,
    TriggerKind::SegmentationFault,
    TriggerKind::Panic,
    TriggerKind::OutOfMemory,
    TriggerKind::StackExhaustion,
    TriggerKind::SlowInput,
    TriggerKind::Timeout,
];

/// Description of a trigger for the `list` command.
#[derive(Debug, Serialize)]
pub struct TriggerInfo {
    pub name: &'static str,
    pub expected_finding: &'static str,
    pub summary: &'static str,
}

impl TriggerKind {
    /// Stable identifier, used as the CLI argument and fuzz target name.
    pub fn name(self) -> &'static str {
        match self {
            TriggerKind::HeapBufferOverflow => "heap_buffer_overflow",
            TriggerKind::HeapUseAfterFree => "heap_use_after_free",
            TriggerKind::DoubleFree => "double_free",
            TriggerKind::MemoryLeak => "memory_leak",
            TriggerKind::SegmentationFault => "segmentation_fault",
            TriggerKind::Panic => "panic",
            TriggerKind::OutOfMemory => "out_of_memory",
            TriggerKind::StackExhaustion => "stack_exhaustion",
            TriggerKind::SlowInput => "slow_input",
            TriggerKind::Timeout => "timeout",
        }
    }

    /// Looks a trigger up by its stable identifier.
    pub fn from_name(name: &str) -> Result<Self, TripwireError> {
        ALL.into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| TripwireError::UnknownTrigger {
                name: name.to_string(),
            })
    }

    /// What the harness should report when this trigger fires.
    pub fn expected_finding(self) -> &'static str {
        match self {
            TriggerKind::HeapBufferOverflow => "heap-buffer-overflow (AddressSanitizer)",
            TriggerKind::HeapUseAfterFree => "heap-use-after-free (AddressSanitizer)",
            TriggerKind::DoubleFree => "attempting double-free (AddressSanitizer)",
            TriggerKind::MemoryLeak => "direct leak (LeakSanitizer)",
            TriggerKind::SegmentationFault => "SEGV on unknown address",
            TriggerKind::Panic => "panic / abort",
            TriggerKind::OutOfMemory => "out-of-memory (rss_limit_mb)",
            TriggerKind::StackExhaustion => "stack-overflow",
            TriggerKind::SlowInput => "slow input detected (report_slow_units)",
            TriggerKind::Timeout => "timeout",
        }
    }

    /// One-line description for the `list` command.
    pub fn summary(self) -> &'static str {
        match self {
            TriggerKind::HeapBufferOverflow => "reads one byte past a heap buffer",
            TriggerKind::HeapUseAfterFree => "reads a freed heap allocation",
            TriggerKind::DoubleFree => "frees the same allocation twice",
            TriggerKind::MemoryLeak => "leaks a heap copy of the input",
            TriggerKind::SegmentationFault => "dereferences a null pointer",
            TriggerKind::Panic => "panics on any non-empty input",
            TriggerKind::OutOfMemory => "grows touched heap memory without bound",
            TriggerKind::StackExhaustion => "recurses until the stack guard page",
            TriggerKind::SlowInput => "sleeps ~10s on any nonzero-length input",
            TriggerKind::Timeout => "spins forever on any non-empty input",
        }
    }

    /// Listing entry for this trigger.
    pub fn info(self) -> TriggerInfo {
        TriggerInfo {
            name: self.name(),
            expected_finding: self.expected_finding(),
            summary: self.summary(),
        }
    }

    /// Fires this trigger with the given input bytes.
    ///
    /// Empty input is a no-op for every trigger. For any non-empty input the
    /// call faults, hangs, or never returns, by design. `slow_input` maps
    /// the input length to its size argument.
    pub fn fire(self, input: &[u8]) {
        match self {
            TriggerKind::HeapBufferOverflow => memory::overflow(input),
            TriggerKind::HeapUseAfterFree => memory::use_after_free(input),
            TriggerKind::DoubleFree => memory::double_free(input),
            TriggerKind::MemoryLeak => memory::leak(input),
            TriggerKind::SegmentationFault => crash::segfault(input),
            TriggerKind::Panic => crash::panic_on_input(input),
            TriggerKind::OutOfMemory => resource::exhaust_memory(input),
            TriggerKind::StackExhaustion => resource::exhaust_stack(input),
            TriggerKind::SlowInput => hang::slow(input.len()),
            TriggerKind::Timeout => hang::spin(input),
        }
    }
}

/// Names of every known trigger, in listing order.
pub fn known_names() -> Vec<&'static str> {
    ALL.into_iter().map(TriggerKind::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips_every_trigger() {
        for kind in ALL {
            assert_eq!(TriggerKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        let err = TriggerKind::from_name("heap_buffer_overrun").unwrap_err();
        assert!(matches!(
            err,
            TripwireError::UnknownTrigger { name } if name == "heap_buffer_overrun"
        ));
    }

    #[test]
    fn names_are_unique() {
        let mut names = known_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn every_trigger_ignores_empty_input() {
        for kind in ALL {
            kind.fire(b"");
        }
    }

    #[test]
    fn info_is_json_encodable() {
        let json = serde_json::to_string(&TriggerKind::SlowInput.info()).unwrap();
        assert!(json.contains("\"name\":\"slow_input\""));
        assert!(json.contains("report_slow_units"));
    }
}
