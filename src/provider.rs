//! Fuzz data provider.
//!
//! This module deterministically converts a raw fuzz byte buffer into
//! structured values, following the conventions of LLVM's
//! `FuzzedDataProvider`: byte sequences and strings are consumed from the
//! front of the buffer, and the same input buffer always yields the same
//! sequence of values.
//!
//! # Random-length strings
//!
//! [`DataProvider::consume_random_length_string`] reproduces the
//! `ConsumeRandomLengthString` escape rule so that corpus files recorded
//! against the C++ provider decode identically here:
//!
//! - a `\` byte followed by a second `\` emits a single `\`
//! - a `\` byte followed by anything else terminates the string
//!   (both bytes are consumed)
//! - every other byte is emitted as-is
//!
//! The returned value is a byte string, not UTF-8: fuzz inputs are arbitrary
//! bytes and the provider never rejects them.
//!
//! # Guarantees
//!
//! No method panics, for any buffer and any requested length. Consumption
//! never exceeds the bytes remaining, and each emitted output byte accounts
//! for at least one consumed input byte.

/// A deterministic cursor over a fuzz input buffer.
///
/// # Example
/// ```
/// use tripwire::provider::DataProvider;
///
/// let mut provider = DataProvider::new(b"ab\\\\cd");
/// let s = provider.consume_remaining_as_string();
/// assert_eq!(s, b"ab\\cd");
/// assert!(provider.is_empty());
/// ```
#[derive(Debug)]
pub struct DataProvider<'a> {
    data: &'a [u8],
}

impl<'a> DataProvider<'a> {
    /// Wraps a raw fuzz input buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes up to `n` bytes from the front of the buffer.
    ///
    /// Returns fewer than `n` bytes when the buffer runs out; never fails.
    pub fn consume_bytes(&mut self, n: usize) -> Vec<u8> {
        let take = n.min(self.data.len());
        let (head, rest) = self.data.split_at(take);
        self.data = rest;
        head.to_vec()
    }

    /// Consumes every remaining byte.
    pub fn consume_remaining_bytes(&mut self) -> Vec<u8> {
        self.consume_bytes(self.data.len())
    }

    /// Consumes a byte string of at most `max_len` bytes using the
    /// `ConsumeRandomLengthString` escape rule (see module docs).
    pub fn consume_random_length_string(&mut self, max_len: usize) -> Vec<u8> {
        let mut result = Vec::new();

        while result.len() < max_len {
            let Some(&next) = self.data.first() else {
                break;
            };
            self.data = &self.data[1..];

            if next == b'\\' {
                match self.data.first() {
                    Some(&b'\\') => {
                        self.data = &self.data[1..];
                        result.push(b'\\');
                    }
                    Some(_) => {
                        self.data = &self.data[1..];
                        break;
                    }
                    // Trailing lone backslash is emitted, matching the
                    // C++ provider.
                    None => result.push(next),
                }
            } else {
                result.push(next);
            }
        }

        result
    }

    /// Consumes a byte string bounded only by the bytes remaining.
    pub fn consume_remaining_as_string(&mut self) -> Vec<u8> {
        let max = self.data.len();
        self.consume_random_length_string(max)
    }
}
