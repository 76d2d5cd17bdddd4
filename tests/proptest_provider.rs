use proptest::prelude::*;
use tripwire::provider::DataProvider;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn string_decoding_never_panics_and_is_bounded(
        buffer in proptest_helpers::arb_fuzz_buffer(512),
        max_len in 0usize..600,
    ) {
        let mut provider = DataProvider::new(&buffer);
        let decoded = provider.consume_random_length_string(max_len);

        prop_assert!(decoded.len() <= max_len);
        // Every emitted byte consumed at least one input byte.
        prop_assert!(decoded.len() <= buffer.len() - provider.remaining());
        prop_assert!(provider.remaining() <= buffer.len());
    }

    #[test]
    fn string_decoding_is_deterministic(
        buffer in proptest_helpers::arb_fuzz_buffer(256),
    ) {
        let mut first = DataProvider::new(&buffer);
        let mut second = DataProvider::new(&buffer);

        prop_assert_eq!(
            first.consume_remaining_as_string(),
            second.consume_remaining_as_string()
        );
        prop_assert_eq!(first.remaining(), second.remaining());
    }

    #[test]
    fn backslash_free_buffers_decode_verbatim(
        buffer in prop::collection::vec(any::<u8>().prop_filter("no escapes", |b| *b != b'\\'), 0..256),
    ) {
        let mut provider = DataProvider::new(&buffer);
        let decoded = provider.consume_remaining_as_string();

        prop_assert_eq!(&decoded[..], &buffer[..]);
        prop_assert!(provider.is_empty());
    }

    #[test]
    fn consume_bytes_never_overreads(
        buffer in proptest_helpers::arb_fuzz_buffer(256),
        n in 0usize..512,
    ) {
        let mut provider = DataProvider::new(&buffer);
        let taken = provider.consume_bytes(n);

        prop_assert_eq!(taken.len(), n.min(buffer.len()));
        prop_assert_eq!(taken.len() + provider.remaining(), buffer.len());
        prop_assert_eq!(&taken[..], &buffer[..taken.len()]);
    }

    #[test]
    fn trigger_lookup_never_panics(name in "\\PC{0,32}") {
        let _ = tripwire::trigger::TriggerKind::from_name(&name);
    }
}
