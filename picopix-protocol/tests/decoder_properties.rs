//! Property tests for the keystroke decoder

use picopix_hal::ByteSource;
use picopix_protocol::{InputDecoder, SequencePolicy, UiEvent};
use proptest::prelude::*;

struct Script {
    bytes: Vec<u8>,
    pos: usize,
}

impl Script {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl ByteSource for Script {
    fn poll_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

fn drain(decoder: &mut InputDecoder, bytes: &[u8], events: &mut Vec<UiEvent>) {
    let mut source = Script::new(bytes);
    loop {
        let decoded = decoder.poll(&mut source);
        if decoded.consumed == 0 {
            break;
        }
        events.extend(decoded.event);
    }
}

proptest! {
    #[test]
    fn test_escape_then_non_bracket_consumes_two(second in any::<u8>().prop_filter("not '['", |b| *b != b'[')) {
        let mut decoder = InputDecoder::default();
        let mut source = Script::new(&[0x1b, second, b's']);
        let decoded = decoder.poll(&mut source);
        prop_assert_eq!(decoded.event, None);
        prop_assert_eq!(decoded.consumed, 2);
    }

    #[test]
    fn test_plain_key_consumes_one(key in any::<u8>().prop_filter("not ESC", |b| *b != 0x1b)) {
        let mut decoder = InputDecoder::default();
        let mut source = Script::new(&[key, b'r']);
        let decoded = decoder.poll(&mut source);
        prop_assert_eq!(decoded.event, Some(UiEvent::from_key(key)));
        prop_assert_eq!(decoded.consumed, 1);
    }

    #[test]
    fn test_consumption_never_exceeds_three(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut decoder = InputDecoder::new(SequencePolicy::DropIncomplete);
        let mut source = Script::new(&bytes);
        let mut total = 0;
        loop {
            let decoded = decoder.poll(&mut source);
            prop_assert!(decoded.consumed <= 3);
            if decoded.consumed == 0 {
                break;
            }
            total += decoded.consumed;
        }
        prop_assert_eq!(total, bytes.len());
    }

    #[test]
    fn test_resume_matches_unsplit_stream(
        bytes in proptest::collection::vec(prop_oneof![Just(0x1bu8), Just(b'['), Just(b'A'), Just(b'B'), Just(b'\t'), Just(b'r')], 0..24),
        split in 0usize..24,
    ) {
        // Decoding a stream in two chunks with Resume gives the same events
        // as decoding it whole.
        let split = split.min(bytes.len());

        let mut whole = InputDecoder::new(SequencePolicy::Resume);
        let mut expected = Vec::new();
        drain(&mut whole, &bytes, &mut expected);

        let mut chunked = InputDecoder::new(SequencePolicy::Resume);
        let mut actual = Vec::new();
        drain(&mut chunked, &bytes[..split], &mut actual);
        drain(&mut chunked, &bytes[split..], &mut actual);

        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_up_sequence_yields_single_event() {
    let mut decoder = InputDecoder::default();
    let mut source = Script::new(b"\x1b[A");
    let decoded = decoder.poll(&mut source);
    assert_eq!(decoded.event, Some(UiEvent::MoveSelectionUp));
    assert_eq!(decoded.consumed, 3);
    assert_eq!(decoder.poll(&mut source).consumed, 0);
}
