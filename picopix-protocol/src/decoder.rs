//! Keystroke decoding
//!
//! Turns raw bytes from the serial link into [`UiEvent`]s. Escape sequences
//! are tracked by a small state machine:
//!
//! ```text
//! Idle ──ESC──▶ SawEscape ──'['──▶ SawBracket ──'A'/'B'──▶ event
//!                   │                    │
//!                   └──other──▶ dropped  └──other──▶ dropped
//! ```

use picopix_hal::ByteSource;

use crate::events::{UiEvent, CSI_BRACKET, KEY_ESCAPE};

/// What happens to an escape sequence that is cut off by an empty source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencePolicy {
    /// Forget the partial sequence. Its bytes are lost and the remainder is
    /// decoded as plain keys on the next poll.
    #[default]
    DropIncomplete,
    /// Keep the partial sequence and continue it on the next poll
    Resume,
}

/// Result of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    /// Event produced, if any
    pub event: Option<UiEvent>,
    /// Bytes taken from the source during this poll
    pub consumed: usize,
}

impl Decoded {
    const fn nothing(consumed: usize) -> Self {
        Self {
            event: None,
            consumed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum DecodeState {
    /// Waiting for a key or ESC
    Idle,
    /// Got ESC, waiting for '['
    SawEscape,
    /// Got ESC '[', waiting for the final byte
    SawBracket,
}

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Sequence complete
    Event(UiEvent),
    /// Sequence continues
    Pending,
    /// Sequence aborted, bytes dropped
    Discard,
}

/// Nonblocking keystroke decoder
///
/// Each call to [`poll`](Self::poll) yields at most one event and reads only
/// as many bytes as it takes to finish the current sequence.
#[derive(Debug, Clone)]
pub struct InputDecoder {
    state: DecodeState,
    policy: SequencePolicy,
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new(SequencePolicy::default())
    }
}

impl InputDecoder {
    /// Create a new decoder
    pub const fn new(policy: SequencePolicy) -> Self {
        Self {
            state: DecodeState::Idle,
            policy,
        }
    }

    /// Active policy
    pub fn policy(&self) -> SequencePolicy {
        self.policy
    }

    /// True while a partial escape sequence is being held across polls
    pub fn is_mid_sequence(&self) -> bool {
        self.state != DecodeState::Idle
    }

    /// Poll the source for at most one event
    ///
    /// Never waits: if the source runs dry mid-sequence, the poll ends with
    /// no event and the partial sequence is handled per the policy.
    pub fn poll<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Decoded {
        if self.policy == SequencePolicy::DropIncomplete {
            self.state = DecodeState::Idle;
        }

        let mut consumed = 0;
        loop {
            let Some(byte) = source.poll_byte() else {
                if self.policy == SequencePolicy::DropIncomplete {
                    self.state = DecodeState::Idle;
                }
                return Decoded::nothing(consumed);
            };
            consumed += 1;

            match self.feed(byte) {
                Step::Event(event) => {
                    return Decoded {
                        event: Some(event),
                        consumed,
                    }
                }
                Step::Discard => return Decoded::nothing(consumed),
                Step::Pending => {}
            }
        }
    }

    /// Feed one byte into the sequence state machine
    fn feed(&mut self, byte: u8) -> Step {
        match self.state {
            DecodeState::Idle => {
                if byte == KEY_ESCAPE {
                    self.state = DecodeState::SawEscape;
                    Step::Pending
                } else {
                    Step::Event(UiEvent::from_key(byte))
                }
            }
            DecodeState::SawEscape => {
                if byte == CSI_BRACKET {
                    self.state = DecodeState::SawBracket;
                    Step::Pending
                } else {
                    self.state = DecodeState::Idle;
                    Step::Discard
                }
            }
            DecodeState::SawBracket => {
                self.state = DecodeState::Idle;
                match UiEvent::from_csi_final(byte) {
                    Some(event) => Step::Event(event),
                    None => Step::Discard,
                }
            }
        }
    }
}
