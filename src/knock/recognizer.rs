//! Knock recognizer state machine
//!
//! Maintains:
//! - The knock sequence of the current attempt (at most 5 taps)
//! - Timestamp of the previous tap
//!
//! `Idle --tap--> InProgress(1..4) --tap--> Success | Failed`. Both terminal
//! states hold until `reset`; extra taps are ignored.

use super::pattern::{matches_secret, KnockKind, PATTERN_LEN};
use tracing::{debug, trace};

/// Snapshot of the recognizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    /// No taps yet in the current attempt
    Idle,
    /// 1-4 taps recorded
    InProgress(usize),
    /// 5 taps matching the secret
    Success,
    /// 5 taps, mismatch
    Failed,
}

/// Outcome of a single `record_tap` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognitionResult {
    /// Tap accepted; carries the sequence length so far (1-4)
    InProgress(usize),
    /// Fifth tap completed the secret pattern
    Success,
    /// Fifth tap completed a wrong pattern
    Failed,
    /// Attempt already complete; tap dropped until `reset`
    Ignored,
}

/// Classifies timestamped taps and matches them against the secret pattern
#[derive(Clone, Debug)]
pub struct KnockRecognizer {
    /// Classifications recorded in this attempt
    sequence: Vec<KnockKind>,
    /// Timestamp (ms) of the previous tap, or of the last reset
    last_knock_ms: u64,
}

impl KnockRecognizer {
    /// Create a recognizer in the idle state, anchored at `now_ms`
    pub fn new(now_ms: u64) -> Self {
        KnockRecognizer {
            sequence: Vec::with_capacity(PATTERN_LEN),
            last_knock_ms: now_ms,
        }
    }

    /// Record one tap.
    ///
    /// Timestamps must be non-decreasing within an attempt; an earlier
    /// timestamp is treated as a zero gap.
    pub fn record_tap(&mut self, now_ms: u64) -> RecognitionResult {
        if self.sequence.len() >= PATTERN_LEN {
            debug!(now_ms, "tap ignored, attempt already complete");
            return RecognitionResult::Ignored;
        }

        let index = self.sequence.len();
        let since_previous = now_ms.saturating_sub(self.last_knock_ms);
        let kind = KnockKind::classify(index, since_previous);
        trace!(index, since_previous, kind = kind.as_str(), "knock classified");

        self.sequence.push(kind);
        self.last_knock_ms = now_ms;

        match self.current_state() {
            RecognizerState::Success => {
                debug!("secret pattern matched");
                RecognitionResult::Success
            }
            RecognizerState::Failed => {
                debug!(sequence = ?self.sequence, "pattern mismatch");
                RecognitionResult::Failed
            }
            _ => RecognitionResult::InProgress(self.sequence.len()),
        }
    }

    /// Start a fresh attempt; the next gap is measured from `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.sequence.clear();
        self.last_knock_ms = now_ms;
    }

    /// Current state, derived from the recorded sequence
    pub fn current_state(&self) -> RecognizerState {
        match self.sequence.len() {
            0 => RecognizerState::Idle,
            n if n < PATTERN_LEN => RecognizerState::InProgress(n),
            _ if matches_secret(&self.sequence) => RecognizerState::Success,
            _ => RecognizerState::Failed,
        }
    }

    /// Classifications recorded so far in this attempt
    pub fn sequence(&self) -> &[KnockKind] {
        &self.sequence
    }
}
