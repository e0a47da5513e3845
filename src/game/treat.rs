//! Treat screen controller
//!
//! Owns the knock recognizer for one visit to the treat screen and turns
//! recognition results into UI reactions. A failed attempt stays visible
//! for `fail_reset_delay_ms` and is then cleared by `tick`.

use crate::knock::{KnockRecognizer, RecognitionResult, RecognizerState};
use tracing::debug;

/// What the UI should show after a tap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreatReaction {
    /// Light progress dot `n` (1-based)
    LightDot(usize),
    /// Pattern matched: show the reward
    Celebrate,
    /// Pattern wrong: shake, then reset automatically
    Shake,
    /// Reward consumed; a fresh attempt started
    Restarted,
    /// Nothing to show
    Ignored,
}

#[derive(Clone, Debug)]
pub struct TreatScreen {
    recognizer: KnockRecognizer,
    fail_reset_delay_ms: u64,
    /// When the pending post-failure reset is due
    reset_due_ms: Option<u64>,
}

impl TreatScreen {
    /// Enter the treat screen at `now_ms` with a fresh attempt
    pub fn enter(now_ms: u64, fail_reset_delay_ms: u64) -> Self {
        debug!(now_ms, "entering treat screen");
        TreatScreen {
            recognizer: KnockRecognizer::new(now_ms),
            fail_reset_delay_ms,
            reset_due_ms: None,
        }
    }

    /// Record a knock. A tap on a matched pattern consumes the reward and
    /// starts over instead of being counted.
    pub fn tap(&mut self, now_ms: u64) -> TreatReaction {
        if self.recognizer.current_state() == RecognizerState::Success {
            debug!(now_ms, "reward consumed, knocking again");
            self.reset_due_ms = None;
            self.recognizer.reset(now_ms);
            return TreatReaction::Restarted;
        }

        match self.recognizer.record_tap(now_ms) {
            RecognitionResult::InProgress(n) => TreatReaction::LightDot(n),
            RecognitionResult::Success => TreatReaction::Celebrate,
            RecognitionResult::Failed => {
                self.reset_due_ms = Some(now_ms.saturating_add(self.fail_reset_delay_ms));
                TreatReaction::Shake
            }
            RecognitionResult::Ignored => TreatReaction::Ignored,
        }
    }

    /// Run the delayed reset after a failure. Returns true if it happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.reset_due_ms {
            Some(due) if now_ms >= due => {
                debug!(now_ms, "clearing failed attempt");
                self.reset_due_ms = None;
                self.recognizer.reset(now_ms);
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> RecognizerState {
        self.recognizer.current_state()
    }

    /// Number of progress dots to light
    pub fn lit_dots(&self) -> usize {
        self.recognizer.sequence().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_for_winning_attempt() {
        let mut screen = TreatScreen::enter(0, 1000);
        assert_eq!(screen.tap(0), TreatReaction::LightDot(1));
        assert_eq!(screen.tap(150), TreatReaction::LightDot(2));
        assert_eq!(screen.tap(300), TreatReaction::LightDot(3));
        assert_eq!(screen.tap(1_200), TreatReaction::LightDot(4));
        assert_eq!(screen.tap(2_000), TreatReaction::Celebrate);
        assert_eq!(screen.lit_dots(), 5);
        assert!(!screen.tick(10_000));
        assert_eq!(screen.state(), RecognizerState::Success);
    }

    #[test]
    fn test_failure_resets_after_delay() {
        let mut screen = TreatScreen::enter(0, 1000);
        for t in [0, 100, 200, 300] {
            screen.tap(t);
        }
        assert_eq!(screen.tap(400), TreatReaction::Shake);
        assert_eq!(screen.state(), RecognizerState::Failed);

        assert_eq!(screen.tap(500), TreatReaction::Ignored);
        assert!(!screen.tick(1_399));
        assert_eq!(screen.state(), RecognizerState::Failed);

        assert!(screen.tick(1_400));
        assert_eq!(screen.state(), RecognizerState::Idle);
        assert_eq!(screen.lit_dots(), 0);
        assert!(!screen.tick(5_000));
    }

    #[test]
    fn test_tap_after_success_restarts() {
        let mut screen = TreatScreen::enter(0, 1000);
        for t in [0, 100, 200, 900] {
            screen.tap(t);
        }
        assert_eq!(screen.tap(1_600), TreatReaction::Celebrate);

        assert_eq!(screen.tap(3_000), TreatReaction::Restarted);
        assert_eq!(screen.state(), RecognizerState::Idle);
        assert_eq!(screen.lit_dots(), 0);

        for t in [3_100, 3_200, 3_300, 4_000] {
            screen.tap(t);
        }
        assert_eq!(screen.tap(4_700), TreatReaction::Celebrate);
    }

    #[test]
    fn test_tap_after_failure_does_not_restart() {
        let mut screen = TreatScreen::enter(0, 1000);
        for t in [0, 100, 200, 900] {
            screen.tap(t);
        }
        assert_eq!(screen.tap(1_000), TreatReaction::Shake);
        assert_eq!(screen.tap(1_100), TreatReaction::Ignored);
        assert_eq!(screen.state(), RecognizerState::Failed);
    }
}
