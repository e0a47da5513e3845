//! Knock recognition: tap classification and secret-pattern matching
//!
//! # Components
//! - `pattern.rs`: KnockKind classification and the secret sequence
//! - `recognizer.rs`: KnockRecognizer state machine driven by timestamped taps

pub mod pattern;
pub mod recognizer;

pub use pattern::PATTERN_LEN;
pub use recognizer::{KnockRecognizer, RecognitionResult, RecognizerState};
