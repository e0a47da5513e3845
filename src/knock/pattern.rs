//! Knock classification
//!
//! Each tap is either part of the quick burst or arrives after a deliberate
//! pause. The secret is "3 quick knocks, pause, 2 knocks".

/// Gap (milliseconds) that must be strictly exceeded for a tap to count as paused
pub const PAUSE_THRESHOLD_MS: u64 = 600;

/// Number of taps in one attempt
pub const PATTERN_LEN: usize = 5;

/// Number of leading taps that always count as quick, however slow they are
pub const QUICK_BURST_LEN: usize = 3;

/// Kind of a single recorded tap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnockKind {
    /// Part of the rapid burst
    Quick,
    /// Arrived after a gap longer than the pause threshold
    Paused,
}

/// The sequence an attempt must reproduce
pub const SECRET_PATTERN: [KnockKind; PATTERN_LEN] = [
    KnockKind::Quick,
    KnockKind::Quick,
    KnockKind::Quick,
    KnockKind::Paused,
    KnockKind::Paused,
];

impl KnockKind {
    /// Classify the tap at `index` (0-based) given the gap since the previous tap.
    ///
    /// The first three taps are always `Quick`; only the last two are timing-gated.
    pub fn classify(index: usize, since_previous_ms: u64) -> Self {
        if index < QUICK_BURST_LEN || since_previous_ms <= PAUSE_THRESHOLD_MS {
            KnockKind::Quick
        } else {
            KnockKind::Paused
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnockKind::Quick => "quick",
            KnockKind::Paused => "paused",
        }
    }
}

/// Element-wise, order-sensitive comparison against the secret
pub fn matches_secret(sequence: &[KnockKind]) -> bool {
    sequence == SECRET_PATTERN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_is_always_quick() {
        for index in 0..QUICK_BURST_LEN {
            assert_eq!(KnockKind::classify(index, 0), KnockKind::Quick);
            assert_eq!(KnockKind::classify(index, 5_000), KnockKind::Quick);
        }
    }

    #[test]
    fn test_pause_threshold_is_strict() {
        assert_eq!(KnockKind::classify(3, 600), KnockKind::Quick);
        assert_eq!(KnockKind::classify(3, 601), KnockKind::Paused);
        assert_eq!(KnockKind::classify(4, 599), KnockKind::Quick);
        assert_eq!(KnockKind::classify(4, 700), KnockKind::Paused);
    }

    #[test]
    fn test_matches_secret() {
        assert!(matches_secret(&SECRET_PATTERN));
        assert!(!matches_secret(&[KnockKind::Quick; PATTERN_LEN]));
        assert!(!matches_secret(&SECRET_PATTERN[..4]));
    }
}
