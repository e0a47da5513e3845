//! Volume and mute state for scare playback

/// Level restored on unmute when no usable level was remembered
const FALLBACK_LEVEL: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Volume {
    level: f32,
    muted: bool,
    /// Last non-zero level, restored on unmute
    last_level: f32,
}

impl Volume {
    pub fn new(level: f32) -> Self {
        let mut volume = Volume {
            level: 1.0,
            muted: false,
            last_level: 1.0,
        };
        volume.set_level(level);
        volume
    }

    /// Flip mute. Unmuting restores the remembered level (or 0.7 when there is none).
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.muted = false;
            self.level = if self.last_level > 0.0 {
                self.last_level
            } else {
                FALLBACK_LEVEL
            };
            self.last_level = self.level;
        } else {
            self.last_level = self.level;
            self.muted = true;
        }
    }

    /// Set the level, clamped to 0.0-1.0. Zero mutes; anything else unmutes.
    pub fn set_level(&mut self, level: f32) {
        let level = level.clamp(0.0, 1.0);
        self.level = level;
        if level == 0.0 {
            self.muted = true;
        } else {
            self.muted = false;
            self.last_level = level;
        }
    }

    pub fn step(&mut self, delta: f32) {
        let base = if self.muted { 0.0 } else { self.level };
        self.set_level(base + delta);
    }

    /// Level actually handed to the player
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective level as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.effective() * 100.0).round() as u32
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_restores_previous_level() {
        let mut volume = Volume::new(0.4);
        volume.toggle_mute();
        assert!(volume.is_muted());
        assert_eq!(volume.effective(), 0.0);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert_eq!(volume.effective(), 0.4);
    }

    #[test]
    fn test_zero_level_mutes_and_unmute_falls_back() {
        let mut volume = Volume::new(0.0);
        assert!(volume.is_muted());
        volume.toggle_mute();
        assert_eq!(volume.effective(), 1.0);

        let mut volume = Volume {
            level: 0.0,
            muted: true,
            last_level: 0.0,
        };
        volume.toggle_mute();
        assert_eq!(volume.effective(), FALLBACK_LEVEL);
    }

    #[test]
    fn test_step_clamps_and_unmutes() {
        let mut volume = Volume::new(0.9);
        volume.step(0.5);
        assert_eq!(volume.percent(), 100);

        volume.toggle_mute();
        volume.step(0.1);
        assert!(!volume.is_muted());
        assert_eq!(volume.percent(), 10);

        volume.step(-0.5);
        assert!(volume.is_muted());
        assert_eq!(volume.percent(), 0);
    }
}
