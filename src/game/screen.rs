//! Screen flow: main menu, trick (scare) and treat (knock game)
//!
//! `Main --trick--> Scare`, `Main --treat--> Treat`, both back to `Main`.
//! The treat controller lives only while the treat screen is shown.

use crate::config::{Config, PlayerConfig};
use crate::game::scare::{self, PlayError, Scare, ScareReel};
use crate::game::treat::TreatScreen;
use crate::game::volume::Volume;
use rand::Rng;
use std::process::{Child, ExitStatus};
use tracing::{info, warn};

/// Result of choosing a trick
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScareOutcome {
    /// Player launched
    Playing(Scare),
    /// No player configured; the scare is only announced
    Announced(Scare),
    /// Playback could not start
    Failed(String),
}

#[derive(Clone, Debug)]
pub enum Screen {
    Main,
    Scare(ScareOutcome),
    Treat(TreatScreen),
}

/// Whole game session
pub struct Game {
    screen: Screen,
    reel: ScareReel,
    player: Option<PlayerConfig>,
    volume: Volume,
    fail_reset_delay_ms: u64,
    /// Running scare player, stopped when leaving the scare screen
    playing: Option<Child>,
}

impl Game {
    pub fn new(config: &Config) -> Self {
        Game {
            screen: Screen::Main,
            reel: ScareReel::new(&config.media_dir, &config.scares),
            player: config.player.clone(),
            volume: Volume::new(config.volume),
            fail_reset_delay_ms: config.fail_reset_delay_ms,
            playing: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Treat controller, if the treat screen is shown
    pub fn treat_mut(&mut self) -> Option<&mut TreatScreen> {
        match &mut self.screen {
            Screen::Treat(treat) => Some(treat),
            _ => None,
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn volume_mut(&mut self) -> &mut Volume {
        &mut self.volume
    }

    /// Pick a random scare and start it, stopping any scare still playing
    pub fn show_trick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.stop_player();
        let outcome = match self.reel.pick(rng) {
            None => ScareOutcome::Failed(PlayError::EmptyReel.to_string()),
            Some(chosen) => {
                let chosen = chosen.clone();
                match &self.player {
                    None => {
                        info!(scare = %chosen.name, "no player configured");
                        ScareOutcome::Announced(chosen)
                    }
                    Some(player) => match scare::play(player, &chosen, &self.volume) {
                        Ok(child) => {
                            self.playing = Some(child);
                            ScareOutcome::Playing(chosen)
                        }
                        Err(e) => {
                            warn!(error = %e, "scare playback failed");
                            ScareOutcome::Failed(e.to_string())
                        }
                    },
                }
            }
        };
        self.screen = Screen::Scare(outcome);
    }

    /// Enter the treat screen with a fresh knock attempt
    pub fn show_treat(&mut self, now_ms: u64) {
        self.screen = Screen::Treat(TreatScreen::enter(now_ms, self.fail_reset_delay_ms));
    }

    pub fn go_back(&mut self) {
        self.stop_player();
        self.screen = Screen::Main;
    }

    /// Stop and reap the scare player, if one was started
    pub fn stop_player(&mut self) -> Option<ExitStatus> {
        let child = self.playing.take()?;
        match scare::stop(child) {
            Ok(status) => Some(status),
            Err(e) => {
                warn!(error = %e, "failed to stop scare player");
                None
            }
        }
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.stop_player();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knock::RecognizerState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_trick_without_player_announces() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("boo.mp4"), b"").unwrap();
        let config = Config {
            media_dir: dir.path().to_path_buf(),
            scares: vec!["boo.mp4".into()],
            ..Config::default()
        };
        let mut game = Game::new(&config);
        game.show_trick(&mut StdRng::seed_from_u64(0));

        match game.screen() {
            Screen::Scare(ScareOutcome::Announced(scare)) => assert_eq!(scare.name, "boo.mp4"),
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn test_trick_with_empty_reel_fails() {
        let config = Config {
            scares: vec![],
            ..Config::default()
        };
        let mut game = Game::new(&config);
        game.show_trick(&mut StdRng::seed_from_u64(0));
        assert!(matches!(
            game.screen(),
            Screen::Scare(ScareOutcome::Failed(_))
        ));
    }

    #[test]
    fn test_trick_with_missing_video_fails() {
        let dir = tempdir().unwrap();
        let config = Config {
            media_dir: dir.path().to_path_buf(),
            player: Some(PlayerConfig {
                command: "mpv".into(),
                args: vec!["{file}".into()],
            }),
            ..Config::default()
        };
        let mut game = Game::new(&config);
        game.show_trick(&mut StdRng::seed_from_u64(0));
        assert!(matches!(
            game.screen(),
            Screen::Scare(ScareOutcome::Failed(_))
        ));
    }

    #[test]
    fn test_treat_entry_and_back() {
        let mut game = Game::new(&Config::default());
        assert!(game.treat_mut().is_none());

        game.show_treat(500);
        let treat = game.treat_mut().unwrap();
        assert_eq!(treat.state(), RecognizerState::Idle);
        treat.tap(600);
        assert_eq!(treat.state(), RecognizerState::InProgress(1));

        game.go_back();
        assert!(matches!(game.screen(), Screen::Main));

        game.show_treat(9_000);
        assert_eq!(game.treat_mut().unwrap().state(), RecognizerState::Idle);
    }

    #[cfg(unix)]
    fn sleeping_player_config(dir: &std::path::Path) -> Config {
        fs::write(dir.join("boo.mp4"), b"").unwrap();
        Config {
            media_dir: dir.to_path_buf(),
            scares: vec!["boo.mp4".into()],
            player: Some(PlayerConfig {
                command: "sleep".into(),
                args: vec!["30".into()],
            }),
            ..Config::default()
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_back_stops_player() {
        let dir = tempdir().unwrap();
        let mut game = Game::new(&sleeping_player_config(dir.path()));
        game.show_trick(&mut StdRng::seed_from_u64(0));
        assert!(matches!(
            game.screen(),
            Screen::Scare(ScareOutcome::Playing(_))
        ));

        game.go_back();
        assert!(matches!(game.screen(), Screen::Main));
        assert!(game.stop_player().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_trick_replaces_player() {
        let dir = tempdir().unwrap();
        let mut game = Game::new(&sleeping_player_config(dir.path()));
        let mut rng = StdRng::seed_from_u64(0);
        game.show_trick(&mut rng);
        game.show_trick(&mut rng);

        let status = game.stop_player().unwrap();
        assert!(!status.success());
        assert!(game.stop_player().is_none());
    }
}
