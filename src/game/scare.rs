//! Scare reel: random video selection and playback
//!
//! Features:
//! - Resolution of file names against the media directory
//! - Filtering to files that actually exist
//! - Uniform random choice
//! - Launch through an external player with `{file}` / `{volume}` placeholders

use crate::config::PlayerConfig;
use crate::game::volume::Volume;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("no scare videos configured")]
    EmptyReel,
    #[error("scare video not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to start player `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// One scare video
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scare {
    /// File name as configured
    pub name: String,
    /// Name resolved against the media directory
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ScareReel {
    scares: Vec<Scare>,
}

impl ScareReel {
    pub fn new(media_dir: &Path, names: &[String]) -> Self {
        let scares = names
            .iter()
            .map(|name| Scare {
                name: name.clone(),
                path: media_dir.join(name),
            })
            .collect();
        ScareReel { scares }
    }

    /// Scares whose file exists. Falls back to the whole reel when none do,
    /// so the missing file is reported at play time instead of silently skipped.
    pub fn available(&self) -> Vec<&Scare> {
        let present: Vec<&Scare> = self.scares.iter().filter(|s| s.path.is_file()).collect();
        if present.is_empty() {
            warn!(
                configured = self.scares.len(),
                "no scare videos found on disk"
            );
            self.scares.iter().collect()
        } else {
            present
        }
    }

    /// Pick a random scare among the available ones
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Scare> {
        let available = self.available();
        available.choose(rng).copied()
    }
}

/// Substitute `{file}` and `{volume}` (0-100) in player arguments
pub fn player_args(player: &PlayerConfig, scare: &Scare, volume: &Volume) -> Vec<String> {
    let file = scare.path.to_string_lossy();
    let level = volume.percent().to_string();
    player
        .args
        .iter()
        .map(|arg| arg.replace("{file}", &file).replace("{volume}", &level))
        .collect()
}

/// Launch the player for `scare`. Returns the running player without waiting
/// for playback to end; the caller stops it with `stop`.
pub fn play(player: &PlayerConfig, scare: &Scare, volume: &Volume) -> Result<Child, PlayError> {
    if !scare.path.is_file() {
        return Err(PlayError::NotFound(scare.path.clone()));
    }

    let args = player_args(player, scare, volume);
    info!(command = %player.command, ?args, "starting scare playback");

    Command::new(&player.command)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| PlayError::Spawn {
            command: player.command.clone(),
            source,
        })
}

/// Stop a player (if still running) and reap it
pub fn stop(mut child: Child) -> io::Result<ExitStatus> {
    if child.try_wait()?.is_none() {
        debug!(pid = child.id(), "stopping scare playback");
        // Fails only if it exited in between
        let _ = child.kill();
    }
    child.wait()
}
