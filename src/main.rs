//! Trick or Treat - terminal edition
//!
//! Single-session, self-contained CLI application.
//! Trick plays a random scare video; treat asks for the secret knock.

mod cli;
mod config;
mod game;
mod knock;

use clap::Parser;
use cli::display::Display;
use cli::input::{Action, InputHandler};
use config::Config;
use game::{Game, Screen, TreatReaction};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Volume change per key press
const VOLUME_STEP: f32 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "Trick or Treat")]
#[command(about = "Get scared or knock the secret pattern for a treat")]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "trick-or-treat.json")]
    config: PathBuf,

    /// Directory with scare videos (overrides config)
    #[arg(short, long)]
    media: Option<PathBuf>,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "trick-or-treat.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let file = File::create(&args.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn render(display: &Display, game: &Game) -> Result<(), Box<dyn Error>> {
    display.clear()?;
    match game.screen() {
        Screen::Main => {
            display.show_menu(game.volume())?;
            display.show_help("T trick  |  R treat  |  M mute  |  +/- volume")?;
        }
        Screen::Scare(outcome) => {
            display.show_scare(outcome, game.volume())?;
            display.show_help("B back  |  M mute  |  +/- volume")?;
        }
        Screen::Treat(treat) => {
            display.show_treat(treat)?;
            display.show_help("SPACE knock  |  B back")?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = Config::load(&args.config)?;
    if let Some(media) = &args.media {
        config.media_dir = media.clone();
    }
    info!(media_dir = %config.media_dir.display(), "starting");

    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;

    let mut game = Game::new(&config);
    let mut rng = rand::thread_rng();

    let display = Display::new();
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();
    let mut dirty = true;

    // Event loop
    'session: loop {
        if let Some(treat) = game.treat_mut() {
            if treat.tick(now_ms()) {
                dirty = true;
            }
        }

        if dirty {
            render(&display, &game)?;
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(action) = InputHandler::action(&key) else {
            continue;
        };
        dirty = true;

        let on_main = matches!(game.screen(), Screen::Main);
        let on_scare = matches!(game.screen(), Screen::Scare(_));

        match action {
            Action::Exit => break 'session,
            Action::ToggleMute => game.volume_mut().toggle_mute(),
            Action::VolumeUp => game.volume_mut().step(VOLUME_STEP),
            Action::VolumeDown => game.volume_mut().step(-VOLUME_STEP),
            Action::Trick if on_main => game.show_trick(&mut rng),
            Action::Treat if on_main => game.show_treat(now_ms()),
            Action::Back | Action::Tap if on_scare => game.go_back(),
            Action::Back => game.go_back(),
            Action::Tap => {
                let now = now_ms();
                if let Some(treat) = game.treat_mut() {
                    let reaction = treat.tap(now);
                    debug!(?reaction, "knock");
                    if reaction == TreatReaction::Ignored {
                        dirty = false;
                    }
                }
            }
            Action::Trick | Action::Treat => dirty = false,
        }
    }

    // Cleanup
    game.stop_player();
    InputHandler::disable_raw_mode()?;
    display.clear()?;
    display.shutdown()?;
    info!("session ended");

    println!("🎃 Happy Halloween!");
    Ok(())
}
