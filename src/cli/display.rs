//! Terminal display and UI rendering
//!
//! Features:
//! - Main menu with trick / treat choice
//! - Scare announcement and playback errors
//! - Knock progress dots, reward and shake messages
//! - Volume indicator

use crate::game::{ScareOutcome, TreatScreen};
use crate::game::volume::Volume;
use crate::knock::{RecognizerState, PATTERN_LEN};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn show_title(&self, title: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::DarkYellow),
            Print(title),
            ResetColor,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::DarkGrey),
            Print("─".repeat(50)),
            ResetColor
        )?;
        Ok(())
    }

    /// Main menu
    pub fn show_menu(&self, volume: &Volume) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        self.show_title("🎃 Trick or Treat? 🎃")?;

        execute!(
            stdout,
            cursor::MoveTo(2, 4),
            SetForegroundColor(Color::Red),
            Print("[T] Trick"),
            ResetColor,
            Print("  - watch something scary"),
            cursor::MoveTo(2, 5),
            SetForegroundColor(Color::Green),
            Print("[R] Treat"),
            ResetColor,
            Print("  - knock the secret pattern for candy"),
        )?;
        self.show_volume(volume, 7)?;
        stdout.flush()?;
        Ok(())
    }

    /// Scare screen
    pub fn show_scare(
        &self,
        outcome: &ScareOutcome,
        volume: &Volume,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        self.show_title("👻 TRICK! 👻")?;

        match outcome {
            ScareOutcome::Playing(scare) => execute!(
                stdout,
                cursor::MoveTo(2, 4),
                SetForegroundColor(Color::Red),
                Print("BOO! "),
                ResetColor,
                Print(format!("Now playing: {}", scare.name)),
            )?,
            ScareOutcome::Announced(scare) => execute!(
                stdout,
                cursor::MoveTo(2, 4),
                SetForegroundColor(Color::Red),
                Print("BOO! "),
                ResetColor,
                Print(format!("Your scare: {}", scare.path.display())),
                cursor::MoveTo(2, 5),
                SetForegroundColor(Color::DarkGrey),
                Print("(configure a player to watch it here)"),
                ResetColor,
            )?,
            ScareOutcome::Failed(reason) => execute!(
                stdout,
                cursor::MoveTo(2, 4),
                SetForegroundColor(Color::Red),
                Print("Error loading video: "),
                ResetColor,
                Print(reason),
            )?,
        }

        self.show_volume(volume, 7)?;
        stdout.flush()?;
        Ok(())
    }

    /// Treat screen: progress dots and the result of the attempt
    pub fn show_treat(&self, treat: &TreatScreen) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        self.show_title("🚪 Knock the Secret Pattern! 🚪")?;

        execute!(
            stdout,
            cursor::MoveTo(2, 4),
            Print("Knock 3 times, pause, then knock 2 times"),
            cursor::MoveTo(2, 6),
        )?;

        let state = treat.state();
        let lit_color = match state {
            RecognizerState::Success => Color::Green,
            RecognizerState::Failed => Color::Red,
            _ => Color::Yellow,
        };
        for i in 0..PATTERN_LEN {
            if i < treat.lit_dots() {
                execute!(stdout, SetForegroundColor(lit_color), Print("● "), ResetColor)?;
            } else {
                execute!(stdout, SetForegroundColor(Color::DarkGrey), Print("○ "), ResetColor)?;
            }
        }

        match state {
            RecognizerState::Success => execute!(
                stdout,
                cursor::MoveTo(2, 8),
                SetForegroundColor(Color::Green),
                Print("🍬 🍭 🍫 You found the treats! 🍫 🍭 🍬"),
                ResetColor,
                cursor::MoveTo(2, 9),
                SetForegroundColor(Color::DarkGrey),
                Print("Press SPACE to knock again"),
                ResetColor,
            )?,
            RecognizerState::Failed => execute!(
                stdout,
                cursor::MoveTo(2, 8),
                SetForegroundColor(Color::Red),
                Print("~~ *shake* ~~ Wrong pattern, try again..."),
                ResetColor,
            )?,
            _ => {}
        }

        stdout.flush()?;
        Ok(())
    }

    fn show_volume(&self, volume: &Volume, row: u16) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let icon = if volume.is_muted() { "🔇" } else { "🔊" };
        execute!(
            stdout,
            cursor::MoveTo(2, row),
            Print(format!("{} {}%", icon, volume.percent())),
        )?;
        Ok(())
    }

    /// Show help text for the current screen
    pub fn show_help(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 11),
            SetForegroundColor(Color::DarkGrey),
            Print(text),
            Print("  |  Esc to exit\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
