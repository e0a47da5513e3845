//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and action mapping using crossterm
//! - `display.rs`: Terminal rendering of the game screens

pub mod display;
pub mod input;
