//! Game flow: screens, scare playback and the treat screen
//!
//! # Components
//! - `screen.rs`: Game struct and Main/Scare/Treat transitions
//! - `treat.rs`: TreatScreen controller around the knock recognizer
//! - `scare.rs`: ScareReel random selection and external player launch
//! - `volume.rs`: Volume and mute rules

pub mod scare;
pub mod screen;
pub mod treat;
pub mod volume;

pub use screen::{Game, ScareOutcome, Screen};
pub use treat::{TreatReaction, TreatScreen};
