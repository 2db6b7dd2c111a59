//! Core domain types for the checker
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is parametrized by a `GameConfig` rather than by game.

mod color;
mod error;
mod guess;
mod variant;

pub use color::{Color, ColorCode};
pub use error::{CheckError, InputError};
pub use guess::Guess;
pub use variant::{GameConfig, GameKind};
