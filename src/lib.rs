//! Terminal locks-and-switches puzzle.
//!
//! A column of locks sits above a grid of two-orientation switches. Toggling
//! a switch flips straight runs of switches in all four directions, wave by
//! wave; a lock opens once its column holds no vertical switch. Open every
//! lock to win.
//!
//! `core` is the pure state machine; `term` renders it to a terminal and
//! drives the animation-completion notifications the core's wave pacing
//! depends on.

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;

pub use error::{GameError, Result};
