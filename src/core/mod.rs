//! Core module - pure game logic with no external dependencies
//!
//! This module contains the grid store, the propagation engine, lock
//! evaluation, scoring and the game controller. It has zero dependencies on
//! UI or I/O; the presentation layer talks to it only through drained
//! `GameEvent`s and `animation_complete` calls.

pub mod game;
pub mod grid;
pub mod history;
pub mod locks;
pub mod propagation;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use game::{GameController, GameEvent};
pub use grid::{CellChange, Grid};
pub use history::HistoryBuffer;
pub use locks::evaluate_locks;
pub use propagation::{Wave, WaveStatus};
pub use rng::SimpleRng;
pub use scoring::calculate_score;
