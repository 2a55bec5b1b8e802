//! Error taxonomy for the game core.
//!
//! Everything here is a hard failure. Player-facing "can't do that right now"
//! situations (clicking mid-wave, undo with no history) are silent no-ops in
//! the controller, not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Rejected at construction: grid size or history capacity below 1.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Coordinate outside the grid. Validated input never produces this.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// History cursor is already at the newest entry.
    #[error("no action to redo")]
    NoNextAction,

    /// History cursor is already at the oldest entry.
    #[error("no action to undo")]
    NoPrevAction,
}

pub type Result<T> = std::result::Result<T, GameError>;
