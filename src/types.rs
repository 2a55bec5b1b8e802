//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Row index of the lock row.
pub const LOCK_ROW: usize = 0;
/// First row that holds switches (everything below the lock row).
pub const FIRST_SWITCH_ROW: usize = 1;

/// Duration of a switch flip animation (in milliseconds).
pub const SWAP_ANIM_MS: u32 = 400;
/// Fixed tick for the terminal runner (in milliseconds).
pub const TICK_MS: u32 = 16;

/// Default grid size when none is given on the command line.
pub const DEFAULT_GRID_SIZE: usize = 6;
/// Default undo/redo history capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;
/// Number of high-score records kept on disk.
pub const MAX_SCORE_RECORDS: usize = 10;

/// State of one grid cell.
///
/// Switch variants only appear in switch rows, lock variants only in row 0.
/// A cell never carries both meanings at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    SwitchHorizontal,
    SwitchVertical,
    LockLocked,
    LockUnlocked,
}

impl CellState {
    /// Flip to the opposite state within the same kind (involution).
    pub fn toggled(self) -> Self {
        match self {
            CellState::SwitchHorizontal => CellState::SwitchVertical,
            CellState::SwitchVertical => CellState::SwitchHorizontal,
            CellState::LockLocked => CellState::LockUnlocked,
            CellState::LockUnlocked => CellState::LockLocked,
        }
    }

    pub fn is_switch(self) -> bool {
        matches!(self, CellState::SwitchHorizontal | CellState::SwitchVertical)
    }

    pub fn is_lock(self) -> bool {
        matches!(self, CellState::LockLocked | CellState::LockUnlocked)
    }
}

/// A grid position. Row 0 is the lock row; columns run left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the four straight-line propagation directions.
///
/// A ray keeps its direction for its whole length; it never turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for state in [
            CellState::SwitchHorizontal,
            CellState::SwitchVertical,
            CellState::LockLocked,
            CellState::LockUnlocked,
        ] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_toggle_preserves_kind() {
        assert!(CellState::SwitchHorizontal.toggled().is_switch());
        assert!(CellState::SwitchVertical.toggled().is_switch());
        assert!(CellState::LockLocked.toggled().is_lock());
        assert!(CellState::LockUnlocked.toggled().is_lock());
    }
}
