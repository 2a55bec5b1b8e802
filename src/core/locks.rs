//! Lock evaluator - derives the lock row from the switch rows
//!
//! A column is blocked while any of its switches is vertical. Runs after a
//! batch of switch mutations; transient violations mid-wave are expected.

use crate::error::Result;
use crate::types::{CellState, Coord, LOCK_ROW};

use super::grid::Grid;

/// Recompute every lock cell from its column's switches.
///
/// Writes a lock cell only on an actual transition so the change log carries
/// no redundant notifications. Returns the number of unlocked columns.
pub fn evaluate_locks(grid: &mut Grid) -> Result<usize> {
    let mut unlocked = 0;

    for col in 0..grid.cols() {
        let blocked = grid.column_blocked(col)?;

        let lock = Coord::new(LOCK_ROW, col);
        let current = grid.get(lock)?;
        let target = if blocked {
            CellState::LockLocked
        } else {
            CellState::LockUnlocked
        };
        if current != target {
            grid.set(lock, target)?;
        }

        if !blocked {
            unlocked += 1;
        }
    }

    Ok(unlocked)
}
