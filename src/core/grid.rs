//! Grid module - owns the cell states
//!
//! The grid is `grid_size + 1` rows by `grid_size` columns: row 0 holds locks,
//! every row below holds switches. Uses a flat row-major array.
//! `set` is the only mutation path; every call records a change that the
//! controller later drains into presentation events.

use crate::error::{GameError, Result};
use crate::types::{CellState, Coord, FIRST_SWITCH_ROW};

/// A single cell mutation, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub coord: Coord,
    pub state: CellState,
}

/// The puzzle grid - one lock row above `grid_size` switch rows.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col).
    cells: Vec<CellState>,
    /// Mutations since the last drain, oldest first.
    changes: Vec<CellChange>,
}

impl Grid {
    /// Create a grid for the given size: all locks locked, all switches
    /// horizontal. Fails for `grid_size == 0`.
    pub fn new(grid_size: usize) -> Result<Self> {
        if grid_size < 1 {
            return Err(GameError::InvalidConfig("grid size must be at least 1"));
        }

        let rows = grid_size + 1;
        let cols = grid_size;
        let mut cells = vec![CellState::SwitchHorizontal; rows * cols];
        cells[..cols].fill(CellState::LockLocked);

        Ok(Self {
            rows,
            cols,
            cells,
            changes: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate flat index, checking bounds.
    #[inline]
    fn index(&self, coord: Coord) -> Result<usize> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return Err(GameError::OutOfRange {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(coord.row * self.cols + coord.col)
    }

    pub fn get(&self, coord: Coord) -> Result<CellState> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set a cell and record the change.
    ///
    /// The column-lock invariant is not checked here; the lock evaluator
    /// re-establishes it after a batch of mutations.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<()> {
        let idx = self.index(coord)?;
        self.cells[idx] = state;
        self.changes.push(CellChange { coord, state });
        Ok(())
    }

    /// Flip a cell to its opposite state, returning the new state.
    pub fn toggle(&mut self, coord: Coord) -> Result<CellState> {
        let state = self.get(coord)?.toggled();
        self.set(coord, state)?;
        Ok(state)
    }

    /// Take all mutations recorded since the last call, oldest first.
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn is_switch_row(&self, row: usize) -> bool {
        (FIRST_SWITCH_ROW..self.rows).contains(&row)
    }

    /// True when any switch row of `col` holds a vertical (blocking) switch.
    pub fn column_blocked(&self, col: usize) -> Result<bool> {
        for row in FIRST_SWITCH_ROW..self.rows {
            if self.get(Coord::new(row, col))? == CellState::SwitchVertical {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Snapshot of the raw cells, for exact-equality assertions in tests.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Overwrite the switch rows from per-row state lists, discarding the
    /// recorded changes. For scripted boards in tests and demos.
    ///
    /// Panics if the shape does not match the grid or a lock state is given.
    pub fn fill_switch_rows(&mut self, rows: &[Vec<CellState>]) {
        assert_eq!(rows.len(), self.rows - 1);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), self.cols);
            for (col, &state) in row.iter().enumerate() {
                assert!(state.is_switch());
                self.set(Coord::new(FIRST_SWITCH_ROW + i, col), state).unwrap();
            }
        }
        self.changes.clear();
    }
}
