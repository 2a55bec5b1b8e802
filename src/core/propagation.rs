//! Propagation module - the four-ray wave engine
//!
//! A click toggles its root cell and extends the effect as four independent
//! straight rays (left, right, up, down). A ray never turns, stops at the
//! grid edge, and the up ray stops above the last switch row so the lock row
//! is never toggled.
//!
//! Cells are grouped by distance-from-root along their own ray and toggled in
//! waves: every cell at distance `d` flips together, and the wave only
//! advances to `d + 1` once the presentation side has reported one animation
//! completion per toggled cell. This keeps the engine free of wall-clock
//! timing; tests drive it by injecting completions synchronously.

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::types::{Coord, Direction, FIRST_SWITCH_ROW};

use super::grid::Grid;

/// Outcome of consuming one animation-completion notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveStatus {
    /// Toggled cells are still awaiting completions, or a new wave started.
    InFlight,
    /// Every ray is exhausted and all completions arrived.
    Exhausted,
}

/// In-flight propagation state.
///
/// Exists only for the duration of one move: created by `start`, dropped by
/// the controller when `complete_one` reports exhaustion.
#[derive(Debug, Clone)]
pub struct Wave {
    root: Coord,
    /// Ray fronts awaiting their wave, nearest distances first.
    queue: VecDeque<(Coord, Direction)>,
    /// Distance of the next wave to toggle.
    distance: usize,
    /// Completions still owed for already-toggled cells.
    pending: usize,
}

impl Wave {
    /// Toggle the root and seed the four rays. The root's own animation
    /// accounts for the initial pending completion.
    pub fn start(grid: &mut Grid, root: Coord) -> Result<Self> {
        grid.toggle(root)?;

        let mut queue = VecDeque::new();
        for dir in Direction::ALL {
            if let Some(next) = neighbor(grid, root, dir) {
                queue.push_back((next, dir));
            }
        }

        debug!(
            "wave started at ({}, {}), {} rays",
            root.row,
            root.col,
            queue.len()
        );

        Ok(Self {
            root,
            queue,
            distance: 1,
            pending: 1,
        })
    }

    /// Consume one animation completion.
    ///
    /// When the last outstanding completion for the current wave arrives,
    /// toggles every queued cell at the current distance and extends each ray
    /// by one cell. Reports `Exhausted` once nothing is left to toggle.
    pub fn complete_one(&mut self, grid: &mut Grid) -> Result<WaveStatus> {
        debug_assert!(self.pending > 0, "completion with no toggled cell owed");
        self.pending = self.pending.saturating_sub(1);
        if self.pending > 0 {
            return Ok(WaveStatus::InFlight);
        }

        let mut toggled = 0;
        while let Some(&(coord, dir)) = self.queue.front() {
            if distance_from_root(self.root, coord) != self.distance {
                break;
            }
            self.queue.pop_front();

            grid.toggle(coord)?;
            self.pending += 1;
            toggled += 1;

            if let Some(next) = neighbor(grid, coord, dir) {
                self.queue.push_back((next, dir));
            }
        }

        if toggled == 0 && self.pending == 0 {
            debug!("wave from ({}, {}) exhausted", self.root.row, self.root.col);
            return Ok(WaveStatus::Exhausted);
        }

        debug!("wave distance {} toggled {} cells", self.distance, toggled);
        self.distance += 1;
        Ok(WaveStatus::InFlight)
    }

    pub fn root(&self) -> Coord {
        self.root
    }

    /// Completions still owed by the presentation side.
    pub fn pending(&self) -> usize {
        self.pending
    }
}

/// Next cell along a ray, or `None` when the ray leaves the switch region.
fn neighbor(grid: &Grid, coord: Coord, dir: Direction) -> Option<Coord> {
    match dir {
        Direction::Left if coord.col > 0 => Some(Coord::new(coord.row, coord.col - 1)),
        Direction::Right if coord.col + 1 < grid.cols() => {
            Some(Coord::new(coord.row, coord.col + 1))
        }
        // The up ray must not cross into the lock row.
        Direction::Up if coord.row > FIRST_SWITCH_ROW => {
            Some(Coord::new(coord.row - 1, coord.col))
        }
        Direction::Down if coord.row + 1 < grid.rows() => {
            Some(Coord::new(coord.row + 1, coord.col))
        }
        _ => None,
    }
}

/// Distance along a ray: cells share either the root's row or its column.
fn distance_from_root(root: Coord, coord: Coord) -> usize {
    if root.row == coord.row {
        root.col.abs_diff(coord.col)
    } else {
        root.row.abs_diff(coord.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    /// Drive a wave to exhaustion, returning the number of completions fed.
    fn run_to_exhaustion(grid: &mut Grid, root: Coord) -> usize {
        let mut wave = Wave::start(grid, root).unwrap();
        let mut completions = 0;
        loop {
            completions += 1;
            if wave.complete_one(grid).unwrap() == WaveStatus::Exhausted {
                return completions;
            }
        }
    }

    #[test]
    fn test_single_column_grid_has_no_side_rays() {
        let mut grid = Grid::new(1).unwrap();
        let root = Coord::new(1, 0);
        let before = grid.get(root).unwrap();

        // Root only: no left/right (1 column), no up (row 1), no down (no row 2).
        let completions = run_to_exhaustion(&mut grid, root);
        assert_eq!(completions, 1);
        assert_eq!(grid.get(root).unwrap(), before.toggled());
    }

    #[test]
    fn test_rays_stay_on_root_row_and_column() {
        let mut grid = Grid::new(4).unwrap();
        let before = grid.clone();
        let root = Coord::new(2, 1);

        run_to_exhaustion(&mut grid, root);

        for row in 1..grid.rows() {
            for col in 0..grid.cols() {
                let coord = Coord::new(row, col);
                let flipped = grid.get(coord).unwrap() != before.get(coord).unwrap();
                let on_ray = row == root.row || col == root.col;
                assert_eq!(flipped, on_ray, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_lock_row_never_toggled() {
        let mut grid = Grid::new(3).unwrap();
        let before = grid.clone();

        run_to_exhaustion(&mut grid, Coord::new(1, 1));

        for col in 0..grid.cols() {
            let lock = Coord::new(0, col);
            assert_eq!(grid.get(lock).unwrap(), before.get(lock).unwrap());
        }
    }

    #[test]
    fn test_wave_advances_one_distance_per_round() {
        let mut grid = Grid::new(5).unwrap();
        let root = Coord::new(3, 2);
        let mut wave = Wave::start(&mut grid, root).unwrap();
        grid.take_changes();

        // Root completion releases the distance-1 wave: 4 cells.
        assert_eq!(wave.complete_one(&mut grid).unwrap(), WaveStatus::InFlight);
        let wave1: Vec<_> = grid.take_changes().iter().map(|c| c.coord).collect();
        assert_eq!(wave1.len(), 4);
        for coord in &wave1 {
            assert_eq!(distance_from_root(root, *coord), 1);
        }
        assert_eq!(wave.pending(), 4);

        // Distance-2 cells stay untouched until all 4 completions arrive.
        for _ in 0..3 {
            wave.complete_one(&mut grid).unwrap();
            assert!(grid.take_changes().is_empty());
        }
        wave.complete_one(&mut grid).unwrap();
        let wave2: Vec<_> = grid.take_changes().iter().map(|c| c.coord).collect();
        assert!(!wave2.is_empty());
        for coord in &wave2 {
            assert_eq!(distance_from_root(root, *coord), 2);
        }
    }

    #[test]
    fn test_full_propagation_is_involution() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(Coord::new(2, 3), CellState::SwitchVertical).unwrap();
        grid.set(Coord::new(4, 0), CellState::SwitchVertical).unwrap();
        let before = grid.clone();

        let root = Coord::new(2, 2);
        run_to_exhaustion(&mut grid, root);
        run_to_exhaustion(&mut grid, root);

        assert_eq!(grid.cells(), before.cells());
    }
}
