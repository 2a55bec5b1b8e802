//! Game controller - the public command surface
//!
//! Owns the grid, the undo/redo history and the propagation state machine,
//! and turns player commands into waves. The controller is Idle between
//! moves and Propagating while a wave is in flight; commands arriving while
//! Propagating are silent no-ops, which serializes moves without locks.
//!
//! The presentation side drains `GameEvent`s to render and must call
//! `animation_complete` exactly once per toggled switch cell; lock cells
//! render statically and report nothing.

use std::collections::VecDeque;

use log::{debug, info};

use crate::error::Result;
use crate::types::{CellState, Coord, FIRST_SWITCH_ROW, LOCK_ROW};

use super::grid::Grid;
use super::history::HistoryBuffer;
use super::locks::evaluate_locks;
use super::propagation::{Wave, WaveStatus};
use super::rng::SimpleRng;
use super::scoring::calculate_score;

/// Outbound notification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A cell took a new state (fired for every grid mutation, in order).
    CellChanged { coord: Coord, state: CellState },
    /// Every lock is open.
    Victory { score: u32 },
}

/// Orchestrates grid, history, lock evaluation and scoring.
#[derive(Debug)]
pub struct GameController {
    grid: Grid,
    history: HistoryBuffer<Coord>,
    /// `Some` while Propagating, `None` while Idle.
    wave: Option<Wave>,
    rng: SimpleRng,
    total_actions: u32,
    events: VecDeque<GameEvent>,
}

impl GameController {
    /// Build a controller and deal the first board.
    ///
    /// Fails with `InvalidConfig` when `grid_size` or `history_capacity`
    /// is zero. The seed makes board generation reproducible.
    pub fn new(grid_size: usize, history_capacity: usize, seed: u32) -> Result<Self> {
        let mut controller = Self {
            grid: Grid::new(grid_size)?,
            history: HistoryBuffer::new(history_capacity)?,
            wave: None,
            rng: SimpleRng::new(seed),
            total_actions: 0,
            events: VecDeque::new(),
        };
        controller.start_new_game()?;
        Ok(controller)
    }

    /// Build a controller around a prepared board instead of a random one.
    ///
    /// Locks are evaluated once, so a board with no vertical switches fires
    /// victory immediately.
    pub fn with_grid(grid: Grid, history_capacity: usize, seed: u32) -> Result<Self> {
        let mut controller = Self {
            grid,
            history: HistoryBuffer::new(history_capacity)?,
            wave: None,
            rng: SimpleRng::new(seed),
            total_actions: 0,
            events: VecDeque::new(),
        };
        controller.finish_move()?;
        Ok(controller)
    }

    /// Deal a fresh board: all locks locked, every switch uniformly random.
    ///
    /// Resets the action count and the history, drops any in-flight wave,
    /// then evaluates locks once (no waves, no animations at init).
    pub fn start_new_game(&mut self) -> Result<()> {
        self.wave = None;
        self.total_actions = 0;
        self.history.clear();

        for col in 0..self.grid.cols() {
            self.grid.set(Coord::new(LOCK_ROW, col), CellState::LockLocked)?;
        }
        for row in FIRST_SWITCH_ROW..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let state = if self.rng.next_bool() {
                    CellState::SwitchVertical
                } else {
                    CellState::SwitchHorizontal
                };
                self.grid.set(Coord::new(row, col), state)?;
            }
        }

        info!("new game: {}x{} board", self.grid.rows(), self.grid.cols());
        self.finish_move()
    }

    /// Player clicked a cell.
    ///
    /// No-op while Propagating or on the lock row. A coordinate outside the
    /// grid is a programming error and surfaces as `OutOfRange`.
    pub fn click(&mut self, coord: Coord) -> Result<()> {
        if self.wave.is_some() || !self.grid.is_switch_row(coord.row) {
            return Ok(());
        }
        // Column bounds check before any state is touched.
        self.grid.get(coord)?;

        self.total_actions += 1;
        self.history.push(coord);
        self.begin_wave(coord)
    }

    /// Replay the previous action's root; the toggle involution makes this
    /// an exact reversal. No-op while Propagating or with no past.
    pub fn undo(&mut self) -> Result<()> {
        if self.wave.is_some() || !self.history.has_prev() {
            return Ok(());
        }
        self.total_actions = self.total_actions.saturating_sub(1);
        let coord = *self.history.prev()?;
        self.begin_wave(coord)
    }

    /// Replay the next action's root. No-op while Propagating or with no
    /// future.
    pub fn redo(&mut self) -> Result<()> {
        if self.wave.is_some() || !self.history.has_next() {
            return Ok(());
        }
        self.total_actions += 1;
        let coord = *self.history.next()?;
        self.begin_wave(coord)
    }

    /// Inbound notification: one toggled switch finished animating.
    ///
    /// Advances the wave; on exhaustion re-evaluates locks, checks victory
    /// and returns to Idle. Ignored while Idle (locks never report, and a
    /// stale report must not corrupt a later wave).
    pub fn animation_complete(&mut self) -> Result<()> {
        let Some(wave) = self.wave.as_mut() else {
            debug!("animation completion while idle, ignored");
            return Ok(());
        };

        let status = wave.complete_one(&mut self.grid)?;
        self.flush_changes();

        if status == WaveStatus::Exhausted {
            self.wave = None;
            self.finish_move()?;
        }
        Ok(())
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn total_actions(&self) -> u32 {
        self.total_actions
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_propagating(&self) -> bool {
        self.wave.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.wave.is_none() && self.history.has_prev()
    }

    pub fn can_redo(&self) -> bool {
        self.wave.is_none() && self.history.has_next()
    }

    fn begin_wave(&mut self, root: Coord) -> Result<()> {
        let wave = Wave::start(&mut self.grid, root)?;
        self.wave = Some(wave);
        self.flush_changes();
        Ok(())
    }

    /// Wave is done (or the board was just dealt): re-derive the lock row and
    /// raise victory when every column is open.
    fn finish_move(&mut self) -> Result<()> {
        let unlocked = evaluate_locks(&mut self.grid)?;
        self.flush_changes();

        if unlocked == self.grid.cols() {
            let score = calculate_score(self.grid.cols(), self.total_actions);
            info!("victory, score {score} after {} actions", self.total_actions);
            self.events.push_back(GameEvent::Victory { score });
        }
        Ok(())
    }

    fn flush_changes(&mut self) {
        for change in self.grid.take_changes() {
            self.events.push_back(GameEvent::CellChanged {
                coord: change.coord,
                state: change.state,
            });
        }
    }
}
