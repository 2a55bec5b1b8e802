//! GameView: maps the controller's grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameController;
use crate::types::{CellState, Coord, FIRST_SWITCH_ROW};

use super::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Shell-owned state the view needs besides the controller itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    /// Cell under the keyboard cursor (always in the switch region).
    pub cursor: Coord,
    /// Cells currently mid flip animation.
    pub animating: &'a [Coord],
    /// Score of a just-won game, shown as an overlay.
    pub victory: Option<u32>,
    /// Persisted top scores, ascending.
    pub top_scores: &'a [u32],
}

/// A lightweight terminal renderer for the puzzle board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps the cells roughly square in typical terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the board, side panel and overlays into a framebuffer.
    pub fn render(
        &self,
        game: &GameController,
        state: &ViewState<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = game.grid();
        let board_px_w = (grid.cols() as u16) * self.cell_w;
        // One extra row separates the lock row from the switch rows.
        let board_px_h = (grid.rows() as u16) * self.cell_h + 1;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 16) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Separator between the lock row and the switch region.
        let sep_y = start_y + 1 + self.cell_h;
        for dx in 0..board_px_w {
            fb.put_char(start_x + 1 + dx, sep_y, '╌', border);
        }

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let coord = Coord::new(row, col);
                let cell = match grid.get(coord) {
                    Ok(cell) => cell,
                    Err(_) => continue,
                };
                let animating = state.animating.contains(&coord);
                let under_cursor = coord == state.cursor;
                self.draw_grid_cell(&mut fb, start_x, start_y, coord, cell, animating, under_cursor);
            }
        }

        self.draw_side_panel(&mut fb, game, state, viewport, start_x, start_y, frame_w);

        if let Some(score) = state.victory {
            self.draw_overlay_text(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &format!(" VICTORY {score} "),
            );
        }

        let hint = CellStyle {
            fg: Rgb::new(130, 130, 140),
            ..CellStyle::default()
        };
        let hint_y = viewport.height.saturating_sub(1);
        fb.put_str(
            start_x,
            hint_y,
            "arrows move · space toggle · u undo · r redo · n new · q quit",
            hint,
        );

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        coord: Coord,
        cell: CellState,
        animating: bool,
        under_cursor: bool,
    ) {
        let (ch, fg) = match cell {
            CellState::LockLocked => ('▓', Rgb::new(220, 90, 90)),
            CellState::LockUnlocked => ('░', Rgb::new(110, 220, 130)),
            CellState::SwitchHorizontal => ('─', Rgb::new(90, 180, 230)),
            CellState::SwitchVertical => ('│', Rgb::new(235, 200, 90)),
        };

        let bg = if under_cursor {
            Rgb::new(70, 70, 110)
        } else if animating {
            Rgb::new(90, 70, 30)
        } else {
            Rgb::new(25, 25, 35)
        };
        let style = CellStyle {
            fg,
            bg,
            bold: animating,
        };

        // Switch rows sit below the separator line.
        let row_offset = if coord.row >= FIRST_SWITCH_ROW { 1 } else { 0 };
        let px = start_x + 1 + (coord.col as u16) * self.cell_w;
        let py = start_y + 1 + (coord.row as u16) * self.cell_h + row_offset;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &GameController,
        state: &ViewState<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.total_actions()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO/REDO", label);
        y = y.saturating_add(1);
        let avail = format!(
            "{} / {}",
            if game.can_undo() { "u" } else { "-" },
            if game.can_redo() { "r" } else { "-" }
        );
        fb.put_str(panel_x, y, &avail, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TOP SCORES", label);
        y = y.saturating_add(1);
        for score in state.top_scores.iter().rev().take(5) {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, &format!("{score}"), value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(40, 90, 40),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
