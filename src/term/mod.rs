//! Terminal rendering layer.
//!
//! Renders the puzzle into a simple framebuffer that is flushed to the
//! terminal with row-level diffing. The view is pure (no I/O) so the whole
//! board presentation can be unit-tested; only `TerminalRenderer` touches
//! stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewState, Viewport};
pub use renderer::TerminalRenderer;
