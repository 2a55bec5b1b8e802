//! Terminal locks-and-switches runner (default binary).
//!
//! Owns everything the game core treats as external: the crossterm event
//! loop, the cursor, flip-animation timing (the core's waves only advance on
//! the completion reports sent from here) and score persistence.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::warn;

use tui_locks::config::{parse_args, GameSettings};
use tui_locks::core::{GameController, GameEvent};
use tui_locks::input::{handle_key_event, should_quit, UiAction};
use tui_locks::scores::HighScores;
use tui_locks::term::{GameView, TerminalRenderer, ViewState, Viewport};
use tui_locks::types::{Coord, FIRST_SWITCH_ROW, MAX_SCORE_RECORDS, SWAP_ANIM_MS, TICK_MS};

fn main() -> Result<()> {
    // Logs go to stderr; enable with RUST_LOG before the alternate screen
    // takes over.
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// One flipped switch awaiting its completion report to the core.
struct AnimTimer {
    coord: Coord,
    remaining_ms: i32,
}

fn run(term: &mut TerminalRenderer, settings: &GameSettings) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameController::new(settings.grid_size, settings.history_capacity, seed)?;
    let mut scores = HighScores::load(&settings.scores_path, MAX_SCORE_RECORDS);

    let view = GameView::default();
    let mut cursor = Coord::new(FIRST_SWITCH_ROW, 0);
    let mut victory: Option<u32> = None;
    let mut anims: Vec<AnimTimer> = Vec::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Drain core events: schedule flip animations, persist victories.
        for ev in game.drain_events() {
            match ev {
                GameEvent::CellChanged { coord, state } => {
                    // Only switch toggles inside a wave owe a completion;
                    // locks and fresh-board fills render statically.
                    if state.is_switch() && game.is_propagating() {
                        anims.push(AnimTimer {
                            coord,
                            remaining_ms: SWAP_ANIM_MS as i32,
                        });
                    }
                }
                GameEvent::Victory { score } => {
                    victory = Some(score);
                    if let Err(err) = scores.record(score) {
                        warn!("could not persist score: {err:#}");
                    }
                }
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let animating: Vec<Coord> = anims.iter().map(|a| a.coord).collect();
        let state = ViewState {
            cursor,
            animating: &animating,
            victory,
            top_scores: scores.scores(),
        };
        let fb = view.render(&game, &state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        victory = None;
                        match action {
                            UiAction::CursorLeft => {
                                cursor.col = cursor.col.saturating_sub(1);
                            }
                            UiAction::CursorRight => {
                                cursor.col = (cursor.col + 1).min(game.grid().cols() - 1);
                            }
                            UiAction::CursorUp => {
                                cursor.row = cursor.row.saturating_sub(1).max(FIRST_SWITCH_ROW);
                            }
                            UiAction::CursorDown => {
                                cursor.row = (cursor.row + 1).min(game.grid().rows() - 1);
                            }
                            UiAction::Toggle => game.click(cursor)?,
                            UiAction::Undo => game.undo()?,
                            UiAction::Redo => game.redo()?,
                            UiAction::NewGame => {
                                anims.clear();
                                game.start_new_game()?;
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick: advance animation timers, report completions to the core.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let mut completed = 0;
            for anim in &mut anims {
                anim.remaining_ms -= TICK_MS as i32;
            }
            anims.retain(|anim| {
                if anim.remaining_ms <= 0 {
                    completed += 1;
                    false
                } else {
                    true
                }
            });
            for _ in 0..completed {
                game.animation_complete()?;
            }
        }
    }
}
