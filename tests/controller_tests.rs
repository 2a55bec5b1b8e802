//! Controller tests - command gating, undo/redo replay, victory and score

use tui_locks::core::{calculate_score, GameController, GameEvent, Grid};
use tui_locks::types::CellState::{self, *};
use tui_locks::types::{Coord, LOCK_ROW};

fn scripted(rows: &[Vec<CellState>], capacity: usize) -> GameController {
    let mut grid = Grid::new(rows[0].len()).unwrap();
    grid.fill_switch_rows(rows);
    GameController::with_grid(grid, capacity, 1).unwrap()
}

fn settle(game: &mut GameController) {
    while game.is_propagating() {
        game.animation_complete().unwrap();
    }
}

#[test]
fn test_undo_restores_preclick_board_redo_reapplies() {
    let mut game = GameController::new(5, 16, 31337).unwrap();
    let before = game.grid().cells().to_vec();

    game.click(Coord::new(3, 2)).unwrap();
    settle(&mut game);
    let after = game.grid().cells().to_vec();
    assert_ne!(before, after);
    assert_eq!(game.total_actions(), 1);

    game.undo().unwrap();
    settle(&mut game);
    assert_eq!(game.grid().cells(), &before[..], "undo is bit-exact");
    assert_eq!(game.total_actions(), 0);

    game.redo().unwrap();
    settle(&mut game);
    assert_eq!(game.grid().cells(), &after[..], "redo is bit-exact");
    assert_eq!(game.total_actions(), 1);
}

#[test]
fn test_undo_chain_across_several_moves() {
    let mut game = GameController::new(4, 16, 7).unwrap();
    let mut snapshots = vec![game.grid().cells().to_vec()];

    let moves = [Coord::new(1, 1), Coord::new(4, 0), Coord::new(2, 3)];
    for coord in moves {
        game.click(coord).unwrap();
        settle(&mut game);
        snapshots.push(game.grid().cells().to_vec());
    }

    // Walk all the way back, checking each intermediate board.
    for snapshot in snapshots.iter().rev().skip(1) {
        game.undo().unwrap();
        settle(&mut game);
        assert_eq!(game.grid().cells(), &snapshot[..]);
    }
    assert!(!game.can_undo());

    // And all the way forward again.
    for snapshot in snapshots.iter().skip(1) {
        game.redo().unwrap();
        settle(&mut game);
        assert_eq!(game.grid().cells(), &snapshot[..]);
    }
    assert!(!game.can_redo());
}

#[test]
fn test_click_after_undo_discards_redo_future() {
    let mut game = GameController::new(3, 16, 5).unwrap();

    game.click(Coord::new(1, 0)).unwrap();
    settle(&mut game);
    game.click(Coord::new(2, 2)).unwrap();
    settle(&mut game);

    game.undo().unwrap();
    settle(&mut game);
    assert!(game.can_redo());

    game.click(Coord::new(3, 1)).unwrap();
    settle(&mut game);
    assert!(!game.can_redo(), "new input truncates the redo future");
}

#[test]
fn test_commands_rejected_while_propagating() {
    let mut game = scripted(
        &[
            vec![SwitchVertical, SwitchVertical],
            vec![SwitchVertical, SwitchVertical],
        ],
        8,
    );
    game.click(Coord::new(1, 0)).unwrap();
    assert!(game.is_propagating());
    game.drain_events();

    let cells = game.grid().cells().to_vec();
    let history_len = game.history_len();
    let actions = game.total_actions();

    game.click(Coord::new(2, 1)).unwrap();
    game.undo().unwrap();
    game.redo().unwrap();

    assert_eq!(game.grid().cells(), &cells[..]);
    assert_eq!(game.history_len(), history_len);
    assert_eq!(game.total_actions(), actions);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_fully_open_board_wins_immediately() {
    // No vertical switch anywhere: the initial lock evaluation fires victory
    // with the action count clamped to 1.
    let mut game = scripted(&vec![vec![SwitchHorizontal; 3]; 3], 8);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Victory { score: 300 }));
    assert_eq!(calculate_score(3, 0), 300);
}

#[test]
fn test_victory_score_counts_actions() {
    // Smallest board: one lock over one switch; one click opens it.
    let mut game = scripted(&[vec![SwitchVertical]], 8);
    game.drain_events();

    game.click(Coord::new(1, 0)).unwrap();
    settle(&mut game);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Victory { score: 100 }));
    assert_eq!(game.grid().get(Coord::new(LOCK_ROW, 0)).unwrap(), LockUnlocked);
}

#[test]
fn test_undone_moves_do_not_inflate_score() {
    // Clicking (1,0) flips exactly the three vertical switches: one move wins.
    let mut game = scripted(
        &[
            vec![SwitchVertical, SwitchVertical],
            vec![SwitchVertical, SwitchHorizontal],
        ],
        8,
    );
    game.drain_events();

    // A detour first: click elsewhere, take it back.
    game.click(Coord::new(2, 1)).unwrap();
    settle(&mut game);
    game.undo().unwrap();
    settle(&mut game);
    assert_eq!(game.total_actions(), 0);
    assert!(game.drain_events().iter().all(|e| !matches!(e, GameEvent::Victory { .. })));

    game.click(Coord::new(1, 0)).unwrap();
    settle(&mut game);

    // Only the solving click counts: score = 2 * 100 / 1.
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Victory { score: 200 }));
}

#[test]
fn test_new_game_resets_history_and_actions() {
    let mut game = GameController::new(3, 8, 11).unwrap();
    game.click(Coord::new(1, 1)).unwrap();
    settle(&mut game);
    assert!(game.can_undo());

    game.start_new_game().unwrap();
    assert_eq!(game.total_actions(), 0);
    assert!(!game.can_undo());
    assert!(!game.can_redo());
    assert!(!game.is_propagating());
}

#[test]
fn test_new_game_reshuffles_switches() {
    let mut game = GameController::new(6, 8, 1234).unwrap();
    let first = game.grid().cells().to_vec();
    game.start_new_game().unwrap();
    // 36 coin flips colliding is astronomically unlikely with this LCG.
    assert_ne!(game.grid().cells(), &first[..]);
}

#[test]
fn test_victory_event_follows_lock_changes() {
    let mut game = scripted(&[vec![SwitchVertical]], 8);
    game.drain_events();

    game.click(Coord::new(1, 0)).unwrap();
    settle(&mut game);

    let events = game.drain_events();
    let lock_idx = events
        .iter()
        .position(|e| {
            matches!(
                e,
                GameEvent::CellChanged { coord, .. } if coord.row == LOCK_ROW
            )
        })
        .expect("lock change event");
    let victory_idx = events
        .iter()
        .position(|e| matches!(e, GameEvent::Victory { .. }))
        .expect("victory event");
    assert!(lock_idx < victory_idx);
}
