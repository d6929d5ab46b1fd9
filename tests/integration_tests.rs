//! Integration tests - whole games driven through the command interface

use blockfall::core::{drop_interval_ms, level_for_lines, GameSession};
use blockfall::types::{Command, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_full_game_holds_invariants() {
    let mut session = GameSession::new(2024);
    session.start();

    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::Tick,
        Command::MoveRight,
        Command::Tick,
        Command::HardDrop,
    ];

    let mut last_score = 0;
    for step in 0..2000 {
        if session.game_over() {
            break;
        }
        session.apply(script[step % script.len()]);

        // Board dimensions never change
        assert_eq!(
            session.board().cells().len(),
            (BOARD_WIDTH * BOARD_HEIGHT) as usize
        );
        // Score never decreases, level tracks lines
        assert!(session.score() >= last_score);
        last_score = session.score();
        assert_eq!(session.level(), level_for_lines(session.lines()));

        // While playable the current piece sits in a legal position
        if session.playable() {
            let piece = session.current().unwrap();
            assert!(!piece.collision(session.board(), 0, 0));
        }
    }

    assert!(session.game_over(), "scripted game should fill the well");
}

#[test]
fn test_command_dispatch_matches_methods() {
    let mut via_apply = GameSession::new(99);
    let mut via_methods = GameSession::new(99);

    via_apply.apply(Command::Start);
    via_methods.start();

    via_apply.apply(Command::MoveLeft);
    via_methods.move_left();
    via_apply.apply(Command::Rotate);
    via_methods.rotate();
    via_apply.apply(Command::Tick);
    via_methods.tick();
    via_apply.apply(Command::HardDrop);
    via_methods.hard_drop();

    assert_eq!(via_apply.snapshot(), via_methods.snapshot());
}

#[test]
fn test_restart_mid_game_resets_counters() {
    let mut session = GameSession::new(31);
    session.start();
    for _ in 0..5 {
        session.hard_drop();
    }
    assert!(session.board().cells().iter().any(|c| c.is_some()));

    session.apply(Command::Start);

    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.level(), 1);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(session.current().unwrap().y, 0);
}

#[test]
fn test_cadence_shrinks_with_level() {
    // The external timer polls the level after every command; the
    // suggested interval tightens to a floor
    assert_eq!(drop_interval_ms(1), 900);
    assert!(drop_interval_ms(2) < drop_interval_ms(1));
    assert_eq!(drop_interval_ms(9), 100);
    assert_eq!(drop_interval_ms(12), 100);
}

#[test]
fn test_snapshot_round_is_stable() {
    let mut session = GameSession::new(512);
    session.start();
    session.tick();

    let mut reused = session.snapshot();
    session.snapshot_into(&mut reused);

    assert_eq!(reused, session.snapshot());
}
