use tally_core::game::GameKind;
use tally_core::session::{MAX_PLAYERS, Mode, ScoreboardController};

fn start(count: usize) -> ScoreboardController {
    let mut board = ScoreboardController::new();
    board
        .start_game(GameKind::TicketToRide)
        .expect("Should open player count entry");
    board
        .confirm_player_count(&count.to_string())
        .expect("Should accept player count");
    board
}

#[test]
fn test_three_player_undo_scenario() {
    let mut board = start(3);

    board.add_score(0, 1).unwrap();
    board.add_score(0, 2).unwrap();
    assert_eq!(board.scores(), vec![3, 0, 0]);

    board.undo_score(0).unwrap();
    assert_eq!(board.scores(), vec![1, 0, 0]);

    board.undo_score(0).unwrap();
    assert_eq!(board.scores(), vec![0, 0, 0]);

    assert_eq!(board.undo_score(0).unwrap(), None, "Undo past start is a no-op");
    assert_eq!(board.scores(), vec![0, 0, 0]);
}

#[test]
fn test_exit_forgets_renamed_players() {
    let mut board = start(3);
    board.rename_player(1, "Alice").unwrap();
    assert_eq!(board.players()[1], "Alice");

    board.exit_to_main_menu();
    assert_eq!(board.mode(), Mode::MainMenu);

    board.start_game(GameKind::TicketToRide).unwrap();
    board.confirm_player_count("3").unwrap();
    assert_eq!(board.players(), vec!["Player 1", "Player 2", "Player 3"]);
    assert!(!board.players().contains(&"Alice"));
}

#[test]
fn test_undo_replays_mixed_history_in_reverse() {
    let mut board = start(2);
    let mut expected = vec![0];

    board.add_preset(1, 6).unwrap();
    expected.push(board.scores()[1]);
    board.add_custom_score(1, "-3").unwrap();
    expected.push(board.scores()[1]);
    board.reset_score(1).unwrap();
    expected.push(board.scores()[1]);
    board.add_preset(1, 2).unwrap();

    // Undo walks back through every prior value
    expected.reverse();
    for value in expected {
        board.undo_score(1).unwrap();
        assert_eq!(board.scores()[1], value);
    }
    assert_eq!(board.undo_score(1).unwrap(), None);
    assert_eq!(board.scores(), vec![0, 0], "Other player untouched");
}

#[test]
fn test_full_table_of_players() {
    let mut board = start(MAX_PLAYERS);
    for i in 0..MAX_PLAYERS {
        board.add_preset(i, 7).unwrap();
    }
    assert_eq!(board.scores(), vec![21; MAX_PLAYERS]);

    let session = board.session().expect("Session should exist in game");
    assert_eq!(session.player_count(), MAX_PLAYERS);
    assert_eq!(session.game, GameKind::TicketToRide);
}

#[test]
fn test_view_serializes_for_front_ends() {
    let mut board = start(2);
    board.toggle_expanded(0).unwrap();
    board.add_preset(0, 1).unwrap();

    let view = board.view();
    let player = view.expanded_player().expect("Player 1 panel open");
    assert_eq!(player.name, "Player 1");
    assert_eq!(player.score, 1);
    assert_eq!(view.players.len(), 2);
}
