//! Black/white asymmetries and other edge cases of the generator.

use super::notations;
use crate::board::{Color, GameState, Piece, PositionBuilder, RuleSet, Square};

fn black_rook_probe(rules: RuleSet) -> GameState {
    PositionBuilder::new()
        .piece(Square(3, 3), Color::Black, Piece::Rook)
        .piece(Square(3, 6), Color::White, Piece::Pawn)
        .piece(Square(3, 0), Color::Black, Piece::Pawn)
        .piece(Square(6, 3), Color::White, Piece::Pawn)
        .piece(Square(0, 3), Color::Black, Piece::Pawn)
        .side_to_move(Color::Black)
        .rules(rules)
        .build()
}

fn black_bishop_probe(rules: RuleSet) -> GameState {
    PositionBuilder::new()
        .piece(Square(3, 3), Color::Black, Piece::Bishop)
        .piece(Square(4, 4), Color::White, Piece::Knight)
        .piece(Square(2, 2), Color::Black, Piece::Pawn)
        .side_to_move(Color::Black)
        .rules(rules)
        .build()
}

#[test]
fn test_start_position_has_twenty_white_moves() {
    for rules in RuleSet::ALL {
        let game = GameState::with_rules(rules);
        let moves = game.all_possible_moves();
        assert_eq!(moves.len(), 20);
        let pawns = moves
            .iter()
            .filter(|m| m.piece_moved().map(|t| t.piece) == Some(Piece::Pawn))
            .count();
        assert_eq!(pawns, 16);
    }
}

#[test]
fn test_valid_moves_do_not_filter_checks() {
    // White king walks next to a black rook's file; nothing stops it.
    let game = PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 3), Color::Black, Piece::Rook)
        .build();
    let moves = game.valid_moves();
    assert_eq!(moves, game.all_possible_moves());
    assert!(moves.iter().any(|m| m.to() == Square(7, 3)));
}

#[test]
fn test_generation_order_is_row_major() {
    let game = GameState::new();
    let moves = notations(&game.valid_moves());
    assert_eq!(&moves[..4], ["a2a3", "a2a4", "b2b3", "b2b4"]);
    assert_eq!(&moves[16..], ["b1c3", "b1a3", "g1h3", "g1f3"]);
}

#[test]
fn test_legacy_black_reply_after_e4() {
    let mut game = GameState::new();
    game.apply_move(game.parse_move("e2e4").unwrap());
    let moves = notations(&game.valid_moves());
    assert_eq!(moves.len(), 26);
    assert_eq!(
        &moves[..10],
        ["a8b8", "c8d7", "c8b7", "d8e8", "d8c8", "d8e7", "d8c7", "f8g7", "f8e7", "h8g8"]
    );
    assert!(moves.iter().all(|m| !m.starts_with("b8") && !m.starts_with("e8")));
}

#[test]
fn test_mirrored_black_reply_after_e4() {
    let mut game = GameState::with_rules(RuleSet::Mirrored);
    game.apply_move(game.parse_move("e2e4").unwrap());
    let moves = notations(&game.valid_moves());
    assert_eq!(moves.len(), 20);
    assert_eq!(&moves[..4], ["b8c6", "b8a6", "g8h6", "g8f6"]);
}

#[test]
fn test_legacy_black_rook_against_blockers() {
    let game = black_rook_probe(RuleSet::Legacy);
    assert_eq!(
        notations(&game.moves_from(Square(3, 3))),
        ["d5d4", "d5d3", "d5d2", "d5d6", "d5d7", "d5e5", "d5f5", "d5c5", "d5b5", "d5a5"]
    );
    // vertical ray takes the white pawn, horizontal ray takes the black one
    let d2 = game.find_move(Square(3, 3), Square(6, 3)).unwrap();
    assert_eq!(d2.piece_captured().map(|t| t.color), Some(Color::White));
    let a5 = game.find_move(Square(3, 3), Square(3, 0)).unwrap();
    assert_eq!(a5.piece_captured().map(|t| t.color), Some(Color::Black));
    assert!(game.find_move(Square(3, 3), Square(3, 6)).is_none());
    assert!(game.find_move(Square(3, 3), Square(0, 3)).is_none());
}

#[test]
fn test_black_blocker_pawns_move_before_the_slider() {
    for rules in RuleSet::ALL {
        let rook = notations(&black_rook_probe(rules).valid_moves());
        assert_eq!(rook.len(), 12, "{rules}");
        assert_eq!(&rook[..2], ["d8d7", "a5a4"], "{rules}");
        assert!(rook[2..].iter().all(|m| m.starts_with("d5")), "{rules}");

        let bishop = notations(&black_bishop_probe(rules).valid_moves());
        assert_eq!(bishop.len(), 8, "{rules}");
        assert_eq!(bishop[0], "c6c5", "{rules}");
        assert!(bishop[1..].iter().all(|m| m.starts_with("d5")), "{rules}");
    }
}

#[test]
fn test_mirrored_black_rook_against_blockers() {
    let game = black_rook_probe(RuleSet::Mirrored);
    assert_eq!(
        notations(&game.moves_from(Square(3, 3))),
        ["d5d6", "d5d7", "d5d4", "d5d3", "d5d2", "d5c5", "d5b5", "d5e5", "d5f5", "d5g5"]
    );
    assert!(game.find_move(Square(3, 3), Square(3, 0)).is_none());
}

#[test]
fn test_legacy_black_bishop_against_blockers() {
    let game = black_bishop_probe(RuleSet::Legacy);
    assert_eq!(
        notations(&game.moves_from(Square(3, 3))),
        ["d5c6", "d5e6", "d5f7", "d5g8", "d5c4", "d5b3", "d5a2"]
    );
    // blocked by the white knight, lands on its own pawn
    assert!(game.find_move(Square(3, 3), Square(4, 4)).is_none());
}

#[test]
fn test_mirrored_black_bishop_against_blockers() {
    let game = black_bishop_probe(RuleSet::Mirrored);
    assert_eq!(
        notations(&game.moves_from(Square(3, 3))),
        ["d5e4", "d5e6", "d5f7", "d5g8", "d5c4", "d5b3", "d5a2"]
    );
    assert!(game.find_move(Square(3, 3), Square(2, 2)).is_none());
}

#[test]
fn test_white_bishop_stops_on_friend_and_takes_enemy() {
    for rules in RuleSet::ALL {
        let game = PositionBuilder::new()
            .piece(Square(7, 2), Color::White, Piece::Bishop)
            .piece(Square(6, 1), Color::White, Piece::Pawn)
            .piece(Square(4, 5), Color::Black, Piece::Pawn)
            .rules(rules)
            .build();
        assert_eq!(
            notations(&game.moves_from(Square(7, 2))),
            ["c1d2", "c1e3", "c1f4"]
        );
    }
}

#[test]
fn test_black_knights_and_king_idle_under_legacy() {
    let legacy = PositionBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 1), Color::Black, Piece::Knight)
        .side_to_move(Color::Black)
        .build();
    assert!(legacy.valid_moves().is_empty());

    let mirrored = PositionBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 1), Color::Black, Piece::Knight)
        .side_to_move(Color::Black)
        .rules(RuleSet::Mirrored)
        .build();
    assert_eq!(
        notations(&mirrored.valid_moves()),
        ["b8c6", "b8a6", "b8d7", "e8e7", "e8f8", "e8d8", "e8f7", "e8d7"]
    );
}

#[test]
fn test_moves_from_ignores_wrong_side_and_empty_squares() {
    let game = GameState::new();
    assert!(game.moves_from(Square(1, 4)).is_empty());
    assert!(game.moves_from(Square(4, 4)).is_empty());
    assert_eq!(game.moves_from(Square(6, 4)).len(), 2);
}

#[test]
fn test_switching_rules_changes_generation() {
    let mut game = GameState::new();
    game.apply_move(game.parse_move("e2e4").unwrap());
    assert_eq!(game.valid_moves().len(), 26);
    game.set_rules(RuleSet::Mirrored);
    assert_eq!(game.valid_moves().len(), 20);
}
