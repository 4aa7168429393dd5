//! End-to-end games driven through the public `GameState` API.

use checkers::board::Board;
use checkers::config::{BoardConfig, Layout};
use checkers::error::RulesError;
use checkers::game::GameState;
use checkers::movegen;
use checkers::types::{Color, Move, Outcome, Piece, Square};

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y)
}

fn jump(from: Square, captures: &[Square], landings: &[Square]) -> Move {
    Move::Jump {
        from,
        captures: captures.to_vec(),
        landings: landings.to_vec(),
    }
}

#[test]
fn standard_setup_black_man_slides_forward() {
    let game = GameState::new(BoardConfig::international()).unwrap();

    let moves = game.legal_moves(1, 6).unwrap();

    assert_eq!(
        moves,
        vec![
            Move::Slide {
                from: sq(1, 6),
                to: sq(0, 5)
            },
            Move::Slide {
                from: sq(1, 6),
                to: sq(2, 5)
            },
        ]
    );
    assert!(!moves.iter().any(Move::is_capture));
}

#[test]
fn adjacent_opponent_can_be_jumped() {
    let mut board = Board::new(10);
    board.set(sq(2, 2), Some(Piece::man(Color::White)));
    board.set(sq(3, 3), Some(Piece::man(Color::Black)));

    let moves = movegen::legal_moves(&board, sq(3, 3));

    assert!(moves.contains(&jump(sq(3, 3), &[sq(2, 2)], &[sq(1, 1)])));
}

#[test]
fn double_capture_offers_every_prefix_and_applies_the_full_chain() {
    let diagram = "\
..........
..........
..........
...w.w....
....b.....
..........
..........
..........
..........
.........w
";
    let board = Board::from_diagram(diagram).unwrap();
    let bare = movegen::legal_moves(&board, sq(4, 4));
    assert_eq!(
        bare,
        vec![
            jump(sq(4, 4), &[sq(3, 3)], &[sq(2, 2)]),
            jump(sq(4, 4), &[sq(5, 3)], &[sq(6, 2)]),
        ]
    );

    // A further white man in line past (6, 2) extends the right-hand capture.
    let mut board = board;
    board.set(sq(7, 1), Some(Piece::man(Color::White)));
    let config = BoardConfig {
        promotion: false,
        ..BoardConfig::international()
    };
    let mut game = GameState::from_board(config, board, Color::Black).unwrap();

    let moves = game.legal_moves(4, 4).unwrap();
    let chain = jump(sq(4, 4), &[sq(5, 3), sq(7, 1)], &[sq(6, 2), sq(8, 0)]);
    assert_eq!(moves.len(), 3);
    assert!(moves.contains(&jump(sq(4, 4), &[sq(3, 3)], &[sq(2, 2)])));
    assert!(moves.contains(&jump(sq(4, 4), &[sq(5, 3)], &[sq(6, 2)])));
    assert!(moves.contains(&chain));

    let outcome = game.apply_and_advance(4, 4, &chain).unwrap();

    assert_eq!(outcome, Outcome::InProgress { next: Color::White });
    let board = game.board();
    assert!(board.is_empty(sq(5, 3)));
    assert!(board.is_empty(sq(7, 1)));
    assert!(board.is_empty(sq(6, 2)));
    assert!(board.is_empty(sq(4, 4)));
    assert_eq!(board.piece_at(sq(8, 0)), Some(Piece::man(Color::Black)));
    assert_eq!(board.piece_at(sq(3, 3)), Some(Piece::man(Color::White)));
    assert_eq!(board.count(), (1, 2));
}

#[test]
fn shorter_chain_may_be_chosen() {
    let diagram = "\
........
........
.w......
........
...w....
....b...
........
.......w
";
    let board = Board::from_diagram(diagram).unwrap();
    let mut game = GameState::from_board(BoardConfig::english(), board, Color::Black).unwrap();
    let short = jump(sq(4, 5), &[sq(3, 4)], &[sq(2, 3)]);

    assert!(
        game.legal_moves(4, 5)
            .unwrap()
            .contains(&jump(sq(4, 5), &[sq(3, 4), sq(1, 2)], &[sq(2, 3), sq(0, 1)]))
    );
    game.apply_and_advance(4, 5, &short).unwrap();

    assert_eq!(game.board().piece_at(sq(2, 3)), Some(Piece::man(Color::Black)));
    assert_eq!(game.board().piece_at(sq(1, 2)), Some(Piece::man(Color::White)));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn turns_alternate_until_elimination() {
    let diagram = "\
........
........
........
..w.....
........
....b...
........
........
";
    let board = Board::from_diagram(diagram).unwrap();
    let mut game = GameState::from_board(BoardConfig::english(), board, Color::Black).unwrap();

    let step = |x: u8, y: u8, to: Square| Move::Slide {
        from: sq(x, y),
        to,
    };

    assert_eq!(
        game.apply_and_advance(4, 5, &step(4, 5, sq(3, 4))).unwrap(),
        Outcome::InProgress { next: Color::White }
    );
    assert_eq!(
        game.apply_and_advance(2, 3, &step(2, 3, sq(1, 4))).unwrap(),
        Outcome::InProgress { next: Color::Black }
    );
    assert_eq!(
        game.apply_and_advance(3, 4, &step(3, 4, sq(2, 3))).unwrap(),
        Outcome::InProgress { next: Color::White }
    );

    let capture = jump(sq(1, 4), &[sq(2, 5)], &[sq(3, 6)]);
    assert_eq!(
        game.apply_and_advance(1, 4, &capture),
        Err(RulesError::IllegalMove(format!(
            "{capture} is not a legal move for the piece at {}",
            sq(1, 4)
        )))
    );
    assert_eq!(
        game.apply_and_advance(1, 4, &step(1, 4, sq(0, 5))).unwrap(),
        Outcome::InProgress { next: Color::Black }
    );

    let finish = game
        .legal_moves(2, 3)
        .unwrap()
        .into_iter()
        .find(Move::is_capture);
    assert!(finish.is_none());
    assert!(game.has_legal_moves_for_current());
}

#[test]
fn diagram_layout_starts_a_game() {
    let config = BoardConfig {
        size: 4,
        layout: Layout::Diagram(".w..\n....\n....\nb...".to_string()),
        promotion: true,
    };

    let game = GameState::new(config).unwrap();

    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.board().count(), (1, 1));
    assert_eq!(game.legal_moves(0, 3).unwrap().len(), 1);
}

#[test]
fn games_are_independent_values() {
    let mut first = GameState::new(BoardConfig::english()).unwrap();
    let second = first.clone();
    let mv = first.legal_moves(0, 5).unwrap()[0].clone();

    first.apply_and_advance(0, 5, &mv).unwrap();

    assert_ne!(first, second);
    assert_eq!(second.turn(), Color::Black);
    assert_eq!(first.turn(), Color::White);
}
