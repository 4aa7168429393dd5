//! Legal move generation.
//!
//! Slides are listed before jumps. Directions are tried in the fixed order
//! up-left, up-right, down-left, down-right; a man only uses the two that
//! point forward for its colour. Every prefix of a capture chain is a move
//! of its own, so a chain of length k yields k jumps and no maximum-capture
//! rule is applied.

use log::debug;

use crate::board::Board;
use crate::types::{Color, Move, Piece, Rank, Square};

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Captures and landings collected so far along one branch of the chain
/// search. Each branch extends its own copy.
#[derive(Debug, Clone, Default)]
struct Chain {
    captures: Vec<Square>,
    landings: Vec<Square>,
}

impl Chain {
    fn extended(&self, captured: Square, landing: Square) -> Self {
        let mut next = self.clone();
        next.captures.push(captured);
        next.landings.push(landing);
        next
    }

    fn to_move(&self, from: Square) -> Move {
        Move::Jump {
            from,
            captures: self.captures.clone(),
            landings: self.landings.clone(),
        }
    }
}

/// Returns every legal move of the piece standing on `origin`.
/// An empty or off-board origin yields no moves.
pub fn legal_moves(board: &Board, origin: Square) -> Vec<Move> {
    match board.piece_at(origin) {
        Some(piece) => moves_for(board, piece, origin),
        None => Vec::new(),
    }
}

/// Returns every legal move of `piece` as if it stood on `origin`.
/// The origin itself is treated as vacant.
pub fn moves_for(board: &Board, piece: Piece, origin: Square) -> Vec<Move> {
    if !board.contains(origin) {
        return Vec::new();
    }

    let mut moves = slides(board, piece, origin);
    let slide_count = moves.len();
    collect_jumps(board, piece, origin, origin, &Chain::default(), &mut moves);

    debug!(
        "{:?} {:?} at {origin}: {slide_count} slides, {} jumps",
        piece.color,
        piece.rank,
        moves.len() - slide_count
    );
    moves
}

/// Whether any piece of `color` has at least one move.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(origin, piece)| !moves_for(board, piece, origin).is_empty())
}

fn directions(piece: Piece) -> impl Iterator<Item = (i32, i32)> {
    let forward = piece.color.forward();
    DIAGONALS
        .into_iter()
        .filter(move |&(_, dy)| piece.rank == Rank::King || dy == forward)
}

fn slides(board: &Board, piece: Piece, origin: Square) -> Vec<Move> {
    directions(piece)
        .filter_map(|(dx, dy)| board.offset(origin, dx, dy))
        .filter(|&to| board.is_empty(to))
        .map(|to| Move::Slide { from: origin, to })
        .collect()
}

fn collect_jumps(
    board: &Board,
    piece: Piece,
    origin: Square,
    at: Square,
    chain: &Chain,
    out: &mut Vec<Move>,
) {
    for (dx, dy) in directions(piece) {
        let (Some(over), Some(landing)) = (
            board.offset(at, dx, dy),
            board.offset(at, 2 * dx, 2 * dy),
        ) else {
            continue;
        };

        let capturable = board
            .piece_at(over)
            .is_some_and(|victim| victim.color != piece.color);
        let vacant = landing == origin || board.is_empty(landing);
        if !capturable || !vacant || chain.captures.contains(&over) {
            continue;
        }

        let next = chain.extended(over, landing);
        out.push(next.to_move(origin));
        collect_jumps(board, piece, origin, landing, &next, out);
    }
}
