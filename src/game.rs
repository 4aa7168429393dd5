use log::{debug, info, warn};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::RulesError;
use crate::movegen;
use crate::types::{Color, GameResult, GameView, Move, Outcome, Piece, Rank, Square};

/// Black moves first.
const FIRST_PLAYER: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    GameOver { winner: Color },
}

/// One game: board, side to move and whether the game has ended.
///
/// All mutation goes through `apply_and_advance`, `check_victory` and
/// `next_turn`. A rejected call leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: BoardConfig,
    board: Board,
    turn: Color,
    status: GameStatus,
    captured: Vec<Square>,
}

impl GameState {
    /// Starts a game from the configured initial layout.
    pub fn new(config: BoardConfig) -> Result<Self, RulesError> {
        let board = config.initial_board()?;
        info!(
            "new {0}x{0} game, promotion {1}",
            config.size,
            if config.promotion { "on" } else { "off" }
        );
        Ok(Self::with_board(config, board, FIRST_PLAYER))
    }

    /// Starts a game from an arbitrary position with `turn` to move.
    pub fn from_board(config: BoardConfig, board: Board, turn: Color) -> Result<Self, RulesError> {
        if board.size() != config.size {
            return Err(RulesError::InvalidConfig(format!(
                "board is {0}x{0} but the configured size is {1}",
                board.size(),
                config.size
            )));
        }
        Ok(Self::with_board(config, board, turn))
    }

    fn with_board(config: BoardConfig, board: Board, turn: Color) -> Self {
        Self {
            config,
            board,
            turn,
            status: GameStatus::InProgress,
            captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::GameOver { winner } => Some(winner),
        }
    }

    /// Legal moves of whichever piece stands on `(x, y)`.
    /// A piece with no moves is `Ok(vec![])`, not an error.
    pub fn legal_moves(&self, x: i32, y: i32) -> Result<Vec<Move>, RulesError> {
        let origin = self.board.square(x, y)?;
        if self.board.piece_at(origin).is_none() {
            return Err(RulesError::EmptySelection(origin));
        }
        Ok(movegen::legal_moves(&self.board, origin))
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        movegen::has_any_move(&self.board, self.turn)
    }

    /// Plays `mv` for the piece on `(x, y)`, then promotes, checks for a
    /// winner and passes the turn.
    pub fn apply_and_advance(&mut self, x: i32, y: i32, mv: &Move) -> Result<Outcome, RulesError> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }

        let origin = self.board.square(x, y)?;
        let piece = self
            .board
            .piece_at(origin)
            .ok_or(RulesError::EmptySelection(origin))?;
        if piece.color != self.turn {
            return Err(RulesError::NotYourTurn {
                expected: self.turn,
                found: piece.color,
            });
        }

        if mv.origin() != origin || !movegen::legal_moves(&self.board, origin).contains(mv) {
            warn!("rejected {mv} for {} at {origin}", piece.color);
            return Err(RulesError::IllegalMove(format!(
                "{mv} is not a legal move for the piece at {origin}"
            )));
        }

        let mut board = self.board.clone();
        let moved = board.apply_move(mv)?;
        self.board = board;
        self.captured = mv.captures().to_vec();
        debug!("{} played {mv}", moved.color);

        if let Some(landing) = mv.destination() {
            self.promote(landing, moved);
        }

        if let Some(winner) = self.check_victory() {
            return Ok(Outcome::Winner { color: winner });
        }

        self.next_turn();
        Ok(Outcome::InProgress { next: self.turn })
    }

    /// Ends the game when one colour has no pieces left.
    pub fn check_victory(&mut self) -> Option<Color> {
        if let GameStatus::GameOver { winner } = self.status {
            return Some(winner);
        }

        let winner = match self.board.count() {
            (0, 0) => None,
            (_, 0) => Some(Color::Black),
            (0, _) => Some(Color::White),
            _ => None,
        }?;

        info!("{winner} wins");
        self.status = GameStatus::GameOver { winner };
        Some(winner)
    }

    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn to_view(&self) -> GameView {
        let (black_count, white_count) = self.board.count();
        GameView {
            size: self.board.size(),
            board: self.board.to_cells(),
            turn: self.turn,
            black_count,
            white_count,
            is_game_over: self.is_over(),
            winner: self.winner(),
            captured: self.captured.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: self.winner(),
            black_count,
            white_count,
        }
    }

    fn promote(&mut self, at: Square, piece: Piece) {
        if !self.config.promotion || piece.rank != Rank::Man || at.y != self.far_row(piece.color) {
            return;
        }
        debug!("{} man crowned at {at}", piece.color);
        self.board.set(at, Some(Piece::king(piece.color)));
    }

    fn far_row(&self, color: Color) -> u8 {
        match color {
            Color::Black => 0,
            Color::White => self.board.size() - 1,
        }
    }
}
