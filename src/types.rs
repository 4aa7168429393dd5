use std::fmt;

use serde::{Deserialize, Serialize};

/// Side colour. Black moves towards row 0, White towards the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i32 {
        match self {
            Self::Black => -1,
            Self::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Diagram glyph: `b`/`w` for men, `B`/`W` for kings.
    pub fn glyph(self) -> char {
        match (self.color, self.rank) {
            (Color::Black, Rank::Man) => 'b',
            (Color::White, Rank::Man) => 'w',
            (Color::Black, Rank::King) => 'B',
            (Color::White, Rank::King) => 'W',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'b' => Some(Self::man(Color::Black)),
            'w' => Some(Self::man(Color::White)),
            'B' => Some(Self::king(Color::Black)),
            'W' => Some(Self::king(Color::White)),
            _ => None,
        }
    }

    /// Cell code used by `Board::to_cells`: 1..=4, 0 is reserved for empty.
    pub fn code(self) -> u8 {
        match (self.color, self.rank) {
            (Color::Black, Rank::Man) => 1,
            (Color::White, Rank::Man) => 2,
            (Color::Black, Rank::King) => 3,
            (Color::White, Rank::King) => 4,
        }
    }
}

/// An on-board coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn is_dark(self) -> bool {
        (u16::from(self.x) + u16::from(self.y)) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A complete move for one turn.
///
/// Contract for `Jump`:
/// - `captures.len() == landings.len() >= 1`.
/// - `captures[i]` is the piece jumped over to reach `landings[i]`.
/// - The mover rests on the last landing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    Slide {
        from: Square,
        to: Square,
    },
    Jump {
        from: Square,
        captures: Vec<Square>,
        landings: Vec<Square>,
    },
}

impl Move {
    pub fn origin(&self) -> Square {
        match self {
            Self::Slide { from, .. } | Self::Jump { from, .. } => *from,
        }
    }

    /// Resting square, or `None` for a jump without landings.
    pub fn destination(&self) -> Option<Square> {
        match self {
            Self::Slide { to, .. } => Some(*to),
            Self::Jump { landings, .. } => landings.last().copied(),
        }
    }

    pub fn captures(&self) -> &[Square] {
        match self {
            Self::Slide { .. } => &[],
            Self::Jump { captures, .. } => captures,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Jump { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slide { from, to } => write!(f, "{from}-{to}"),
            Self::Jump { from, landings, .. } => {
                write!(f, "{from}")?;
                for landing in landings {
                    write!(f, "x{landing}")?;
                }
                Ok(())
            }
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub size: u8,
    /// Row-major cell codes: 0=empty, 1=black man, 2=white man,
    /// 3=black king, 4=white king.
    pub board: Vec<u8>,
    pub turn: Color,
    pub black_count: u16,
    pub white_count: u16,
    pub is_game_over: bool,
    pub winner: Option<Color>,
    /// Contract:
    /// - Squares emptied by captures in the previous move.
    /// - Empty before the first move and after a slide.
    pub captured: Vec<Square>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub black_count: u16,
    pub white_count: u16,
}

/// What a successful `apply_and_advance` leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    InProgress { next: Color },
    Winner { color: Color },
}
