use std::fmt;

use crate::error::RulesError;
use crate::types::{Color, Move, Piece, Square};

/// Square board of `size * size` cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Creates the starting position:
    /// white men on the dark squares of the first `rows_per_side` rows,
    /// black men on the dark squares of the last `rows_per_side` rows.
    pub fn standard(size: u8, rows_per_side: u8) -> Self {
        let mut board = Self::new(size);
        for y in 0..size {
            let color = if y < rows_per_side {
                Color::White
            } else if y >= size.saturating_sub(rows_per_side) {
                Color::Black
            } else {
                continue;
            };

            for x in 0..size {
                let sq = Square::new(x, y);
                if sq.is_dark() {
                    board.set(sq, Some(Piece::man(color)));
                }
            }
        }
        board
    }

    /// Parses one line per row, top row first. Glyphs: `.` empty,
    /// `b`/`w` men, `B`/`W` kings. Spaces inside a line are ignored.
    pub fn from_diagram(text: &str) -> Result<Self, RulesError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 || size > u8::MAX as usize {
            return Err(RulesError::InvalidDiagram(format!(
                "expected between 1 and {} rows, got {size}",
                u8::MAX
            )));
        }

        let mut board = Self::new(size as u8);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(RulesError::InvalidDiagram(format!(
                    "row {y} has {} cells, expected {size}",
                    row.len()
                )));
            }

            for (x, &glyph) in row.iter().enumerate() {
                let piece = match glyph {
                    '.' => None,
                    other => Some(Piece::from_glyph(other).ok_or_else(|| {
                        RulesError::InvalidDiagram(format!("unknown glyph '{other}' at ({x}, {y})"))
                    })?),
                };
                board.set(Square::new(x as u8, y as u8), piece);
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Bounds-checked conversion of raw coordinates.
    pub fn square(&self, x: i32, y: i32) -> Result<Square, RulesError> {
        if in_bounds(self.size, x, y) {
            Ok(Square::new(x as u8, y as u8))
        } else {
            Err(RulesError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// The square `(dx, dy)` away from `from`, or `None` when that is off the board.
    pub fn offset(&self, from: Square, dx: i32, dy: i32) -> Option<Square> {
        self.square(from.x as i32 + dx, from.y as i32 + dy).ok()
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.index(sq).is_some()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|idx| self.cells[idx])
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.index(sq).is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Writes a cell. Off-board squares are ignored.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(idx) = self.index(sq) {
            self.cells[idx] = piece;
        }
    }

    /// Moves the piece at the move's origin and removes captured pieces.
    /// Returns the moved piece.
    ///
    /// Only the shape of `mv` is checked; whether it is legal in this
    /// position is decided by the move generator.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Piece, RulesError> {
        let from = mv.origin();
        let piece = self
            .piece_at(from)
            .ok_or(RulesError::EmptySelection(from))?;

        if let Move::Jump {
            captures, landings, ..
        } = mv
            && (captures.is_empty() || captures.len() != landings.len())
        {
            return Err(RulesError::IllegalMove(format!(
                "jump from {from} has {} captures and {} landings",
                captures.len(),
                landings.len()
            )));
        }

        let to = mv
            .destination()
            .ok_or_else(|| RulesError::IllegalMove(format!("move from {from} has no destination")))?;
        if !self.contains(to) || (to != from && !self.is_empty(to)) {
            return Err(RulesError::IllegalMove(format!("{to} is not an empty square")));
        }

        for &captured in mv.captures() {
            self.set(captured, None);
        }
        self.set(from, None);
        self.set(to, Some(piece));

        Ok(piece)
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u16, u16) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), piece| match piece.color {
                Color::Black => (black + 1, white),
                Color::White => (black, white + 1),
            })
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|piece| (Square::new((idx % size) as u8, (idx / size) as u8), piece))
        })
    }

    /// Converts the board to row-major cell codes, see `Piece::code`.
    pub fn to_cells(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, Piece::code))
            .collect()
    }

    fn index(&self, sq: Square) -> Option<usize> {
        (sq.x < self.size && sq.y < self.size)
            .then(|| sq.y as usize * self.size as usize + sq.x as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let glyph = self.piece_at(Square::new(x, y)).map_or('.', Piece::glyph);
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn in_bounds(size: u8, x: i32, y: i32) -> bool {
    (0..size as i32).contains(&x) && (0..size as i32).contains(&y)
}
