//! Board and rule configuration.
//!
//! Board size and the starting layout are data, not constants: the engine
//! plays the 10x10 international setup by default and the 8x8 English setup
//! from a preset, and any even size in `MIN_SIZE..=MAX_SIZE` otherwise.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::RulesError;

pub const MIN_SIZE: u8 = 4;
pub const MAX_SIZE: u8 = 26;
const DEFAULT_SIZE: u8 = 10;
const DEFAULT_ROWS_PER_SIDE: u8 = 4;

/// Initial placement of pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Men on the dark squares of the first `rows_per_side` rows of each side.
    Standard { rows_per_side: u8 },
    /// A board in `Board::from_diagram` format.
    Diagram(String),
}

impl Default for Layout {
    fn default() -> Self {
        Self::Standard {
            rows_per_side: DEFAULT_ROWS_PER_SIDE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: u8,
    pub layout: Layout,
    /// Crown a man that ends its move on the far row.
    pub promotion: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::international()
    }
}

impl BoardConfig {
    /// 10x10 board, four rows of men per side.
    pub fn international() -> Self {
        Self {
            size: DEFAULT_SIZE,
            layout: Layout::default(),
            promotion: true,
        }
    }

    /// 8x8 board, three rows of men per side.
    pub fn english() -> Self {
        Self {
            size: 8,
            layout: Layout::Standard { rows_per_side: 3 },
            promotion: true,
        }
    }

    pub fn with_size(size: u8) -> Self {
        Self {
            size,
            layout: Layout::Standard {
                rows_per_side: (size.saturating_sub(2)) / 2,
            },
            promotion: true,
        }
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) || self.size % 2 != 0 {
            return Err(RulesError::InvalidConfig(format!(
                "board size must be even and within {MIN_SIZE}..={MAX_SIZE}, got {}",
                self.size
            )));
        }

        if let Layout::Standard { rows_per_side } = self.layout
            && (rows_per_side == 0 || rows_per_side.saturating_mul(2) > self.size - 2)
        {
            return Err(RulesError::InvalidConfig(format!(
                "{rows_per_side} rows per side leave no empty rows on a {0}x{0} board",
                self.size
            )));
        }

        Ok(())
    }

    /// Builds the starting board described by this configuration.
    pub fn initial_board(&self) -> Result<Board, RulesError> {
        self.validate()?;

        match &self.layout {
            Layout::Standard { rows_per_side } => Ok(Board::standard(self.size, *rows_per_side)),
            Layout::Diagram(text) => {
                let board = Board::from_diagram(text)?;
                if board.size() != self.size {
                    return Err(RulesError::InvalidConfig(format!(
                        "diagram is {0}x{0} but the configured size is {1}",
                        board.size(),
                        self.size
                    )));
                }
                Ok(board)
            }
        }
    }
}
