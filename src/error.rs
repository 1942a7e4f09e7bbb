//! Rejected inputs for both puzzles.

use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("maze is {height}x{width}, both sides must be between 2 and 20")]
    Dimensions { height: usize, width: usize },

    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell {at} holds {value}, expected 0 or 1")]
    BadCell { at: Coord, value: u8 },

    #[error("cell {0} is an endpoint and must be passable")]
    BlockedEndpoint(Coord),

    #[error("maze has no route even with one wall removed")]
    Unsolvable,

    #[error("staircase needs between 3 and 200 bricks, got {0}")]
    BrickCount(u32),
}
