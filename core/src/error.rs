use thiserror::Error;

use crate::{CellIndex, Color};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid generation config: {0}")]
    InvalidConfig(&'static str),
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
    #[error("Grid shape does not match declared size")]
    InvalidGridShape,
    #[error("Unknown color")]
    UnknownColor,
    #[error("No cell carries {0}")]
    ColorNotPresent(Color),
    #[error("No valid grid after {0} attempts")]
    AttemptsExhausted(u32),
}

pub type Result<T> = core::result::Result<T, GameError>;
