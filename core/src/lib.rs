#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use color::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use round::*;
pub use types::*;

mod analysis;
mod color;
mod error;
mod generator;
mod grid;
mod round;
mod types;

/// Shape of the grid and the size bounds every color region must respect.
///
/// Missing fields fall back to the defaults when deserializing, so a config file only needs to
/// mention what it changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub size: GridSize,
    pub min_region: CellCount,
    pub max_region: CellCount,
}

impl GenerationConfig {
    pub const fn new(size: GridSize, min_region: CellCount, max_region: CellCount) -> Self {
        Self {
            size,
            min_region,
            max_region,
        }
    }

    /// Rejects configs no grid can satisfy: four distinct region sizes within the bounds must be
    /// able to add up to the cell total, and there must be a border cell for every seed.
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(GameError::InvalidConfig("grid must not be empty"));
        }
        if self.size.border_cells().count() < Color::COUNT {
            return Err(GameError::InvalidConfig("not enough border cells to seed every color"));
        }
        if self.min_region > self.max_region {
            return Err(GameError::InvalidConfig("min_region is larger than max_region"));
        }

        let total = u32::from(self.size.total_cells());
        let min = u32::from(self.min_region);
        let max = u32::from(self.max_region);
        // smallest and largest sums of four distinct sizes
        let lowest = 4 * min + 6;
        let highest = (4 * max).saturating_sub(6);
        if total < lowest || total > highest {
            return Err(GameError::InvalidConfig(
                "no four distinct region sizes within bounds cover the grid",
            ));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(GridSize::default(), 7, 14)
    }
}
