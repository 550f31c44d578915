use alloc::string::ToString;

use serde::{Deserialize, Serialize};

use crate::*;

/// How a round ended once its timer ran out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    NoSelection,
    Correct(Color),
    Incorrect(Color),
}

impl RoundOutcome {
    pub const fn is_strike(self) -> bool {
        !matches!(self, Self::Correct(_))
    }
}

/// One activation: a frozen grid, its answer, and whatever the player picked so far.
///
/// The majority is not serialized, it is recomputed from the grid when loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RoundState", into = "RoundState")]
pub struct Round {
    grid: ColorGrid,
    majority: Color,
    selected: Option<Color>,
}

#[derive(Serialize, Deserialize)]
struct RoundState {
    grid: ColorGrid,
    selected: Option<Color>,
}

impl From<RoundState> for Round {
    fn from(state: RoundState) -> Self {
        Self {
            selected: state.selected,
            ..Self::new(state.grid)
        }
    }
}

impl From<Round> for RoundState {
    fn from(round: Round) -> Self {
        Self {
            grid: round.grid,
            selected: round.selected,
        }
    }
}

impl Round {
    pub fn new(grid: ColorGrid) -> Self {
        let majority = majority_color(&grid);
        Self {
            grid,
            majority,
            selected: None,
        }
    }

    pub fn start(
        generator: &mut impl GridGenerator,
        config: &GenerationConfig,
    ) -> Result<Self> {
        let generated = generator.generate(config)?;
        let round = Self::new(generated.grid);

        log::info!("Grid:");
        for line in round.grid.to_string().lines() {
            log::info!("{line}");
        }
        log::info!("Most common color is {}.", round.majority);

        Ok(round)
    }

    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    pub fn majority(&self) -> Color {
        self.majority
    }

    pub fn selected(&self) -> Option<Color> {
        self.selected
    }

    /// Selects the color of the pressed cell, replacing any earlier choice.
    pub fn select_cell(&mut self, index: CellIndex) -> Result<Color> {
        let color = self.grid.get(index).ok_or(GameError::InvalidCell(index))?;
        self.selected = Some(color);
        Ok(color)
    }

    /// Presses the first cell carrying `color`, as a command would.
    pub fn select_color(&mut self, color: Color) -> Result<CellIndex> {
        let index = self
            .grid
            .first_cell_of(color)
            .ok_or(GameError::ColorNotPresent(color))?;
        self.select_cell(index)?;
        Ok(index)
    }

    /// Whether the cell belongs to the currently selected color.
    pub fn is_highlighted(&self, index: CellIndex) -> bool {
        self.selected.is_some() && self.grid.get(index) == self.selected
    }

    /// Cell a forced solve presses.
    pub fn solution_cell(&self) -> Result<CellIndex> {
        self.grid
            .first_cell_of(self.majority)
            .ok_or(GameError::ColorNotPresent(self.majority))
    }

    pub fn finish(self) -> RoundOutcome {
        let outcome = match self.selected {
            None => RoundOutcome::NoSelection,
            Some(color) if color == self.majority => RoundOutcome::Correct(color),
            Some(color) => RoundOutcome::Incorrect(color),
        };

        match outcome {
            RoundOutcome::NoSelection => log::info!("No color was selected. Strike."),
            RoundOutcome::Correct(color) => {
                log::info!("{color} was correctly selected. Needy disarmed.")
            }
            RoundOutcome::Incorrect(color) => {
                log::info!("{color} was incorrectly selected. Strike.")
            }
        }

        outcome
    }
}
