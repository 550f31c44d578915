use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// A finished grid together with how many candidates were grown to find it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Generated {
    pub grid: ColorGrid,
    pub attempts: u32,
}

pub trait GridGenerator {
    /// Produces a grid passing [`check_grid`], retrying as long as it takes.
    ///
    /// Fails only when `config` itself is unsatisfiable.
    fn generate(&mut self, config: &GenerationConfig) -> Result<Generated>;
}

/// Grows a valid grid for the default 8×5 configuration.
pub fn generate_valid_grid(seed: u64) -> Result<Generated> {
    RandomGrowthGenerator::new(seed).generate(&GenerationConfig::default())
}
