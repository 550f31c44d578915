use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Why a fully grown candidate grid was thrown away.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    RegionTooSmall { color: Color, count: CellCount },
    RegionTooLarge { color: Color, count: CellCount },
    DuplicateRegionSizes { count: CellCount },
    Fragmented { clumps: CellCount },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rejection::*;
        match self {
            RegionTooSmall { color, count } => write!(f, "{color} has only {count} cells"),
            RegionTooLarge { color, count } => write!(f, "{color} has {count} cells"),
            DuplicateRegionSizes { count } => write!(f, "several colors have {count} cells"),
            Fragmented { clumps } => write!(f, "{clumps} clumps instead of one per color"),
        }
    }
}

/// Checks a finished grid against every constraint of `config`, reporting the first violation.
pub fn check_grid(
    grid: &ColorGrid,
    config: &GenerationConfig,
) -> core::result::Result<(), Rejection> {
    let counts = grid.color_counts();

    for (color, count) in Color::ALL.into_iter().zip(counts) {
        if count < config.min_region {
            return Err(Rejection::RegionTooSmall { color, count });
        }
        if count > config.max_region {
            return Err(Rejection::RegionTooLarge { color, count });
        }
    }

    for (i, &count) in counts.iter().enumerate() {
        if counts[..i].contains(&count) {
            return Err(Rejection::DuplicateRegionSizes { count });
        }
    }

    let clumps = grid.clump_count();
    if usize::from(clumps) != Color::COUNT {
        return Err(Rejection::Fragmented { clumps });
    }

    Ok(())
}

impl ColorGrid {
    pub fn is_valid(&self, config: &GenerationConfig) -> bool {
        check_grid(self, config).is_ok()
    }
}
