use alloc::vec::Vec;

use rand::prelude::*;

use super::*;

/// Generation strategy that seeds one border cell per color and grows all four regions at once
/// from randomly picked cells, discarding candidates until one satisfies the config.
#[derive(Clone, Debug)]
pub struct RandomGrowthGenerator {
    rng: SmallRng,
}

impl RandomGrowthGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Like [`GridGenerator::generate`], but gives up after `max_attempts` candidates.
    pub fn try_generate(
        &mut self,
        config: &GenerationConfig,
        max_attempts: u32,
    ) -> Result<Generated> {
        config.validate()?;
        self.run(config, Some(max_attempts))
    }

    fn run(&mut self, config: &GenerationConfig, max_attempts: Option<u32>) -> Result<Generated> {
        let mut attempts = 0;

        loop {
            if max_attempts.is_some_and(|max| attempts >= max) {
                log::warn!("Gave up after {attempts} rejected grids");
                return Err(GameError::AttemptsExhausted(attempts));
            }
            attempts += 1;

            // double check, a validated config always seeds and fills the whole grid
            let Some(grid) = self.grow(config.size) else {
                log::warn!("Growth stalled with unassigned cells, retrying");
                continue;
            };

            match check_grid(&grid, config) {
                Ok(()) => {
                    log::debug!("Accepted grid after {attempts} attempts");
                    return Ok(Generated { grid, attempts });
                }
                Err(rejection) => log::trace!("Attempt {attempts} rejected: {rejection}"),
            }
        }
    }

    /// One full growth pass over a fresh buffer.
    fn grow(&mut self, size: GridSize) -> Option<ColorGrid> {
        let mut grid = PartialGrid::new(size);
        let mut assigned: Vec<CellIndex> = Vec::with_capacity(size.total_cells().into());

        let mut border: Vec<CellIndex> = size.border_cells().collect();
        border.shuffle(&mut self.rng);
        for (&seed, color) in border.iter().zip(Color::ALL) {
            grid.assign(seed, color);
            assigned.push(seed);
        }

        let mut targets: Vec<CellIndex> = Vec::with_capacity(4);
        while !grid.is_complete() {
            let &source = assigned.choose(&mut self.rng)?;
            targets.clear();
            targets.extend(grid.unassigned_neighbors(source));

            // boxed in, pick another source
            let Some(&target) = targets.choose(&mut self.rng) else {
                continue;
            };
            let color = grid.get(source)?;
            grid.assign(target, color);
            assigned.push(target);
        }

        grid.finish()
    }
}

impl GridGenerator for RandomGrowthGenerator {
    fn generate(&mut self, config: &GenerationConfig) -> Result<Generated> {
        config.validate()?;
        self.run(config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grown_grids_are_fully_assigned_and_connected() {
        let mut generator = RandomGrowthGenerator::new(7);
        let size = GridSize::default();

        for _ in 0..200 {
            let grid = generator.grow(size).unwrap();
            assert_eq!(grid.clump_count(), 4);
            assert!(grid.color_counts().iter().all(|&count| count >= 1));
        }
    }

    #[test]
    fn seeds_sit_on_the_border() {
        let mut generator = RandomGrowthGenerator::new(11);
        let size = GridSize::new(8, 5);

        for _ in 0..50 {
            let grid = generator.grow(size).unwrap();
            // every color reaches the ring through its seed
            for color in Color::ALL {
                assert!(size.border_cells().any(|index| grid[index] == color));
            }
        }
    }

    #[test]
    fn generated_grid_passes_check() {
        let config = GenerationConfig::default();
        let generated = RandomGrowthGenerator::new(42).generate(&config).unwrap();

        assert!(generated.attempts >= 1);
        assert_eq!(check_grid(&generated.grid, &config), Ok(()));
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = GenerationConfig::default();
        let mut a = RandomGrowthGenerator::new(1234);
        let mut b = RandomGrowthGenerator::new(1234);

        for _ in 0..5 {
            assert_eq!(a.generate(&config).unwrap(), b.generate(&config).unwrap());
        }
    }

    #[test]
    fn attempt_cap_is_reported() {
        let config = GenerationConfig {
            size: GridSize::new(6, 6),
            min_region: 7,
            max_region: 11,
        };
        let mut generator = RandomGrowthGenerator::new(3);

        match generator.try_generate(&config, 1) {
            Ok(generated) => assert_eq!(generated.attempts, 1),
            Err(err) => assert_eq!(err, GameError::AttemptsExhausted(1)),
        }
        assert_eq!(
            generator.try_generate(&config, 0),
            Err(GameError::AttemptsExhausted(0))
        );
    }

    #[test]
    fn rejects_unsatisfiable_config() {
        let config = GenerationConfig {
            min_region: 12,
            ..Default::default()
        };

        assert!(matches!(
            RandomGrowthGenerator::new(0).generate(&config),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
