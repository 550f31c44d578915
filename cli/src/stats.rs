use area_split_core::*;

/// Attempt counts and answers gathered over many generations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub runs: u32,
    pub total_attempts: u64,
    pub min_attempts: Option<u32>,
    pub max_attempts: u32,
    pub majority: [u32; Color::COUNT],
}

impl Stats {
    pub fn record(&mut self, generated: &Generated) {
        self.runs += 1;
        self.total_attempts += u64::from(generated.attempts);
        self.min_attempts = Some(
            self.min_attempts
                .map_or(generated.attempts, |min| min.min(generated.attempts)),
        );
        self.max_attempts = self.max_attempts.max(generated.attempts);
        self.majority[majority_color(&generated.grid).index()] += 1;
    }

    pub fn mean_attempts(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_attempts as f64 / f64::from(self.runs)
        }
    }

    /// Share of grown candidates that passed validation.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            f64::from(self.runs) / self.total_attempts as f64
        }
    }
}

pub fn collect(
    generator: &mut RandomGrowthGenerator,
    config: &GenerationConfig,
    runs: u32,
    max_attempts: u32,
) -> Result<Stats> {
    let mut stats = Stats::default();
    for run in 0..runs {
        let generated = generator.try_generate(config, max_attempts)?;
        log::trace!("run {run}: {} attempts", generated.attempts);
        stats.record(&generated);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_run() {
        let mut generator = RandomGrowthGenerator::new(17);
        let stats = collect(&mut generator, &GenerationConfig::default(), 50, 10_000).unwrap();

        assert_eq!(stats.runs, 50);
        assert_eq!(stats.majority.iter().sum::<u32>(), 50);
        assert!(stats.min_attempts.unwrap() <= stats.max_attempts);
        assert!(stats.mean_attempts() >= 1.0);
        assert!(stats.acceptance_rate() > 0.0 && stats.acceptance_rate() <= 1.0);
    }

    #[test]
    fn empty_stats_report_zero() {
        let stats = Stats::default();

        assert_eq!(stats.mean_attempts(), 0.0);
        assert_eq!(stats.acceptance_rate(), 0.0);
        assert_eq!(stats.min_attempts, None);
    }
}
