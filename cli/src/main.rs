use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use area_split_core::*;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

mod config;
mod logger;
mod stats;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate valid grids and print them with their majority color
    Generate {
        #[command(flatten)]
        source: Source,

        /// How many grids to generate from the seed
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Print JSON instead of letter rows
        #[arg(long)]
        json: bool,
    },
    /// Run many generations and report how many attempts they needed
    Stats {
        #[command(flatten)]
        source: Source,

        #[arg(short, long, default_value_t = 10_000)]
        runs: u32,

        /// Fail when one generation needs more attempts than this
        #[arg(long, default_value_t = 10_000)]
        max_attempts: u32,
    },
    /// Analyze a grid of R/Y/G/B rows read from a file or stdin
    Check {
        file: Option<PathBuf>,

        /// TOML file overriding grid size and region bounds
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Source {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file overriding grid size and region bounds
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Source {
    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[derive(Serialize)]
struct GridReport {
    seed: u64,
    attempts: u32,
    rows: Vec<String>,
    counts: ColorCounts,
    majority: Color,
}

fn counts_line(counts: &ColorCounts) -> String {
    Color::ALL
        .iter()
        .map(|color| format!("{} {}", color.letter(), counts[color.index()]))
        .collect::<Vec<_>>()
        .join(", ")
}

fn generate(source: &Source, count: u32, json: bool) -> Result<()> {
    let config = config::load(source.config.as_deref())?;
    let seed = source.seed();
    log::info!("seed: {seed}");

    let mut generator = RandomGrowthGenerator::new(seed);
    for i in 0..count {
        let generated = generator.generate(&config)?;
        let counts = generated.grid.color_counts();
        let majority = majority_of(&counts);

        if json {
            let report = GridReport {
                seed,
                attempts: generated.attempts,
                rows: generated.grid.to_string().lines().map(String::from).collect(),
                counts,
                majority,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            if i > 0 {
                println!();
            }
            println!("{}", generated.grid);
            println!("Most common color: {majority} ({})", counts_line(&counts));
            println!("Attempts: {}", generated.attempts);
        }
    }
    Ok(())
}

fn report_stats(source: &Source, runs: u32, max_attempts: u32) -> Result<()> {
    let config = config::load(source.config.as_deref())?;
    let seed = source.seed();
    log::info!("seed: {seed}");

    let mut generator = RandomGrowthGenerator::new(seed);
    let stats = stats::collect(&mut generator, &config, runs, max_attempts)
        .with_context(|| format!("Generation did not finish within {max_attempts} attempts"))?;

    println!("Runs: {}", stats.runs);
    println!(
        "Attempts: min {}, mean {:.1}, max {}",
        stats.min_attempts.unwrap_or_default(),
        stats.mean_attempts(),
        stats.max_attempts
    );
    println!("Acceptance rate: {:.2}%", 100.0 * stats.acceptance_rate());
    for color in Color::ALL {
        println!("Majority {color}: {}", stats.majority[color.index()]);
    }
    Ok(())
}

fn check(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load(config_path.as_deref())?;
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read grid {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Could not read grid from stdin")?,
    };
    let grid: ColorGrid = text.parse().context("Could not parse grid")?;
    let counts = grid.color_counts();

    println!("{grid}");
    println!("Counts: {}", counts_line(&counts));
    println!("Clumps: {}", grid.clump_count());
    println!("Most common color: {}", majority_of(&counts));

    if grid.size() != config.size {
        bail!(
            "Grid is {}x{}, expected {}x{}",
            grid.size().width,
            grid.size().height,
            config.size.width,
            config.size.height
        );
    }
    match check_grid(&grid, &config) {
        Ok(()) => {
            println!("Valid");
            Ok(())
        }
        Err(rejection) => bail!("Invalid: {rejection}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose.log_level_filter()).context("Error initializing logger")?;

    match cli.command {
        Command::Generate {
            source,
            count,
            json,
        } => generate(&source, count, json),
        Command::Stats {
            source,
            runs,
            max_attempts,
        } => report_stats(&source, runs, max_attempts),
        Command::Check { file, config } => check(file, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from(["area-split", "-v", "generate", "--seed", "7", "-n", "3"])
            .unwrap();

        match cli.command {
            Command::Generate {
                source,
                count,
                json,
            } => {
                assert_eq!(source.seed, Some(7));
                assert_eq!(source.seed(), 7);
                assert_eq!(count, 3);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn counts_line_lists_every_color() {
        assert_eq!(counts_line(&[13, 11, 9, 7]), "R 13, Y 11, G 9, B 7");
    }
}
