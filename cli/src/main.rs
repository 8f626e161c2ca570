use std::io;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::Rng;
use tinysweep_core::{Game, GameConfig, RandomBoardGenerator};

mod driver;

#[derive(Parser, Debug)]
#[command(version, about = "Text Minesweeper, reveal cells until you hit a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Number of mines, must leave at least one safe cell
    #[arg(long, default_value_t = 10)]
    mines: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Logs go to stderr, stdout stays reserved for the board and prompts.
fn init_logger(verbose: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(verbose.log_level_filter())
        .try_init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(&args.verbose)?;

    let config = GameConfig::new(args.rows, args.cols, args.mines)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("config: {:?}, seed: {}", config, seed);

    let mut game = Game::new(config, RandomBoardGenerator::from_seed(seed));
    driver::run(&mut game, io::stdin().lock(), &mut io::stdout().lock())
}
