//! Arena - plays two search configurations against each other
//!
//! Every opening of `--plies` moves is played twice, once with each
//! configuration moving first, and the totals are printed at the end.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use connect4_search::arena::{openings, Arena};
use connect4_search::config::{init_tracing, SearchConfig, DEFAULT_LOG_LEVEL, MAX_DEPTH};
use connect4_search::search::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Play Connect 4 search algorithms against each other")]
struct Args {
    /// Algorithm of the first side (minimax, alphabeta, expectimax)
    #[arg(long, default_value = "alphabeta")]
    first: Algorithm,

    /// Search depth of the first side
    #[arg(long, default_value_t = 4)]
    first_depth: usize,

    /// Algorithm of the second side (minimax, alphabeta, expectimax)
    #[arg(long, default_value = "expectimax")]
    second: Algorithm,

    /// Search depth of the second side
    #[arg(long, default_value_t = 4)]
    second_depth: usize,

    /// Length of the openings games start from
    #[arg(long, default_value_t = 2)]
    plies: usize,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let first = SearchConfig::new(args.first, args.first_depth)?;
    let second = SearchConfig::new(args.second, args.second_depth)?;
    info!(%first, %second, max_depth = MAX_DEPTH, "configuration validated");

    let openings = openings(args.plies);
    println!(
        "{} vs {}: {} openings of {} plies, {} games",
        first,
        second,
        openings.len(),
        args.plies,
        2 * openings.len()
    );

    let arena = Arena::new(first, second);
    let summary = arena.run(&openings)?;

    println!("{:<28} {:>6} {:>14}", "", "wins", "positions");
    for (side, config) in arena.sides().iter().enumerate() {
        println!(
            "{:<28} {:>6} {:>14}",
            config.to_string(),
            summary.wins[side],
            summary.nodes[side]
        );
    }
    println!("draws: {}, forfeits: {}", summary.draws, summary.forfeits);
    Ok(())
}
