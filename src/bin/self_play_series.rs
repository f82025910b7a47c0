//! Standalone random-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play_series`
//! `cargo run --release --bin self_play_series -- --verbose`
//! `cargo run --release --bin self_play_series -- --games 32 --seed 99`

use chrono::Local;

use crush_ludo_chess::utils::match_harness::{
    play_random_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = flag_value(&args, "--games").unwrap_or(16);
    let base_seed = flag_value(&args, "--seed").unwrap_or(1234);

    let started = Local::now();
    let stats = play_random_match_series(MatchSeriesConfig {
        games: games as u16,
        base_seed,
        per_game: MatchConfig::default(),
        verbose,
    })?;

    println!(
        "[{}] {}",
        started.format("%Y-%m-%d %H:%M:%S"),
        stats.report()
    );
    if verbose {
        println!("outcomes: {:?}", stats.outcomes);
    }
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<u64> {
    let position = args.iter().position(|a| a == flag)?;
    args.get(position + 1)?.parse().ok()
}
