//! RPSDW Binary
//!
//! Thin adapter between a game runner and the move selector.
//!
//! Commands: decide, duel

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rpsdw::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpsdw", version, about = "Rock-Paper-Scissors-Dynamite-Water bot")]
struct Args {
    /// Log every decision to the terminal.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the next move for a match history read from JSON.
    Decide {
        /// GameState file: {"rounds": [{"p1": "R", "p2": "D"}, ...]}
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        /// Tuning overrides as JSON; missing keys keep their defaults.
        #[arg(long)]
        tuning: Option<PathBuf>,
    },
    /// Play the selector against a random fish and print the tally.
    Duel {
        #[arg(long, default_value_t = 1000)]
        rounds: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        tuning: Option<PathBuf>,
    },
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

fn tuning(path: Option<PathBuf>) -> anyhow::Result<Tuning> {
    Ok(path.map(Tuning::load).transpose()?.unwrap_or_default())
}

fn decide(state: PathBuf, seed: Option<u64>, tuning: Tuning) -> anyhow::Result<Move> {
    let text = std::fs::read_to_string(&state)
        .with_context(|| format!("read game state {}", state.display()))?;
    respond(&text, rng(seed), tuning).with_context(|| format!("decide from {}", state.display()))
}

/// Runner JSON in, next move out. Memory is rebuilt from the history.
fn respond(text: &str, rng: SmallRng, tuning: Tuning) -> anyhow::Result<Move> {
    let ref history = serde_json::from_str::<GameState>(text).context("parse game state")?;
    log::info!("deciding after {} rounds", history.len());
    let mut selector = Selector::resume(tuning, history, rng).observe(Logger);
    Ok(selector.choose(history))
}

fn duel(rounds: usize, seed: Option<u64>, tuning: Tuning) -> Scoreboard {
    let mut selector = Selector::with_rng(tuning, rng(seed)).observe(Logger);
    let mut fish = Fish;
    let mut state = GameState::default();
    let mut board = Scoreboard::default();
    for _ in 0..rounds {
        let ours = selector.make_move(&state);
        let theirs = fish.make_move(&state.flip());
        let round = Round::new(ours, theirs);
        board.record(&round);
        state.push(round);
    }
    log::info!("dynamite left {}", Memory::replay(selector.tuning(), &state).dynamite_left());
    log::info!("fish sees {}", board.flip());
    board
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    log(level)?;
    match args.command {
        Command::Decide {
            state,
            seed,
            tuning: path,
        } => println!("{}", decide(state, seed, tuning(path)?)?),
        Command::Duel {
            rounds,
            seed,
            tuning: path,
        } => println!("{}", duel(rounds, seed, tuning(path)?)),
    }
    Ok(())
}
