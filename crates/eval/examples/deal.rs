// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals five cards to each player and finds the winners.
//
// ```bash
// $ cargo r --example deal -- --players 3 --seed 42
// ```
use anyhow::{Result, bail};
use clap::Parser;
use rand::prelude::*;

use carddraw_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players, limited to 10.
    #[clap(long, short, default_value_t = 1)]
    players: usize,
    /// Seed for shuffling the deck.
    #[clap(long, short)]
    seed: Option<u64>,
}

/// Dealing config.
#[derive(Debug)]
struct Config {
    /// Number of players in 1..=MAX_PLAYERS.
    players: usize,
    /// Seed for shuffling the deck.
    seed: Option<u64>,
}

fn run(config: Config) -> Result<()> {
    let mut deck = match config.seed {
        Some(seed) => Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::new_and_shuffled(&mut rand::rng()),
    };

    let hands = deck.deal_hands(config.players);
    if hands.len() != config.players {
        bail!("Dealt {} hands for {} players", hands.len(), config.players);
    }

    let mut evals = Vec::with_capacity(hands.len());
    for (idx, hand) in hands.iter().enumerate() {
        let player = idx + 1;
        let eval = evaluate(hand);

        println!("\nPlayer {player} hand: {}", describe_cards(hand.cards()));
        println!("Player {player} result: {}", eval.name());
        if let Some(msg) = eval.rank().congratulation() {
            println!("{msg}");
        }

        evals.push(eval);
    }

    if evals.len() < 2 {
        return Ok(());
    }

    let Some(showdown) = showdown(&evals) else {
        bail!("No hands to compare");
    };

    let winners = showdown
        .winners()
        .iter()
        .map(|idx| format!("Player {}", idx + 1))
        .collect::<Vec<_>>();

    if showdown.is_tie() {
        println!(
            "\nIt's a tie between {} with {}!",
            winners.join(", "),
            showdown.rank_name()
        );
    } else {
        println!("\n{} wins with {}!", winners[0], showdown.rank_name());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        players: clamp_players(cli.players),
        seed: cli.seed,
    };

    run(config)
}
