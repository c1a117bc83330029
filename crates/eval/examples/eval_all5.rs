// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// High Card:       1303164
// Pair:            1098240
// Two Pairs:       123552
// Three of a Kind: 58656
// Straight:        10200
// Flush:           5108
// Straight Flush:  40
// ```

use std::time::Instant;

use carddraw_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 8];

    Deck::default().for_each_hand(|hand| {
        let rank = evaluate(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("Pair:            {}", counts[HandRank::Pair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPairs as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
