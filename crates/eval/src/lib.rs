// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card draw five cards hand evaluator.
//!
//! The evaluator classifies a five cards hand in one of seven categories, from
//! high card to straight flush, with a tie-break key that orders hands of the
//! same category. Four of a kind and full house are not separate categories: a
//! full house is ranked as three of a kind and four of a kind as high card.
//!
//! To use the evaluator create a [Hand] and call [evaluate], evaluations can be
//! compared with [compare] or the comparison operators:
//!
//! ```
//! # use carddraw_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let e1 = evaluate(&Hand::try_from(&cards[0..5]).unwrap());
//! let e2 = evaluate(&Hand::try_from(&cards[5..]).unwrap());
//! assert_eq!(e1.rank(), HandRank::StraightFlush);
//! assert!(e2 > e1);
//! ```
//!
//! The [showdown()] function ranks the hands of multiple players and returns the
//! winners, more than one if they tie:
//!
//! ```
//! # use carddraw_eval::*;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let evals = deck.deal_hands(4).iter().map(evaluate).collect::<Vec<_>>();
//! let showdown = showdown(&evals).unwrap();
//! assert!(!showdown.winners().is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluation, HandDetails, HandRank, compare, evaluate};

pub mod showdown;
pub use showdown::{Showdown, rank_hands, showdown};

// Reexport cards types.
pub use carddraw_cards::{
    Card, CardError, CardRecord, Deck, Hand, MAX_PLAYERS, Rank, Suit, clamp_players,
    describe_cards, split_hands,
};
