// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card draw cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use carddraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 14);
//! ```
//!
//! five cards [Hand]s, and [CardRecord]s as returned by the deck of cards API,
//! where each card has a `value` and a `suit` label:
//!
//! ```
//! # use carddraw_cards::{Card, CardRecord, Rank, Suit};
//! let record = CardRecord::new("QUEEN", "SPADES");
//! let card = Card::try_from(&record).unwrap();
//! assert_eq!(card, Card::new(Rank::Queen, Suit::Spades));
//! ```
//!
//! A [Deck] type can be used as a local card source to deal hands to players:
//!
//! ```
//! # use carddraw_cards::{Deck, Hand};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hands = deck.deal_hands(4);
//! assert_eq!(hands.len(), 4);
//! assert_eq!(deck.count(), 52 - 4 * Hand::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, Suit};

mod hand;
pub use hand::{Hand, MAX_PLAYERS, clamp_players, describe_cards, split_hands};

mod record;
pub use record::{CardError, CardRecord};
