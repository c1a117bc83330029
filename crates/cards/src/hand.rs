// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands.
use log::warn;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, CardError, CardRecord, Deck};

/// The maximum number of players that can be dealt a hand from one deck.
pub const MAX_PLAYERS: usize = Deck::SIZE / Hand::SIZE;

/// A five cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub const fn new(cards: [Card; Hand::SIZE]) -> Self {
        Self(cards)
    }

    /// Creates a hand from five card records.
    ///
    /// Records with an unknown rank label are kept as unranked cards, records
    /// with an unknown suit label are rejected.
    ///
    /// The rejection is stricter than the card-draw script, which evaluates a
    /// hand with an unknown suit label as a distinct suit that never flushes.
    pub fn from_records(records: &[CardRecord]) -> Result<Self, CardError> {
        let cards = records
            .iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::try_from(cards.as_slice())
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// The cards numeric values in dealing order.
    pub fn values(&self) -> [u8; Hand::SIZE] {
        self.0.map(|c| c.value())
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = CardError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; Hand::SIZE]>::try_from(cards)
            .map(Hand)
            .map_err(|_| CardError::HandSize(cards.len()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.0;
        write!(f, "{c1} {c2} {c3} {c4} {c5}")
    }
}

/// Parses a hand from five cards separated by whitespace, i.e. `AS KD 2C TH 9H`.
impl FromStr for Hand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::try_from(cards.as_slice())
    }
}

/// Clamps the number of players to `1..=MAX_PLAYERS`.
pub fn clamp_players(players: usize) -> usize {
    if players > MAX_PLAYERS {
        warn!(
            "Requested {players} players, limiting to {MAX_PLAYERS}: a deck of {} cards \
             has enough cards for {MAX_PLAYERS} hands of {} cards",
            Deck::SIZE,
            Hand::SIZE,
        );
    }

    players.clamp(1, MAX_PLAYERS)
}

/// Splits dealt cards into one hand per player.
///
/// Consecutive groups of five cards make a hand, cards that don't complete a
/// hand are dropped.
pub fn split_hands(cards: &[Card], players: usize) -> Vec<Hand> {
    let requested = players * Hand::SIZE;
    if cards.len() < requested {
        warn!(
            "Requested {requested} cards but only received {}",
            cards.len()
        );
    }

    cards
        .chunks_exact(Hand::SIZE)
        .take(players)
        .filter_map(|chunk| Hand::try_from(chunk).ok())
        .collect()
}

/// Describes cards with their labels, i.e. `ACE of SPADES, 10 of HEARTS`.
pub fn describe_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::describe)
        .collect::<Vec<_>>()
        .join(", ")
}
