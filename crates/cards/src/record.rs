// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card records as returned by the deck of cards API.
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors when converting labels and records to cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank label is not one of `2`..`10`, `JACK`, `QUEEN`, `KING`, `ACE`.
    #[error("Unknown rank label {0:?}")]
    UnknownRank(String),
    /// The suit label is not one of `CLUBS`, `DIAMONDS`, `HEARTS`, `SPADES`.
    #[error("Unknown suit label {0:?}")]
    UnknownSuit(String),
    /// The card is not in the short form used for display, i.e. `AS`.
    #[error("Invalid card {0:?}")]
    InvalidCard(String),
    /// A hand must have exactly five cards.
    #[error("A hand needs 5 cards, got {0}")]
    HandSize(usize),
}

/// A card record from the card source.
///
/// Deserializes from the API card objects, other fields like `image` are
/// ignored:
///
/// ```json
/// { "code": "KH", "value": "KING", "suit": "HEARTS", "image": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// The rank label.
    pub value: String,
    /// The suit label.
    pub suit: String,
    /// The two letters card code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CardRecord {
    /// Creates a record from a rank and a suit label.
    pub fn new(value: impl Into<String>, suit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            suit: suit.into(),
            code: None,
        }
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self {
            value: card.rank().map_or("?", Rank::label).to_string(),
            suit: card.suit().label().to_string(),
            code: card.rank().map(|_| card.to_string()),
        }
    }
}

impl TryFrom<&CardRecord> for Card {
    type Error = CardError;

    /// An unknown rank label gives an unranked card with value 0, an unknown
    /// suit label is an error.
    fn try_from(record: &CardRecord) -> Result<Self, Self::Error> {
        let suit = record.suit.parse::<Suit>()?;

        match Rank::from_label(&record.value) {
            Some(rank) => Ok(Card::new(rank, suit)),
            None => {
                debug!("Unknown rank label {:?}, card value set to 0", record.value);
                Ok(Card::unranked(suit))
            }
        }
    }
}
