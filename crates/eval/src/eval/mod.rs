// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
//!
//! A hand is classified by an ordered list of classifiers, the first one that
//! matches determines the hand [HandRank] and its tie-break values:
//!
//! | Rank            | Class | Tie-break                                  |
//! |-----------------|-------|--------------------------------------------|
//! | Straight flush  | 7     | straight high card                         |
//! | Flush           | 6     | all values descending                      |
//! | Straight        | 5     | straight high card                         |
//! | Three of a kind | 4     | triple, remaining values descending        |
//! | Two pairs       | 3     | high pair, low pair, kicker                |
//! | Pair            | 2     | pair, remaining values descending          |
//! | High card       | 1     | all values descending                      |
//!
//! Straights are checked before flushes, and both before the n-of-a-kind
//! classifiers. There are no four of a kind or full house categories: a hand
//! with four cards of the same value has no triple and no pair and is ranked as
//! high card, a triple with a pair is ranked as three of a kind.
//!
//! The ace is high except in the A-2-3-4-5 straight whose high card is the five.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use carddraw_cards::Hand;

mod classify;

/// The category of a hand, stronger hands compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category matches.
    HighCard = 1,
    /// Two cards of the same value.
    Pair,
    /// Two pairs of different values.
    TwoPairs,
    /// Three cards of the same value.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// A straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPairs,
            ThreeOfAKind,
            Straight,
            Flush,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The rank class from 1 for high card to 7 for straight flush.
    pub fn class(self) -> u8 {
        self as u8
    }

    /// The rank display name.
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High card",
            HandRank::Pair => "Pair",
            HandRank::TwoPairs => "Two pairs",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::StraightFlush => "Straight flush",
        }
    }

    /// A message for a player holding this hand, `None` for high card.
    pub fn congratulation(self) -> Option<&'static str> {
        let msg = match self {
            HandRank::StraightFlush => "Amazing! Straight flush! Congratulations!",
            HandRank::Flush => "Excellent! All cards are the same suit, a flush. Congratulations!",
            HandRank::Straight => "Great! That's a straight. Congratulations!",
            HandRank::ThreeOfAKind => {
                "Great! You have three of a kind (a triple). Congratulations!"
            }
            HandRank::TwoPairs => "Nice! You have two pair. Congratulations!",
            HandRank::Pair => "Good job! You have a pair. Congratulations!",
            HandRank::HighCard => return None,
        };

        Some(msg)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The values that make up a hand category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandDetails {
    /// No details for high card and flush.
    #[default]
    None,
    /// The high card of a straight or straight flush.
    StraightHigh(u8),
    /// The value of the triple.
    Triple(u8),
    /// The high and low pair values.
    Pairs(u8, u8),
    /// The value of the pair.
    Pair(u8),
}

/// The result of evaluating a hand.
///
/// Evaluations are ordered by rank and then by tie-break values, two hands
/// with equal evaluations split the pot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    rank: HandRank,
    tiebreak: Vec<u8>,
    details: HandDetails,
}

impl Evaluation {
    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The rank display name.
    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    /// The values compared, most significant first, when two hands have the
    /// same rank.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak
    }

    /// The values that make up the hand category.
    pub fn details(&self) -> HandDetails {
        self.details
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreak)
    }
}

/// Evaluates a five cards hand.
pub fn evaluate(hand: &Hand) -> Evaluation {
    let eval = classify::classify(hand);
    debug!("{hand} evaluated as {eval}");
    eval
}

/// Compares two evaluations, first by rank and then by tie-break values.
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carddraw_cards::Deck;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn check(s: &str, rank: HandRank, tiebreak: &[u8], details: HandDetails) {
        let eval = evaluate(&hand(s));
        assert_eq!(eval.rank(), rank, "{s}");
        assert_eq!(eval.tiebreak(), tiebreak, "{s}");
        assert_eq!(eval.details(), details, "{s}");
    }

    #[test]
    fn rank_names() {
        let names = HandRank::ranks()
            .map(|r| (r.class(), r.name()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                (1, "High card"),
                (2, "Pair"),
                (3, "Two pairs"),
                (4, "Three of a kind"),
                (5, "Straight"),
                (6, "Flush"),
                (7, "Straight flush"),
            ]
        );

        assert_eq!(HandRank::TwoPairs.to_string(), "Two pairs");
        assert_eq!(HandRank::HighCard.congratulation(), None);
        assert!(
            HandRank::ranks()
                .skip(1)
                .all(|r| r.congratulation().is_some())
        );
    }

    #[test]
    fn straights() {
        use HandDetails::StraightHigh;

        check("9H TH JH QH KH", HandRank::StraightFlush, &[13], StraightHigh(13));
        check("KH QH JH TH AH", HandRank::StraightFlush, &[14], StraightHigh(14));
        check("5D 4D 3D 2D AD", HandRank::StraightFlush, &[5], StraightHigh(5));

        check("2C 3D 4H 5S AC", HandRank::Straight, &[5], StraightHigh(5));
        check("AC KD QH JS TC", HandRank::Straight, &[14], StraightHigh(14));
        check("6C 2D 4H 5S 3C", HandRank::Straight, &[6], StraightHigh(6));

        // No wrap around.
        check("QC KD AH 2S 3C", HandRank::HighCard, &[14, 13, 12, 3, 2], HandDetails::None);
    }

    #[test]
    fn flushes() {
        check(
            "2S 5S 9S JS KS",
            HandRank::Flush,
            &[13, 11, 9, 5, 2],
            HandDetails::None,
        );

        // A flush with a pair is a flush.
        check(
            "2S 2S 9S JS KS",
            HandRank::Flush,
            &[13, 11, 9, 2, 2],
            HandDetails::None,
        );
    }

    #[test]
    fn n_of_a_kind() {
        check(
            "7C 7D 7H KS 2C",
            HandRank::ThreeOfAKind,
            &[7, 13, 2],
            HandDetails::Triple(7),
        );
        check(
            "TC 4D TH 7S 4C",
            HandRank::TwoPairs,
            &[10, 4, 7],
            HandDetails::Pairs(10, 4),
        );
        check(
            "3C AD 9H 3S QC",
            HandRank::Pair,
            &[3, 14, 12, 9],
            HandDetails::Pair(3),
        );
        check(
            "3C AD 9H 8S QC",
            HandRank::HighCard,
            &[14, 12, 9, 8, 3],
            HandDetails::None,
        );
    }

    #[test]
    fn full_house_and_four_of_a_kind() {
        // Triple with a pair is three of a kind, the pair values are kickers.
        check(
            "8C 8D 8H 5S 5C",
            HandRank::ThreeOfAKind,
            &[8, 5, 5],
            HandDetails::Triple(8),
        );

        // Four of a kind has no triple and no pair.
        check(
            "9C 9D 9H 9S 2C",
            HandRank::HighCard,
            &[9, 9, 9, 9, 2],
            HandDetails::None,
        );
    }

    #[test]
    fn unranked_cards() {
        // Unranked cards have value 0.
        check(
            "?C AD 9H 8S QC",
            HandRank::HighCard,
            &[14, 12, 9, 8, 0],
            HandDetails::None,
        );

        // Two unranked cards make a pair of zeros.
        check("?C ?D 9H 8S QC", HandRank::Pair, &[0, 12, 9, 8], HandDetails::Pair(0));

        // A high card with an unranked card loses against any ranked hand.
        let e1 = evaluate(&hand("?C AD 9H 8S QC"));
        let e2 = evaluate(&hand("2C AD 9H 8S QC"));
        assert!(e1 < e2);
    }

    #[test]
    fn compare_evaluations() {
        let sf = evaluate(&hand("9H TH JH QH KH"));
        let fl = evaluate(&hand("2S 5S 9S JS KS"));
        let st = evaluate(&hand("2C 3D 4H 5S AC"));
        let st6 = evaluate(&hand("2C 3D 4H 5S 6C"));
        let p1 = evaluate(&hand("3C AD 9H 3S QC"));
        let p2 = evaluate(&hand("3D AC 9S 3H QD"));
        let p3 = evaluate(&hand("3D AC 9S 3H JD"));

        assert_eq!(compare(&sf, &fl), Ordering::Greater);
        assert_eq!(compare(&fl, &st), Ordering::Greater);
        assert_eq!(compare(&st, &st6), Ordering::Less);
        assert_eq!(compare(&p1, &p2), Ordering::Equal);
        assert_eq!(compare(&p1, &p3), Ordering::Greater);
        assert_eq!(compare(&p3, &p1), Ordering::Less);
        assert_eq!(p1, p2);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let hand = hand("TC 4D TH 7S 4C");
        let e1 = evaluate(&hand);
        let e2 = evaluate(&hand);
        assert_eq!(e1.rank(), e2.rank());
        assert_eq!(e1.tiebreak(), e2.tiebreak());
        assert_eq!(e1.details(), e2.details());
    }

    #[test]
    fn evaluate_all_hands() {
        let mut counts = [0usize; 8];

        Deck::default().for_each_hand(|hand| {
            let eval = evaluate(hand);
            assert!((1..=7).contains(&eval.rank().class()));
            assert!(!eval.tiebreak().is_empty());
            counts[eval.rank().class() as usize] += 1;
        });

        // Four of a kind (624) are high cards, full houses (3,744) are triples.
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540 + 624);
        assert_eq!(counts[HandRank::Pair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPairs as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912 + 3_744);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }

    fn check_order(evals: &[Evaluation]) {
        for a in evals {
            for b in evals {
                assert_eq!(compare(a, b), compare(b, a).reverse(), "{a} {b}");

                for c in evals {
                    if compare(a, b).is_ge() && compare(b, c).is_ge() {
                        assert!(compare(a, c).is_ge(), "{a} {b} {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn compare_is_consistent() {
        let evals = [
            "AS KS QS JS TS",
            "5H 4H 3H 2H AH",
            "KD JD 9D 5D 2D",
            "KC JC 9C 5C 2C",
            "9S 8H 7D 6C 5S",
            "9D 8C 7H 6S 5D",
            "AD 2C 3H 4S 5C",
            "7S 7H 7D KC 2S",
            "7C 7H 7D 4C 4S",
            "TS TH 4D 4C 7S",
            "TD TC 4H 4S 7D",
            "JS JH 9D 5C 2S",
            "?S ?H 9D 5C 2S",
            "AS AH AD AC KS",
            "KS JH 9D 5C 2S",
        ]
        .into_iter()
        .map(|s| evaluate(&hand(s)))
        .collect::<Vec<_>>();

        assert!(HandRank::ranks().all(|r| evals.iter().any(|e| e.rank() == r)));

        // Same rank and tie-break values in different suits.
        assert_eq!(compare(&evals[2], &evals[3]), Ordering::Equal);
        assert_eq!(compare(&evals[4], &evals[5]), Ordering::Equal);
        assert_eq!(compare(&evals[9], &evals[10]), Ordering::Equal);

        check_order(&evals);
    }

    #[test]
    fn compare_shuffled_hands() {
        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            let evals = deck.deal_hands(10).iter().map(evaluate).collect::<Vec<_>>();
            check_order(&evals);
        }
    }
}
