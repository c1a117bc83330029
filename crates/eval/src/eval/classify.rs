// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifiers.
use carddraw_cards::Hand;

use super::{Evaluation, HandDetails, HandRank};

/// The highest card value, values from unranked cards are 0.
const MAX_VALUE: usize = 14;

/// A classifier returns an evaluation if the hand matches its category.
type Classifier = fn(&Tally) -> Option<Evaluation>;

/// Classifiers in priority order, the first match wins.
const CLASSIFIERS: &[Classifier] = &[
    straight_flush,
    straight,
    flush,
    three_of_a_kind,
    two_pairs,
    pair,
];

/// Values and suits counts for a hand.
struct Tally {
    /// Values sorted in descending order.
    values: [u8; Hand::SIZE],
    /// Number of cards for each value.
    counts: [u8; MAX_VALUE + 1],
    /// All cards have the same suit.
    same_suit: bool,
    /// The straight high card if the values make a straight.
    straight_high: Option<u8>,
}

impl Tally {
    fn new(hand: &Hand) -> Self {
        let mut values = hand.values();
        values.sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = [0u8; MAX_VALUE + 1];
        for v in values {
            counts[v as usize] += 1;
        }

        let suit = hand.cards()[0].suit();
        let same_suit = hand.cards().iter().all(|c| c.suit() == suit);

        Self {
            values,
            counts,
            same_suit,
            straight_high: straight_high(&values, &counts),
        }
    }

    /// Values with the given count, highest first.
    fn with_count(&self, count: u8) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_VALUE as u8)
            .rev()
            .filter(move |&v| self.counts[v as usize] == count)
    }

    /// Values not in `excluded`, highest first.
    fn kickers(&self, excluded: &[u8]) -> Vec<u8> {
        self.values
            .into_iter()
            .filter(|v| !excluded.contains(v))
            .collect()
    }
}

/// Returns the high card of a straight given values sorted in descending order.
fn straight_high(values: &[u8; Hand::SIZE], counts: &[u8; MAX_VALUE + 1]) -> Option<u8> {
    // A straight needs five distinct values.
    if counts.iter().any(|&c| c > 1) {
        return None;
    }

    let (max, min) = (values[0], values[Hand::SIZE - 1]);
    if max - min == 4 {
        Some(max)
    } else if *values == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

fn eval(rank: HandRank, tiebreak: Vec<u8>, details: HandDetails) -> Evaluation {
    Evaluation {
        rank,
        tiebreak,
        details,
    }
}

fn straight_flush(t: &Tally) -> Option<Evaluation> {
    let high = t.straight_high.filter(|_| t.same_suit)?;
    Some(eval(
        HandRank::StraightFlush,
        vec![high],
        HandDetails::StraightHigh(high),
    ))
}

fn straight(t: &Tally) -> Option<Evaluation> {
    let high = t.straight_high?;
    Some(eval(
        HandRank::Straight,
        vec![high],
        HandDetails::StraightHigh(high),
    ))
}

fn flush(t: &Tally) -> Option<Evaluation> {
    t.same_suit
        .then(|| eval(HandRank::Flush, t.values.to_vec(), HandDetails::None))
}

fn three_of_a_kind(t: &Tally) -> Option<Evaluation> {
    let triple = t.with_count(3).next()?;
    let mut tiebreak = vec![triple];
    tiebreak.extend(t.kickers(&[triple]));
    Some(eval(
        HandRank::ThreeOfAKind,
        tiebreak,
        HandDetails::Triple(triple),
    ))
}

fn two_pairs(t: &Tally) -> Option<Evaluation> {
    let pairs = t.with_count(2).collect::<Vec<_>>();
    let &[high, low] = pairs.as_slice() else {
        return None;
    };

    let mut tiebreak = vec![high, low];
    tiebreak.extend(t.kickers(&pairs));
    Some(eval(
        HandRank::TwoPairs,
        tiebreak,
        HandDetails::Pairs(high, low),
    ))
}

fn pair(t: &Tally) -> Option<Evaluation> {
    let mut pairs = t.with_count(2);
    let pair = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    let mut tiebreak = vec![pair];
    tiebreak.extend(t.kickers(&[pair]));
    Some(eval(HandRank::Pair, tiebreak, HandDetails::Pair(pair)))
}

fn high_card(t: &Tally) -> Evaluation {
    eval(HandRank::HighCard, t.values.to_vec(), HandDetails::None)
}

/// Classifies a hand using the first matching classifier.
pub(super) fn classify(hand: &Hand) -> Evaluation {
    let tally = Tally::new(hand);
    CLASSIFIERS
        .iter()
        .find_map(|c| c(&tally))
        .unwrap_or_else(|| high_card(&tally))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(values: [u8; 5]) -> ([u8; 5], [u8; MAX_VALUE + 1]) {
        let mut values = values;
        values.sort_unstable_by(|a, b| b.cmp(a));
        let mut counts = [0; MAX_VALUE + 1];
        for v in values {
            counts[v as usize] += 1;
        }
        (values, counts)
    }

    #[test]
    fn straight_values() {
        let (v, c) = tally([2, 3, 4, 5, 6]);
        assert_eq!(straight_high(&v, &c), Some(6));

        let (v, c) = tally([14, 2, 3, 4, 5]);
        assert_eq!(straight_high(&v, &c), Some(5));

        let (v, c) = tally([10, 11, 12, 13, 14]);
        assert_eq!(straight_high(&v, &c), Some(14));

        let (v, c) = tally([13, 14, 2, 3, 4]);
        assert_eq!(straight_high(&v, &c), None);

        let (v, c) = tally([2, 3, 4, 5, 5]);
        assert_eq!(straight_high(&v, &c), None);

        // Unranked cards never make a straight.
        let (v, c) = tally([0, 2, 3, 4, 5]);
        assert_eq!(straight_high(&v, &c), None);
    }
}
