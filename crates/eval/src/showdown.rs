// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi players hands ranking.
use log::debug;
use std::cmp::Ordering;

use carddraw_cards::Hand;

use crate::eval::{Evaluation, HandRank, compare, evaluate};

/// The winners of a showdown between players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    winners: Vec<usize>,
    best: Evaluation,
}

impl Showdown {
    /// The indices of the winning hands in ascending order, more than one
    /// index if the best hands tie.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// The winning evaluation.
    pub fn best(&self) -> &Evaluation {
        &self.best
    }

    /// The winning hand rank.
    pub fn rank(&self) -> HandRank {
        self.best.rank()
    }

    /// The winning hand rank name.
    pub fn rank_name(&self) -> &'static str {
        self.best.name()
    }

    /// Checks if more than one hand wins.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Ranks evaluations and returns the winners, `None` if there are no
/// evaluations.
///
/// Evaluations are compared in order with the best so far, an evaluation that
/// beats the best replaces it and becomes the only winner, an evaluation that
/// ties with the best is added to the winners.
pub fn showdown<'a, I>(evals: I) -> Option<Showdown>
where
    I: IntoIterator<Item = &'a Evaluation>,
{
    let mut evals = evals.into_iter().enumerate();
    let (_, mut best) = evals.next()?;
    let mut winners = vec![0];

    for (idx, eval) in evals {
        match compare(eval, best) {
            Ordering::Greater => {
                debug!("Hand {idx} {eval} beats {best}");
                best = eval;
                winners.clear();
                winners.push(idx);
            }
            Ordering::Equal => {
                debug!("Hand {idx} {eval} ties {best}");
                winners.push(idx);
            }
            Ordering::Less => {}
        }
    }

    Some(Showdown {
        winners,
        best: best.clone(),
    })
}

/// Evaluates each hand and ranks the evaluations.
pub fn rank_hands(hands: &[Hand]) -> Option<Showdown> {
    let evals = hands.iter().map(evaluate).collect::<Vec<_>>();
    showdown(&evals)
}
