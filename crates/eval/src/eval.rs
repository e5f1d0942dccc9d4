// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a 5 cards hand into one of the nine poker hand
//! categories and builds a [RankKey] that orders any two hands by strength
//! including all kicker rules. For 6 and 7 cards hands it evaluates every
//! 5 cards subset and keeps the strongest, with at most 21 subsets a direct
//! scan is faster than building lookup tables.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use potodds_cards::Card;

/// Poker hand categories from the weakest to the strongest.
///
/// The discriminant is the category comparison weight used as the first
/// element of a [RankKey].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Highest card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush, a royal flush when ace high.
    StraightFlush,
}

impl HandRank {
    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A hand comparison key.
///
/// The first element is the category weight, the following elements are the
/// category tie break ranks from the most to the least significant, unused
/// trailing elements are zero. Comparing two keys lexicographically orders
/// the hands by poker strength, equal keys are a chop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct RankKey([u8; 6]);

impl RankKey {
    fn new(rank: HandRank, breaks: &[u8]) -> Self {
        debug_assert!(breaks.len() <= 5);
        let mut key = [0u8; 6];
        key[0] = rank as u8;
        key[1..=breaks.len()].copy_from_slice(breaks);
        Self(key)
    }

    /// The key elements, category weight first.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Errors evaluating a cards hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A showdown hand has at least 5 cards, shorter hands are rejected
    /// instead of being padded.
    #[error("a hand needs at least 5 cards, got {0}")]
    TooFewCards(usize),
    /// Two hole cards and five board cards at most.
    #[error("a hand has at most 7 cards, got {0}")]
    TooManyCards(usize),
}

/// An evaluated hand.
///
/// Holds the hand category, the best five cards, and the [RankKey] that
/// drives comparisons. Values are created by [HandValue::eval] and never
/// change afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    key: RankKey,
    best_five: [Card; 5],
}

impl HandValue {
    /// Evaluates the best 5 cards hand out of 5 to 7 cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let n = cards.len();
        if n < 5 {
            return Err(EvalError::TooFewCards(n));
        } else if n > 7 {
            return Err(EvalError::TooManyCards(n));
        }

        let mut hand = [cards[0]; 5];
        let mut best: Option<HandValue> = None;

        for c1 in 0..n - 4 {
            hand[0] = cards[c1];

            for c2 in (c1 + 1)..n - 3 {
                hand[1] = cards[c2];

                for c3 in (c2 + 1)..n - 2 {
                    hand[2] = cards[c3];

                    for c4 in (c3 + 1)..n - 1 {
                        hand[3] = cards[c4];

                        for c5 in (c4 + 1)..n {
                            hand[4] = cards[c5];

                            let value = Self::eval_five(&hand);
                            if best.as_ref().is_none_or(|b| value.key > b.key) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        Ok(best.expect("at least one 5 cards subset"))
    }

    /// Evaluates an exactly 5 cards hand.
    pub fn eval_five(cards: &[Card; 5]) -> HandValue {
        // Card ranks in descending order.
        let mut ranks = [0u8; 5];
        for (rank, card) in ranks.iter_mut().zip(cards) {
            *rank = card.rank().value();
        }
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        // Ranks histogram.
        let mut counts = [0u8; 15];
        for &rank in &ranks {
            counts[rank as usize] += 1;
        }

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_top(&ranks);

        // Rank groups from the highest to the lowest rank.
        let mut quads = None;
        let mut trips = None;
        let mut pairs = [0u8; 2];
        let mut num_pairs = 0;
        for rank in (2..=14u8).rev() {
            match counts[rank as usize] {
                4 => quads = Some(rank),
                3 => trips = Some(rank),
                2 => {
                    pairs[num_pairs] = rank;
                    num_pairs += 1;
                }
                _ => (),
            }
        }

        // Unpaired cards in descending order.
        let mut kickers = [0u8; 5];
        let mut num_kickers = 0;
        for &rank in &ranks {
            if counts[rank as usize] == 1 {
                kickers[num_kickers] = rank;
                num_kickers += 1;
            }
        }

        // Category checks ordered so that stronger categories win over
        // weaker ones that also match.
        if let (true, Some(top)) = (flush, straight) {
            Self::with_key(HandRank::StraightFlush, &[top], cards)
        } else if let Some(quad) = quads {
            Self::with_key(HandRank::FourOfAKind, &[quad, kickers[0]], cards)
        } else if let (Some(trip), true) = (trips, num_pairs > 0) {
            Self::with_key(HandRank::FullHouse, &[trip, pairs[0]], cards)
        } else if flush {
            Self::with_key(HandRank::Flush, &ranks, cards)
        } else if let Some(top) = straight {
            Self::with_key(HandRank::Straight, &[top], cards)
        } else if let Some(trip) = trips {
            Self::with_key(HandRank::ThreeOfAKind, &[trip, kickers[0], kickers[1]], cards)
        } else if num_pairs == 2 {
            Self::with_key(HandRank::TwoPair, &[pairs[0], pairs[1], kickers[0]], cards)
        } else if num_pairs == 1 {
            Self::with_key(
                HandRank::OnePair,
                &[pairs[0], kickers[0], kickers[1], kickers[2]],
                cards,
            )
        } else {
            Self::with_key(HandRank::HighCard, &ranks, cards)
        }
    }

    /// This hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// This hand comparison key.
    pub fn key(&self) -> RankKey {
        self.key
    }

    /// The best five cards for this hand.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }

    /// Checks if this hand is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.rank == HandRank::StraightFlush && self.key.0[1] == 14
    }

    fn with_key(rank: HandRank, breaks: &[u8], cards: &[Card; 5]) -> HandValue {
        HandValue {
            rank,
            key: RankKey::new(rank, breaks),
            best_five: *cards,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_royal() {
            write!(f, "Royal Flush")
        } else {
            write!(f, "{}", self.rank)
        }
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HandValue {}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the top rank of a straight given the hand ranks in descending
/// order, with the wheel A,5,4,3,2 topped by the five.
fn straight_top(ranks: &[u8; 5]) -> Option<u8> {
    // Distinct ranks, still in descending order.
    let mut distinct = [0u8; 5];
    let mut n = 0;
    for &rank in ranks {
        if n == 0 || distinct[n - 1] != rank {
            distinct[n] = rank;
            n += 1;
        }
    }

    if n < 5 {
        None
    } else if distinct[0] - distinct[4] == 4 {
        Some(distinct[0])
    } else if distinct == [14, 5, 4, 3, 2] {
        // The wheel, the ace plays below the deuce.
        Some(5)
    } else {
        None
    }
}
