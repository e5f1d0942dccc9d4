// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Potodds Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. Given 5 cards it
//! classifies the best poker hand they form, given 6 or 7 cards it searches
//! every 5 cards subset and keeps the strongest one.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the
//! hand and get its category and comparison key:
//!
//! ```
//! # use potodds_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, RankKey};

// Reexport cards types.
pub use potodds_cards::{Card, Deck, Rank, Suit};
