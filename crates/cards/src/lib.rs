// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Potodds Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use potodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! a codec between a [Card] and the raw integer encoding exchanged with the
//! client application:
//!
//! ```
//! # use potodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(Card::from_raw(ah.raw()), Some(ah));
//! // Zero is the "no card" sentinel.
//! assert_eq!(Card::from_raw(0), None);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and removing known cards:
//!
//! ```
//! # use potodds_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
