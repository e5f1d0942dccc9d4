// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Potodds Poker equity estimation.
//!
//! Given the hole cards of two or more players and a partially known board
//! this crate estimates each player's probability of winning the pot by
//! Monte Carlo simulation of the unseen cards.
//!
//! The [simulate] function runs the simulation synchronously:
//!
//! ```
//! # use potodds_cards::Card;
//! # use potodds_equity::*;
//! let raw = |s: &str| s.parse::<Card>().unwrap().raw();
//! let players = vec![
//!     PlayerHole::new(PlayerId::new("alice"), [raw("AS"), raw("AH")]),
//!     PlayerHole::new(PlayerId::new("bob"), [raw("KD"), raw("KC")]),
//! ];
//! let equities = simulate(&EquityRequest::new(players, vec![])).unwrap();
//! assert_eq!(equities.len(), 2);
//! ```
//!
//! while [EquityEngine] runs it on a background task so an interactive
//! caller never blocks, requests queue in order and responses come back on
//! a channel in the same order.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod engine;
mod message;
mod simulate;

pub use engine::EquityEngine;
pub use message::{EquityRequest, EquityResponse, PlayerEquity, PlayerHole, PlayerId};
pub use simulate::{EquityError, simulate, simulate_with_rng};
