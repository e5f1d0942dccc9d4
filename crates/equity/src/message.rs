// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for messages between the client and the equity engine.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique player identifier assigned by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a player id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's hole cards in raw encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHole {
    /// The player id.
    pub player_id: PlayerId,
    /// The two hole cards.
    pub cards: [u32; 2],
}

impl PlayerHole {
    /// Creates a player hole cards pair.
    pub fn new(player_id: PlayerId, cards: [u32; 2]) -> Self {
        Self { player_id, cards }
    }
}

/// A request for win probabilities given a partially known board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRequest {
    /// The players with visible hole cards.
    pub players: Vec<PlayerHole>,
    /// The known board cards, 0 to 5, in raw encoding.
    pub board: Vec<u32>,
    /// The number of simulation trials.
    pub iterations: usize,
}

impl EquityRequest {
    /// The default number of simulation trials.
    pub const DEFAULT_ITERATIONS: usize = 2000;

    /// Creates a request with the default number of trials.
    pub fn new(players: Vec<PlayerHole>, board: Vec<u32>) -> Self {
        Self {
            players,
            board,
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }

    /// Overrides the number of simulation trials.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// A player's estimated win probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEquity {
    /// The player id.
    pub player_id: PlayerId,
    /// The win probability in percent.
    pub equity: u8,
}

/// A response from the equity engine.
#[derive(Debug, Serialize, Deserialize)]
pub enum EquityResponse {
    /// The win probabilities, one entry per requested player.
    Results(Vec<PlayerEquity>),
    /// The request failed validation.
    Error(String),
}
