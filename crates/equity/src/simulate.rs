// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo win probability estimation.
use ahash::AHashSet;
use rand::prelude::*;

use potodds_cards::{Card, Deck};
use potodds_eval::{HandValue, RankKey};

use crate::message::{EquityRequest, PlayerEquity};

/// The number of cards in a complete board.
const BOARD_SIZE: usize = 5;

/// Errors for an invalid equity request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    /// A raw value that does not decode to a card.
    #[error("invalid card value 0x{0:x}")]
    InvalidCard(u32),
    /// The same card appears twice across hole and board cards.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// More than five board cards.
    #[error("too many board cards, got {0}")]
    TooManyBoardCards(usize),
    /// The remaining deck cannot complete the board.
    #[error("only {0} cards left to complete the board")]
    NotEnoughCards(usize),
}

/// Estimates each player's probability of winning the pot.
///
/// Runs [EquityRequest::iterations] trials, each trial completes the board
/// with unseen cards drawn from the remaining deck, evaluates every player's
/// best hand, and credits the trial to the strongest hand splitting the
/// credit evenly on a tie. Returns the accumulated credit per player as a
/// percentage, one entry per requested player in request order.
pub fn simulate(req: &EquityRequest) -> Result<Vec<PlayerEquity>, EquityError> {
    simulate_with_rng(req, &mut rand::rng())
}

/// Estimates win probabilities with caller provided randomness.
pub fn simulate_with_rng<R: Rng>(
    req: &EquityRequest,
    rng: &mut R,
) -> Result<Vec<PlayerEquity>, EquityError> {
    // With less than two players there is nothing to simulate.
    if req.players.is_empty() {
        return Ok(Vec::new());
    } else if req.players.len() == 1 {
        return Ok(vec![PlayerEquity {
            player_id: req.players[0].player_id.clone(),
            equity: 100,
        }]);
    }

    if req.board.len() > BOARD_SIZE {
        return Err(EquityError::TooManyBoardCards(req.board.len()));
    }

    // Decode the players hole cards and the board.
    let mut holes = Vec::with_capacity(req.players.len());
    for player in &req.players {
        holes.push([decode(player.cards[0])?, decode(player.cards[1])?]);
    }

    let board = req
        .board
        .iter()
        .map(|&raw| decode(raw))
        .collect::<Result<Vec<_>, _>>()?;

    // The known set, a duplicate anywhere across players and board would
    // corrupt the remaining deck so it fails the request.
    let mut known = AHashSet::with_capacity(holes.len() * 2 + board.len());
    for &card in holes.iter().flatten().chain(board.iter()) {
        if !known.insert(card) {
            return Err(EquityError::DuplicateCard(card));
        }
    }

    // The remaining deck to draw unseen cards from.
    let mut deck = Deck::default();
    for &card in &known {
        deck.remove(card);
    }
    let pool = deck.into_iter().collect::<Vec<_>>();

    let board_needed = BOARD_SIZE - board.len();
    if pool.len() < board_needed {
        return Err(EquityError::NotEnoughCards(pool.len()));
    }

    // With a complete board every trial is identical, one is enough and the
    // result is exact.
    let iterations = if board_needed == 0 {
        1
    } else {
        req.iterations.max(1)
    };

    let mut indices = (0..pool.len()).collect::<Vec<_>>();
    let mut credits = vec![0f64; holes.len()];
    let mut full_board = board.clone();
    let mut hand = Vec::with_capacity(BOARD_SIZE + 2);
    let mut keys: Vec<RankKey> = Vec::with_capacity(holes.len());

    for _ in 0..iterations {
        partial_shuffle(&mut indices, board_needed, rng);

        full_board.truncate(board.len());
        full_board.extend(indices[..board_needed].iter().map(|&i| pool[i]));

        // Evaluate every player's best hand on this board.
        keys.clear();
        for hole in &holes {
            hand.clear();
            hand.extend_from_slice(hole);
            hand.extend_from_slice(&full_board);

            let value = HandValue::eval(&hand).expect("2 hole and 5 board cards");
            keys.push(value.key());
        }

        // Split the trial credit among the strongest hands.
        let best = keys.iter().max().copied().expect("at least two players");
        let winners = keys.iter().filter(|&&key| key == best).count();
        let credit = 1.0 / winners as f64;

        for (player_credit, key) in credits.iter_mut().zip(&keys) {
            if *key == best {
                *player_credit += credit;
            }
        }
    }

    let equities = req
        .players
        .iter()
        .zip(&credits)
        .map(|(player, &credit)| PlayerEquity {
            player_id: player.player_id.clone(),
            equity: (credit * 100.0 / iterations as f64).round() as u8,
        })
        .collect();

    Ok(equities)
}

fn decode(raw: u32) -> Result<Card, EquityError> {
    Card::from_raw(raw).ok_or(EquityError::InvalidCard(raw))
}

/// Moves `count` cards drawn without replacement to the front of `indices`.
///
/// A Fisher-Yates shuffle stopped after the first `count` positions, the
/// prefix has the same distribution as the first `count` cards of a fully
/// shuffled deck whatever order `indices` starts in.
fn partial_shuffle<R: Rng>(indices: &mut [usize], count: usize, rng: &mut R) {
    for i in 0..count {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{PlayerHole, PlayerId};
    use rand::rngs::StdRng;

    fn raw(s: &str) -> u32 {
        s.parse::<Card>().expect("valid test card").raw()
    }

    fn hole(id: &str, c1: &str, c2: &str) -> PlayerHole {
        PlayerHole::new(PlayerId::new(id), [raw(c1), raw(c2)])
    }

    fn board(s: &str) -> Vec<u32> {
        s.split_whitespace().map(raw).collect()
    }

    #[test]
    fn no_players_no_results() {
        let req = EquityRequest::new(Vec::new(), Vec::new());
        assert_eq!(simulate(&req).unwrap(), Vec::new());
    }

    #[test]
    fn single_player_gets_the_pot() {
        let req = EquityRequest::new(vec![hole("alice", "AS", "AH")], Vec::new());
        let equities = simulate(&req).unwrap();
        assert_eq!(equities.len(), 1);
        assert_eq!(equities[0].player_id, PlayerId::new("alice"));
        assert_eq!(equities[0].equity, 100);
    }

    #[test]
    fn complete_board_is_exact() {
        // Aces over kings on a dry board.
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            board("2C 7D TH JS QD"),
        );

        for _ in 0..10 {
            let equities = simulate(&req).unwrap();
            assert_eq!(equities[0].equity, 100);
            assert_eq!(equities[1].equity, 0);
        }
    }

    #[test]
    fn complete_board_chop_splits_credit() {
        // Both players play the board straight.
        let req = EquityRequest::new(
            vec![hole("alice", "2C", "3C"), hole("bob", "2D", "3D")],
            board("TS JS QD KC AH"),
        );

        let equities = simulate(&req).unwrap();
        assert_eq!(equities[0].equity, 50);
        assert_eq!(equities[1].equity, 50);
    }

    #[test]
    fn three_way_chop_rounds_down() {
        let req = EquityRequest::new(
            vec![
                hole("alice", "2C", "3C"),
                hole("bob", "2D", "3D"),
                hole("carol", "2H", "3H"),
            ],
            board("TS JS QD KC AH"),
        );

        let equities = simulate(&req).unwrap();
        assert!(equities.iter().all(|e| e.equity == 33));
    }

    #[test]
    fn duplicate_card_fails() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "AS", "KC")],
            Vec::new(),
        );
        let err = simulate(&req).unwrap_err();
        assert_eq!(err, EquityError::DuplicateCard("AS".parse().unwrap()));
    }

    #[test]
    fn board_duplicate_fails() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            board("2C 2C"),
        );
        assert!(matches!(
            simulate(&req).unwrap_err(),
            EquityError::DuplicateCard(_)
        ));
    }

    #[test]
    fn invalid_card_fails() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            vec![0],
        );
        assert_eq!(simulate(&req).unwrap_err(), EquityError::InvalidCard(0));

        // No suit bit set.
        let req = EquityRequest::new(
            vec![
                PlayerHole::new(PlayerId::new("alice"), [0x0900, raw("AH")]),
                hole("bob", "KD", "KC"),
            ],
            Vec::new(),
        );
        assert_eq!(simulate(&req).unwrap_err(), EquityError::InvalidCard(0x0900));
    }

    #[test]
    fn too_many_board_cards_fail() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            board("2C 3C 4C 5C 6C 7C"),
        );
        assert_eq!(
            simulate(&req).unwrap_err(),
            EquityError::TooManyBoardCards(6)
        );
    }

    #[test]
    fn same_seed_same_estimate() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            board("2C 7D TH"),
        );

        let mut rng = StdRng::seed_from_u64(42);
        let first = simulate_with_rng(&req, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let second = simulate_with_rng(&req, &mut rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn preflop_aces_dominate() {
        // AA vs 72o is about 88% for the aces.
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "7D", "2C")],
            Vec::new(),
        );

        let mut rng = StdRng::seed_from_u64(7);
        let equities = simulate_with_rng(&req, &mut rng).unwrap();
        assert!((80..=94).contains(&equities[0].equity), "{equities:?}");
        assert!(equities[1].equity <= 20, "{equities:?}");
    }

    #[test]
    fn equities_sum_close_to_100() {
        let req = EquityRequest::new(
            vec![
                hole("alice", "AS", "KS"),
                hole("bob", "QD", "QC"),
                hole("carol", "7H", "8H"),
            ],
            board("9H 2C"),
        );

        let mut rng = StdRng::seed_from_u64(11);
        let equities = simulate_with_rng(&req, &mut rng).unwrap();
        let total = equities.iter().map(|e| e.equity as i32).sum::<i32>();

        // Unrounded credits always sum to 100, each player's independent
        // rounding can drift by at most one point per player.
        assert!((98..=102).contains(&total), "{equities:?}");
    }

    #[test]
    fn variance_shrinks_with_iterations() {
        let req = EquityRequest::new(
            vec![hole("alice", "AS", "AH"), hole("bob", "KD", "KC")],
            Vec::new(),
        );

        // Sample standard deviation of the estimate across seeded runs.
        let spread = |iterations: usize, seeds: std::ops::Range<u64>| {
            let runs = (seeds.end - seeds.start) as f64;
            let estimates = seeds
                .map(|seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let req = req.clone().with_iterations(iterations);
                    simulate_with_rng(&req, &mut rng).unwrap()[0].equity as f64
                })
                .collect::<Vec<_>>();

            let mean = estimates.iter().sum::<f64>() / runs;
            let var = estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / runs;
            var.sqrt()
        };

        // A hundred times the trials shrinks the run to run spread about
        // ten times.
        let coarse = spread(200, 0..10);
        let fine = spread(20_000, 100..110);
        assert!(fine < coarse, "fine {fine} coarse {coarse}");
    }

    #[test]
    fn partial_shuffle_keeps_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut indices = (0..45).collect::<Vec<_>>();

        for _ in 0..100 {
            partial_shuffle(&mut indices, 5, &mut rng);

            let mut seen = indices.clone();
            seen.sort_unstable();
            assert_eq!(seen, (0..45).collect::<Vec<_>>());
        }
    }
}
