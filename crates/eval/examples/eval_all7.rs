// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      1000000
// Elapsed:         1.271s
// Hands/sec:       786782
//
// High Card:       174117
// One  Pair:       438168
// Two Pairs:       234743
// Three of a Kind: 48306
// Straight:        46194
// Flush:           30255
// Full House:      26226
// Four of a Kind:  1681
// Straight Flush:  310
// ```

use rand::prelude::*;
use std::time::Instant;

use potodds_eval::{Card, Deck, HandRank, HandValue};

const SAMPLES: usize = 1_000_000;

#[rustfmt::skip]
fn main() {
    // Evaluate a large sample of random 7 cards hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = (0..7).map(|_| deck.deal()).collect::<Vec<Card>>();

        let rank = HandValue::eval(&hand).expect("7 cards hand").rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
