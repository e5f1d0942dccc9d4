// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example equity -- --hole AS,AH --hole KD,KC --board 2C,7D,TH
// player-1   [AS,AH]  91%
// player-2   [KD,KC]   9%
// ```

//! Estimates win probabilities for two or more known hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;

use potodds_cards::Card;
use potodds_equity::{EquityEngine, EquityRequest, EquityResponse, PlayerHole, PlayerId};

#[derive(Debug, Parser)]
struct Cli {
    /// A player hole cards pair (eg. AS,AH), repeat for each player.
    #[clap(long)]
    hole: Vec<String>,
    /// The known board cards (eg. 2C,7D,TH).
    #[clap(long, default_value = "")]
    board: String,
    /// The number of simulation trials.
    #[clap(long, default_value_t = EquityRequest::DEFAULT_ITERATIONS)]
    iterations: usize,
}

fn parse_cards(s: &str) -> Result<Vec<u32>> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Ok(s.parse::<Card>()?.raw()))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if cli.hole.len() < 2 {
        bail!("Give at least two --hole pairs");
    }

    let mut players = Vec::with_capacity(cli.hole.len());
    for (idx, hole) in cli.hole.iter().enumerate() {
        let cards = parse_cards(hole)?;
        if cards.len() != 2 {
            bail!("A hole needs two cards, got {hole:?}");
        }

        players.push(PlayerHole::new(
            PlayerId::new(format!("player-{}", idx + 1)),
            [cards[0], cards[1]],
        ));
    }

    let board = parse_cards(&cli.board)?;
    let req = EquityRequest::new(players, board).with_iterations(cli.iterations);

    let (engine, mut responses) = EquityEngine::spawn();
    engine.request(req).await?;

    match responses.recv().await {
        Some(EquityResponse::Results(equities)) => {
            for (equity, hole) in equities.iter().zip(&cli.hole) {
                println!("{:<10} [{hole}] {:>3}%", equity.player_id, equity.equity);
            }
        }
        Some(EquityResponse::Error(err)) => bail!("Simulation failed: {err}"),
        None => bail!("Equity engine stopped"),
    }

    Ok(())
}
