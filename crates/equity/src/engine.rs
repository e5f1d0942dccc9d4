// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Background equity estimation engine.
use anyhow::{Context, Result};
use log::{debug, info};
use tokio::{sync::mpsc, task};

use crate::message::{EquityRequest, EquityResponse};
use crate::simulate::simulate;

/// Handle to a background equity estimation task.
///
/// The task processes one request at a time strictly in the order they are
/// sent and delivers the responses in the same order, so the latest response
/// a caller receives always belongs to the latest request it sent and it can
/// overwrite any equity it displayed before. A request that is already
/// running is never cancelled, a superseded simulation runs to completion
/// and its response is simply overwritten by the next one.
///
/// Dropping the handle closes the requests channel, the task completes the
/// queued requests and exits, nothing survives the session.
pub struct EquityEngine {
    req_tx: mpsc::Sender<EquityRequest>,
}

impl EquityEngine {
    /// The requests and responses channels capacity.
    const CHANNEL_SIZE: usize = 16;

    /// Spawns the engine task, returns the handle and the responses channel.
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn() -> (Self, mpsc::Receiver<EquityResponse>) {
        let (req_tx, mut req_rx) = mpsc::channel::<EquityRequest>(Self::CHANNEL_SIZE);
        let (res_tx, res_rx) = mpsc::channel(Self::CHANNEL_SIZE);

        tokio::spawn(async move {
            while let Some(req) = req_rx.recv().await {
                debug!(
                    "Simulating {} players {} board cards {} iterations",
                    req.players.len(),
                    req.board.len(),
                    req.iterations
                );

                // The simulation is CPU bound, run it off the runtime
                // threads and wait for it so requests never overlap.
                let res = task::spawn_blocking(move || simulate(&req)).await;

                let response = match res {
                    Ok(Ok(results)) => EquityResponse::Results(results),
                    Ok(Err(err)) => EquityResponse::Error(err.to_string()),
                    Err(err) => EquityResponse::Error(err.to_string()),
                };

                if res_tx.send(response).await.is_err() {
                    // The session receiver is gone.
                    break;
                }
            }

            info!("Equity engine stopped");
        });

        (Self { req_tx }, res_rx)
    }

    /// Queues a simulation request.
    ///
    /// Returns as soon as the request is enqueued, the response is delivered
    /// on the responses channel once the simulation completes. Fails if the
    /// engine task has stopped.
    pub async fn request(&self, req: EquityRequest) -> Result<()> {
        self.req_tx
            .send(req)
            .await
            .context("Equity engine stopped")
    }
}
