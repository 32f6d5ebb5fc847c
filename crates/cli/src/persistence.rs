// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Background writes to the store.
//!
//! Writes are queued to a single task so that they reach the store in the order
//! the game produced them, the game never waits for a write and write errors are
//! only logged.
use log::{error, info};
use tokio::{sync::mpsc, task::JoinHandle};

use vpoker_core::{
    leaderboard::{LeaderboardEntry, Score},
    tokens::Tokens,
};
use vpoker_store::Db;

/// A command for the persistence task.
#[derive(Debug)]
enum Command {
    /// Stores a player tokens balance.
    SetTokens {
        /// The player name.
        name: String,
        /// The new balance.
        tokens: Tokens,
    },
    /// Adds a score to the leaderboard and reloads it.
    SubmitScore {
        /// The player name.
        name: String,
        /// The round score.
        score: Score,
    },
}

/// Queues store writes and reports leaderboard updates.
pub struct Persistence {
    commands_tx: mpsc::Sender<Command>,
    leaderboard_rx: mpsc::Receiver<Vec<LeaderboardEntry>>,
    task: JoinHandle<()>,
}

impl Persistence {
    /// Starts the persistence task for the given leaderboard collection.
    pub fn new(db: Db, collection: String) -> Self {
        let (commands_tx, commands_rx) = mpsc::channel(64);
        let (leaderboard_tx, leaderboard_rx) = mpsc::channel(8);

        let task = PersistenceTask {
            db,
            collection,
            commands_rx,
            leaderboard_tx,
        };

        let task = tokio::spawn(task.run());

        Self {
            commands_tx,
            leaderboard_rx,
            task,
        }
    }

    /// Queues a tokens balance write.
    pub async fn set_tokens(&self, name: &str, tokens: Tokens) {
        let cmd = Command::SetTokens {
            name: name.to_string(),
            tokens,
        };

        if self.commands_tx.send(cmd).await.is_err() {
            error!("Persistence task stopped, tokens for {name} not saved");
        }
    }

    /// Queues a leaderboard score.
    pub async fn submit_score(&self, name: &str, score: Score) {
        let cmd = Command::SubmitScore {
            name: name.to_string(),
            score,
        };

        if self.commands_tx.send(cmd).await.is_err() {
            error!("Persistence task stopped, score for {name} not saved");
        }
    }

    /// Waits for an updated leaderboard.
    pub async fn recv_leaderboard(&mut self) -> Option<Vec<LeaderboardEntry>> {
        self.leaderboard_rx.recv().await
    }

    /// Waits for all queued writes to complete.
    pub async fn shutdown(self) {
        let Persistence {
            commands_tx, task, ..
        } = self;

        drop(commands_tx);
        if let Err(e) = task.await {
            error!("Persistence task failed: {e}");
        }
    }
}

struct PersistenceTask {
    db: Db,
    collection: String,
    commands_rx: mpsc::Receiver<Command>,
    leaderboard_tx: mpsc::Sender<Vec<LeaderboardEntry>>,
}

impl PersistenceTask {
    async fn run(mut self) {
        while let Some(cmd) = self.commands_rx.recv().await {
            match cmd {
                Command::SetTokens { name, tokens } => {
                    if let Err(e) = self.db.set_token_balance(&name, tokens).await {
                        error!("Failed to save tokens for {name}: {e}");
                    }
                }
                Command::SubmitScore { name, score } => {
                    if let Err(e) = self.db.submit_score(&self.collection, &name, score).await {
                        error!("Failed to submit score for {name}: {e}");
                        continue;
                    }

                    match self.db.fetch_leaderboard(&self.collection).await {
                        Ok(entries) => {
                            // The receiver is gone when the game has ended.
                            let _ = self.leaderboard_tx.try_send(entries);
                        }
                        Err(e) => error!("Failed to fetch leaderboard: {e}"),
                    }
                }
            }
        }

        info!("Persistence task done");
    }
}
