// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database types for persisting players tokens and leaderboards.
//!
//! The database is organized as collections of documents keyed by the player
//! name: the tokens collection has a `tokens` field per player, and each
//! leaderboard collection has the `wins`, `losses`, and `ties` counters.
use anyhow::Result;
use log::debug;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use std::{path::Path, sync::Arc};

use vpoker_core::{
    leaderboard::{LeaderboardEntry, Score, sort_leaderboard},
    tokens::Tokens,
};

/// The tokens collection name.
pub const TOKENS_COLLECTION: &str = "vp_tokens";

/// The default leaderboard collection name.
pub const LEADERBOARD_COLLECTION: &str = "vp_leaderboard";

/// Database for persisting players state.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // Create tables
        conn.execute(
            "CREATE TABLE IF NOT EXISTS vp_tokens (
               id TEXT PRIMARY KEY,
               tokens INTEGER NOT NULL,
               created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
               last_update DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS leaderboards (
               collection TEXT NOT NULL,
               name TEXT NOT NULL,
               wins INTEGER NOT NULL,
               losses INTEGER NOT NULL,
               ties INTEGER NOT NULL,
               last_update DATETIME DEFAULT CURRENT_TIMESTAMP,
               PRIMARY KEY (collection, name)
            )",
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Gets a player tokens, a new player is stored with [Tokens::STARTING].
    pub async fn get_token_balance(&self, name: &str) -> Result<Tokens> {
        let db = self.db.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let tokens = db
                .query_row(
                    "SELECT tokens FROM vp_tokens WHERE id = ?1",
                    params![name],
                    |row| row.get::<usize, u32>(0),
                )
                .optional()?;

            match tokens {
                Some(tokens) => Ok(Tokens::new(tokens)),
                None => {
                    db.execute(
                        "INSERT INTO vp_tokens (id, tokens, last_update)
                         VALUES (?1, ?2, CURRENT_TIMESTAMP)",
                        params![name, Tokens::STARTING.amount()],
                    )?;

                    debug!("Created {TOKENS_COLLECTION} document for {name}");
                    Ok(Tokens::STARTING)
                }
            }
        })
        .await?
    }

    /// Sets a player tokens.
    pub async fn set_token_balance(&self, name: &str, tokens: Tokens) -> Result<()> {
        let db = self.db.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            db.execute(
                "INSERT INTO vp_tokens (id, tokens, last_update)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(id) DO UPDATE SET
                   tokens = excluded.tokens,
                   last_update = CURRENT_TIMESTAMP",
                params![name, tokens.amount()],
            )?;

            Ok(())
        })
        .await?
    }

    /// Adds a score to a player leaderboard entry, the entry is created if the
    /// player is not in the leaderboard.
    pub async fn submit_score(&self, collection: &str, name: &str, score: Score) -> Result<()> {
        let db = self.db.clone();
        let collection = collection.to_string();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let mut db = db.lock();

            let tx = db.transaction()?;

            let existing = tx
                .query_row(
                    "SELECT name, wins, losses, ties
                     FROM leaderboards
                     WHERE collection = ?1 AND name = ?2",
                    params![collection, name],
                    |row| {
                        Ok(LeaderboardEntry {
                            name: row.get(0)?,
                            wins: row.get(1)?,
                            losses: row.get(2)?,
                            ties: row.get(3)?,
                        })
                    },
                )
                .optional()?;

            let entry = match existing {
                Some(mut entry) => {
                    entry.add(score);
                    entry
                }
                None => LeaderboardEntry::new(name, score),
            };

            tx.execute(
                "INSERT INTO leaderboards (collection, name, wins, losses, ties, last_update)
                 VALUES (?1, ?2, ?3, ?4, ?5, CURRENT_TIMESTAMP)
                 ON CONFLICT(collection, name) DO UPDATE SET
                   wins = excluded.wins,
                   losses = excluded.losses,
                   ties = excluded.ties,
                   last_update = CURRENT_TIMESTAMP",
                params![collection, entry.name, entry.wins, entry.losses, entry.ties],
            )?;

            tx.commit()?;

            Ok(())
        })
        .await?
    }

    /// Gets all the entries in a leaderboard sorted by wins minus losses.
    pub async fn fetch_leaderboard(&self, collection: &str) -> Result<Vec<LeaderboardEntry>> {
        let db = self.db.clone();
        let collection = collection.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(
                "SELECT name, wins, losses, ties
                 FROM leaderboards
                 WHERE collection = ?1
                 ORDER BY name",
            )?;

            let mut entries = stmt
                .query_map(params![collection], |row| {
                    Ok(LeaderboardEntry {
                        name: row.get(0)?,
                        wins: row.get(1)?,
                        losses: row.get(2)?,
                        ties: row.get(3)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            sort_leaderboard(&mut entries);

            Ok(entries)
        })
        .await?
    }
}
