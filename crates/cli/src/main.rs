// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::Parser;
use directories::ProjectDirs;
use log::{error, info};
use std::{
    io::{self, Write},
    path::PathBuf,
};

use vpoker_core::{game::Game, session::Session};
use vpoker_store::{Db, LEADERBOARD_COLLECTION};

pub mod persistence;
pub mod terminal;

use persistence::Persistence;
use terminal::Exit;

#[derive(Debug, Parser)]
struct Cli {
    /// The player name, defaults to the last player.
    #[clap(long, short)]
    name: Option<String>,
    /// The database path.
    #[clap(long)]
    db: Option<PathBuf>,
    /// The leaderboard collection.
    #[clap(long, default_value = LEADERBOARD_COLLECTION)]
    leaderboard: String,
    /// The session file that remembers the last player.
    #[clap(long)]
    session: Option<PathBuf>,
    /// Forget the last player and ask for a name.
    #[clap(long)]
    switch_user: bool,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let db = match &cli.db {
        Some(path) => Db::open(path)?,
        None => Db::open(default_db_path()?)?,
    };

    let session = match &cli.session {
        Some(path) => Session::new(path),
        None => Session::open_default()?,
    };

    if cli.switch_user {
        session.clear()?;
    }

    let mut name = player_name(cli.name.as_deref());

    loop {
        let player = match name.take() {
            Some(name) => name,
            None => match session.load()? {
                Some(name) => name,
                None => match prompt_name().await? {
                    Some(name) => name,
                    None => return Ok(()),
                },
            },
        };

        if let Err(e) = session.save(&player) {
            error!("Failed to save session: {e}");
        }

        let tokens = db.get_token_balance(&player).await?;
        info!("Loaded {player} with {tokens} tokens");

        let leaderboard = db
            .fetch_leaderboard(&cli.leaderboard)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to fetch leaderboard: {e}");
                Vec::new()
            });

        let mut game = Game::new(player, tokens);
        let mut persistence = Persistence::new(db.clone(), cli.leaderboard.clone());

        let res = terminal::run(&mut game, &mut persistence, leaderboard).await;

        // Flush pending writes before switching player or exiting.
        persistence.shutdown().await;

        match res? {
            Exit::Quit => return Ok(()),
            Exit::SwitchUser => session.clear()?,
        }
    }
}

/// Trims a player name, a blank name counts as no name.
fn player_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Asks the player name, returns None on end of input.
async fn prompt_name() -> Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> Result<Option<String>> {
        let mut stdout = io::stdout();
        loop {
            write!(stdout, "Enter your name: ")?;
            stdout.flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(None);
            }

            if let Some(name) = player_name(Some(&line)) {
                return Ok(Some(name));
            }
        }
    })
    .await?
}

fn default_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "vpoker")
        .ok_or_else(|| anyhow!("Cannot find the user data directory"))?;
    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)?;
    Ok(dir.join("vpoker.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_is_trimmed() {
        assert_eq!(player_name(Some(" bob ")), Some("bob".to_string()));
        assert_eq!(player_name(Some("alice")), Some("alice".to_string()));
        assert_eq!(player_name(Some("   ")), None);
        assert_eq!(player_name(Some("")), None);
        assert_eq!(player_name(None), None);
    }
}
