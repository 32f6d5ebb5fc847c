// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use log::debug;
use std::io;

use vpoker_core::{
    PAY_TABLE,
    game::{Game, Phase},
    leaderboard::LeaderboardEntry,
};

use crate::persistence::Persistence;

/// How the game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player quit.
    Quit,
    /// The player asked to switch user.
    SwitchUser,
}

/// A player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Deal in the idle and drawn phases, draw in the dealt phase.
    DealOrDraw,
    /// Toggle hold for a card.
    Hold(usize),
    /// Request more tokens.
    RequestTokens,
    /// Switch user.
    SwitchUser,
    /// Quit the game.
    Quit,
}

impl Input {
    fn from_key(key: KeyEvent) -> Option<Input> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Quit)
            }
            KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Enter => Some(Input::DealOrDraw),
            KeyCode::Char(c @ '1'..='5') => Some(Input::Hold(c as usize - '1' as usize)),
            KeyCode::Char('r') => Some(Input::RequestTokens),
            KeyCode::Char('u') => Some(Input::SwitchUser),
            KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
            _ => None,
        }
    }
}

/// Runs the terminal loop for a player game.
pub async fn run(
    game: &mut Game,
    persistence: &mut Persistence,
    mut leaderboard: Vec<LeaderboardEntry>,
) -> Result<Exit> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = game_loop(&mut stdout, game, persistence, &mut leaderboard).await;

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

async fn game_loop(
    stdout: &mut io::Stdout,
    game: &mut Game,
    persistence: &mut Persistence,
    leaderboard: &mut Vec<LeaderboardEntry>,
) -> Result<Exit> {
    print_game(stdout, game, leaderboard)?;

    let mut reader = EventStream::new();
    loop {
        enum Branch {
            Leaderboard(Vec<LeaderboardEntry>),
            Input(Input),
        }

        let branch = tokio::select! {
            // We have received an updated leaderboard.
            Some(entries) = persistence.recv_leaderboard() => Branch::Leaderboard(entries),
            // We have received an event form the terminal.
            res = reader.next() => match res {
                Some(Ok(Event::Key(key))) => match Input::from_key(key) {
                    Some(input) => Branch::Input(input),
                    None => continue,
                },
                Some(Ok(Event::Resize(..))) => {
                    print_game(stdout, game, leaderboard)?;
                    continue;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(Exit::Quit),
            },
        };

        match branch {
            Branch::Leaderboard(entries) => *leaderboard = entries,
            Branch::Input(Input::Quit) => return Ok(Exit::Quit),
            Branch::Input(Input::SwitchUser) => return Ok(Exit::SwitchUser),
            Branch::Input(input) => handle_input(game, persistence, input).await,
        }

        print_game(stdout, game, leaderboard)?;
    }
}

async fn handle_input(game: &mut Game, persistence: &Persistence, input: Input) {
    let res = match input {
        Input::DealOrDraw if game.phase() == Phase::Dealt => match game.draw() {
            Ok(result) => {
                persistence.set_tokens(game.player(), game.tokens()).await;
                persistence.submit_score(game.player(), result.score()).await;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Input::DealOrDraw => match game.deal() {
            Ok(()) => {
                persistence.set_tokens(game.player(), game.tokens()).await;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Input::Hold(idx) => game.toggle_hold(idx).map(|_| ()),
        Input::RequestTokens => match game.request_tokens() {
            Ok(tokens) => {
                persistence.set_tokens(game.player(), tokens).await;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Input::SwitchUser | Input::Quit => Ok(()),
    };

    if let Err(e) = res {
        debug!("Ignored {input:?}: {e}");
    }
}

fn print_game(
    w: &mut impl io::Write,
    game: &Game,
    leaderboard: &[LeaderboardEntry],
) -> Result<()> {
    queue!(w, Clear(ClearType::All))?;

    print_line(w, 0, "Video Poker".bold())?;
    print_line(w, 2, format!("Welcome, {}", game.player()).stylize())?;
    print_line(w, 3, format!("Tokens: {}", game.tokens()).stylize())?;

    let mut row = 5;
    if let Some(cards) = game.cards() {
        for (idx, (card, held)) in cards.iter().zip(game.held()).enumerate() {
            let col = idx as u16 * 8;
            let label = format!(" {:>3} ", card.to_string());
            let label = if card.suit().is_red() {
                label.red().on_white()
            } else {
                label.black().on_white()
            };

            queue!(
                w,
                cursor::MoveTo(col, row),
                style::PrintStyledContent(label)
            )?;

            let below = if *held {
                " HELD ".to_string().yellow().bold()
            } else {
                format!("  {}   ", idx + 1).dark_grey()
            };

            queue!(
                w,
                cursor::MoveTo(col, row + 1),
                style::PrintStyledContent(below)
            )?;
        }

        row += 3;
    }

    if !game.message().is_empty() {
        print_line(w, row, game.message().yellow())?;
        row += 2;
    }

    let mut keys = match game.phase() {
        Phase::Dealt => "[1-5] Hold  [space] Draw".to_string(),
        Phase::Idle | Phase::Drawn => "[space] Play (1 token)".to_string(),
    };

    if game.can_request_tokens() {
        keys.push_str("  [r] Request 10 Tokens");
    }

    keys.push_str("  [u] Switch User  [q] Quit");
    print_line(w, row, keys.dark_green())?;
    row += 2;

    print_line(w, row, "Pay Table".bold())?;
    row += 1;
    for (category, multiplier) in PAY_TABLE.iter().filter(|(_, m)| *m > 0) {
        let text = format!("{:<16}{:>4}", category.name(), multiplier);
        let text = match game.last_result() {
            Some(result) if result.category == *category => text.yellow(),
            _ => text.stylize(),
        };
        print_line(w, row, text)?;
        row += 1;
    }

    row += 1;
    print_line(w, row, "Global Leaderboard".bold())?;
    row += 1;
    for entry in leaderboard {
        print_line(w, row, entry.to_string().stylize())?;
        row += 1;
    }

    w.flush()?;

    Ok(())
}

fn print_line(
    w: &mut impl io::Write,
    row: u16,
    text: style::StyledContent<impl std::fmt::Display>,
) -> Result<()> {
    queue!(w, cursor::MoveTo(0, row), style::PrintStyledContent(text))?;
    Ok(())
}
