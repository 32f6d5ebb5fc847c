// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker core types shared by the client and the store.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub mod leaderboard;
pub mod session;
pub mod tokens;

pub use vpoker_eval::{Card, Hand, HandCategory, PAY_TABLE, Rank, Suit};
