// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker document store for players tokens and leaderboards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod db;
pub use db::{Db, LEADERBOARD_COLLECTION, TOKENS_COLLECTION};
