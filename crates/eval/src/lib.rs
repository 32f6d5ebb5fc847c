// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker hand evaluator.
//!
//! Evaluates a 5 cards draw poker hand (no wild cards) against the Jacks or
//! Better pay table. To use the evaluator create a [Hand] and call
//! [evaluate_hand] to get its [HandCategory] and payout multiplier:
//!
//! ```
//! # use vpoker_eval::*;
//! let hand = Hand::parse("10S JS QS KS AS").unwrap();
//! let category = evaluate_hand(&hand);
//! assert_eq!(category, HandCategory::RoyalFlush);
//! assert_eq!(category.name(), "Royal Flush");
//! assert_eq!(category.multiplier(), 250);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, PAY_TABLE, evaluate_hand};

mod hand;
pub use hand::{Hand, HandError};

// Reexport cards types.
pub use vpoker_cards::{Card, Deck, HAND_SIZE, Rank, Suit};
