// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use vpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(ah.to_string(), "A♥");
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use vpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to deal a hand from a shuffled deck:
//!
//! ```
//! # use vpoker_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_hand().unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, HAND_SIZE, ParseCardError, Rank, Suit};
