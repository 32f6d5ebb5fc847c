// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates all the 5 cards hands that can be dealt and prints the frequency of
// each category and the return of standing on the dealt hand.
//
// Run with:
//
// ```bash
// $ cargo r --release --example deal_odds
// ...
// Total hands      2598960
// ...
// Royal Flush      4          250
// Straight Flush   36         50
// Four of a Kind   624        25
// ...
// Return:          33.60%
// ```

use std::time::Instant;

use vpoker_eval::*;

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; PAY_TABLE.len()];

    Deck::default().for_each_hand(|cards| {
        if let Ok(hand) = Hand::new(cards) {
            counts[evaluate_hand(&hand) as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s\n", elapsed);

    let mut paid = 0;
    for (category, multiplier) in PAY_TABLE {
        let count = counts[category as usize];
        paid += count * multiplier as usize;
        println!("{:<16} {:<10} {}", category.name(), count, multiplier);
    }

    println!("\nReturn:          {:.2}%", 100.0 * paid as f64 / total as f64);
}
