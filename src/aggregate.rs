//! Win mass for a fixed final turn.
//!
//! Every elimination-turn sequence ending on `final_turn` is resolved to its winner and weighted by
//! the product of its entries: the number of orderings of `final_turn + 1` continuous draws that
//! realise that exact pattern of continuations and eliminations. Dividing the total by
//! `(final_turn + 1)!` gives the probability that the game lasts exactly `final_turn` turns.

use std::collections::VecDeque;

use tracing::trace;

use crate::comb;
use crate::error::ArithmeticOverflow;
use crate::resolve;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub final_turn: u64,
    pub weights: Vec<u128>,
}
impl Outcome {
    pub fn empty(contestants: usize, final_turn: u64) -> Self {
        Self {
            final_turn,
            weights: vec![0; contestants],
        }
    }

    pub fn total(&self) -> u128 {
        self.weights.iter().sum()
    }
}

/// Number of draw orderings consistent with `sequence`.
pub fn weigh(sequence: &[u64]) -> Result<u128, ArithmeticOverflow> {
    sequence.iter().try_fold(1u128, |product, &turn| {
        product
            .checked_mul(turn as u128)
            .ok_or_else(|| ArithmeticOverflow::Weight(sequence.to_vec()))
    })
}

pub fn aggregate(contestants: usize, final_turn: u64) -> Result<Outcome, ArithmeticOverflow> {
    debug_assert!(contestants >= 2, "at least 2 contestants are required");
    let mut outcome = Outcome::empty(contestants, final_turn);
    let mut rotation = VecDeque::with_capacity(contestants);
    let mut sequences = comb::generate(contestants - 2, &[final_turn]);
    while let Some(sequence) = sequences.advance() {
        let winner = resolve::resolve_with(contestants, sequence, &mut rotation);
        let weight = weigh(sequence)?;
        trace!("sequence: {sequence:?}, winner: {winner}, weight: {weight}");
        let mass = &mut outcome.weights[winner];
        *mass = mass.checked_add(weight).ok_or(ArithmeticOverflow::Mass {
            contestant: winner,
            final_turn,
        })?;
    }
    Ok(outcome)
}
