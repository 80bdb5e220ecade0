//! The converging win distribution.
//!
//! [Accumulator] pulls one final turn at a time: the win mass for games lasting exactly that many
//! turns is normalised by the number of orderings of the draws involved and added to the running
//! distribution. The exact series approaches 1 from below; in `f64` the running total rounds to
//! exactly 1.0 once the remaining tail falls under half an ulp, which happens after roughly 18 to
//! 25 terms depending on the number of contestants. Convergence is left for the caller to judge by
//! bounding the iteration.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::error::{ArithmeticOverflow, InvalidArgument};
use crate::factorial::{Factorial, Lookup};

#[cfg(test)]
mod tests;

/// Cumulative win probabilities after including all final turns up to `final_turn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub final_turn: u64,
    pub probs: Vec<f64>,
}
impl Snapshot {
    /// Sum of the cumulative probabilities. Non-decreasing across snapshots, but may equal 1.0
    /// once the unsummed tail is below `f64` resolution.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }
}

pub fn accumulate(contestants: usize) -> Result<Accumulator, InvalidArgument> {
    if contestants < 2 {
        return Err(InvalidArgument::TooFewContestants(contestants));
    }
    Ok(Accumulator {
        contestants,
        final_turn: 0,
        probs: vec![0.0; contestants],
        factorial: Lookup::default(),
        exhausted: false,
    })
}

/// An unbounded, non-restartable cursor over the converging distribution. Yields a single
/// [ArithmeticOverflow] once a term can no longer be computed exactly, and nothing thereafter.
///
/// Each term is exact, but the running totals are `f64`: after enough terms the total reads as
/// 1.0 rather than strictly below it, and later terms stop changing the probabilities.
pub struct Accumulator {
    contestants: usize,
    final_turn: u64,
    probs: Vec<f64>,
    factorial: Lookup,
    exhausted: bool,
}
impl Accumulator {
    pub fn contestants(&self) -> usize {
        self.contestants
    }

    fn step(&mut self) -> Result<Snapshot, ArithmeticOverflow> {
        let orderings = self.factorial.get(self.final_turn as usize + 1)? as f64;
        let outcome = aggregate(self.contestants, self.final_turn)?;
        for (prob, &weight) in self.probs.iter_mut().zip(&outcome.weights) {
            *prob += weight as f64 / orderings;
        }
        let snapshot = Snapshot {
            final_turn: self.final_turn,
            probs: self.probs.clone(),
        };
        debug!(
            "final turn: {}, mass: {:.3e}, cumulative: {:.12}",
            self.final_turn,
            outcome.total() as f64 / orderings,
            snapshot.total()
        );
        Ok(snapshot)
    }
}

impl Iterator for Accumulator {
    type Item = Result<Snapshot, ArithmeticOverflow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.final_turn += 1;
        let step = self.step();
        self.exhausted = step.is_err();
        Some(step)
    }
}

impl FusedIterator for Accumulator {}
