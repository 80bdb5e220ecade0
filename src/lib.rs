//! Exact win probabilities for a round-robin elimination game.
//!
//! Contestants take turns drawing uniform values against a falling threshold; a draw above the
//! threshold eliminates the contestant. Rather than sampling, the engine enumerates every sequence
//! of elimination turns for each game length, weighs it by the number of draw orderings that
//! realise it, and sums the resulting series into a converging per-contestant distribution. A
//! parallel Monte Carlo simulator is included to cross-check the exact figures.

pub mod aggregate;
pub mod comb;
pub mod error;
pub mod factorial;
pub mod file;
pub mod mc;
pub mod print;
pub mod resolve;
pub mod series;
pub mod timed;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
