//! Errors raised by the exact engine.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("at least 2 contestants are required, got {0}")]
    TooFewContestants(usize),

    #[error("expected {expected} turns for {contestants} contestants, got {actual}")]
    TurnCount {
        contestants: usize,
        expected: usize,
        actual: usize,
    },

    #[error("turns must be positive and strictly increasing, got {0:?}")]
    UnorderedTurns(Vec<u64>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    #[error("{0}! overflows")]
    Factorial(usize),

    #[error("weight of {0:?} overflows")]
    Weight(Vec<u64>),

    #[error("win mass for contestant {contestant} overflows at final turn {final_turn}")]
    Mass { contestant: usize, final_turn: u64 },
}
