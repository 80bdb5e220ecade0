//! Maps a sequence of elimination turns to the sole surviving contestant.
//!
//! Contestants act in round-robin order starting with contestant 0 on turn 0. A contestant acting
//! on an elimination turn leaves the rotation; all others rejoin it at the back. The last entry of
//! the sequence is the final turn: the contestant acting on it is the last to be eliminated, which
//! leaves the winner at the back of the rotation.

use std::collections::VecDeque;

use crate::error::InvalidArgument;

/// Resolves the winner for a well-formed `turns` sequence. Malformed input (fewer than 2
/// contestants, a sequence not of length `contestants - 1`, or turns not strictly increasing) is
/// only caught by debug assertions; use [try_resolve] to validate.
pub fn resolve(contestants: usize, turns: &[u64]) -> usize {
    debug_assert!(validate(contestants, turns).is_ok(), "{:?}", validate(contestants, turns));
    let mut rotation = VecDeque::with_capacity(contestants);
    resolve_with(contestants, turns, &mut rotation)
}

/// As [resolve], reusing the supplied `rotation` buffer.
pub fn resolve_with(contestants: usize, turns: &[u64], rotation: &mut VecDeque<usize>) -> usize {
    rotation.clear();
    rotation.extend(0..contestants);

    let (&final_turn, eliminations) = turns.split_last().expect("no final turn");
    let mut pending = eliminations.iter().peekable();
    for turn in 0..final_turn {
        let current = rotation.pop_front().expect("rotation exhausted");
        if pending.next_if(|&&elimination| elimination == turn).is_none() {
            rotation.push_back(current);
        }
    }
    rotation.back().copied().expect("rotation exhausted")
}

/// Validates the arguments before resolving.
pub fn try_resolve(contestants: usize, turns: &[u64]) -> Result<usize, InvalidArgument> {
    validate(contestants, turns)?;
    Ok(resolve(contestants, turns))
}

pub fn validate(contestants: usize, turns: &[u64]) -> Result<(), InvalidArgument> {
    if contestants < 2 {
        return Err(InvalidArgument::TooFewContestants(contestants));
    }
    if turns.len() != contestants - 1 {
        return Err(InvalidArgument::TurnCount {
            contestants,
            expected: contestants - 1,
            actual: turns.len(),
        });
    }
    let ordered = turns.windows(2).all(|pair| pair[0] < pair[1]);
    let positive = turns.len() == 1 || turns[0] >= 1;
    if !ordered || !positive {
        return Err(InvalidArgument::UnorderedTurns(turns.to_vec()));
    }
    Ok(())
}
