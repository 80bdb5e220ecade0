//! Combinatorics: enumeration of elimination-turn sequences.
//!
//! A sequence comprises `missing` strictly increasing elimination turns, each in `1..suffix[0]`,
//! followed by a fixed `suffix` (typically just the final turn). Sequences are produced one at a
//! time from an explicit cursor; the full set is never materialised.

/// Binomial coefficient: the number of ways to choose `r` items from `n`. Returns `None` if an
/// intermediate product overflows a `u128`.
pub fn count_combinations(n: u64, r: usize) -> Option<u128> {
    let r = r as u64;
    if r > n {
        return Some(0);
    }
    let r = u64::min(r, n - r);
    let mut count = 1u128;
    for i in 0..r {
        count = count.checked_mul((n - i) as u128)? / (i + 1) as u128;
    }
    Some(count)
}

/// Enumerates every sequence of `missing` elimination turns preceding `suffix`.
pub fn generate(missing: usize, suffix: &[u64]) -> Sequences {
    debug_assert!(!suffix.is_empty(), "suffix cannot be empty");
    let head = suffix[0];
    let mut buf = Vec::with_capacity(missing + suffix.len());
    buf.extend(1..=missing as u64);
    buf.extend_from_slice(suffix);
    let remaining = if missing == 0 {
        Some(1)
    } else {
        count_combinations(head.saturating_sub(1), missing)
    };
    Sequences {
        missing,
        buf,
        remaining,
        state: State::Fresh,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Fresh,
    Live,
    Done,
}

#[derive(Debug, Clone)]
pub struct Sequences {
    missing: usize,
    buf: Vec<u64>,
    remaining: Option<u128>,
    state: State,
}
impl Sequences {
    /// Moves to the next sequence, lending it without allocating.
    pub fn advance(&mut self) -> Option<&[u64]> {
        let available = match self.state {
            State::Fresh => self.missing == 0 || (self.missing as u64) < self.buf[self.missing],
            State::Live => self.step(),
            State::Done => false,
        };
        if available {
            self.state = State::Live;
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining = remaining.saturating_sub(1);
            }
            Some(&self.buf)
        } else {
            self.state = State::Done;
            self.remaining = Some(0);
            None
        }
    }

    /// Colexicographic successor of the chosen prefix: bump the lowest position that has room
    /// below its neighbour and reset everything beneath it to `1, 2, ...`.
    fn step(&mut self) -> bool {
        for position in 0..self.missing {
            if self.buf[position] + 1 < self.buf[position + 1] {
                self.buf[position] += 1;
                for (index, slot) in self.buf[..position].iter_mut().enumerate() {
                    *slot = index as u64 + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Sequences {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[u64]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}
