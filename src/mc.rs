//! Monte Carlo estimate of the win probabilities, used to cross-check the exact series.
//!
//! Each match draws an opening threshold for contestant 0, then rotates through the remaining
//! contestants starting with contestant 1. A draw below the threshold lowers it and the contestant
//! rejoins the back of the rotation; any other draw eliminates the contestant. Matches are
//! independent, so batches run on separate workers and their win counts are summed.

use std::collections::VecDeque;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyrand::{Rand, Seeded, Wyrand};
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

#[derive(Debug, Error)]
pub enum McError {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] anyhow::Error),

    #[error("worker failed: {0}")]
    Worker(#[from] JoinError),

    #[error("total wins ({wins}) do not equal number of matches played ({matches})")]
    Mismatch { wins: u64, matches: u64 },
}

/// Plays a single match, returning the winner. `rotation` is scratch space, cleared on entry.
pub fn run_once(contestants: usize, rotation: &mut VecDeque<usize>, rand: &mut impl Rand) -> usize {
    debug_assert!(contestants >= 2, "at least 2 contestants are required");
    rotation.clear();
    rotation.extend(1..contestants);
    rotation.push_back(0);

    let mut threshold = random_f64(rand);
    while let Some(current) = rotation.pop_front() {
        if rotation.is_empty() {
            return current;
        }
        let draw = random_f64(rand);
        if draw < threshold {
            threshold = draw;
            rotation.push_back(current);
        }
    }
    unreachable!("rotation cannot start empty")
}

#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCounter {
    pub wins: Vec<u64>,
}
impl WinCounter {
    pub fn new(contestants: usize) -> Self {
        Self {
            wins: vec![0; contestants],
        }
    }

    #[inline]
    pub fn increment(&mut self, contestant: usize) {
        self.wins[contestant] += 1;
    }

    pub fn merge(&mut self, other: &WinCounter) {
        debug_assert_eq!(self.wins.len(), other.wins.len());
        for (wins, other_wins) in self.wins.iter_mut().zip(&other.wins) {
            *wins += other_wins;
        }
    }

    pub fn total(&self) -> u64 {
        self.wins.iter().sum()
    }

    pub fn check(&self, matches: u64) -> Result<(), McError> {
        let wins = self.total();
        if wins != matches {
            return Err(McError::Mismatch { wins, matches });
        }
        Ok(())
    }

    pub fn frequencies(&self, matches: u64) -> Vec<f64> {
        self.wins
            .iter()
            .map(|&wins| wins as f64 / matches as f64)
            .collect()
    }
}

/// Plays a batch of matches sequentially on one random source.
pub struct MonteCarloEngine<R: Rand> {
    contestants: usize,
    trials: u64,
    rand: R,
    rotation: VecDeque<usize>,
}
impl<R: Rand> MonteCarloEngine<R> {
    pub fn with_contestants(mut self, contestants: usize) -> Self {
        self.contestants = contestants;
        self
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_rand<S: Rand>(self, rand: S) -> MonteCarloEngine<S> {
        MonteCarloEngine {
            contestants: self.contestants,
            trials: self.trials,
            rand,
            rotation: self.rotation,
        }
    }

    pub fn simulate(&mut self) -> WinCounter {
        let mut counter = WinCounter::new(self.contestants);
        for _ in 0..self.trials {
            let winner = run_once(self.contestants, &mut self.rotation, &mut self.rand);
            counter.increment(winner);
        }
        counter
    }
}

impl Default for MonteCarloEngine<Wyrand> {
    fn default() -> Self {
        Self {
            contestants: 2,
            trials: 10_000,
            rand: Wyrand::default(),
            rotation: VecDeque::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub contestants: usize,
    pub matches: u64,
    pub batch_size: u64,
    pub workers: usize,
    pub seed: u64,
}
impl Config {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.contestants < 2 {
            bail!("at least 2 contestants are required");
        }
        if self.matches == 0 {
            bail!("at least one match must be played");
        }
        if self.batch_size == 0 {
            bail!("batch size must be positive");
        }
        if self.workers == 0 {
            bail!("at least one worker is required");
        }
        Ok(())
    }

    /// Batch sizes covering all matches, produced lazily; the last batch takes the remainder.
    pub fn batches(&self) -> impl Iterator<Item = u64> {
        let batch_size = self.batch_size;
        let remainder = self.matches % batch_size;
        (0..self.matches / batch_size)
            .map(move |_| batch_size)
            .chain((remainder != 0).then_some(remainder))
    }

    pub fn num_batches(&self) -> u64 {
        self.matches / self.batch_size + u64::from(self.matches % self.batch_size != 0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contestants: 4,
            matches: 10_000_000,
            batch_size: 100_000,
            workers: 8,
            seed: 0,
        }
    }
}

/// Plays all matches in batches on the blocking pool, with at most `config.workers` batches in
/// flight. Batch `i` is seeded with `config.seed + i`, so the result does not depend on the number
/// of workers.
pub async fn simulate_parallel(config: &Config) -> Result<WinCounter, McError> {
    config.validate()?;
    debug!("playing {} matches in {} batches", config.matches, config.num_batches());

    let mut merged = WinCounter::new(config.contestants);
    let mut join_set = JoinSet::new();
    for (index, trials) in (0u64..).zip(config.batches()) {
        if join_set.len() >= config.workers {
            if let Some(joined) = join_set.join_next().await {
                merged.merge(&joined?);
            }
        }
        let contestants = config.contestants;
        let seed = config.seed.wrapping_add(index);
        join_set.spawn_blocking(move || {
            MonteCarloEngine::default()
                .with_contestants(contestants)
                .with_trials(trials)
                .with_rand(Wyrand::seed(seed))
                .simulate()
        });
    }
    while let Some(joined) = join_set.join_next().await {
        merged.merge(&joined?);
    }

    merged.check(config.matches)?;
    Ok(merged)
}
