//! Timing of computations.

use std::future::Future;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        let value = f()?;
        Ok(Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }

    pub async fn future<E>(f: impl Future<Output = Result<V, E>>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        let value = f.await?;
        Ok(Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_millis() as f64 / 1_000.
    }
}
