//! Exact factorials in `u128`. `34!` is the largest that fits.

use crate::error::ArithmeticOverflow;

pub trait Factorial {
    fn get(&self, n: usize) -> Result<u128, ArithmeticOverflow>;
}

#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: usize) -> Result<u128, ArithmeticOverflow> {
        let mut product = 1u128;
        for i in 2..=n {
            product = product
                .checked_mul(i as u128)
                .ok_or(ArithmeticOverflow::Factorial(n))?;
        }
        Ok(product)
    }
}

pub const MAX_FACTORIAL_ENTRIES: usize = 35;

pub struct Lookup {
    entries: [u128; MAX_FACTORIAL_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: usize) -> Result<u128, ArithmeticOverflow> {
        self.entries
            .get(n)
            .copied()
            .ok_or(ArithmeticOverflow::Factorial(n))
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u128; MAX_FACTORIAL_ENTRIES];
        for i in 2..MAX_FACTORIAL_ENTRIES {
            entries[i] = i as u128 * entries[i - 1];
        }
        Self { entries }
    }
}
