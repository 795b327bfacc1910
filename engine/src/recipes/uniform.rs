use std::ops::Range;

use numfixtures_common::FixtureResult;
use rand::{distributions::Uniform, Rng};
use rand_distr::{Binomial, Distribution};

use super::distribution_error;

/// Uniform over the full signed 64-bit range.
pub fn full_range_i64<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen::<i64>()).collect()
}

pub fn uniform_i64<R: Rng + ?Sized>(
    rng: &mut R,
    range: Range<i64>,
    n: usize,
) -> FixtureResult<Vec<i64>> {
    if range.is_empty() {
        return Err(distribution_error(range));
    }
    let uniform = Uniform::from(range);
    Ok((0..n).map(|_| uniform.sample(rng)).collect())
}

pub fn constant(value: i64, n: usize) -> Vec<i64> {
    vec![value; n]
}

/// Mostly zeros with a rare one.
pub fn bernoulli<R: Rng + ?Sized>(
    rng: &mut R,
    p: f64,
    n: usize,
) -> FixtureResult<Vec<i64>> {
    let binomial = Binomial::new(1, p).map_err(distribution_error)?;
    Ok((0..n).map(|_| binomial.sample(rng) as i64).collect())
}

/// Two-decimal-digit floats in `[10.00, 100.00)`.
pub fn decimals<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> FixtureResult<Vec<f64>> {
    Ok(uniform_i64(rng, 1_000..10_000, n)?
        .into_iter()
        .map(|cents| cents as f64 / 100.0)
        .collect())
}
