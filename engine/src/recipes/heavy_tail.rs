use numfixtures_common::FixtureResult;
use rand::Rng;
use rand_distr::{Distribution, Geometric, Pareto};

use super::distribution_error;

/// Number of trials up to and including the first success, so the
/// support starts at 1.
pub fn geometric<R: Rng + ?Sized>(
    rng: &mut R,
    p: f64,
    n: usize,
) -> FixtureResult<Vec<i64>> {
    let geometric = Geometric::new(p).map_err(distribution_error)?;

    Ok((0..n).map(|_| trials(geometric.sample(rng))).collect())
}

/// rand_distr counts the failures before the first success. Saturates
/// at `i64::MAX`.
#[inline(always)]
fn trials(failures: u64) -> i64 {
    i64::try_from(failures.saturating_add(1)).unwrap_or(i64::MAX)
}

/// Lomax (Pareto type II) samples rescaled so that the distribution's
/// median is `median`.
pub fn fixed_median_lomax<R: Rng + ?Sized>(
    rng: &mut R,
    shape: f64,
    median: f64,
    n: usize,
) -> FixtureResult<Vec<f64>> {
    // Classic pareto with unit scale has support [1, inf), the lomax
    // is the same draw shifted down to [0, inf)
    let pareto =
        Pareto::new(1.0_f64, shape).map_err(distribution_error)?;
    let unscaled_median = 2.0_f64.powf(1.0 / shape) - 1.0;

    Ok((0..n)
        .map(|_| (pareto.sample(rng) - 1.0) / unscaled_median * median)
        .collect())
}

/// `(threshold, cents)`: a uniform draw below `threshold` (and above the
/// previous one) selects `cents`. The last bucket covers the remainder.
pub const CENT_BUCKETS: [(f64, i64); 7] = [
    (0.15, 0),
    (0.25, 25),
    (0.40, 50),
    (0.45, 75),
    (0.60, 95),
    (0.75, 98),
    (1.00, 99),
];

pub struct Prices {
    pub dollars: Vec<i64>,
    pub cents: Vec<i64>,
    pub total_cents: Vec<i64>,
}

/// Retail-looking prices: heavy tailed dollar amounts with a median of
/// 5 and cents concentrated on "psychological" endings.
pub fn prices<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> FixtureResult<Prices> {
    let dollars: Vec<i64> = fixed_median_lomax(rng, 1.5, 5.0, n)?
        .into_iter()
        .map(|d| d.floor() as i64)
        .collect();

    let cents: Vec<i64> = (0..n)
        .map(|_| {
            let p = rng.gen::<f64>();
            CENT_BUCKETS
                .iter()
                .find(|(threshold, _)| p < *threshold)
                .map_or(99, |(_, cents)| *cents)
        })
        .collect();

    let total_cents = dollars
        .iter()
        .zip(&cents)
        .map(|(dollars, cents)| {
            dollars.saturating_mul(100).saturating_add(*cents)
        })
        .collect();

    Ok(Prices {
        dollars,
        cents,
        total_cents,
    })
}
