use numfixtures_common::FixtureResult;
use rand::Rng;
use rand_distr::StandardNormal;

use super::uniform::uniform_i64;

/// 2022-01-01T00:00:00Z
pub const BASE_EPOCH_SECONDS: i64 = 1_640_995_200;

/// Timestamps in microseconds increasing one second per step on average
/// from [BASE_EPOCH_SECONDS], each with one second of gaussian jitter.
pub fn near_linear<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let jitter: f64 = rng.sample(StandardNormal);
            1e6 * (BASE_EPOCH_SECONDS as f64 + i as f64 + jitter)
        })
        .collect()
}

/// Millisecond-granularity timestamps spread over ~11.6 days, expressed
/// in microseconds.
pub fn millis<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> FixtureResult<Vec<i64>> {
    let base_millis = BASE_EPOCH_SECONDS * 1_000;
    Ok(uniform_i64(rng, 0..1_000_000_000, n)?
        .into_iter()
        .map(|offset| 1_000 * (base_millis + offset))
        .collect())
}
