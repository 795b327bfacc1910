//! A diabolically hard sequence for numeric codecs:
//! * decimal floats with bit-level multiplicative jitter
//! * many interleaved subsequences with irregularly missing elements
//! * each subsequence benefits from delta encoding
//! * the delta size drifts over time

use rand::{distributions::Uniform, Rng};
use rand_distr::{Distribution, StandardNormal};

pub const SUBSEQUENCES: usize = 77;
/// Chance that a subsequence emits its current value at a given step
pub const EMIT_PROBABILITY: f64 = 0.1;
/// Mean reversion rate of the log delta scale per step
pub const FREQUENCY: f64 = 1e-4;
const DELTA_SCALE: f64 = 3.0;
const DECIMAL_DIVISOR: f64 = 100.0;
/// Jitter factors are `1 + k * eps` with `k` uniform in this range
const JITTER_ULPS: (f64, f64) = (-2.0, 3.0);

/// State of the underlying integer subsequences between steps.
pub struct DiabloWalk {
    values: Vec<i64>,
    log_delta_scale: f64,
    add_scale: f64,
    mult: f64,
}

impl DiabloWalk {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> DiabloWalk {
        DiabloWalk {
            values: (0..SUBSEQUENCES)
                .map(|_| rng.gen_range(10_000..100_000))
                .collect(),
            log_delta_scale: 0.0,
            // Keeps the stationary variance of the log scale at 1
            add_scale: ((2.0 * FREQUENCY).exp() - 1.0).sqrt(),
            mult: (-FREQUENCY).exp(),
        }
    }

    #[inline(always)]
    pub fn log_delta_scale(&self) -> f64 {
        self.log_delta_scale
    }

    /// Pushes the subsequences selected this step onto `out`, then
    /// moves every subsequence by a delta of the current scale.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        out: &mut Vec<i64>,
    ) {
        for value in &self.values {
            if rng.gen::<f64>() > 1.0 - EMIT_PROBABILITY {
                out.push(*value);
            }
        }

        self.advance_scale(rng.sample(StandardNormal));

        let delta_scale = DELTA_SCALE * self.log_delta_scale.exp();
        for value in self.values.iter_mut() {
            // truncates toward zero
            *value += rng.gen_range(-delta_scale..delta_scale) as i64;
        }
    }

    #[inline(always)]
    fn advance_scale(&mut self, shock: f64) {
        self.log_delta_scale += shock * self.add_scale;
        self.log_delta_scale *= self.mult;
    }
}

pub fn diablo<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let mut walk = DiabloWalk::new(rng);
    let mut emitted = Vec::with_capacity(n + SUBSEQUENCES);
    while emitted.len() < n {
        walk.step(rng, &mut emitted);
    }
    emitted.truncate(n);

    // Sampled in ulps and scaled afterwards, since a uniform over
    // [1 - 2eps, 1 + 3eps) directly is too narrow for rand's float
    // range setup
    let jitter = Uniform::new(JITTER_ULPS.0, JITTER_ULPS.1);
    emitted
        .into_iter()
        .map(|value| {
            let factor = 1.0 + jitter.sample(rng) * f64::EPSILON;
            value as f64 / DECIMAL_DIVISOR * factor
        })
        .collect()
}
