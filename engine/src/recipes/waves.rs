use std::f64::consts::PI;

use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

/// `amplitude * cos(..)` completing exactly `periods` periods over `n`
/// samples.
pub fn slow_cosine(amplitude: f64, periods: usize, n: usize) -> Vec<f64> {
    let period = n as f64 / periods as f64;
    (0..n)
        .map(|i| amplitude * (i as f64 * 2.0 * PI / period).cos())
        .collect()
}

/// `(i + 10) * pi`
pub fn radians(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 + 10.0) * PI).collect()
}

pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

pub fn log_normal(normal: &[f64]) -> Vec<f64> {
    normal.iter().map(|x| x.exp()).collect()
}

/// Random walk whose steps are log-normal draws centered on their mean
/// `exp(0.5)`.
pub fn centered_cumsum(log_normal: &[f64]) -> Vec<f64> {
    let mean = 0.5_f64.exp();
    log_normal
        .iter()
        .scan(0.0, |sum, x| {
            *sum += x - mean;
            Some(*sum)
        })
        .collect()
}

/// `0.5 + exp(s_i) * N(0, 1)` where `s` goes linearly from -1.5 to 25,
/// so the spread grows by about twelve orders of magnitude over the run.
pub fn dist_shift<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let log_std = Array1::<f64>::linspace(-1.5, 25.0, n);
    log_std
        .iter()
        .map(|s| 0.5 + s.exp() * rng.sample::<f64, _>(StandardNormal))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::rng::FastxxHashRng;

    #[test]
    fn slow_cosine_is_periodic() {
        let n = 103 * 1_000;
        let wave = slow_cosine(100_000.0, 103, n);
        assert_eq!(wave[0], 100_000.0);
        for i in 0..n - 1_000 {
            assert!((wave[i] - wave[i + 1_000]).abs() < 1e-3);
        }
        // half a period later we are at the trough
        assert!((wave[500] + 100_000.0).abs() < 1e-3);
    }

    #[test]
    fn radians_start_at_ten_pi() {
        let r = radians(3);
        assert_eq!(r[0], 10.0 * PI);
        assert!((r[2] - r[1] - PI).abs() < 1e-12);
    }

    #[test]
    fn centered_cumsum_has_no_drift() {
        let mut rng = FastxxHashRng::seed_from_u64(0);
        let normal = standard_normal(&mut rng, 200_000);
        let walk = centered_cumsum(&log_normal(&normal));

        // the log-normal std is ~2.16 so the walk ends within a few
        // hundred of zero, far from the ~330k an uncentered sum reaches
        let end = *walk.last().unwrap();
        assert!(end.abs() < 5_000.0, "end = {end}");
    }

    #[test]
    fn dist_shift_widens() {
        let mut rng = FastxxHashRng::seed_from_u64(0);
        let n = 10_000;
        let shifted = dist_shift(&mut rng, n);
        assert_eq!(shifted.len(), n);

        let spread =
            |s: &[f64]| s.iter().map(|x| (x - 0.5).abs()).sum::<f64>();
        let head = spread(&shifted[..1_000]);
        let tail = spread(&shifted[n - 1_000..]);
        assert!(tail > head * 1e6);
    }
}
