//! Several sub-sequences emitted round-robin into one sequence. Each
//! row of the intermediate `[rows, SUBSEQUENCES]` array is one group of
//! consecutive output elements.

use ndarray::{Array1, Array2, Axis};
use numfixtures_common::FixtureResult;
use rand::{distributions::Uniform, seq::SliceRandom, Rng};
use rand_distr::{Distribution, Normal};

use super::distribution_error;

pub const SUBSEQUENCES: usize = 10;

/// `10^j` for sub-sequence `j`
pub fn bases() -> Array1<i64> {
    Array1::from_shape_fn(SUBSEQUENCES, |j| 10_i64.pow(j as u32))
}

#[inline(always)]
fn rows(n: usize) -> usize {
    n.div_ceil(SUBSEQUENCES)
}

/// Constant levels with independent gaussian noise of std `scale`.
pub fn noisy_levels<R: Rng + ?Sized>(
    rng: &mut R,
    scale: f64,
    n: usize,
) -> FixtureResult<Array2<f64>> {
    let noise = Normal::new(0.0, scale).map_err(distribution_error)?;
    let bases = bases();

    Ok(Array2::from_shape_fn((rows(n), SUBSEQUENCES), |(_, j)| {
        bases[j] as f64 + noise.sample(rng)
    }))
}

/// Each level does an integer random walk with steps uniform in
/// `[-10, 10)`, starting from its base.
pub fn random_walk_levels<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Array2<i64> {
    let step = Uniform::from(-10_i64..10);
    let mut levels = Array2::from_shape_fn((rows(n), SUBSEQUENCES), |_| {
        step.sample(rng)
    });
    levels.accumulate_axis_inplace(Axis(0), |&prev, cur| *cur += prev);
    levels += &bases();
    levels
}

/// Independently permutes every row, i.e. every group of consecutive
/// output elements.
pub fn scramble_groups<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    levels: &Array2<T>,
) -> Array2<T> {
    let mut scrambled = levels.clone();
    let mut permutation: Vec<usize> = (0..levels.ncols()).collect();
    for (mut group, row) in
        scrambled.rows_mut().into_iter().zip(levels.rows())
    {
        permutation.shuffle(rng);
        for (dst, &src) in group.iter_mut().zip(&permutation) {
            *dst = row[src];
        }
    }
    scrambled
}

/// Row-major flattening, truncated to `n` elements.
pub fn interleave<T: Copy>(levels: &Array2<T>, n: usize) -> Vec<T> {
    levels.iter().take(n).copied().collect()
}
