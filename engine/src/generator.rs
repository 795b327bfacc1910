use std::{fmt, time::Instant};

use log::info;
use numfixtures_common::{FixtureError, FixtureResult, TimestampMicros};
use rand::SeedableRng;

use crate::{
    config::GeneratorConfig,
    recipes::{
        diablo::diablo,
        heavy_tail::{fixed_median_lomax, geometric, prices, Prices},
        interleaved::{
            interleave, noisy_levels, random_walk_levels, scramble_groups,
        },
        timestamps::{millis, near_linear},
        uniform::{
            bernoulli, constant, decimals, full_range_i64, uniform_i64,
        },
        waves::{
            centered_cumsum, dist_shift, log_normal, radians, slow_cosine,
            standard_normal,
        },
    },
    rng::FastxxHashRng,
    writer::{FixtureWriter, WrittenFixture},
};

const GEO_P: f64 = 0.001;
const LOMAX05_SHAPE: f64 = 0.5;
const LOMAX05_MEDIAN: f64 = 1_000.0;
const CONSTANT: i64 = 77_777;
const SPARSE_P: f64 = 0.01;
const COSINE_AMPLITUDE: f64 = 100_000.0;
/// Prime, so the period never lines up with power of two block sizes
const COSINE_PERIODS: usize = 103;
const INTEGERS_MAX: i64 = 1 << 30;
const INTERLEAVED_NOISE: f64 = 22.0;

/// A group of datasets generated from one draw. Families are generated
/// in the order of [Family::ALL].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Geo,
    Lomax05,
    Uniform,
    Constant,
    Sparse,
    /// `dollars`, `cents` and `total_cents`
    Prices,
    SlowCosine,
    /// `normal`, `log_normal` and `csum`
    Normal,
    NearLinear,
    Millis,
    Integers,
    Decimal,
    Radians,
    Interleaved0,
    /// `interl1` and `interl_scrambl1`
    Interleaved1,
    DistShift,
    Diablo,
}

impl Family {
    pub const ALL: [Family; 17] = [
        Family::Geo,
        Family::Lomax05,
        Family::Uniform,
        Family::Constant,
        Family::Sparse,
        Family::Prices,
        Family::SlowCosine,
        Family::Normal,
        Family::NearLinear,
        Family::Millis,
        Family::Integers,
        Family::Decimal,
        Family::Radians,
        Family::Interleaved0,
        Family::Interleaved1,
        Family::DistShift,
        Family::Diablo,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Family::Geo => "geo",
            Family::Lomax05 => "lomax05",
            Family::Uniform => "uniform",
            Family::Constant => "constant",
            Family::Sparse => "sparse",
            Family::Prices => "prices",
            Family::SlowCosine => "slow_cosine",
            Family::Normal => "normal",
            Family::NearLinear => "near_linear",
            Family::Millis => "millis",
            Family::Integers => "integers",
            Family::Decimal => "decimal",
            Family::Radians => "radians",
            Family::Interleaved0 => "interl0",
            Family::Interleaved1 => "interl1",
            Family::DistShift => "dist_shift",
            Family::Diablo => "diablo",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> FixtureResult<Generator> {
        config.validate()?;
        Ok(Generator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A fresh rng at the configured seed, so no dataset depends on
    /// what was drawn before it.
    #[inline(always)]
    pub fn rng(&self) -> FastxxHashRng {
        FastxxHashRng::seed_from_u64(self.config.seed)
    }

    /// Generates and writes every family into the configured base
    /// directory.
    pub fn run(&self) -> FixtureResult<Vec<WrittenFixture>> {
        let start = Instant::now();
        let mut writer = FixtureWriter::create(&self.config.base_dir)?;
        for family in Family::ALL {
            self.generate(family, &mut writer)?;
        }

        info!(
            "wrote {} fixtures to {} in {:.1}s",
            writer.manifest().len(),
            self.config.base_dir.display(),
            start.elapsed().as_secs_f64(),
        );
        Ok(writer.into_manifest())
    }

    /// Writes one family. `writer` must be rooted at the configured base
    /// directory.
    pub fn generate(
        &self,
        family: Family,
        writer: &mut FixtureWriter,
    ) -> FixtureResult {
        if writer.base_dir() != self.config.base_dir.as_path() {
            return Err(FixtureError::InvalidConfig(format!(
                "writer is rooted at {} but the generator at {}",
                writer.base_dir().display(),
                self.config.base_dir.display(),
            )));
        }

        let n = self.config.n;
        let mut rng = self.rng();

        match family {
            Family::Geo => {
                let geo = geometric(&mut rng, GEO_P, n)?;
                writer.write::<i64, _>("geo", &geo)?;
            }
            Family::Lomax05 => {
                let lomax = fixed_median_lomax(
                    &mut rng,
                    LOMAX05_SHAPE,
                    LOMAX05_MEDIAN,
                    n,
                )?;
                writer.write::<i32, _>("lomax05_reg", &lomax)?;
                writer.write::<i64, _>("lomax05_reg", &lomax)?;
                writer.write::<i64, _>("lomax05_mini", self.mini(&lomax))?;
            }
            Family::Uniform => {
                // The regular fixture is a prefix of the xl pool
                let pool_len = if self.config.include_xl {
                    self.config.xl_n
                } else {
                    n
                };
                let pool = full_range_i64(&mut rng, pool_len);
                writer.write::<i64, _>("uniform_reg", &pool[..n])?;
                if self.config.include_xl {
                    writer.write::<i64, _>("uniform_xl", &pool)?;
                }
            }
            Family::Constant => {
                writer.write::<i64, _>("constant", &constant(CONSTANT, n))?;
            }
            Family::Sparse => {
                let sparse = bernoulli(&mut rng, SPARSE_P, n)?;
                writer.write::<i64, _>("sparse", &sparse)?;
                writer.write::<i8, _>("sparse", &sparse)?;
            }
            Family::Prices => {
                let Prices {
                    dollars,
                    cents,
                    total_cents,
                } = prices(&mut rng, n)?;
                writer.write::<i64, _>("dollars", &dollars)?;
                writer.write::<i64, _>("cents", &cents)?;
                writer.write::<i64, _>("total_cents", &total_cents)?;
            }
            Family::SlowCosine => {
                let wave = slow_cosine(COSINE_AMPLITUDE, COSINE_PERIODS, n);
                writer.write::<i64, _>("slow_cosine", &wave)?;
                writer.write::<f64, _>("slow_cosine", &wave)?;
            }
            Family::Normal => {
                let normal = standard_normal(&mut rng, n);
                writer.write::<f64, _>("normal", &normal)?;
                writer.write::<f32, _>("normal", &normal)?;

                let exp = log_normal(&normal);
                writer.write::<f32, _>("log_normal", &exp)?;
                writer.write::<f32, _>("csum", &centered_cumsum(&exp))?;
            }
            Family::NearLinear => {
                let ts = near_linear(&mut rng, n);
                writer.write::<TimestampMicros, _>("near_linear", &ts)?;
            }
            Family::Millis => {
                let ts = millis(&mut rng, n)?;
                writer.write::<TimestampMicros, _>("millis", &ts)?;
            }
            Family::Integers => {
                let ints = uniform_i64(&mut rng, 0..INTEGERS_MAX, n)?;
                writer.write::<f64, _>("integers", &ints)?;
            }
            Family::Decimal => {
                writer.write::<f64, _>("decimal", &decimals(&mut rng, n)?)?;
            }
            Family::Radians => {
                writer.write::<f64, _>("radians", &radians(n))?;
            }
            Family::Interleaved0 => {
                let levels =
                    noisy_levels(&mut rng, INTERLEAVED_NOISE, n)?;
                writer.write::<i64, _>("interl0", &interleave(&levels, n))?;
            }
            Family::Interleaved1 => {
                let levels = random_walk_levels(&mut rng, n);
                writer.write::<i64, _>("interl1", &interleave(&levels, n))?;

                // The permutations are drawn from a reset rng
                let scrambled = scramble_groups(&mut self.rng(), &levels);
                writer.write::<i64, _>(
                    "interl_scrambl1",
                    &interleave(&scrambled, n),
                )?;
            }
            Family::DistShift => {
                let shifted = dist_shift(&mut rng, n);
                writer.write::<i64, _>("dist_shift", &shifted)?;
            }
            Family::Diablo => {
                let values = diablo(&mut rng, n);
                writer.write::<f64, _>("diablo_reg", &values)?;
                writer.write::<f64, _>("diablo_mini", self.mini(&values))?;
            }
        }

        Ok(())
    }

    #[inline(always)]
    fn mini<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[..self.config.mini_n.min(values.len())]
    }
}
