use std::path::PathBuf;

use numfixtures_common::{FixtureError, FixtureResult};

pub const DEFAULT_BASE_DIR: &str = "bench/data";
/// Length of every regular fixture
pub const N: usize = 1_000_000;
/// Length of the `*_mini` fixtures
pub const MINI_N: usize = 3_000;
/// Length of the `uniform_xl` fixture
pub const XL_N: usize = (1 << 24) - 1;
pub const SEED: u64 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the `txt/` and `binary/` directories
    pub base_dir: PathBuf,
    pub n: usize,
    pub mini_n: usize,
    /// Every dataset resets its rng to this seed
    pub seed: u64,
    pub xl_n: usize,
    /// Also write `i64_uniform_xl`, which is off by default since it is
    /// mostly a waste of disk
    pub include_xl: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            n: N,
            mini_n: MINI_N,
            seed: SEED,
            xl_n: XL_N,
            include_xl: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> FixtureResult {
        if self.n == 0 {
            return Err(FixtureError::InvalidConfig(
                "n must be nonzero".to_string(),
            ));
        }
        if self.mini_n > self.n {
            return Err(FixtureError::InvalidConfig(format!(
                "mini_n ({}) exceeds n ({})",
                self.mini_n, self.n
            )));
        }
        if self.include_xl && self.xl_n < self.n {
            return Err(FixtureError::InvalidConfig(format!(
                "xl_n ({}) is smaller than n ({})",
                self.xl_n, self.n
            )));
        }
        Ok(())
    }
}
