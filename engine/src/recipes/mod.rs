//! Sample recipes for every fixture family.
//!
//! Every recipe takes the rng explicitly so the caller decides when it
//! is reset. Recipes return raw `f64` or `i64` samples; narrowing into
//! the fixture's element kind happens at write time.

use std::fmt::Debug;

use numfixtures_common::FixtureError;

pub mod diablo;
pub mod heavy_tail;
pub mod interleaved;
pub mod timestamps;
pub mod uniform;
pub mod waves;

pub(crate) fn distribution_error<E: Debug>(e: E) -> FixtureError {
    FixtureError::Distribution(format!("{e:?}"))
}
