//! Deterministic numeric fixture generation.
//!
//! Every [Family] draws from a freshly seeded [FastxxHashRng] and writes
//! one or more file pairs through a [FixtureWriter]:
//! `<base>/txt/<kind>_<name>.txt` holding one value per line and
//! `<base>/binary/<kind>_<name>.bin` holding the packed native-endian
//! values.

pub mod config;
pub mod generator;
pub mod recipes;
pub mod rng;
pub mod verify;
pub mod writer;

pub use config::GeneratorConfig;
pub use generator::{Family, Generator};
pub use numfixtures_common::{ElementKind, FixtureError, FixtureResult};
pub use rng::FastxxHashRng;
pub use verify::verify_fixture;
pub use writer::{FixtureWriter, WrittenFixture};
