use std::path::PathBuf;

use clap::Parser;
use log::info;
use numfixtures_engine::{
    config::DEFAULT_BASE_DIR, verify_fixture, Generator, GeneratorConfig,
};

/// Regenerates the benchmark fixtures. Every run with the same
/// arguments writes byte-identical files.
#[derive(Parser)]
pub struct Args {
    /// Root of the `txt/` and `binary/` output directories
    #[clap(long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Also write the 16M element `i64_uniform_xl` fixture
    #[clap(long)]
    include_xl: bool,

    /// Read every written pair back and check text and binary agree
    #[clap(long)]
    verify: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let generator = Generator::new(GeneratorConfig {
        base_dir: args.base_dir,
        include_xl: args.include_xl,
        ..Default::default()
    })?;
    let manifest = generator.run()?;

    if args.verify {
        let base_dir = &generator.config().base_dir;
        for fixture in &manifest {
            let len = verify_fixture(base_dir, &fixture.full_name)?;
            info!("verified {} ({len} values)", fixture.full_name);
        }
    }

    Ok(())
}
