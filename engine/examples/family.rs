//! Writes a single fixture family with a small `n`, e.g.
//! `cargo run --example family -- diablo /tmp/fixtures 10000`
use std::{env, path::PathBuf};

use numfixtures_engine::{
    verify_fixture, Family, FixtureWriter, Generator, GeneratorConfig,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let family = Family::ALL
        .into_iter()
        .find(|family| Some(family.name()) == args.get(1).map(String::as_str))
        .expect("first argument must be a family name");
    let base_dir = PathBuf::from(args.get(2).expect("missing base dir"));
    let n: usize = args
        .get(3)
        .map(|n| n.parse().expect("couldn't parse n"))
        .unwrap_or(10_000);

    let generator = Generator::new(GeneratorConfig {
        base_dir: base_dir.clone(),
        n,
        mini_n: n.min(3_000),
        ..Default::default()
    })
    .unwrap();

    let mut writer = FixtureWriter::create(&base_dir).unwrap();
    generator.generate(family, &mut writer).unwrap();

    for fixture in writer.manifest() {
        let len = verify_fixture(&base_dir, &fixture.full_name).unwrap();
        println!("{}: {len} values", fixture.full_name);
    }
}
