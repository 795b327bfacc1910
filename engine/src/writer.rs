use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use log::{debug, info, warn};
use numfixtures_common::{
    encode, quantize, write_text, Element, ElementKind, FixtureResult,
    RawSample,
};

pub const TEXT_DIR: &str = "txt";
pub const BINARY_DIR: &str = "binary";

const WRITE_BUFFER_CAPACITY: usize = 1024 * 1024;

#[inline(always)]
pub fn text_path(base_dir: &Path, full_name: &str) -> PathBuf {
    base_dir.join(TEXT_DIR).join(format!("{full_name}.txt"))
}

#[inline(always)]
pub fn binary_path(base_dir: &Path, full_name: &str) -> PathBuf {
    base_dir.join(BINARY_DIR).join(format!("{full_name}.bin"))
}

/// Manifest entry for one written file pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFixture {
    /// `<prefix>_<name>`
    pub full_name: String,
    pub kind: ElementKind,
    pub len: usize,
    /// Values clamped while narrowing into `kind`
    pub saturated: usize,
}

impl WrittenFixture {
    pub fn text_path(&self, base_dir: &Path) -> PathBuf {
        text_path(base_dir, &self.full_name)
    }

    pub fn binary_path(&self, base_dir: &Path) -> PathBuf {
        binary_path(base_dir, &self.full_name)
    }
}

/// Writes `txt/` and `binary/` file pairs under a base directory and
/// records what it wrote.
pub struct FixtureWriter {
    base_dir: PathBuf,
    manifest: Vec<WrittenFixture>,
}

impl FixtureWriter {
    /// Creates `<base_dir>/txt` and `<base_dir>/binary` if absent.
    pub fn create(base_dir: impl AsRef<Path>) -> FixtureResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(base_dir.join(TEXT_DIR))?;
        fs::create_dir_all(base_dir.join(BINARY_DIR))?;

        Ok(FixtureWriter {
            base_dir,
            manifest: Vec::new(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Narrows `raw` into `T` and writes both renderings, overwriting
    /// any existing pair with the same name.
    pub fn write<T: Element, R: RawSample>(
        &mut self,
        name: &str,
        raw: &[R],
    ) -> FixtureResult<&WrittenFixture> {
        let full_name = T::KIND.fixture_name(name);
        info!("writing {full_name}...");
        let start = Instant::now();

        let quantized = quantize::<T, R>(raw);
        if quantized.saturated > 0 {
            warn!(
                "{full_name}: {} of {} values saturated narrowing to {}",
                quantized.saturated,
                raw.len(),
                T::KIND,
            );
        }

        let mut text = BufWriter::with_capacity(
            WRITE_BUFFER_CAPACITY,
            File::create(text_path(&self.base_dir, &full_name))?,
        );
        write_text(&quantized.values, &mut text)?;
        text.flush()?;

        let mut binary = BufWriter::with_capacity(
            WRITE_BUFFER_CAPACITY,
            File::create(binary_path(&self.base_dir, &full_name))?,
        );
        binary.write_all(encode(&quantized.values))?;
        binary.flush()?;

        debug!(
            "wrote {} values to {full_name} in {} ms",
            quantized.values.len(),
            start.elapsed().as_millis(),
        );

        self.manifest.push(WrittenFixture {
            full_name,
            kind: T::KIND,
            len: quantized.values.len(),
            saturated: quantized.saturated,
        });
        Ok(&self.manifest[self.manifest.len() - 1])
    }

    pub fn manifest(&self) -> &[WrittenFixture] {
        &self.manifest
    }

    pub fn into_manifest(self) -> Vec<WrittenFixture> {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use numfixtures_common::TimestampMicros;

    use super::*;

    #[test]
    fn writes_named_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FixtureWriter::create(dir.path()).unwrap();

        let written =
            writer.write::<i32, f64>("tiny", &[1.5, -1.5, 3e10]).unwrap();
        assert_eq!(written.full_name, "i32_tiny");
        assert_eq!(written.len, 3);
        assert_eq!(written.saturated, 1);

        let text =
            fs::read_to_string(dir.path().join("txt/i32_tiny.txt"))
                .unwrap();
        assert_eq!(text, format!("1\n-2\n{}", i32::MAX));

        let binary =
            fs::read(dir.path().join("binary/i32_tiny.bin")).unwrap();
        assert_eq!(binary.len(), 3 * 4);
        assert_eq!(binary[..4], 1_i32.to_ne_bytes());
    }

    #[test]
    fn overwrites_existing_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FixtureWriter::create(dir.path()).unwrap();
        writer.write::<i64, i64>("x", &[1, 2, 3, 4]).unwrap();
        writer.write::<i64, i64>("x", &[5]).unwrap();

        let fixture = &writer.manifest()[1];
        assert_eq!(
            fs::read_to_string(fixture.text_path(dir.path())).unwrap(),
            "5"
        );
        assert_eq!(
            fs::read(fixture.binary_path(dir.path())).unwrap().len(),
            8
        );
    }

    #[test]
    fn creates_nested_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("bench").join("data");
        let mut writer = FixtureWriter::create(&base).unwrap();
        writer
            .write::<TimestampMicros, i64>("ts", &[1_640_995_200_000_000])
            .unwrap();

        let text =
            fs::read_to_string(text_path(&base, "micros_ts")).unwrap();
        assert_eq!(text, "2022-01-01T00:00:00:000000Z");
    }

    #[test]
    fn uncreatable_base_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, b"").unwrap();
        assert!(FixtureWriter::create(&file).is_err());
    }
}
