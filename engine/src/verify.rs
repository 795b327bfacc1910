//! Reads a fixture pair back and checks that the text and binary
//! renderings describe the same values.

use std::{fs, path::Path};

use numfixtures_common::{
    decode, encode, Element, ElementKind, FixtureError, FixtureResult,
    TimestampMicros,
};

use crate::writer::{binary_path, text_path};

/// Returns the number of elements in the verified pair.
pub fn verify_fixture(
    base_dir: &Path,
    full_name: &str,
) -> FixtureResult<usize> {
    let kind =
        ElementKind::from_fixture_name(full_name).ok_or_else(|| {
            FixtureError::Mismatch {
                path: text_path(base_dir, full_name),
                reason: "file name has no known kind prefix".to_string(),
            }
        })?;

    match kind {
        ElementKind::I32 => verify_as::<i32>(base_dir, full_name),
        ElementKind::I64 => verify_as::<i64>(base_dir, full_name),
        ElementKind::Bool => verify_as::<i8>(base_dir, full_name),
        ElementKind::F32 => verify_as::<f32>(base_dir, full_name),
        ElementKind::F64 => verify_as::<f64>(base_dir, full_name),
        ElementKind::TimestampMicros => {
            verify_as::<TimestampMicros>(base_dir, full_name)
        }
    }
}

pub fn verify_as<T: Element>(
    base_dir: &Path,
    full_name: &str,
) -> FixtureResult<usize> {
    let values = read_text::<T>(base_dir, full_name)?;
    let binary_path = binary_path(base_dir, full_name);
    let binary = fs::read(&binary_path)?;

    let encoded = encode(&values);
    if encoded.len() != binary.len() {
        return Err(FixtureError::Mismatch {
            path: binary_path,
            reason: format!(
                "text has {} values ({} bytes) but binary has {} bytes",
                values.len(),
                encoded.len(),
                binary.len(),
            ),
        });
    }

    let width = T::KIND.width();
    if let Some(index) = encoded
        .chunks_exact(width)
        .zip(binary.chunks_exact(width))
        .position(|(text, binary)| text != binary)
    {
        return Err(FixtureError::Mismatch {
            path: binary_path,
            reason: format!("value {index} differs from its text line"),
        });
    }

    Ok(values.len())
}

/// Parses every line of a fixture's text file.
pub fn read_text<T: Element>(
    base_dir: &Path,
    full_name: &str,
) -> FixtureResult<Vec<T>> {
    let text = fs::read_to_string(text_path(base_dir, full_name))?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            T::parse(line).ok_or_else(|| FixtureError::Parse {
                line: i + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

pub fn read_binary<T: Element>(
    base_dir: &Path,
    full_name: &str,
) -> FixtureResult<Vec<T>> {
    let path = binary_path(base_dir, full_name);
    let bytes = fs::read(&path)?;
    decode(&bytes).ok_or_else(|| FixtureError::Mismatch {
        path,
        reason: format!(
            "{} bytes is not a whole number of {} byte values",
            bytes.len(),
            T::KIND.width(),
        ),
    })
}
