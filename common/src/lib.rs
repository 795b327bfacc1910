use std::fmt;

pub mod element;
pub mod error;
pub mod timestamp;

pub use element::{
    decode, encode, quantize, write_text, Element, RawSample,
};
pub use error::{FixtureError, FixtureResult};
pub use timestamp::TimestampMicros;

/// Element kind of a fixture. The kind is only recoverable from the
/// file name prefix since fixture files carry no header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    I32,
    I64,
    /// 0/1 stored as a signed byte
    Bool,
    F32,
    F64,
    /// i64 microseconds since the unix epoch
    TimestampMicros,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::Bool,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::TimestampMicros,
    ];

    #[inline(always)]
    pub const fn prefix(&self) -> &'static str {
        match self {
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::Bool => "bool",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::TimestampMicros => "micros",
        }
    }

    /// Width in bytes of one element in the binary file
    #[inline(always)]
    pub const fn width(&self) -> usize {
        match self {
            ElementKind::Bool => 1,
            ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::I64
            | ElementKind::F64
            | ElementKind::TimestampMicros => 8,
        }
    }

    /// Recovers the kind from a `<prefix>_<name>` fixture name.
    pub fn from_fixture_name(full_name: &str) -> Option<ElementKind> {
        let (prefix, _name) = full_name.split_once('_')?;
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.prefix() == prefix)
    }

    #[inline(always)]
    pub fn fixture_name(&self, name: &str) -> String {
        format!("{}_{name}", self.prefix())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
