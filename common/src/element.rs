use std::{
    fmt::{Debug, Write as _},
    io,
};

use bytemuck::Pod;

use crate::{timestamp::TimestampMicros, ElementKind};

/// The result of narrowing one raw sample into an element kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cast<T> {
    pub value: T,
    /// The raw sample did not fit and was clamped (or was NaN)
    pub saturated: bool,
}

impl<T> Cast<T> {
    #[inline(always)]
    fn exact(value: T) -> Cast<T> {
        Cast {
            value,
            saturated: false,
        }
    }
}

/// A fixed-width value that can be written to a fixture file pair.
///
/// The binary encoding is the native-endian in-memory representation,
/// hence the [Pod] bound.
pub trait Element: Pod + PartialEq + Debug {
    const KIND: ElementKind;

    /// Floors (integer kinds) or casts (float kinds) a float sample.
    fn from_f64(raw: f64) -> Cast<Self>;

    fn from_i64(raw: i64) -> Cast<Self>;

    /// Appends the text form of this value to `out`.
    fn render(&self, out: &mut String);

    fn parse(s: &str) -> Option<Self>;
}

macro_rules! impl_integer_element {
    ($([$ty:ty, $kind:expr]),+) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = $kind;

                #[inline(always)]
                fn from_f64(raw: f64) -> Cast<Self> {
                    let floored = raw.floor();
                    // -MIN is exactly 2^(bits - 1) as a float
                    let in_range = floored >= <$ty>::MIN as f64
                        && floored < -(<$ty>::MIN as f64);
                    Cast {
                        // `as` saturates and maps NaN to 0
                        value: floored as $ty,
                        saturated: !in_range,
                    }
                }

                #[inline(always)]
                fn from_i64(raw: i64) -> Cast<Self> {
                    let clamped = raw
                        .clamp(<$ty>::MIN as i64, <$ty>::MAX as i64);
                    Cast {
                        value: clamped as $ty,
                        saturated: clamped != raw,
                    }
                }

                #[inline(always)]
                fn render(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }

                fn parse(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )+
    };
}

impl_integer_element!(
    [i8, ElementKind::Bool],
    [i32, ElementKind::I32],
    [i64, ElementKind::I64]
);

macro_rules! impl_float_element {
    ($([$ty:ty, $kind:expr]),+) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = $kind;

                #[inline(always)]
                fn from_f64(raw: f64) -> Cast<Self> {
                    Cast::exact(raw as $ty)
                }

                #[inline(always)]
                fn from_i64(raw: i64) -> Cast<Self> {
                    Cast::exact(raw as $ty)
                }

                // Debug keeps the trailing `.0` on integral values and
                // is the shortest representation that parses back to
                // the same bits.
                #[inline(always)]
                fn render(&self, out: &mut String) {
                    let _ = write!(out, "{self:?}");
                }

                fn parse(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )+
    };
}

impl_float_element!([f32, ElementKind::F32], [f64, ElementKind::F64]);

impl Element for TimestampMicros {
    const KIND: ElementKind = ElementKind::TimestampMicros;

    fn from_f64(raw: f64) -> Cast<Self> {
        let Cast { value, saturated } = i64::from_f64(raw);
        Cast {
            value: TimestampMicros(value),
            saturated,
        }
    }

    fn from_i64(raw: i64) -> Cast<Self> {
        Cast::exact(TimestampMicros(raw))
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.to_text());
    }

    fn parse(s: &str) -> Option<Self> {
        TimestampMicros::from_text(s)
    }
}

/// Raw generator output, either float or integer valued.
pub trait RawSample: Copy {
    fn cast<T: Element>(self) -> Cast<T>;
}

impl RawSample for f64 {
    #[inline(always)]
    fn cast<T: Element>(self) -> Cast<T> {
        T::from_f64(self)
    }
}

impl RawSample for i64 {
    #[inline(always)]
    fn cast<T: Element>(self) -> Cast<T> {
        T::from_i64(self)
    }
}

#[derive(Debug)]
pub struct Quantized<T> {
    pub values: Vec<T>,
    /// Number of values that were clamped into range
    pub saturated: usize,
}

pub fn quantize<T: Element, R: RawSample>(raw: &[R]) -> Quantized<T> {
    let mut saturated = 0;
    let values = raw
        .iter()
        .map(|sample| {
            let cast = sample.cast::<T>();
            saturated += cast.saturated as usize;
            cast.value
        })
        .collect();

    Quantized { values, saturated }
}

/// Writes the newline-joined text rendering of `values`, without a
/// trailing newline.
pub fn write_text<T: Element, W: io::Write>(
    values: &[T],
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::with_capacity(32);
    for (i, value) in values.iter().enumerate() {
        line.clear();
        if i > 0 {
            line.push('\n');
        }
        value.render(&mut line);
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[inline(always)]
pub fn encode<T: Element>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Inverse of [encode]. Returns `None` if `bytes` is not a whole
/// number of elements.
pub fn decode<T: Element>(bytes: &[u8]) -> Option<Vec<T>> {
    let width = T::KIND.width();
    if bytes.len() % width != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(width)
            .map(bytemuck::pod_read_unaligned)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_kinds_floor() {
        assert_eq!(i64::from_f64(2.9).value, 2);
        assert_eq!(i64::from_f64(-2.1).value, -3);
        assert_eq!(i32::from_f64(-0.5).value, -1);
        assert_eq!(i8::from_f64(0.99).value, 0);
        assert_eq!(i8::from_f64(1.0).value, 1);
    }

    #[test]
    fn narrowing_saturates() {
        let cast = i32::from_f64(1e12);
        assert_eq!(cast, Cast { value: i32::MAX, saturated: true });

        let cast = i32::from_f64(-1e12);
        assert_eq!(cast, Cast { value: i32::MIN, saturated: true });

        let cast = i64::from_f64(f64::NAN);
        assert_eq!(cast, Cast { value: 0, saturated: true });

        let cast = i64::from_f64(9.223372036854775808e18);
        assert_eq!(cast, Cast { value: i64::MAX, saturated: true });

        let cast = i32::from_i64(i64::MIN);
        assert_eq!(cast, Cast { value: i32::MIN, saturated: true });
    }

    #[test]
    fn boundaries_are_exact() {
        assert!(!i32::from_f64(i32::MAX as f64).saturated);
        assert!(!i32::from_f64(i32::MIN as f64).saturated);
        assert!(i32::from_f64(i32::MAX as f64 + 1.0).saturated);
        assert!(!i8::from_i64(127).saturated);
        assert!(i8::from_i64(128).saturated);
    }

    #[test]
    fn quantize_counts_saturation() {
        let raw = [0.5, 3e9, -3e9, 7.0];
        let quantized = quantize::<i32, f64>(&raw);
        assert_eq!(quantized.values, vec![0, i32::MAX, i32::MIN, 7]);
        assert_eq!(quantized.saturated, 2);
    }

    #[test]
    fn float_rendering_parses_back() {
        let values = [1.0_f32, -45.67, 0.1, 1e-7, 3.4028235e38];
        for value in values {
            let mut s = String::new();
            value.render(&mut s);
            assert_eq!(f32::parse(&s), Some(value), "{s}");
        }

        let mut s = String::new();
        1.0_f64.render(&mut s);
        assert_eq!(s, "1.0");
    }

    #[test]
    fn text_is_newline_joined() {
        let mut out = Vec::new();
        write_text::<i64, _>(&[1, -2, 3], &mut out).unwrap();
        assert_eq!(out, b"1\n-2\n3");

        let mut out = Vec::new();
        write_text::<i64, _>(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn decode_inverts_encode() {
        let values = [1.5_f64, -0.25, 1e300];
        assert_eq!(decode::<f64>(encode(&values)), Some(values.to_vec()));
        assert_eq!(decode::<i32>(&[0, 1, 2]), None);
        assert_eq!(decode::<i8>(&[1, 0, 1]), Some(vec![1, 0, 1]));
    }

    #[test]
    fn encoding_widths() {
        assert_eq!(encode::<i8>(&[1, 0]).len(), 2);
        assert_eq!(encode::<i32>(&[1, 0]).len(), 8);
        assert_eq!(encode::<f32>(&[1.0]).len(), 4);
        assert_eq!(encode::<f64>(&[1.0]).len(), 8);
        assert_eq!(
            encode::<TimestampMicros>(&[TimestampMicros(7)]),
            7_i64.to_ne_bytes()
        );
    }
}
