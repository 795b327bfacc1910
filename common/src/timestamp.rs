use bytemuck::{Pod, Zeroable};
use chrono::{DateTime, NaiveDateTime};

/// Text layout of a timestamp fixture line, e.g.
/// `2022-01-01T00:00:00:000000Z`. Note the colon (not a dot) in front
/// of the fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S:%6fZ";
const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Microseconds since the unix epoch. Stored in binary exactly like an
/// `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Pod, Zeroable)]
#[repr(transparent)]
pub struct TimestampMicros(pub i64);

impl TimestampMicros {
    #[inline(always)]
    pub fn micros(&self) -> i64 {
        self.0
    }

    /// Values outside of chrono's representable range are rendered as
    /// the raw integer, which [TimestampMicros::from_text] also accepts.
    pub fn to_text(&self) -> String {
        match DateTime::from_timestamp_micros(self.0) {
            Some(datetime) => {
                datetime.format(TIMESTAMP_FORMAT).to_string()
            }
            None => self.0.to_string(),
        }
    }

    pub fn from_text(s: &str) -> Option<TimestampMicros> {
        if let Ok(raw) = s.parse::<i64>() {
            return Some(TimestampMicros(raw));
        }

        let (seconds, fraction) = s.rsplit_once(':')?;
        let fraction = fraction.strip_suffix('Z')?;
        if fraction.len() != 6
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let fraction: i64 = fraction.parse().ok()?;

        let datetime =
            NaiveDateTime::parse_from_str(seconds, SECONDS_FORMAT)
                .ok()?;
        datetime
            .and_utc()
            .timestamp()
            .checked_mul(1_000_000)?
            .checked_add(fraction)
            .map(TimestampMicros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_reference_epoch() {
        let ts = TimestampMicros(1_640_995_200 * 1_000_000);
        assert_eq!(ts.to_text(), "2022-01-01T00:00:00:000000Z");
    }

    #[test]
    fn renders_zero_padded_fraction() {
        let ts = TimestampMicros(1_640_995_200 * 1_000_000 + 42);
        assert_eq!(ts.to_text(), "2022-01-01T00:00:00:000042Z");

        let ts = TimestampMicros(1_640_995_201 * 1_000_000 + 123_000);
        assert_eq!(ts.to_text(), "2022-01-01T00:00:01:123000Z");
    }

    #[test]
    fn parses_what_it_renders() {
        for micros in [
            0,
            1,
            -1,
            1_640_995_200_123_456,
            1_640_995_200_000_000 - 999_999,
        ] {
            let ts = TimestampMicros(micros);
            assert_eq!(
                TimestampMicros::from_text(&ts.to_text()),
                Some(ts)
            );
        }
    }

    #[test]
    fn pre_epoch_fraction_counts_forward() {
        let ts = TimestampMicros(-1);
        assert_eq!(ts.to_text(), "1969-12-31T23:59:59:999999Z");
    }

    #[test]
    fn out_of_range_falls_back_to_integer() {
        let ts = TimestampMicros(i64::MAX);
        let rendered = ts.to_text();
        assert_eq!(TimestampMicros::from_text(&rendered), Some(ts));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            TimestampMicros::from_text("2022-01-01T00:00:00.000000Z"),
            None
        );
        assert_eq!(
            TimestampMicros::from_text("2022-01-01T00:00:00:00000Z"),
            None
        );
        assert_eq!(
            TimestampMicros::from_text("2022-01-01T00:00:00:000000"),
            None
        );
        assert_eq!(TimestampMicros::from_text(""), None);
    }
}
