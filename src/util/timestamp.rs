//! Timestamp normalization for the document wire format.
//!
//! Clients submit timestamps in several shapes: HTML `datetime-local` strings
//! without seconds or zone, full ISO-8601 strings with or without an offset,
//! bare dates, and epoch milliseconds. Documents read back from the store may
//! additionally carry the `{seconds, nanos}` object form. This module collapses
//! all of them into a single UTC [`Timestamp`] and renders it back as an
//! ISO-8601 string.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::timestamp::TimestampError;

/// A point in time stored as whole seconds plus a nanosecond remainder.
///
/// Always normalized: `nanos` is in `0..1_000_000_000`, with overflow and
/// underflow folded into `seconds`. Ordering and equality therefore compare
/// the same instant identically regardless of how it was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp from seconds and a signed nanosecond remainder.
    ///
    /// The nanosecond value may be negative or exceed one second; it is folded
    /// into the seconds component so the stored remainder is always in range.
    pub fn new(seconds: i64, nanos: i64) -> Self {
        let carry = nanos.div_euclid(1_000_000_000);
        let nanos = nanos.rem_euclid(1_000_000_000) as u32;
        Self {
            seconds: seconds + carry,
            nanos,
        }
    }

    /// Captures the current time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos(),
        }
    }

    /// Creates a timestamp from epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::new(millis.div_euclid(1000), millis.rem_euclid(1000) * 1_000_000)
    }

    /// Whole seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond remainder, always in `0..1_000_000_000`.
    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Converts to a chrono UTC datetime.
    ///
    /// # Returns
    /// - `Some(DateTime<Utc>)` - The equivalent datetime
    /// - `None` - Seconds value is outside chrono's representable range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }

    /// Renders the timestamp as an ISO-8601 string in UTC.
    ///
    /// Sub-second digits are emitted only when present, so whole-second values
    /// render as `2025-10-07T01:33:00Z`.
    ///
    /// # Returns
    /// - `Some(String)` - The rendered timestamp
    /// - `None` - Seconds value is outside chrono's representable range
    pub fn to_rfc3339(&self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    /// Parses timestamp text into a normalized UTC timestamp.
    ///
    /// Accepted shapes, tried in order:
    ///
    /// 1. ISO-8601 with an explicit offset (`2025-10-07T01:33:00Z`)
    /// 2. ISO-8601 without an offset, interpreted in `local_zone`
    ///    (`2025-10-07T01:33:00`, optionally with fractional seconds)
    /// 3. Bare date, interpreted as midnight UTC (`2025-10-07`)
    /// 4. Epoch milliseconds (`1759800780000`)
    ///
    /// Minutes-precision input from `datetime-local` pickers (`2025-10-07T01:33`)
    /// has `:00` appended before the first two attempts, so it parses the same
    /// as its seconds-precision form.
    ///
    /// # Arguments
    /// - `text` - The timestamp text to parse
    /// - `local_zone` - Zone applied to offset-free datetimes
    ///
    /// # Returns
    /// - `Ok(Some(Timestamp))` - Parsed and normalized to UTC
    /// - `Ok(None)` - Input was empty or whitespace
    /// - `Err(TimestampError::Unparseable)` - No accepted shape matched
    pub fn parse<Tz: TimeZone>(text: &str, local_zone: &Tz) -> Result<Option<Self>, TimestampError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let candidate: Cow<'_, str> = if is_minutes_precision(trimmed) {
            Cow::Owned(format!("{trimmed}:00"))
        } else {
            Cow::Borrowed(trimmed)
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(&candidate) {
            let utc = dt.with_timezone(&Utc);
            return Ok(Some(Self::new(
                utc.timestamp(),
                i64::from(utc.timestamp_subsec_nanos()),
            )));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%dT%H:%M:%S%.f") {
            if let Some(local) = local_zone.from_local_datetime(&naive).single() {
                let utc = local.with_timezone(&Utc);
                return Ok(Some(Self::new(
                    utc.timestamp(),
                    i64::from(utc.timestamp_subsec_nanos()),
                )));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                let utc = Utc.from_utc_datetime(&midnight);
                return Ok(Some(Self::new(utc.timestamp(), 0)));
            }
        }

        if let Ok(millis) = trimmed.parse::<i64>() {
            return Ok(Some(Self::from_epoch_millis(millis)));
        }

        Err(TimestampError::Unparseable {
            text: text.to_string(),
        })
    }
}

/// Checks for `YYYY-MM-DDTHH:MM` shape, the format produced by HTML
/// `datetime-local` inputs.
fn is_minutes_precision(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 16 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Fixed offset for South Africa Standard Time (UTC+2, no daylight saving).
///
/// Used when interpreting offset-free meeting times submitted by parents.
pub fn south_africa_offset() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).expect("UTC+2 is a valid fixed offset")
}

/// Serde adapter for `Option<Timestamp>` fields on domain records.
///
/// Serializes as an ISO-8601 string or `null`. Accepts strings (parsed with
/// UTC as the local zone), epoch milliseconds, `null`, and the legacy
/// `{seconds, nanos}` object form on deserialization. Apply with
/// `#[serde(default, with = "crate::util::timestamp::serde_opt")]`.
pub mod serde_opt {
    use std::fmt;

    use chrono::Utc;
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => match ts.to_rfc3339() {
                Some(text) => serializer.serialize_str(&text),
                None => Err(serde::ser::Error::custom(format!(
                    "timestamp out of range: {} seconds",
                    ts.seconds()
                ))),
            },
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = Option<Timestamp>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter
                .write_str("an ISO-8601 string, epoch milliseconds, null, or a {seconds, nanos} object")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Timestamp::parse(v, &Utc).map_err(de::Error::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(Timestamp::from_epoch_millis(v)))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let millis = i64::try_from(v)
                .map_err(|_| de::Error::custom(format!("epoch milliseconds out of range: {v}")))?;
            Ok(Some(Timestamp::from_epoch_millis(millis)))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Err(de::Error::custom(format!(
                "Invalid timestamp value: {v}; fractional epoch values are not supported"
            )))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut seconds: Option<i64> = None;
            let mut nanos: i64 = 0;

            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "seconds" => seconds = Some(map.next_value::<i64>()?),
                    "nanos" => nanos = map.next_value::<i64>()?,
                    _ => {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
            }

            match seconds {
                Some(seconds) => Ok(Some(Timestamp::new(seconds, nanos))),
                None => Err(de::Error::custom(
                    "Invalid timestamp object format: missing seconds field",
                )),
            }
        }
    }
}
