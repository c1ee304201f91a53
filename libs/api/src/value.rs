use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};

// ════════════════════════════════════════════════════════════════
//  Timestamp
// ════════════════════════════════════════════════════════════════

/// Instant as milliseconds since the Unix epoch.
///
/// Not every `i64` maps to a calendar date: values past the calendar range
/// are kept as-is and render as invalid rather than failing at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn millis(self) -> i64 {
        self.0
    }

    /// `None` when the instant is outside the representable calendar range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix,
    /// e.g. `2023-05-27T00:00:00.000Z`.
    pub fn to_iso_string(self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_iso_string() {
            Some(s) => f.write_str(&s),
            None => write!(f, "invalid timestamp ({} ms)", self.0),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  Value
// ════════════════════════════════════════════════════════════════

/// Row-level value, before or after conversion.
///
/// Numeric domains are kept apart:
/// - `Number`: 64-bit float, as produced for INT32/FLOAT/DOUBLE columns
/// - `BigInt`: exact integer, wide enough for INT64 and INT96
/// - `Bytes`: raw BYTE_ARRAY / FIXED_LEN_BYTE_ARRAY payload
///
/// `Absent` marks a position with no value at all, distinct from an explicit `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Absent,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(i128),
    Bytes(Bytes),
    String(String),
    Timestamp(Timestamp),
    /// Parsed JSON document from a JSON-annotated column.
    Json(serde_json::Value),
    Array(Vec<Value>),
    /// Keyed structure. Insertion order is preserved.
    Object(Vec<(String, Value)>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Value::BigInt(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(v))
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ════════════════════════════════════════════════════════════════
//  DecodedArray
// ════════════════════════════════════════════════════════════════

/// Dense primitive buffer as emitted by the page decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum PackedArray {
    Uint8(Vec<u8>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl PackedArray {
    pub fn len(&self) -> usize {
        match self {
            PackedArray::Uint8(v) => v.len(),
            PackedArray::Int32(v) => v.len(),
            PackedArray::Int64(v) => v.len(),
            PackedArray::Float(v) => v.len(),
            PackedArray::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One column chunk's worth of values, positionally aligned with rows.
///
/// Only `Values` is subject to logical-type conversion; `Packed` buffers are
/// handed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedArray {
    Values(Vec<Value>),
    Packed(PackedArray),
}

impl DecodedArray {
    pub fn len(&self) -> usize {
        match self {
            DecodedArray::Values(v) => v.len(),
            DecodedArray::Packed(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_values(&self) -> Option<&[Value]> {
        match self {
            DecodedArray::Values(v) => Some(v),
            DecodedArray::Packed(_) => None,
        }
    }

    pub fn into_values(self) -> Option<Vec<Value>> {
        match self {
            DecodedArray::Values(v) => Some(v),
            DecodedArray::Packed(_) => None,
        }
    }
}

impl From<Vec<Value>> for DecodedArray {
    fn from(v: Vec<Value>) -> Self {
        DecodedArray::Values(v)
    }
}

impl From<PackedArray> for DecodedArray {
    fn from(p: PackedArray) -> Self {
        DecodedArray::Packed(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_iso_string() {
        assert_eq!(
            Timestamp::from_millis(0).to_iso_string().as_deref(),
            Some("1970-01-01T00:00:00.000Z")
        );
        assert_eq!(
            Timestamp::from_millis(1_685_145_600_123).to_string(),
            "2023-05-27T00:00:00.123Z"
        );
    }

    #[test]
    fn timestamp_out_of_range_is_invalid() {
        let ts = Timestamp::from_millis(i64::MAX);
        assert_eq!(ts.to_datetime(), None);
        assert!(ts.to_string().starts_with("invalid timestamp"));
    }

    #[test]
    fn decoded_array_len() {
        let values = DecodedArray::from(vec![Value::Null, Value::Number(1.0)]);
        assert_eq!(values.len(), 2);
        assert!(values.as_values().is_some());

        let packed = DecodedArray::from(PackedArray::Int32(vec![1, 2, 3]));
        assert_eq!(packed.len(), 3);
        assert!(packed.as_values().is_none());
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::String("a".into()));
    }
}
