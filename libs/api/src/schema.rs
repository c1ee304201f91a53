use serde::{Deserialize, Serialize};

/// Physical storage type of a Parquet column, as written on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    /// Legacy 96-bit timestamp: Julian day in the high bits, nanos-of-day in the low 64.
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

/// Logical annotation layered over a physical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvertedType {
    #[serde(rename = "UTF8")]
    Utf8,
    #[serde(rename = "MAP")]
    Map,
    #[serde(rename = "MAP_KEY_VALUE")]
    MapKeyValue,
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "ENUM")]
    Enum,
    #[serde(rename = "DECIMAL")]
    Decimal,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "TIME_MILLIS")]
    TimeMillis,
    #[serde(rename = "TIME_MICROS")]
    TimeMicros,
    #[serde(rename = "TIMESTAMP_MILLIS")]
    TimestampMillis,
    #[serde(rename = "TIMESTAMP_MICROS")]
    TimestampMicros,
    #[serde(rename = "UINT_8")]
    Uint8,
    #[serde(rename = "UINT_16")]
    Uint16,
    #[serde(rename = "UINT_32")]
    Uint32,
    #[serde(rename = "UINT_64")]
    Uint64,
    #[serde(rename = "INT_8")]
    Int8,
    #[serde(rename = "INT_16")]
    Int16,
    #[serde(rename = "INT_32")]
    Int32,
    #[serde(rename = "INT_64")]
    Int64,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "BSON")]
    Bson,
    #[serde(rename = "INTERVAL")]
    Interval,
}

impl std::fmt::Display for ConvertedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConvertedType::Utf8 => "utf8",
            ConvertedType::Map => "map",
            ConvertedType::MapKeyValue => "map_key_value",
            ConvertedType::List => "list",
            ConvertedType::Enum => "enum",
            ConvertedType::Decimal => "decimal",
            ConvertedType::Date => "date",
            ConvertedType::TimeMillis => "time_millis",
            ConvertedType::TimeMicros => "time_micros",
            ConvertedType::TimestampMillis => "timestamp_millis",
            ConvertedType::TimestampMicros => "timestamp_micros",
            ConvertedType::Uint8 => "uint_8",
            ConvertedType::Uint16 => "uint_16",
            ConvertedType::Uint32 => "uint_32",
            ConvertedType::Uint64 => "uint_64",
            ConvertedType::Int8 => "int_8",
            ConvertedType::Int16 => "int_16",
            ConvertedType::Int32 => "int_32",
            ConvertedType::Int64 => "int_64",
            ConvertedType::Json => "json",
            ConvertedType::Bson => "bson",
            ConvertedType::Interval => "interval",
        };
        f.write_str(name)
    }
}

/// Column descriptor produced by the metadata layer.
///
/// Only the fields that drive value conversion are kept. Absent `scale` and
/// `precision` read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaElement {
    #[serde(default)]
    pub name: String,
    /// Absent on group nodes.
    #[serde(default, rename = "type")]
    pub physical_type: Option<PhysicalType>,
    #[serde(default)]
    pub converted_type: Option<ConvertedType>,
    #[serde(default)]
    pub scale: Option<i32>,
    #[serde(default)]
    pub precision: Option<i32>,
}

impl SchemaElement {
    pub fn with_converted_type(converted_type: ConvertedType) -> Self {
        Self { converted_type: Some(converted_type), ..Self::default() }
    }

    pub fn with_physical_type(physical_type: PhysicalType) -> Self {
        Self { physical_type: Some(physical_type), ..Self::default() }
    }

    pub fn decimal(scale: i32, precision: i32) -> Self {
        Self {
            converted_type: Some(ConvertedType::Decimal),
            scale: Some(scale),
            precision: Some(precision),
            ..Self::default()
        }
    }

    pub fn scale(&self) -> i32 {
        self.scale.unwrap_or(0)
    }

    pub fn precision(&self) -> i32 {
        self.precision.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_metadata_json() {
        let el: SchemaElement = serde_json::from_str(
            r#"{"name":"price","type":"FIXED_LEN_BYTE_ARRAY","converted_type":"DECIMAL","scale":2,"precision":9}"#,
        )
        .unwrap();
        assert_eq!(el.physical_type, Some(PhysicalType::FixedLenByteArray));
        assert_eq!(el.converted_type, Some(ConvertedType::Decimal));
        assert_eq!(el.scale(), 2);
        assert_eq!(el.precision(), 9);
    }

    #[test]
    fn missing_fields_default() {
        let el: SchemaElement = serde_json::from_str(r#"{"type":"INT96"}"#).unwrap();
        assert_eq!(el.physical_type, Some(PhysicalType::Int96));
        assert_eq!(el.converted_type, None);
        assert_eq!(el.scale(), 0);
        assert_eq!(el.precision(), 0);
    }

    #[test]
    fn converted_type_wire_names() {
        let t: ConvertedType = serde_json::from_str(r#""TIME_MILLIS""#).unwrap();
        assert_eq!(t, ConvertedType::TimeMillis);
        let t: ConvertedType = serde_json::from_str(r#""UTF8""#).unwrap();
        assert_eq!(t, ConvertedType::Utf8);
        assert_eq!(ConvertedType::Bson.to_string(), "bson");
    }
}
