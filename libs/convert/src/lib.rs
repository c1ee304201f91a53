pub mod decimal;
pub mod error;
pub mod int96;
pub mod json;
mod timestamp;

use lens_api::{ConvertedType, DecodedArray, PhysicalType, SchemaElement, Value};

pub use decimal::parse_decimal;
pub use error::ConvertError;
pub use int96::{int96_from_le_bytes, int96_from_parts, parse_int96_timestamp};
pub use json::to_json;
pub use timestamp::MILLIS_PER_DAY;

// ═══════════════════════════════════════════════════════════════
//  Conversion plan
// ═══════════════════════════════════════════════════════════════

/// What to do with a column, resolved once from its schema element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Utf8,
    Decimal { exponent: i32 },
    Date,
    Int96Timestamp,
    TimeMillis,
    Json,
    Unsupported(ConvertedType),
    Passthrough,
}

impl Conversion {
    /// Converted type wins; physical type only matters when it is absent.
    fn plan(schema: &SchemaElement) -> Self {
        let Some(converted_type) = schema.converted_type else {
            return match schema.physical_type {
                Some(PhysicalType::Int96) => Conversion::Int96Timestamp,
                Some(
                    PhysicalType::Boolean
                    | PhysicalType::Int32
                    | PhysicalType::Int64
                    | PhysicalType::Float
                    | PhysicalType::Double
                    | PhysicalType::ByteArray
                    | PhysicalType::FixedLenByteArray,
                )
                | None => Conversion::Passthrough,
            };
        };

        match converted_type {
            ConvertedType::Utf8 => Conversion::Utf8,
            ConvertedType::Decimal => Conversion::Decimal {
                // scale and precision come straight from file metadata
                exponent: schema.scale().saturating_sub(schema.precision()),
            },
            ConvertedType::Date => Conversion::Date,
            ConvertedType::TimeMillis => Conversion::TimeMillis,
            ConvertedType::Json => Conversion::Json,
            ConvertedType::Bson | ConvertedType::Interval => Conversion::Unsupported(converted_type),
            ConvertedType::Map
            | ConvertedType::MapKeyValue
            | ConvertedType::List
            | ConvertedType::Enum
            | ConvertedType::TimeMicros
            | ConvertedType::TimestampMillis
            | ConvertedType::TimestampMicros
            | ConvertedType::Uint8
            | ConvertedType::Uint16
            | ConvertedType::Uint32
            | ConvertedType::Uint64
            | ConvertedType::Int8
            | ConvertedType::Int16
            | ConvertedType::Int32
            | ConvertedType::Int64 => Conversion::Passthrough,
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  convert
// ═══════════════════════════════════════════════════════════════

/// Convert a column of primitive values to rich values using its schema element.
///
/// Output has exactly one value per input value, in the same order. `Packed`
/// buffers are returned as-is. BSON and INTERVAL columns are rejected before
/// any value is looked at; a malformed JSON document fails the whole call.
pub fn convert(data: DecodedArray, schema: &SchemaElement) -> Result<DecodedArray, ConvertError> {
    let values = match data {
        DecodedArray::Values(values) => values,
        packed @ DecodedArray::Packed(_) => return Ok(packed),
    };

    let plan = Conversion::plan(schema);
    tracing::trace!(column = %schema.name, ?plan, rows = values.len(), "convert column");

    let converted = match plan {
        Conversion::Unsupported(converted_type) => {
            return Err(ConvertError::NotSupported(converted_type));
        }
        Conversion::Passthrough => values,
        Conversion::Utf8 => values.into_iter().map(decode_utf8).collect(),
        Conversion::Decimal { exponent } => decimal::scale_column(values, exponent)?,
        Conversion::Date => values.into_iter().map(days_to_timestamp).collect(),
        Conversion::Int96Timestamp => values.into_iter().map(int96_to_timestamp).collect(),
        Conversion::TimeMillis => values.into_iter().map(millis_to_timestamp).collect(),
        Conversion::Json => values
            .into_iter()
            .enumerate()
            .map(|(row, value)| parse_json(row, value))
            .collect::<Result<_, _>>()?,
    };

    Ok(DecodedArray::Values(converted))
}

fn decode_utf8(value: Value) -> Value {
    match value {
        Value::Bytes(bytes) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        other => other,
    }
}

fn days_to_timestamp(value: Value) -> Value {
    match value {
        Value::Number(days) => Value::Timestamp(timestamp::from_float_days(days)),
        Value::BigInt(days) => Value::Timestamp(timestamp::from_wide_days(days)),
        other => other,
    }
}

fn int96_to_timestamp(value: Value) -> Value {
    match value {
        Value::BigInt(packed) => Value::Timestamp(parse_int96_timestamp(packed)),
        other => other,
    }
}

// Raw epoch millis, not millis since midnight.
fn millis_to_timestamp(value: Value) -> Value {
    match value {
        Value::Number(millis) => Value::Timestamp(timestamp::from_float_millis(millis)),
        Value::BigInt(millis) => Value::Timestamp(timestamp::from_wide_millis(millis)),
        other => other,
    }
}

fn parse_json(row: usize, value: Value) -> Result<Value, ConvertError> {
    let parsed = match &value {
        Value::String(text) => serde_json::from_str(text),
        Value::Bytes(bytes) => serde_json::from_slice(bytes),
        _ => return Ok(value),
    };
    parsed
        .map(Value::Json)
        .map_err(|source| ConvertError::Parse { row, source })
}
