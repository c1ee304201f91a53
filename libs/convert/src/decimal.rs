use lens_api::Value;

use crate::error::ConvertError;

/// Big-endian bytes → unsigned magnitude.
///
/// The sign bit is not interpreted: a negative two's-complement decimal
/// decodes as a large positive number. The accumulator is 128 bits wide, so
/// anything beyond the last sixteen bytes shifts the leading bytes out.
pub fn parse_decimal(bytes: &[u8]) -> u128 {
    bytes
        .iter()
        .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte))
}

/// Apply `10^exponent` to every element of a DECIMAL column.
///
/// Each element stays in its own numeric domain: `Number` is scaled in
/// `f64`, `BigInt` in `i128`, and `Bytes` are decoded with [`parse_decimal`]
/// and scaled as a `Number`. Nulls pass through.
pub(crate) fn scale_column(values: Vec<Value>, exponent: i32) -> Result<Vec<Value>, ConvertError> {
    let factor = 10f64.powi(exponent);
    values
        .into_iter()
        .map(|value| match value {
            Value::Number(n) if exponent != 0 => Ok(Value::Number(n * factor)),
            Value::BigInt(i) if exponent != 0 => scale_bigint(i, exponent).map(Value::BigInt),
            Value::Bytes(bytes) => Ok(Value::Number(parse_decimal(&bytes) as f64 * factor)),
            other => Ok(other),
        })
        .collect()
}

fn scale_bigint(value: i128, exponent: i32) -> Result<i128, ConvertError> {
    let power = u32::try_from(exponent)
        .map_err(|_| ConvertError::FractionalBigIntFactor { exponent })?;
    10i128
        .checked_pow(power)
        .and_then(|factor| value.checked_mul(factor))
        .ok_or(ConvertError::DecimalOverflow { value, exponent })
}
