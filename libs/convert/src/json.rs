use lens_api::Value;
use serde_json::Value as JsonValue;

/// Largest integer a JSON consumer using doubles can hold exactly.
const MAX_SAFE_INTEGER: i128 = (1 << 53) - 1;

// ═══════════════════════════════════════════════════════════════
//  Value → JSON
// ═══════════════════════════════════════════════════════════════

/// Rewrite a value tree into something `serde_json` can emit.
///
/// - absent / null → `null`
/// - big integer → number, exact within ±(2^53 − 1), rounded to `f64` beyond
/// - number → integral values as JSON integers, NaN and ±∞ as `null`
/// - bytes → array of byte values
/// - timestamp → ISO-8601 string, `null` if outside the calendar range
/// - array → element-wise, same length and order
/// - object → absent-valued keys dropped, null-valued keys kept
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Absent | Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::BigInt(i) => bigint_to_json(*i),
        Value::Bytes(bytes) => JsonValue::Array(bytes.iter().map(|&b| JsonValue::from(b)).collect()),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Timestamp(ts) => ts.to_iso_string().map_or(JsonValue::Null, JsonValue::String),
        Value::Json(json) => json.clone(),
        Value::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Object(entries) => {
            let map: serde_json::Map<String, JsonValue> = entries
                .iter()
                .filter(|(_, v)| !matches!(v, Value::Absent))
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect();
            JsonValue::Object(map)
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER as f64 {
        return JsonValue::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

fn bigint_to_json(i: i128) -> JsonValue {
    if i.unsigned_abs() <= MAX_SAFE_INTEGER as u128 {
        return JsonValue::from(i as i64);
    }
    serde_json::Number::from_f64(i as f64).map_or(JsonValue::Null, JsonValue::Number)
}
