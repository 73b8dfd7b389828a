//! Small helpers for lenient JSON decoding and cell formatting.
//!
//! The offers endpoint is loosely typed; these deserializers accept the value
//! shapes seen in the wild and fall back to `None` instead of rejecting the
//! whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What: Deserialize an optional display string, coercing scalars to text.
///
/// Inputs:
/// - `d`: Serde deserializer positioned at the field value.
///
/// Output:
/// - `Some(String)` for JSON strings, numbers and booleans; `None` for `null`,
///   arrays and objects.
///
/// # Errors
/// - Propagates the deserializer error when the input is not valid JSON.
pub fn de_lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// What: Deserialize an optional price, accepting numbers and numeric strings.
///
/// Inputs:
/// - `d`: Serde deserializer positioned at the field value.
///
/// Output:
/// - `Some(f64)` for finite numbers or strings that parse as one; `None` otherwise.
///
/// # Errors
/// - Propagates the deserializer error when the input is not valid JSON.
pub fn de_lenient_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|f| f.is_finite()))
}

/// What: Render a fare for the price column.
///
/// Inputs:
/// - `fare`: Optional price.
///
/// Output:
/// - Whole amounts without a fractional part ("4312"), others in shortest form
///   ("1250.5"); empty string when the fare is missing.
#[must_use]
pub fn format_fare(fare: Option<f64>) -> String {
    fare.map(|f| f.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Whole fares render without a trailing `.0`
    fn format_fare_shapes() {
        assert_eq!(format_fare(Some(500.0)), "500");
        assert_eq!(format_fare(Some(1250.5)), "1250.5");
        assert_eq!(format_fare(None), "");
    }
}
