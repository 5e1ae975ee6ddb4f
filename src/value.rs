//! Scalar formatting and coercion rules shared by the dispatcher,
//! the condition evaluator and the verifier.

use serde_json::Value;

/// Renders a JSON value as the text a form control would display.
///
/// Strings render without quotes. Whole-valued floats print without a
/// fractional part, so a record value of `5700.0` enters and verifies
/// as `"5700"`.
pub fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    return (f as i64).to_string();
                }
            }
            n.to_string()
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Numeric coercion used by the comparison operators: JSON numbers pass
/// through, strings are accepted when they parse as a number.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
