//! Normalization of loosely-typed records.
//!
//! Actor, move and consumable records arrive as JSON written by the host,
//! where any field may be missing, a numeric string, or garbage. Each record
//! type implements [`PrepareData`], a pure derive-fields step that turns the
//! raw record into a prepared value whose fields are always finite and in
//! range. The calculator only ever sees prepared values.

use crate::config::RulesConfig;
use serde_json::Value;

/// A record that can derive its sanitized, calculator-ready form.
pub trait PrepareData {
    type Prepared;

    fn prepare(&self, config: &RulesConfig) -> Self::Prepared;
}

/// Coerce a JSON value to a finite number. Numbers and numeric strings are
/// accepted; anything else (including empty strings) yields `default`.
pub fn num(value: &Value, default: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(default)
}

/// Coerce to a number and truncate toward zero.
pub fn int(value: &Value, default: i32) -> i32 {
    num(value, default as f64).trunc() as i32
}

/// Coerce to text. Null becomes the empty string.
pub fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness: `true`, non-zero numbers and non-empty strings.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}

/// `min(max(value, lo), hi)`. Unlike `f64::clamp` this never panics when
/// `lo > hi`; the upper bound wins.
pub fn clamp_num(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Round half away from zero, then clamp at zero.
pub fn non_negative_round(value: f64) -> f64 {
    if value.is_finite() {
        value.round().max(0.0)
    } else {
        0.0
    }
}
