//! Key/value view of a persisted row with tolerant accessors.
//!
//! Every mapper reads from a [`PlainRecord`] produced once by
//! [`to_plain_record`], so the DTO code does not care whether the input was a
//! `FromRow` struct, a joined projection or a hand-built JSON object. Keys are
//! looked up in their snake_case form first and camelCase second.
//!
//! None of the accessors fail: malformed values degrade to `None` or to the
//! accessor's documented default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A normalized, read-only record.
#[derive(Debug, Clone, Default)]
pub struct PlainRecord(Map<String, Value>);

/// Normalize any serializable row into a [`PlainRecord`].
///
/// Values that do not serialize to a JSON object yield an empty record.
pub fn to_plain_record<T: Serialize + ?Sized>(row: &T) -> PlainRecord {
    match serde_json::to_value(row) {
        Ok(value) => PlainRecord::from_value(value),
        Err(_) => PlainRecord::default(),
    }
}

impl PlainRecord {
    /// Wrap a JSON value. Anything but an object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => PlainRecord(map),
            _ => PlainRecord::default(),
        }
    }

    /// Raw non-null value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let value = match self.0.get(key) {
            Some(v) => Some(v),
            None => self.0.get(&snake_to_camel(key)),
        };
        value.filter(|v| !v.is_null())
    }

    /// Identity field rendered as a string (`42` -> `"42"`); empty when absent.
    pub fn id(&self, key: &str) -> String {
        self.optional_id(key).unwrap_or_default()
    }

    /// Identity field rendered as a string, `None` when absent.
    pub fn optional_id(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// String field; empty when absent or not a string.
    pub fn string(&self, key: &str) -> String {
        self.optional_string(key).unwrap_or_default()
    }

    /// String field with an explicit fallback.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.optional_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// String field, `None` when null or not a string.
    pub fn optional_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// String field, `None` when null, blank or not a string.
    pub fn non_empty_string(&self, key: &str) -> Option<String> {
        self.optional_string(key).filter(|s| !s.trim().is_empty())
    }

    /// Date/time field as ISO-8601 UTC with millisecond precision.
    ///
    /// Accepts RFC 3339 strings, naive date-times (taken as UTC), plain dates
    /// (midnight UTC) and epoch milliseconds. Anything else is `None`.
    pub fn iso_date(&self, key: &str) -> Option<String> {
        let parsed = match self.get(key)? {
            Value::String(s) => parse_datetime(s),
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        }?;
        Some(parsed.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Money field: numbers and numeric strings, `0.0` otherwise.
    pub fn money(&self, key: &str) -> f64 {
        self.optional_number(key).unwrap_or(0.0)
    }

    /// Counter field: rounded to an integer, `0` otherwise.
    pub fn count(&self, key: &str) -> i64 {
        self.optional_number(key)
            .map(|n| n.round() as i64)
            .unwrap_or(0)
    }

    /// Optional metric: a finite number or `None`.
    pub fn optional_number(&self, key: &str) -> Option<f64> {
        coerce_number(self.get(key)?)
    }

    /// Optional integer metric: a finite number rounded, or `None`.
    pub fn optional_integer(&self, key: &str) -> Option<i64> {
        self.optional_number(key).map(|n| n.round() as i64)
    }

    /// Boolean field with a fallback for absent or non-boolean values.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// JSON array field, `[]` when null or of another shape.
    pub fn array(&self, key: &str) -> Vec<Value> {
        match self.get(key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// JSON object field, `{}` when null or of another shape.
    pub fn object(&self, key: &str) -> Map<String, Value> {
        match self.get(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
