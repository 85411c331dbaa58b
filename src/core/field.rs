//! Field value types and coercion helpers

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    String(String),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text used by the search predicate. Null is the empty string.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => String::new(),
        }
    }

    /// Label used to look up named filter predicates
    pub fn label(&self) -> String {
        self.search_text()
    }

    /// Seconds since the epoch, parsing strings when needed
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            FieldValue::DateTime(dt) => Some(dt.timestamp()),
            FieldValue::Date(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()),
            FieldValue::String(s) => parse_timestamp(s),
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric amount, parsing currency strings when needed
    pub fn amount(&self) -> Option<f64> {
        match self {
            FieldValue::String(s) => parse_currency(s),
            other => other.as_f64(),
        }
    }

    /// Relational comparison between two values of compatible types.
    ///
    /// Integers and floats compare numerically. Dates and date-times compare by
    /// timestamp. Anything else (including NaN and nulls) is incomparable.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => Some(a.cmp(b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (
                FieldValue::Integer(_) | FieldValue::Float(_),
                FieldValue::Integer(_) | FieldValue::Float(_),
            ) => self.as_f64()?.partial_cmp(&other.as_f64()?),
            (
                FieldValue::Date(_) | FieldValue::DateTime(_),
                FieldValue::Date(_) | FieldValue::DateTime(_),
            ) => Some(self.timestamp()?.cmp(&other.timestamp()?)),
            _ => None,
        }
    }

    /// Equality used by filter criteria
    pub fn matches(&self, other: &FieldValue) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
            },
            serde_json::Value::String(s) => FieldValue::String(s.clone()),
            _ => FieldValue::Null,
        }
    }
}

/// Conversion from a record's typed field into a [`FieldValue`]
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String((*self).to_string())
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

macro_rules! integer_field_value {
    ($($t:ty),*) => {
        $(
            impl ToFieldValue for $t {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Integer(*self as i64)
                }
            }
        )*
    };
}

integer_field_value!(i32, i64, u32, u64, usize);

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref()
            .map(ToFieldValue::to_field_value)
            .unwrap_or(FieldValue::Null)
    }
}

/// Parse a currency string such as `"$1,234.50"` into a number.
///
/// Returns `None` for anything that is not a plain amount.
pub fn parse_currency(raw: &str) -> Option<f64> {
    static CURRENCY_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CURRENCY_REGEX.get_or_init(|| {
        Regex::new(r"^(-)?\$?\s*(\d{1,3}(?:,\d{3})+|\d+)(\.\d+)?$").expect("valid currency regex")
    });

    let caps = regex.captures(raw.trim())?;
    let whole = caps.get(2)?.as_str().replace(',', "");
    let fraction = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    let value: f64 = format!("{}{}", whole, fraction).parse().ok()?;

    Some(if caps.get(1).is_some() { -value } else { value })
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date into epoch seconds
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}
