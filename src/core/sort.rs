//! Sort order and comparator

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// How a field's values are coerced before comparing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Compare values as they are
    #[default]
    Natural,
    /// Compare parsed timestamps
    Date,
    /// Compare amounts extracted from currency values
    Currency,
}

/// Field and direction controlling result order
///
/// Serialized as `field:direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Next sort after the user clicks a column header.
    ///
    /// Clicking the current field flips its direction. Any other field starts
    /// descending.
    pub fn toggle(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => {
                SortSpec::new(field, spec.direction.reversed())
            }
            _ => SortSpec::desc(field),
        }
    }

    /// Parse `field`, `field:asc` or `field:desc`
    ///
    /// A bare field sorts ascending.
    pub fn parse(expr: &str) -> Result<SortSpec, QueryError> {
        let expr = expr.trim();
        let (field, direction) = match expr.split_once(':') {
            Some((field, "asc")) => (field, SortDirection::Asc),
            Some((field, "desc")) => (field, SortDirection::Desc),
            Some(_) => return Err(QueryError::InvalidSort(expr.to_string())),
            None => (expr, SortDirection::Asc),
        };

        if field.is_empty() {
            return Err(QueryError::InvalidSort(expr.to_string()));
        }

        Ok(SortSpec::new(field, direction))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

impl TryFrom<String> for SortSpec {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SortSpec::parse(&value)
    }
}

impl From<SortSpec> for String {
    fn from(spec: SortSpec) -> Self {
        spec.to_string()
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortSpec::parse(s)
    }
}

/// Coerced sort key, or `None` when the value is missing or unusable
fn coerce(value: Option<FieldValue>, kind: SortKind) -> Option<FieldValue> {
    let value = match (value?, kind) {
        (FieldValue::Null, _) => return None,
        (value, SortKind::Natural) => value,
        (value, SortKind::Date) => FieldValue::Integer(value.timestamp()?),
        (value, SortKind::Currency) => FieldValue::Float(value.amount()?),
    };
    match value {
        FieldValue::Float(f) if f.is_nan() => None,
        value => Some(value),
    }
}

/// Values of different types never compare directly; they group by type.
fn type_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Boolean(_) => 0,
        FieldValue::Integer(_) | FieldValue::Float(_) => 1,
        FieldValue::Date(_) | FieldValue::DateTime(_) => 2,
        FieldValue::String(_) => 3,
        FieldValue::Null => 4,
    }
}

/// Compare two records on one field.
///
/// Usable values order by the direction. Values that are missing or fail to
/// coerce sort after every usable value in both directions and tie with each
/// other, so the stable sort keeps them in source order.
pub fn compare<T: Record>(
    a: &T,
    b: &T,
    field: &str,
    direction: SortDirection,
    kind: SortKind,
) -> Ordering {
    let left = coerce(a.field_value(field), kind);
    let right = coerce(b.field_value(field), kind);

    match (left, right) {
        (Some(l), Some(r)) => {
            let ascending = type_rank(&l)
                .cmp(&type_rank(&r))
                .then_with(|| l.compare(&r).unwrap_or(Ordering::Equal));
            match direction {
                SortDirection::Asc => ascending,
                SortDirection::Desc => ascending.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of records by a spec.
///
/// `kinds` maps field names to their coercion; unlisted fields are natural.
pub fn sort_records<T: Record>(
    records: &mut [T],
    spec: &SortSpec,
    kinds: &HashMap<String, SortKind>,
) {
    let kind = kinds.get(&spec.field).copied().unwrap_or_default();
    records.sort_by(|a, b| compare(a, b, &spec.field, spec.direction, kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Order {
        id: String,
        total: String,
        placed: String,
        vendor: String,
    }

    impl Record for Order {
        fn resource_name() -> &'static str {
            "orders"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["vendor"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "total" => Some(FieldValue::String(self.total.clone())),
                "placed" => Some(FieldValue::String(self.placed.clone())),
                "vendor" => Some(FieldValue::String(self.vendor.clone())),
                _ => None,
            }
        }
    }

    fn order(id: &str, total: &str, placed: &str, vendor: &str) -> Order {
        Order {
            id: id.to_string(),
            total: total.to_string(),
            placed: placed.to_string(),
            vendor: vendor.to_string(),
        }
    }

    fn ids(records: &[Order]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn kinds() -> HashMap<String, SortKind> {
        HashMap::from([
            ("total".to_string(), SortKind::Currency),
            ("placed".to_string(), SortKind::Date),
        ])
    }

    #[test]
    fn test_currency_sorts_numerically() {
        let mut records = vec![
            order("a", "$900.00", "2024-01-01", "x"),
            order("b", "$1,200.00", "2024-01-01", "x"),
            order("c", "$80.50", "2024-01-01", "x"),
        ];
        sort_records(&mut records, &SortSpec::asc("total"), &kinds());
        assert_eq!(ids(&records), vec!["c", "a", "b"]);

        sort_records(&mut records, &SortSpec::desc("total"), &kinds());
        assert_eq!(ids(&records), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_natural_sort_on_currency_strings_is_lexical() {
        let mut records = vec![
            order("a", "$900.00", "2024-01-01", "x"),
            order("b", "$1,200.00", "2024-01-01", "x"),
        ];
        sort_records(&mut records, &SortSpec::asc("total"), &HashMap::new());
        assert_eq!(ids(&records), vec!["b", "a"]);
    }

    #[test]
    fn test_dates_sort_by_timestamp() {
        let mut records = vec![
            order("a", "$1", "2024-03-01", "x"),
            order("b", "$1", "2023-12-31T23:00:00Z", "x"),
            order("c", "$1", "2024-02-15", "x"),
        ];
        sort_records(&mut records, &SortSpec::asc("placed"), &kinds());
        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unusable_values_sort_last_in_both_directions() {
        let mut records = vec![
            order("a", "$900.00", "2024-01-01", "x"),
            order("b", "TBD", "2024-01-01", "x"),
            order("c", "$80.50", "2024-01-01", "x"),
            order("d", "$1,200.00", "2024-01-01", "x"),
            order("e", "", "2024-01-01", "x"),
            order("f", "$5.00", "2024-01-01", "x"),
        ];
        sort_records(&mut records, &SortSpec::asc("total"), &kinds());
        assert_eq!(ids(&records), vec!["f", "c", "a", "d", "b", "e"]);

        sort_records(&mut records, &SortSpec::desc("total"), &kinds());
        assert_eq!(ids(&records), vec!["d", "a", "c", "f", "b", "e"]);

        let good = order("a", "$5.00", "2024-01-01", "x");
        let bad = order("b", "five dollars", "2024-01-01", "x");
        assert_eq!(
            compare(&good, &bad, "total", SortDirection::Desc, SortKind::Currency),
            Ordering::Less
        );
        assert_eq!(
            compare(&good, &bad, "missing", SortDirection::Asc, SortKind::Natural),
            Ordering::Equal
        );
    }

    #[test]
    fn test_many_malformed_values_keep_the_rest_ordered() {
        let mut records: Vec<Order> = (0..500)
            .map(|i| {
                let total = if i % 3 == 0 {
                    "n/a".to_string()
                } else {
                    format!("${}.00", (i * 7919) % 1000)
                };
                order(&i.to_string(), &total, "2024-01-01", "x")
            })
            .collect();

        for spec in [SortSpec::asc("total"), SortSpec::desc("total")] {
            sort_records(&mut records, &spec, &kinds());
            let amounts: Vec<Option<f64>> = records
                .iter()
                .map(|r| FieldValue::String(r.total.clone()).amount())
                .collect();
            let usable = amounts.iter().take_while(|a| a.is_some()).count();
            assert_eq!(usable, 333);
            assert!(amounts[usable..].iter().all(Option::is_none));

            let ordered = amounts[..usable].windows(2).all(|w| match spec.direction {
                SortDirection::Asc => w[0] <= w[1],
                SortDirection::Desc => w[0] >= w[1],
            });
            assert!(ordered);
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut records = vec![
            order("a", "$1", "2024-01-01", "beta"),
            order("b", "$1", "2024-01-01", "alpha"),
            order("c", "$1", "2024-01-01", "beta"),
            order("d", "$1", "2024-01-01", "alpha"),
        ];
        sort_records(&mut records, &SortSpec::asc("vendor"), &kinds());
        assert_eq!(ids(&records), vec!["b", "d", "a", "c"]);

        sort_records(&mut records, &SortSpec::desc("vendor"), &kinds());
        assert_eq!(ids(&records), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let first = SortSpec::toggle(None, "total");
        assert_eq!(first, SortSpec::desc("total"));

        let second = SortSpec::toggle(Some(&first), "total");
        assert_eq!(second, SortSpec::asc("total"));

        let third = SortSpec::toggle(Some(&second), "total");
        assert_eq!(third, SortSpec::desc("total"));
    }

    #[test]
    fn test_toggle_new_field_starts_descending() {
        let current = SortSpec::asc("total");
        assert_eq!(
            SortSpec::toggle(Some(&current), "placed"),
            SortSpec::desc("placed")
        );
    }

    #[test]
    fn test_parse_sort_expression() {
        assert_eq!(SortSpec::parse("total:desc").unwrap(), SortSpec::desc("total"));
        assert_eq!(SortSpec::parse("total:asc").unwrap(), SortSpec::asc("total"));
        assert_eq!(SortSpec::parse("total").unwrap(), SortSpec::asc("total"));
        assert!(SortSpec::parse("total:sideways").is_err());
        assert!(SortSpec::parse(":desc").is_err());
        assert_eq!(SortSpec::desc("total").to_string(), "total:desc");
    }

    #[test]
    fn test_sort_spec_serde_as_expression() {
        let json = serde_json::to_string(&SortSpec::desc("date_issued")).unwrap();
        assert_eq!(json, "\"date_issued:desc\"");

        let parsed: SortSpec = serde_json::from_str("\"total\"").unwrap();
        assert_eq!(parsed, SortSpec::asc("total"));
        assert!(serde_json::from_str::<SortSpec>("\"total:up\"").is_err());
    }
}
