//! Filter criteria and the predicate set they are evaluated against

use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Value selected for one filter key
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterValue {
    /// No constraint: never excludes a record
    #[default]
    Any,
    /// The field must equal this value, or satisfy the named predicate
    /// registered for it
    Is(FieldValue),
}

impl FilterValue {
    /// Interpret a value coming from a select box.
    ///
    /// `"all"` (any case) and the empty string mean no constraint.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            FilterValue::Any
        } else {
            FilterValue::Is(FieldValue::String(raw.to_string()))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FilterValue::Any)
    }
}

impl From<FieldValue> for FilterValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => FilterValue::Any,
            other => FilterValue::Is(other),
        }
    }
}

macro_rules! filter_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FilterValue {
                fn from(value: $t) -> Self {
                    FilterValue::from(FieldValue::from(value))
                }
            }
        )*
    };
}

filter_value_from!(&str, String, i64, f64, bool);

/// Selected filter values, keyed by filter name, in the order they were set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    values: IndexMap<String, FilterValue>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a filter; `Any` removes the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        match value.into() {
            FilterValue::Any => {
                self.values.shift_remove(&key);
            }
            value => {
                self.values.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> &FilterValue {
        static ANY: FilterValue = FilterValue::Any;
        self.values.get(key).unwrap_or(&ANY)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Criteria that constrain something
    pub fn active(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().filter_map(|(key, value)| match value {
            FilterValue::Is(v) => Some((key.as_str(), v)),
            FilterValue::Any => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Named predicates standing in for equality on particular filter values.
///
/// Most filters compare a record field with the selected value. Range and
/// flag filters such as "Low Stock" register a predicate under the
/// `(key, label)` pair instead.
pub struct FilterSet<T> {
    named: HashMap<(String, String), Predicate<T>>,
}

impl<T> Clone for FilterSet<T> {
    fn clone(&self) -> Self {
        Self {
            named: self.named.clone(),
        }
    }
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self {
            named: HashMap::new(),
        }
    }
}

impl<T> fmt::Debug for FilterSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.named.keys().collect();
        keys.sort();
        f.debug_struct("FilterSet").field("named", &keys).finish()
    }
}

impl<T: Record> FilterSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate for `key == label`
    pub fn named<F>(mut self, key: &str, label: &str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.named
            .insert((key.to_string(), label.to_string()), Arc::new(predicate));
        self
    }

    /// Whether a named predicate exists for this key/value pair
    pub fn has_named(&self, key: &str, label: &str) -> bool {
        self.named
            .contains_key(&(key.to_string(), label.to_string()))
    }

    /// Test one criterion against a record
    pub fn matches_one(&self, record: &T, key: &str, expected: &FieldValue) -> bool {
        if let Some(predicate) = self.named.get(&(key.to_string(), expected.label())) {
            return predicate(record);
        }

        record
            .field_value(key)
            .is_some_and(|actual| actual.matches(expected))
    }

    /// Every active criterion must hold
    pub fn matches(&self, record: &T, criteria: &FilterCriteria) -> bool {
        criteria
            .active()
            .all(|(key, expected)| self.matches_one(record, key, expected))
    }
}
