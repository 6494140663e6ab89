//! Reference ReACT entries.
//!
//! Entries are open-ended JSON objects. Only `Features` and `Importance`
//! are interpreted; every other field is carried through untouched.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Key holding the comma-separated feature tags.
pub const FEATURES_KEY: &str = "Features";

/// Key holding the numeric importance.
pub const IMPORTANCE_KEY: &str = "Importance";

/// Numeric importance, kept exact for integers.
///
/// Integers and floats compare by value, so `-0.0 == 0 == 0.0` and
/// integers beyond 2^53 stay distinct.
#[derive(Debug, Clone, Copy)]
pub enum Importance {
    Integer(i128),
    Float(f64),
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Integer(0)
    }
}

impl Importance {
    /// Read a JSON number; `None` for non-finite values.
    pub fn from_number(number: &Number) -> Option<Self> {
        if let Some(i) = number.as_i64() {
            Some(Importance::Integer(i as i128))
        } else if let Some(u) = number.as_u64() {
            Some(Importance::Integer(u as i128))
        } else {
            number
                .as_f64()
                .filter(|x| x.is_finite())
                .map(Importance::Float)
        }
    }
}

/// Exact comparison of an integer against a float.
///
/// Rounding to the nearest float is monotonic, so a strict difference after
/// rounding is also a strict difference before. On a tie the float is
/// integral and within `i128` range.
fn compare_int_float(i: i128, x: f64) -> Ordering {
    match (i as f64).partial_cmp(&x) {
        Some(Ordering::Equal) => i.cmp(&(x as i128)),
        Some(ordering) => ordering,
        None => Ordering::Equal,
    }
}

impl PartialEq for Importance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Importance {}

impl PartialOrd for Importance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Importance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Importance::Integer(a), Importance::Integer(b)) => a.cmp(&b),
            (Importance::Float(a), Importance::Float(b)) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            (Importance::Integer(a), Importance::Float(b)) => compare_int_float(a, b),
            (Importance::Float(a), Importance::Integer(b)) => compare_int_float(b, a).reverse(),
        }
    }
}

/// One entry of the reference ReACT set.
///
/// Missing or mistyped `Features` parse to no tags, and missing or
/// non-numeric `Importance` parses to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ReactEntry {
    features: BTreeSet<String>,
    importance: Importance,
    fields: Map<String, Value>,
}

impl ReactEntry {
    /// Trimmed, non-empty feature tags.
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Importance used for ranking.
    pub fn importance(&self) -> Importance {
        self.importance
    }

    /// All fields of the entry as read.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Whether any tag is in `features`.
    pub fn has_any_feature(&self, features: &BTreeSet<String>) -> bool {
        !self.features.is_disjoint(features)
    }
}

impl From<Map<String, Value>> for ReactEntry {
    fn from(fields: Map<String, Value>) -> Self {
        let features = fields
            .get(FEATURES_KEY)
            .and_then(Value::as_str)
            .map(parse_feature_tags)
            .unwrap_or_default();
        let importance = fields
            .get(IMPORTANCE_KEY)
            .and_then(|value| match value {
                Value::Number(number) => Importance::from_number(number),
                _ => None,
            })
            .unwrap_or_default();

        Self {
            features,
            importance,
            fields,
        }
    }
}

impl From<ReactEntry> for Map<String, Value> {
    fn from(entry: ReactEntry) -> Self {
        entry.fields
    }
}

/// Split a comma-separated tag string into trimmed tags.
pub fn parse_feature_tags(tags: &str) -> BTreeSet<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
