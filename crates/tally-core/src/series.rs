// File: crates/tally-core/src/series.rs
// Summary: Ordered (label, value) series with value coercion and JSON ingestion.
// Notes:
// - Values are counts. Anything non-finite, negative, missing or non-numeric is
//   stored as 0.0 so renderers never see a value they cannot place.
// - Order is whatever the caller supplied; nothing here sorts.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One category (or period) and its count.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    data: Vec<Datum>,
}

impl Series {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Build from `(label, value)` pairs, coercing bad values to 0.
    pub fn from_pairs<I, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let mut s = Self::new();
        for (label, value) in pairs {
            s.push(label, value);
        }
        s
    }

    /// Time-series variant; `(period, value)` pairs in chronological order.
    pub fn from_periods<I, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        Self::from_pairs(pairs)
    }

    /// Pairs whose value may be absent; `None` counts as 0.
    pub fn from_optional<I, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, Option<f64>)>,
        L: Into<String>,
    {
        Self::from_pairs(pairs.into_iter().map(|(l, v)| (l, v.unwrap_or(0.0))))
    }

    /// Parse `[{"label": .., "count": ..}]` (or `period` / `value` keys).
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.data.push(Datum { label: label.into(), value: sanitize(value) });
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Datum> { self.data.iter() }
    pub fn get(&self, index: usize) -> Option<&Datum> { self.data.get(index) }

    /// Largest value, 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.data.iter().map(|d| d.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.data.iter().map(|d| d.value).sum()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Datum;
    type IntoIter = std::slice::Iter<'a, Datum>;
    fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}

/// Wire shape of one series item coming from the data collaborator.
#[derive(Deserialize)]
struct RawDatum {
    #[serde(alias = "period", default)]
    label: String,
    #[serde(alias = "count", default)]
    value: Value,
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawDatum>::deserialize(deserializer)?;
        Ok(Self::from_pairs(raw.into_iter().map(|d| (d.label, coerce_json(&d.value)))))
    }
}

/// Clamp to a drawable count: finite and non-negative, else 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Lenient numeric parse for text cells ("12", " 3.5 "); anything else is 0.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(sanitize).unwrap_or(0.0)
}

fn coerce_json(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().map(sanitize).unwrap_or(0.0),
        Value::String(s) => parse_value(s),
        _ => 0.0,
    }
}
