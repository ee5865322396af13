use crate::SkuFindError;
use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Returns `true` if `score` is a finite value in `[0.0, 1.0]`.
pub fn is_valid_confidence(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

// --- Status ---

/// Outcome of a findability determination for a SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FindabilityStatus {
    /// The item is locatable.
    Found,
    /// The item's location is only approximately known.
    PartiallyFound,
    /// The item could not be located.
    NotFound,
}

impl FindabilityStatus {
    /// The SCREAMING_SNAKE_CASE name used in reports and on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "FOUND",
            Self::PartiallyFound => "PARTIALLY_FOUND",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for FindabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FindabilityStatus {
    type Err = SkuFindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Found, Self::PartiallyFound, Self::NotFound]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SkuFindError::InvalidStatus(name.to_string()))
    }
}

// --- Details ---

/// A scalar attribute value attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    /// Whole number, e.g. a quantity.
    Integer(i64),
    /// Fractional number.
    Float(f64),
    /// Free text, e.g. a location or supplier name.
    Text(String),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole floats keep a trailing ".0" so they read as floats.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DetailValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for DetailValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for DetailValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for DetailValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// Free-form record attributes, kept in insertion order.
///
/// Serializes as a plain map. Inserting an existing key replaces its value
/// in place without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details(Vec<(String, DetailValue)>);

impl Details {
    /// Creates an empty set of details.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<DetailValue>,
    ) -> Option<DetailValue> {
        let key = key.into();
        let value = value.into();
        if let Some((_, slot)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.0.push((key, value));
        None
    }

    /// Builder-style [`Details::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Details
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut details = Details::new();
        for (k, v) in iter {
            details.insert(k, v);
        }
        details
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct DetailsVisitor;

impl<'de> Visitor<'de> for DetailsVisitor {
    type Value = Details;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of string keys to string, integer or float values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut details = Details::new();
        while let Some((key, value)) = access.next_entry::<String, DetailValue>()? {
            details.insert(key, value);
        }
        Ok(details)
    }
}

impl<'de> Deserialize<'de> for Details {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DetailsVisitor)
    }
}

// --- Records ---

/// The findability status held for a single SKU.
///
/// Callers always receive an owned copy; mutating it has no effect on the
/// registry it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindabilityRecord {
    /// Unique SKU identifier.
    pub sku: String,
    /// Findability outcome.
    pub status: FindabilityStatus,
    /// Certainty of the determination, in `[0.0, 1.0]`.
    pub confidence_score: f64,
    /// When the registry last wrote this record.
    pub last_updated: DateTime<Utc>,
    /// Free-form attributes (location, quantity, condition, ...).
    #[serde(default)]
    pub details: Details,
    /// Human-readable follow-up suggestions, in display order.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl FindabilityRecord {
    /// Builds a record from its key, the caller-supplied fields and a timestamp.
    pub fn from_update(
        sku: impl Into<String>,
        update: FindabilityUpdate,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            sku: sku.into(),
            status: update.status,
            confidence_score: update.confidence_score,
            last_updated,
            details: update.details,
            recommendations: update.recommendations,
        }
    }
}

/// The caller-supplied fields of a registry insert or update.
///
/// There is no `last_updated` here: the registry stamps it on write.
#[derive(Debug, Clone, PartialEq)]
pub struct FindabilityUpdate {
    /// New findability outcome.
    pub status: FindabilityStatus,
    /// New confidence score; must lie in `[0.0, 1.0]` to be accepted.
    pub confidence_score: f64,
    /// New attributes, replacing the old ones wholesale.
    pub details: Details,
    /// New recommendations, replacing the old ones wholesale.
    pub recommendations: Vec<String>,
}

impl FindabilityUpdate {
    /// Creates an update with no details or recommendations.
    pub fn new(status: FindabilityStatus, confidence_score: f64) -> Self {
        Self {
            status,
            confidence_score,
            details: Details::new(),
            recommendations: Vec::new(),
        }
    }

    /// Sets a single detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key, value);
        self
    }

    /// Replaces all details.
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    /// Appends a recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }
}
