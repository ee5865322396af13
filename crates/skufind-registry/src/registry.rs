use crate::seed::seed_records;
use chrono::{DateTime, Utc};
use skufind_core::{is_valid_confidence, FindabilityRecord, FindabilityUpdate};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Findability records keyed by SKU, held in process memory.
///
/// Records are kept in insertion order, so [`SkuRegistry::list_all`] is
/// stable between writes. Writes take `&mut self`: a registry has a single
/// owner and is not meant to be shared between threads. Use
/// [`SharedSkuRegistry`](crate::SharedSkuRegistry) when several callers
/// need it at once.
///
/// Writes reject a confidence score that is NaN or outside `[0.0, 1.0]`,
/// so every stored record satisfies that range.
#[derive(Debug, Clone)]
pub struct SkuRegistry {
    records: Vec<FindabilityRecord>,
    index: HashMap<String, usize>,
}

impl SkuRegistry {
    /// Creates a registry holding the built-in seed records.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for record in seed_records() {
            registry.push(record);
        }
        debug!(count = registry.len(), "Seeded SKU registry");
        registry
    }

    /// Creates a registry with no records.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, record: FindabilityRecord) {
        if self.index.contains_key(&record.sku) {
            return;
        }
        self.index.insert(record.sku.clone(), self.records.len());
        self.records.push(record);
    }

    /// Returns a copy of the record for `sku`, or `None` if it is unknown.
    pub fn lookup(&self, sku: &str) -> Option<FindabilityRecord> {
        self.index.get(sku).map(|&pos| self.records[pos].clone())
    }

    /// Returns copies of every record, in insertion order.
    pub fn list_all(&self) -> Vec<FindabilityRecord> {
        self.records.clone()
    }

    /// Replaces the mutable fields of an existing record and re-stamps it.
    ///
    /// Returns `false`, leaving the registry untouched, if `sku` is absent or
    /// the confidence score is out of range.
    pub fn update(&mut self, sku: &str, update: FindabilityUpdate) -> bool {
        let Some(&pos) = self.index.get(sku) else {
            warn!(sku, "Update rejected: unknown SKU");
            return false;
        };
        if !is_valid_confidence(update.confidence_score) {
            warn!(
                sku,
                confidence = update.confidence_score,
                "Update rejected: confidence out of range"
            );
            return false;
        }

        let record = &mut self.records[pos];
        let last_updated = stamp_after(record.last_updated);
        *record = FindabilityRecord::from_update(sku, update, last_updated);
        debug!(sku, status = %record.status, "Updated SKU");
        true
    }

    /// Adds a new record stamped with the current time.
    ///
    /// Returns `false`, leaving the registry untouched, if `sku` is already
    /// present or the confidence score is out of range.
    pub fn insert(&mut self, sku: impl Into<String>, update: FindabilityUpdate) -> bool {
        let sku = sku.into();
        if self.index.contains_key(&sku) {
            warn!(sku = %sku, "Insert rejected: SKU already present");
            return false;
        }
        if !is_valid_confidence(update.confidence_score) {
            warn!(
                sku = %sku,
                confidence = update.confidence_score,
                "Insert rejected: confidence out of range"
            );
            return false;
        }

        let record = FindabilityRecord::from_update(sku, update, Utc::now());
        debug!(sku = %record.sku, status = %record.status, "Inserted SKU");
        self.push(record);
        true
    }

    /// Returns `true` if a record exists for `sku`.
    pub fn contains(&self, sku: &str) -> bool {
        self.index.contains_key(sku)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `Default` is the seeded registry, same as [`SkuRegistry::new`].
impl Default for SkuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time, clamped so a record's timestamp never moves backwards.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
