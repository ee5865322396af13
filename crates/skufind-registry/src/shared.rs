use crate::registry::SkuRegistry;
use parking_lot::Mutex;
use skufind_core::{FindabilityRecord, FindabilityUpdate};
use std::sync::Arc;

/// A cloneable handle to a [`SkuRegistry`] behind a single mutex.
///
/// Every operation holds the lock for its whole duration, so the four
/// registry operations are atomic with respect to each other. Clones share
/// the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct SharedSkuRegistry {
    inner: Arc<Mutex<SkuRegistry>>,
}

impl SharedSkuRegistry {
    /// Creates a handle to a freshly seeded registry.
    pub fn new() -> Self {
        Self::from(SkuRegistry::new())
    }

    /// See [`SkuRegistry::lookup`].
    pub fn lookup(&self, sku: &str) -> Option<FindabilityRecord> {
        self.inner.lock().lookup(sku)
    }

    /// See [`SkuRegistry::list_all`].
    pub fn list_all(&self) -> Vec<FindabilityRecord> {
        self.inner.lock().list_all()
    }

    /// See [`SkuRegistry::update`].
    pub fn update(&self, sku: &str, update: FindabilityUpdate) -> bool {
        self.inner.lock().update(sku, update)
    }

    /// See [`SkuRegistry::insert`].
    pub fn insert(&self, sku: impl Into<String>, update: FindabilityUpdate) -> bool {
        self.inner.lock().insert(sku, update)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copies out the current state as an owned registry.
    pub fn snapshot(&self) -> SkuRegistry {
        self.inner.lock().clone()
    }
}

impl From<SkuRegistry> for SharedSkuRegistry {
    fn from(registry: SkuRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skufind_core::FindabilityStatus;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let a = SharedSkuRegistry::new();
        let b = a.clone();
        assert!(a.insert("DD0004", FindabilityUpdate::new(FindabilityStatus::Found, 0.8)));
        assert!(b.lookup("DD0004").is_some());
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_concurrent_inserts_of_same_sku_succeed_once() {
        let shared = SharedSkuRegistry::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.insert("EE0005", FindabilityUpdate::new(FindabilityStatus::Found, 0.5))
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(shared.len(), 4);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedSkuRegistry::new();
        let mut snapshot = shared.snapshot();
        assert!(snapshot.insert("FF0006", FindabilityUpdate::new(FindabilityStatus::Found, 0.4)));
        assert!(shared.lookup("FF0006").is_none());
    }
}
