//! Named scalar results returned by the pricing routines.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Insertion-ordered bag of named `f64` results.
///
/// Each key can be written once. Serializes as a JSON object in insertion
/// order.
///
/// ```rust
/// use kudu_analytics::ResultStore;
///
/// let mut store = ResultStore::new();
/// store.add("roundedAip", 101.23456).unwrap();
/// assert_eq!(store.get_scalar("roundedAip").unwrap(), 101.23456);
/// assert!(store.add("roundedAip", 0.0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    entries: Vec<(String, f64)>,
}

impl ResultStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if `key` is already present.
    pub fn add(&mut self, key: impl Into<String>, value: f64) -> AnalyticsResult<()> {
        let key = key.into();
        if self.contains(&key) {
            return Err(AnalyticsError::DuplicateKey(key));
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Value stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if nothing was stored under `key`.
    pub fn get_scalar(&self, key: &str) -> AnalyticsResult<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| AnalyticsError::KeyNotFound(key.to_string()))
    }

    /// Whether `key` has been stored.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let mut store = ResultStore::new();
        store.add("b", 2.0).unwrap();
        store.add("a", 1.0).unwrap();
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_write_once() {
        let mut store = ResultStore::new();
        store.add("x", 1.0).unwrap();
        assert_eq!(
            store.add("x", 2.0),
            Err(AnalyticsError::DuplicateKey("x".to_string()))
        );
        assert_eq!(store.get_scalar("x").unwrap(), 1.0);
    }

    #[test]
    fn test_missing_key() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store.get_scalar("assetSwapSpread"),
            Err(AnalyticsError::KeyNotFound("assetSwapSpread".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut store = ResultStore::new();
        store.add("roundedAip", 100.5).unwrap();
        store.add("assetSwapSpread", 0.0125).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"roundedAip":100.5,"assetSwapSpread":0.0125}"#);
    }
}
