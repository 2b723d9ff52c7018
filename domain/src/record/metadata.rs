//! Key/value context attached to logger nodes and individual log calls

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from field name to arbitrary JSON value.
///
/// Iteration follows insertion order; re-inserting an existing key keeps
/// its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow merge: fields of `other` override same-named fields of `self`
    pub fn merged(&self, other: &Metadata) -> Metadata {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Objects become the field map, `null` becomes empty metadata and any
/// other value is stored under the `data` key.
impl From<Value> for Metadata {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Null => Self::default(),
            other => Self::default().with("data", other),
        }
    }
}

impl From<()> for Metadata {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::default();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_context_wins() {
        let base = Metadata::from(json!({"a": 1}));
        let merged = base.merged(&Metadata::from(json!({"a": 2})));
        assert_eq!(merged.into_value(), json!({"a": 2}));
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let base = Metadata::from(json!({"a": 1}));
        let merged = base.merged(&Metadata::from(json!({"b": 2})));
        assert_eq!(merged.into_value(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_merge_does_not_touch_receiver() {
        let base = Metadata::new().with("a", 1);
        let _ = base.merged(&Metadata::new().with("a", 5));
        assert_eq!(base.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let metadata = Metadata::new().with("zeta", 1).with("alpha", 2).with("mid", 3);
        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_non_object_value() {
        assert!(Metadata::from(Value::Null).is_empty());
        let scalar = Metadata::from(json!("just a string"));
        assert_eq!(scalar.get("data"), Some(&json!("just a string")));
        assert!(Metadata::from(()).is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let metadata: Metadata = [("user", "ada"), ("role", "admin")].into_iter().collect();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("role"), Some(&json!("admin")));
    }
}
