//! Per-field rendering policy

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How a metadata field is rendered.
///
/// Deserializes leniently: any name other than `error` is `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldKind {
    /// Plain value, printed inline
    #[default]
    Info,
    /// Error value, rendered from its stack text
    Error,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Info => write!(f, "info"),
            FieldKind::Error => write!(f, "error"),
        }
    }
}

impl FieldKind {
    /// Lenient parse: anything other than `error` is `info`
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("error") {
            FieldKind::Error
        } else {
            FieldKind::Info
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        FieldKind::parse_lenient(&s)
    }
}

/// Mapping from metadata key to [`FieldKind`]; unlisted keys are `info`.
///
/// The default policy marks the `error` key as an error field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPolicy(HashMap<String, FieldKind>);

impl Default for FieldPolicy {
    fn default() -> Self {
        Self::empty().with("error", FieldKind::Error)
    }
}

impl FieldPolicy {
    /// Policy with no entries; every key renders as `info`
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style entry
    pub fn with(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.0.insert(key.into(), kind);
        self
    }

    /// Kind for `key`, defaulting to `info`
    pub fn kind_for(&self, key: &str) -> FieldKind {
        self.0.get(key).copied().unwrap_or_default()
    }

    /// A new policy with `other`'s entries layered over this one
    pub fn merged(&self, other: &FieldPolicy) -> FieldPolicy {
        let mut merged = self.clone();
        merged
            .0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), *v)));
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a policy from `(key, kind-name)` pairs, unknown kinds become `info`
impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for FieldPolicy {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), FieldKind::parse_lenient(v.as_ref())))
                .collect(),
        )
    }
}
