//! Case-insensitive name containers.
//!
//! Command, module, and type names are matched without regard to case, using
//! an invariant ASCII fold rather than any locale-aware collation. Insertion
//! and query go through the same fold, so the two can never diverge.
//!
//! Keys keep their original casing for iteration and re-encoding; only the
//! index is folded.

use std::collections::BTreeMap;
use std::fmt;

/// Fold a name to its canonical lookup form.
///
/// ASCII-only fold: locale-independent and stable across platforms, which is
/// what ordinal-ignore-case matching requires.
#[inline]
pub fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// An ordered map keyed case-insensitively, preserving original key casing.
///
/// Backed by a `BTreeMap` on the folded key so iteration order is
/// deterministic (sorted by folded name).
#[derive(Clone, Default)]
pub struct CaselessMap<V> {
    inner: BTreeMap<String, (String, V)>,
}

impl<V> CaselessMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        CaselessMap {
            inner: BTreeMap::new(),
        }
    }

    /// Insert a value under a name, replacing any entry that matches
    /// case-insensitively. The stored key keeps the caller's casing.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        let folded = fold(&name);
        self.inner.insert(folded, (name, value)).map(|(_, v)| v)
    }

    /// Look up a value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.inner.get(&fold(name)).map(|(_, v)| v)
    }

    /// Mutable lookup by name, ignoring case.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.inner.get_mut(&fold(name)).map(|(_, v)| v)
    }

    /// Get the value for a name, inserting a default-constructed one first
    /// if no entry matches.
    pub fn entry_or_default(&mut self, name: &str) -> &mut V
    where
        V: Default,
    {
        let folded = fold(name);
        &mut self
            .inner
            .entry(folded)
            .or_insert_with(|| (name.to_string(), V::default()))
            .1
    }

    /// Whether any entry matches the name, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&fold(name))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(original_name, value)` pairs, sorted by folded name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner.values().map(|(name, v)| (name.as_str(), v))
    }

    /// Iterate over the original-cased names, sorted by folded name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.values().map(|(name, _)| name.as_str())
    }

    /// Iterate over the values, sorted by folded name.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.inner.values().map(|(_, v)| v)
    }
}

impl<V: fmt::Debug> fmt::Debug for CaselessMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> FromIterator<(String, V)> for CaselessMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = CaselessMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// An ordered set of names matched case-insensitively, preserving original
/// casing for iteration.
#[derive(Clone, Default)]
pub struct CaselessSet {
    inner: CaselessMap<()>,
}

impl CaselessSet {
    /// Create an empty set.
    pub fn new() -> Self {
        CaselessSet {
            inner: CaselessMap::new(),
        }
    }

    /// Insert a name. Returns true if it was not already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.inner.insert(name, ()).is_none()
    }

    /// Whether the set contains the name, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the original-cased names, sorted by folded name.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }
}

impl fmt::Debug for CaselessSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<String> for CaselessSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = CaselessSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
