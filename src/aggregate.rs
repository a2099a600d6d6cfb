// src/aggregate.rs
use std::collections::BTreeSet;

/// Union of in-scope names across every processed domain
///
/// Uniqueness is exact string equality. Iteration order is byte-lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdomainSet {
    names: BTreeSet<String>,
}

impl SubdomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names, returning how many were new
    pub fn extend<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.names.len();
        self.names.extend(names);
        self.names.len() - before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the set into an ascending list
    pub fn into_sorted(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

impl FromIterator<String> for SubdomainSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
