//! Insertion-ordered grouping
//!
//! Groups keep the order in which their key was first seen. Every
//! "first-encountered wins" tie-break in the report relies on this.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(crate) struct Tally<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V: Default> Tally<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Accumulator for `key`, created on first sight.
    pub(crate) fn entry(&mut self, key: K) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.clone(), idx);
                self.entries.push((key, V::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone> Tally<K, u64> {
    pub(crate) fn increment(&mut self, key: K) {
        *self.entry(key) += 1;
    }

    /// Key with the highest count. Ties go to the key seen first.
    pub(crate) fn first_max(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, &count) in self.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((key, count)),
            }
        }
        best
    }
}
