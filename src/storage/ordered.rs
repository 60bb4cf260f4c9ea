use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Keyed store that lists values in first-insertion order.
///
/// Replacing the value under an existing key keeps its slot, so listings stay
/// stable across overwrites.
#[derive(Debug, Clone)]
pub(crate) struct OrderedStore<K, V> {
    slots: HashMap<K, usize>,
    values: Vec<V>,
}

impl<K: Eq + Hash, V> OrderedStore<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            values: Vec::new(),
        }
    }

    /// Inserts or replaces. Returns the stored value and whether a previous value was replaced.
    pub(crate) fn upsert(&mut self, key: K, value: V) -> (&V, bool) {
        match self.slots.get(&key) {
            Some(&slot) => {
                self.values[slot] = value;
                (&self.values[slot], true)
            }
            None => {
                let slot = self.values.len();
                self.values.push(value);
                self.slots.insert(key, slot);
                (&self.values[slot], false)
            }
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).map(|&slot| &self.values[slot])
    }

    pub(crate) fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
