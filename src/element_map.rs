//! Keyed and unkeyed collections whose iteration order follows an
//! [`ElementOrder`].
//!
//! [`ElementMap`] backs the node and edge indices of every graph structure in
//! this crate, and [`ElementSet`] backs per-node adjacency and incidence sets.
//! Both are duplicate-free; they differ from the standard collections only in
//! that the enumeration order is chosen at construction time.  Insertion
//! order is kept by [`IndexMap`]/[`IndexSet`], with `shift_remove` so that a
//! removal never reorders the remaining elements.
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, btree_map, btree_set, hash_map, hash_set},
    fmt::{Debug, Formatter},
    hash::Hash,
};

use indexmap::{IndexMap, IndexSet};

use crate::element_order::ElementOrder;

#[derive(Clone)]
enum MapStorage<K, V> {
    Unordered(HashMap<K, V>),
    Insertion(IndexMap<K, V>),
    Sorted(BTreeMap<K, V>),
}

/// A map from keys to values that enumerates its entries in a configurable
/// [`ElementOrder`].
#[derive(Clone)]
pub struct ElementMap<K, V> {
    storage: MapStorage<K, V>,
}

impl<K, V> ElementMap<K, V> {
    pub fn order(&self) -> ElementOrder {
        match self.storage {
            MapStorage::Unordered(_) => ElementOrder::Unordered,
            MapStorage::Insertion(_) => ElementOrder::Insertion,
            MapStorage::Sorted(_) => ElementOrder::Sorted,
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            MapStorage::Unordered(map) => map.len(),
            MapStorage::Insertion(map) => map.len(),
            MapStorage::Sorted(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entries in this map's [`ElementOrder`].
    pub fn iter(&self) -> MapIter<'_, K, V> {
        match &self.storage {
            MapStorage::Unordered(map) => MapIter::Unordered(map.iter()),
            MapStorage::Insertion(map) => MapIter::Insertion(map.iter()),
            MapStorage::Sorted(map) => MapIter::Sorted(map.iter()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<K, V> ElementMap<K, V>
where
    K: Eq + Hash + Ord,
{
    pub fn new(order: ElementOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    /// Creates an empty map.  The capacity is a hint and is ignored by
    /// sorted maps.
    pub fn with_capacity(order: ElementOrder, capacity: usize) -> Self {
        let storage = match order {
            ElementOrder::Unordered => MapStorage::Unordered(HashMap::with_capacity(capacity)),
            ElementOrder::Insertion => MapStorage::Insertion(IndexMap::with_capacity(capacity)),
            ElementOrder::Sorted => MapStorage::Sorted(BTreeMap::new()),
        };
        Self { storage }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        match &self.storage {
            MapStorage::Unordered(map) => map.contains_key(key),
            MapStorage::Insertion(map) => map.contains_key(key),
            MapStorage::Sorted(map) => map.contains_key(key),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.storage {
            MapStorage::Unordered(map) => map.get(key),
            MapStorage::Insertion(map) => map.get(key),
            MapStorage::Sorted(map) => map.get(key),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match &mut self.storage {
            MapStorage::Unordered(map) => map.get_mut(key),
            MapStorage::Insertion(map) => map.get_mut(key),
            MapStorage::Sorted(map) => map.get_mut(key),
        }
    }

    /// Inserts a value, returning the previous value for the key if there was
    /// one.  Replacing a value keeps the key's position in insertion order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.storage {
            MapStorage::Unordered(map) => map.insert(key, value),
            MapStorage::Insertion(map) => map.insert(key, value),
            MapStorage::Sorted(map) => map.insert(key, value),
        }
    }

    /// Gets a mutable reference to the value for `key`, inserting the result
    /// of `default` first if the key is absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        match &mut self.storage {
            MapStorage::Unordered(map) => map.entry(key).or_insert_with(default),
            MapStorage::Insertion(map) => map.entry(key).or_insert_with(default),
            MapStorage::Sorted(map) => map.entry(key).or_insert_with(default),
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        match &mut self.storage {
            MapStorage::Unordered(map) => map.remove(key),
            MapStorage::Insertion(map) => map.shift_remove(key),
            MapStorage::Sorted(map) => map.remove(key),
        }
    }

    pub fn clear(&mut self) {
        match &mut self.storage {
            MapStorage::Unordered(map) => map.clear(),
            MapStorage::Insertion(map) => map.clear(),
            MapStorage::Sorted(map) => map.clear(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for ElementMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of an [`ElementMap`].
pub enum MapIter<'a, K, V> {
    Unordered(hash_map::Iter<'a, K, V>),
    Insertion(indexmap::map::Iter<'a, K, V>),
    Sorted(btree_map::Iter<'a, K, V>),
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            MapIter::Unordered(iter) => iter.next(),
            MapIter::Insertion(iter) => iter.next(),
            MapIter::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            MapIter::Unordered(iter) => iter.size_hint(),
            MapIter::Insertion(iter) => iter.size_hint(),
            MapIter::Sorted(iter) => iter.size_hint(),
        }
    }
}

#[derive(Clone)]
enum SetStorage<T> {
    Unordered(HashSet<T>),
    Insertion(IndexSet<T>),
    Sorted(BTreeSet<T>),
}

/// A duplicate-free collection that enumerates its elements in a configurable
/// [`ElementOrder`].
#[derive(Clone)]
pub struct ElementSet<T> {
    storage: SetStorage<T>,
}

impl<T> ElementSet<T> {
    pub fn len(&self) -> usize {
        match &self.storage {
            SetStorage::Unordered(set) => set.len(),
            SetStorage::Insertion(set) => set.len(),
            SetStorage::Sorted(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> SetIter<'_, T> {
        match &self.storage {
            SetStorage::Unordered(set) => SetIter::Unordered(set.iter()),
            SetStorage::Insertion(set) => SetIter::Insertion(set.iter()),
            SetStorage::Sorted(set) => SetIter::Sorted(set.iter()),
        }
    }
}

impl<T> ElementSet<T>
where
    T: Eq + Hash + Ord + Clone,
{
    pub fn new(order: ElementOrder) -> Self {
        let storage = match order {
            ElementOrder::Unordered => SetStorage::Unordered(HashSet::new()),
            ElementOrder::Insertion => SetStorage::Insertion(IndexSet::new()),
            ElementOrder::Sorted => SetStorage::Sorted(BTreeSet::new()),
        };
        Self { storage }
    }

    /// Adds an element, returning true if it was not already present.
    pub fn insert(&mut self, element: T) -> bool {
        match &mut self.storage {
            SetStorage::Unordered(set) => set.insert(element),
            SetStorage::Insertion(set) => set.insert(element),
            SetStorage::Sorted(set) => set.insert(element),
        }
    }

    /// Removes an element, returning true if it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        match &mut self.storage {
            SetStorage::Unordered(set) => set.remove(element),
            SetStorage::Insertion(set) => set.shift_remove(element),
            SetStorage::Sorted(set) => set.remove(element),
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        match &self.storage {
            SetStorage::Unordered(set) => set.contains(element),
            SetStorage::Insertion(set) => set.contains(element),
            SetStorage::Sorted(set) => set.contains(element),
        }
    }

    /// Returns a snapshot of the elements in this set's order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Two sets are equal if they contain the same elements, regardless of their
/// enumeration order.
impl<T> PartialEq for ElementSet<T>
where
    T: Eq + Hash + Ord + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T> Eq for ElementSet<T> where T: Eq + Hash + Ord + Clone {}

impl<T: Debug> Debug for ElementSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the elements of an [`ElementSet`].
pub enum SetIter<'a, T> {
    Unordered(hash_set::Iter<'a, T>),
    Insertion(indexmap::set::Iter<'a, T>),
    Sorted(btree_set::Iter<'a, T>),
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SetIter::Unordered(iter) => iter.next(),
            SetIter::Insertion(iter) => iter.next(),
            SetIter::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SetIter::Unordered(iter) => iter.size_hint(),
            SetIter::Insertion(iter) => iter.size_hint(),
            SetIter::Sorted(iter) => iter.size_hint(),
        }
    }
}
