//! Key-unique associative container and its query operators.
//!
//! [`Dictionary`] is backed by an [`IndexMap`], so pairs enumerate in
//! first-insertion order. Re-assigning an existing key replaces the value in
//! place and keeps its position.
//!
//! The query contract does not promise any particular order; equality between
//! dictionaries ignores it.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use indexmap::map::{self, Entry};
use indexmap::IndexMap;

use crate::sequence::Sequence;

/// An immutable mapping from unique keys to values.
///
/// # Example
///
/// ```
/// use standout_query::Dictionary;
///
/// let stock: Dictionary<&str, u32> = [("apple", 3), ("pear", 0), ("fig", 7)]
///     .into_iter()
///     .collect();
///
/// let in_stock = stock.filter(|_, qty| *qty > 0);
/// assert_eq!(in_stock.len(), 2);
/// assert!(!in_stock.contains_key("pear"));
/// ```
#[derive(Clone)]
pub struct Dictionary<K, V> {
    map: IndexMap<K, V>,
}

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            map: IndexMap::new(),
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the dictionary holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(key, value)` pairs.
    pub fn iter(&self) -> Pairs<'_, K, V> {
        Pairs {
            inner: self.map.iter(),
        }
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }

    /// Iterates over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.map.values()
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Returns `true` as soon as one pair satisfies `condition`; `false` for
    /// an empty dictionary.
    pub fn any<P>(&self, condition: P) -> bool
    where
        P: Fn(&K, &V) -> bool,
    {
        self.iter().any(|(key, value)| condition(key, value))
    }

    /// Returns `false` as soon as one pair fails `condition`; `true` for an
    /// empty dictionary.
    pub fn all<P>(&self, condition: P) -> bool
    where
        P: Fn(&K, &V) -> bool,
    {
        self.iter().all(|(key, value)| condition(key, value))
    }

    /// Counts the pairs satisfying `condition`, scanning every pair.
    pub fn count<P>(&self, condition: P) -> usize
    where
        P: Fn(&K, &V) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| condition(key, value))
            .count()
    }

    /// Projects every pair into a [`Sequence`], in enumeration order.
    #[doc(alias = "to_array")]
    pub fn to_sequence<U, F>(&self, selector: F) -> Sequence<U>
    where
        F: Fn(&K, &V) -> U,
    {
        self.iter()
            .map(|(key, value)| selector(key, value))
            .collect()
    }

    /// Replaces every value with `selector(key, value)`, keeping the keys.
    pub fn select<W, F>(&self, selector: F) -> Dictionary<K, W>
    where
        K: Clone + Eq + Hash,
        F: Fn(&K, &V) -> W,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), selector(key, value)))
            .collect()
    }
}

impl<K: Eq + Hash, V> Dictionary<K, V> {
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    pub(crate) fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        self.map.entry(key)
    }

    pub(crate) fn map_values<W, F>(self, mut f: F) -> Dictionary<K, W>
    where
        F: FnMut(V) -> W,
    {
        self.map
            .into_iter()
            .map(|(key, value)| (key, f(value)))
            .collect()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Dictionary<K, V> {
    /// Keeps the pairs for which `predicate(key, value)` is true.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&K, &V) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Copies the pairs into a [`Sequence`] of tuples.
    pub fn to_pairs(&self) -> Sequence<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Combines this dictionary with `other`.
    ///
    /// When both hold the same key, the value from `other` wins.
    ///
    /// ```
    /// use standout_query::Dictionary;
    ///
    /// let a: Dictionary<_, _> = [("a", "1")].into_iter().collect();
    /// let b: Dictionary<_, _> = [("a", "2"), ("b", "3")].into_iter().collect();
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.get("a"), Some(&"2"));
    /// assert_eq!(merged.get("b"), Some(&"3"));
    /// ```
    pub fn merge(&self, other: &Dictionary<K, V>) -> Self {
        let mut merged = self.clone();
        let mut overwritten = 0usize;
        for (key, value) in other.iter() {
            if merged.insert(key.clone(), value.clone()).is_some() {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            log::trace!("merge: {overwritten} key(s) taken from the argument");
        }
        merged
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Dictionary<K, V> {}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Eq + Hash, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dictionary {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for Dictionary<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Pairs<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the pairs of a [`Dictionary`].
#[derive(Debug, Clone)]
pub struct Pairs<'a, K, V> {
    inner: map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Pairs<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Pairs<'_, K, V> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::hash::Hash;
    use std::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Dictionary;

    impl<K: Serialize, V: Serialize> Serialize for Dictionary<K, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter())
        }
    }

    struct DictionaryVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for DictionaryVisitor<K, V>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
    {
        type Value = Dictionary<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut dictionary = Dictionary::new();
            while let Some((key, value)) = access.next_entry()? {
                dictionary.insert(key, value);
            }
            Ok(dictionary)
        }
    }

    impl<'de, K, V> Deserialize<'de> for Dictionary<K, V>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(DictionaryVisitor(PhantomData))
        }
    }
}
