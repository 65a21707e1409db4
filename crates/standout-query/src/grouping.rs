//! Key-based operators: deduplication, grouping and dictionary construction.

use std::collections::HashSet;
use std::hash::Hash;

use crate::dictionary::Dictionary;
use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Removes repeated elements, keeping the first occurrence of each value
    /// in source order.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }

    /// Removes elements whose key was already produced by an earlier
    /// element; the first element for each key is kept.
    ///
    /// ```
    /// use standout_query::Sequence;
    ///
    /// let people = Sequence::from(vec![(25, "A"), (25, "B"), (30, "C")]);
    /// let by_age = people.distinct_by(|p| p.0);
    /// assert_eq!(by_age.into_vec(), vec![(25, "A"), (30, "C")]);
    /// ```
    pub fn distinct_by<K, F>(&self, selector: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(selector(*item)))
            .cloned()
            .collect()
    }

    /// Partitions the sequence by the key `selector` extracts.
    ///
    /// Each group holds its elements in source order. Groups enumerate in the
    /// order their key first appeared, but callers should not rely on it.
    ///
    /// ```
    /// use standout_query::Sequence;
    ///
    /// let words = Sequence::from(vec!["apple", "bean", "avocado"]);
    /// let groups = words.group_by(|w| w.chars().next());
    ///
    /// assert_eq!(groups.get(&Some('a')).unwrap().as_slice(), &["apple", "avocado"]);
    /// assert_eq!(groups.get(&Some('b')).unwrap().as_slice(), &["bean"]);
    /// ```
    pub fn group_by<K, F>(&self, selector: F) -> Dictionary<K, Sequence<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut groups: Dictionary<K, Vec<T>> = Dictionary::new();
        for item in self.iter() {
            groups
                .entry(selector(item))
                .or_insert_with(Vec::new)
                .push(item.clone());
        }
        groups.map_values(Sequence::from)
    }

    /// Builds a dictionary keyed by `key_selector`, with the elements
    /// themselves as values.
    ///
    /// When two elements produce the same key, the later one wins.
    #[doc(alias = "to_dictionary_with_key_selector")]
    pub fn to_dictionary<K, F>(&self, key_selector: F) -> Dictionary<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.to_dictionary_with(key_selector, T::clone)
    }

    /// Builds a dictionary with keys from `key_selector` and values from
    /// `value_selector`. Later elements overwrite earlier ones on key
    /// collision.
    #[doc(alias = "to_dictionary_with_value_selector")]
    pub fn to_dictionary_with<K, V, F, G>(
        &self,
        key_selector: F,
        value_selector: G,
    ) -> Dictionary<K, V>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
        G: Fn(&T) -> V,
    {
        let mut dictionary = Dictionary::new();
        let mut collisions = 0usize;
        for item in self.iter() {
            if dictionary
                .insert(key_selector(item), value_selector(item))
                .is_some()
            {
                collisions += 1;
            }
        }
        if collisions > 0 {
            log::trace!(
                "to_dictionary: {collisions} earlier value(s) overwritten by later keys"
            );
        }
        dictionary
    }
}
