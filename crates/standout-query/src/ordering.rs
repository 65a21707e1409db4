//! Stable sorting for sequences.
//!
//! Every sort here is stable: elements that compare equal keep the relative
//! order they had in the source. Descending sorts reverse the comparison, not
//! the result, so ties are never flipped.

use std::cmp::Ordering;

use crate::sequence::Sequence;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two partially ordered keys, placing NaN-like keys last.
///
/// Keys that cannot be compared with themselves (NaN) sort after every
/// comparable key and are equal to each other. This is a total order only
/// when that is the sole source of incomparability, as with `f32`/`f64`.
/// Keys that are each self-comparable but incomparable with one another are
/// reported as `Equal`, which is not transitive; order such keys with
/// [`Sequence::sort_by`] and an explicit total comparator instead.
pub fn compare_partial<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if let Some(ordering) = a.partial_cmp(b) {
        return ordering;
    }
    let a_comparable = a.partial_cmp(a).is_some();
    let b_comparable = b.partial_cmp(b).is_some();
    match (a_comparable, b_comparable) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

impl<T: Clone> Sequence<T> {
    /// Sorts by natural order, ascending.
    ///
    /// ```
    /// use standout_query::Sequence;
    ///
    /// let sorted = Sequence::from(vec![3, 1, 2]).sort();
    /// assert_eq!(sorted.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b))
    }

    /// Sorts by natural order, descending.
    pub fn sort_desc(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(|a, b| b.cmp(a))
    }

    /// Sorts ascending by the key `selector` extracts.
    pub fn sort_by_key<K, F>(&self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by(selector, Dir::Asc)
    }

    /// Sorts descending by the key `selector` extracts.
    pub fn sort_by_key_desc<K, F>(&self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by(selector, Dir::Desc)
    }

    /// Sorts by the key `selector` extracts, in the given direction.
    ///
    /// The selector runs exactly once per element.
    pub fn order_by<K, F>(&self, selector: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.sort_by_cached(selector, |a, b| dir.apply(a.cmp(b)))
    }

    /// Sorts ascending by a partially ordered key such as `f64`.
    ///
    /// Keys that are not comparable with themselves (NaN) sort last; see
    /// [`compare_partial`] for the keys this supports.
    pub fn sort_by_partial_key<K, F>(&self, selector: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        self.sort_by_cached(selector, compare_partial::<K>)
    }

    /// Sorts with an explicit comparator.
    ///
    /// Chain keys with [`Ordering::then_with`] and [`Dir::apply`] to sort by
    /// several fields:
    ///
    /// ```
    /// use standout_query::{Dir, Sequence};
    ///
    /// let people = Sequence::from(vec![("bo", 30), ("al", 25), ("cy", 30)]);
    /// let sorted = people.sort_by(|a, b| {
    ///     Dir::Desc.apply(a.1.cmp(&b.1)).then_with(|| a.0.cmp(b.0))
    /// });
    /// assert_eq!(sorted.into_vec(), vec![("bo", 30), ("cy", 30), ("al", 25)]);
    /// ```
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut items = self.as_slice().to_vec();
        items.sort_by(|a, b| compare(a, b));
        Sequence::from(items)
    }

    fn sort_by_cached<K, F, C>(&self, selector: F, compare: C) -> Self
    where
        F: Fn(&T) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        let mut keyed: Vec<(K, &T)> = self.iter().map(|item| (selector(item), item)).collect();
        keyed.sort_by(|a, b| compare(&a.0, &b.0));
        keyed.into_iter().map(|(_, item)| item.clone()).collect()
    }
}
