//! Ordered sequence container and its core query operators.
//!
//! [`Sequence`] is an immutable, ordered list. Every operator borrows the
//! receiver and returns a freshly allocated result, so a sequence can feed any
//! number of pipelines without being consumed or modified.

use crate::error::{QueryError, Result};
use crate::predicate::Predicate;
use crate::traits::Variant;

/// An immutable, ordered collection of elements.
///
/// Duplicates are allowed and iteration order is insertion order. Operators
/// preserve that order unless their contract says otherwise (sorting,
/// reversing, grouping).
///
/// # Example
///
/// ```
/// use standout_query::Sequence;
///
/// let words = Sequence::from(vec!["pear", "fig", "apple", "kiwi"]);
///
/// let short: Vec<_> = words
///     .filter(|w| w.len() <= 4)
///     .select(|w| w.to_uppercase())
///     .into_vec();
///
/// assert_eq!(short, vec!["PEAR", "FIG", "KIWI"]);
/// assert_eq!(words.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[doc(alias = "element_at")]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns the first element, or `None` if the sequence is empty.
    #[doc(alias = "first_or_nil")]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[doc(alias = "last_or_nil")]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Finds the first element satisfying `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    /// Finds the index of the first element satisfying `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().position(|item| predicate(item))
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Returns `true` as soon as one element satisfies `condition`.
    ///
    /// An empty sequence never satisfies it, so the result is `false`.
    pub fn any<P>(&self, condition: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().any(|item| condition(item))
    }

    /// Returns `false` as soon as one element fails `condition`.
    ///
    /// An empty sequence has no failing element, so the result is `true`.
    pub fn all<P>(&self, condition: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().all(|item| condition(item))
    }

    /// Counts the elements satisfying `condition`. Always scans the whole
    /// sequence.
    pub fn count<P>(&self, condition: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| condition(*item)).count()
    }

    // ========================================================================
    // Projections
    // ========================================================================

    /// Maps every element through `selector`, keeping length and order.
    pub fn select<U, F>(&self, selector: F) -> Sequence<U>
    where
        F: Fn(&T) -> U,
    {
        self.items.iter().map(selector).collect()
    }

    /// Maps every element through a fallible `selector`.
    ///
    /// The first error aborts the projection and is returned as-is.
    pub fn try_select<U, E, F>(&self, selector: F) -> std::result::Result<Sequence<U>, E>
    where
        F: Fn(&T) -> std::result::Result<U, E>,
    {
        self.items.iter().map(selector).collect()
    }

    /// Projects each element to a collection and flattens the results one
    /// level, in source order.
    ///
    /// ```
    /// use standout_query::Sequence;
    ///
    /// let lines = Sequence::from(vec!["a b", "", "c"]);
    /// let words = lines.select_many(|l| l.split_whitespace().collect::<Vec<_>>());
    /// assert_eq!(words.into_vec(), vec!["a", "b", "c"]);
    /// ```
    #[doc(alias = "flat_map")]
    pub fn select_many<U, I, F>(&self, selector: F) -> Sequence<U>
    where
        F: Fn(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        self.items.iter().flat_map(selector).collect()
    }

    /// Keeps the elements that narrow to `U`, in order.
    ///
    /// Narrowing goes through [`Variant`], which is implemented for boxed
    /// `dyn Any` values and can be implemented for tagged enums.
    pub fn of_type<U>(&self) -> Sequence<U>
    where
        T: Variant<U>,
        U: Clone,
    {
        self.items
            .iter()
            .filter_map(|item| Variant::<U>::as_variant(item).cloned())
            .collect()
    }
}

impl<T: Clone> Sequence<T> {
    // ========================================================================
    // Filtering
    // ========================================================================

    /// Keeps the elements for which `predicate` is true, in source order.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Like [`filter`](Self::filter) with a fallible predicate.
    ///
    /// The first error aborts the scan; no partial result is returned.
    pub fn try_filter<E, P>(&self, predicate: P) -> std::result::Result<Self, E>
    where
        P: Fn(&T) -> std::result::Result<bool, E>,
    {
        let mut kept = Vec::new();
        for item in &self.items {
            if predicate(item)? {
                kept.push(item.clone());
            }
        }
        Ok(Sequence::from(kept))
    }

    /// Keeps the elements matched by a composed [`Predicate`].
    pub fn matching(&self, predicate: &Predicate<'_, T>) -> Self {
        self.filter(predicate.as_fn())
    }

    // ========================================================================
    // Slicing
    // ========================================================================

    /// Drops the first `n` elements. Skipping past the end yields an empty
    /// sequence.
    pub fn skip(&self, n: usize) -> Self {
        self.items.iter().skip(n).cloned().collect()
    }

    /// Keeps at most the first `n` elements.
    pub fn take(&self, n: usize) -> Self {
        self.items.iter().take(n).cloned().collect()
    }

    /// Splits the sequence into consecutive runs of `size` elements; the last
    /// run may be shorter.
    ///
    /// Fails with [`QueryError::InvalidArgument`] when `size` is zero.
    pub fn chunk(&self, size: usize) -> Result<Sequence<Sequence<T>>> {
        if size == 0 {
            return Err(QueryError::invalid("chunk", "size must be greater than zero"));
        }
        Ok(self
            .items
            .chunks(size)
            .map(|run| Sequence::from(run.to_vec()))
            .collect())
    }

    // ========================================================================
    // Combination
    // ========================================================================

    /// Appends `other` after this sequence. Duplicates are kept.
    pub fn concat(&self, other: &Sequence<T>) -> Self {
        self.items
            .iter()
            .chain(other.items.iter())
            .cloned()
            .collect()
    }

    /// Returns the elements in reverse order.
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Sequence {
            items: items.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Sequence {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: String,
        priority: i64,
        tags: Vec<&'static str>,
    }

    fn task(name: &str, priority: i64, tags: &[&'static str]) -> Task {
        Task {
            name: name.to_string(),
            priority,
            tags: tags.to_vec(),
        }
    }

    fn sample_tasks() -> Sequence<Task> {
        Sequence::from(vec![
            task("Write docs", 3, &["docs"]),
            task("Fix bug", 5, &["code", "urgent"]),
            task("Old task", 1, &[]),
            task("Review", 5, &["code"]),
        ])
    }

    #[test]
    fn filter_keeps_source_order() {
        let tasks = sample_tasks();
        let urgent = tasks.filter(|t| t.priority >= 3);

        let names: Vec<_> = urgent.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Write docs", "Fix bug", "Review"]);
    }

    #[test]
    fn filter_empty_input() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.filter(|_| true).is_empty());
    }

    #[test]
    fn filter_leaves_source_untouched() {
        let tasks = sample_tasks();
        let before = tasks.clone();
        let _ = tasks.filter(|t| t.priority > 100);
        assert_eq!(tasks, before);
    }

    #[test]
    fn select_same_length_and_order() {
        let priorities = sample_tasks().select(|t| t.priority);
        assert_eq!(priorities.into_vec(), vec![3, 5, 1, 5]);
    }

    #[test]
    fn select_many_flattens_one_level() {
        let tags = sample_tasks().select_many(|t| t.tags.clone());
        assert_eq!(tags.into_vec(), vec!["docs", "code", "urgent", "code"]);
    }

    #[test]
    fn select_many_nested_stays_nested() {
        let seq = Sequence::from(vec![vec![vec![1], vec![2]], vec![vec![3]]]);
        let flat = seq.select_many(|v| v.clone());
        assert_eq!(flat.into_vec(), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn try_select_stops_on_error() {
        let seq = Sequence::from(vec!["1", "2", "x", "4"]);
        let parsed = seq.try_select(|s| s.parse::<i32>());
        assert!(parsed.is_err());

        let ok = Sequence::from(vec!["1", "2"]).try_select(|s| s.parse::<i32>());
        assert_eq!(ok.unwrap().into_vec(), vec![1, 2]);
    }

    #[test]
    fn try_filter_propagates_error() {
        let seq = Sequence::from(vec![1, 2, 3]);
        let result: std::result::Result<_, &str> =
            seq.try_filter(|n| if *n == 2 { Err("boom") } else { Ok(true) });
        assert_eq!(result, Err("boom"));

        let kept: std::result::Result<_, &str> = seq.try_filter(|n| Ok(n % 2 == 1));
        assert_eq!(kept.unwrap().into_vec(), vec![1, 3]);
    }

    #[test]
    fn first_and_last() {
        let tasks = sample_tasks();
        assert_eq!(tasks.first().map(|t| t.name.as_str()), Some("Write docs"));
        assert_eq!(tasks.last().map(|t| t.name.as_str()), Some("Review"));

        let empty: Sequence<Task> = Sequence::new();
        assert!(empty.first().is_none());
        assert!(empty.last().is_none());
    }

    #[test]
    fn skip_and_take_bounds() {
        let seq = Sequence::from(vec![1, 2, 3]);
        assert_eq!(seq.skip(0), seq);
        assert!(seq.take(0).is_empty());
        assert!(seq.skip(3).is_empty());
        assert!(seq.skip(10).is_empty());
        assert_eq!(seq.take(3), seq);
        assert_eq!(seq.take(10), seq);
        assert_eq!(seq.skip(1).into_vec(), vec![2, 3]);
        assert_eq!(seq.take(2).into_vec(), vec![1, 2]);
    }

    #[test]
    fn any_and_all() {
        let tasks = sample_tasks();
        assert!(tasks.any(|t| t.priority == 5));
        assert!(!tasks.any(|t| t.priority > 5));
        assert!(tasks.all(|t| t.priority >= 1));
        assert!(!tasks.all(|t| t.priority >= 3));
    }

    #[test]
    fn any_short_circuits() {
        let seq = Sequence::from(vec![1, 2, 3, 4]);
        let calls = std::cell::Cell::new(0);
        assert!(seq.any(|n| {
            calls.set(calls.get() + 1);
            *n == 2
        }));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn all_short_circuits() {
        let seq = Sequence::from(vec![1, 2, 3, 4]);
        let calls = std::cell::Cell::new(0);
        assert!(!seq.all(|n| {
            calls.set(calls.get() + 1);
            *n < 2
        }));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn count_scans_everything() {
        let seq = Sequence::from(vec![1, 2, 3, 4]);
        let calls = std::cell::Cell::new(0);
        let evens = seq.count(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });
        assert_eq!(evens, 2);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn find_and_position() {
        let tasks = sample_tasks();
        assert_eq!(
            tasks.find(|t| t.priority == 5).map(|t| t.name.as_str()),
            Some("Fix bug")
        );
        assert_eq!(tasks.position(|t| t.priority == 1), Some(2));
        assert!(tasks.find(|t| t.priority == 0).is_none());
    }

    #[test]
    fn concat_keeps_duplicates() {
        let a = Sequence::from(vec![1, 2]);
        let b = Sequence::from(vec![2, 3]);
        assert_eq!(a.concat(&b).into_vec(), vec![1, 2, 2, 3]);
        assert_eq!(a.concat(&Sequence::new()), a);
    }

    #[test]
    fn reverse_order() {
        let seq = Sequence::from(vec![1, 2, 3]);
        assert_eq!(seq.reverse().into_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn chunk_sizes() {
        let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
        let runs: Vec<Vec<i32>> = seq
            .chunk(2)
            .unwrap()
            .select(|r| r.clone().into_vec())
            .into_vec();
        assert_eq!(runs, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn chunk_zero_is_invalid() {
        let seq = Sequence::from(vec![1]);
        assert!(matches!(
            seq.chunk(0),
            Err(QueryError::InvalidArgument {
                operator: "chunk",
                ..
            })
        ));
    }

    #[test]
    fn contains_and_get() {
        let seq = Sequence::from(["a", "b"]);
        assert!(seq.contains(&"b"));
        assert!(!seq.contains(&"z"));
        assert_eq!(seq.get(1), Some(&"b"));
        assert_eq!(seq.get(2), None);
    }
}
