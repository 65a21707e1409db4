//! Folding a sequence into a single value.

use crate::error::{QueryError, Result};
use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Folds the sequence left to right, seeded by its first element.
    ///
    /// For every later element `e`, the running value becomes
    /// `accumulator(e, running)`. An empty sequence has no seed and fails
    /// with [`QueryError::EmptySequence`].
    ///
    /// ```
    /// use standout_query::Sequence;
    ///
    /// let names = Sequence::from(vec!["bill".to_string(), "bob".into(), "brian".into()]);
    /// let joined = names.aggregate(|name, acc| format!("{acc}, {name}")).unwrap();
    /// assert_eq!(joined, "bill, bob, brian");
    /// ```
    pub fn aggregate<F>(&self, accumulator: F) -> Result<T>
    where
        F: Fn(&T, T) -> T,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| QueryError::empty("aggregate"))?;
        Ok(rest
            .iter()
            .fold(first.clone(), |running, item| accumulator(item, running)))
    }

    /// Like [`aggregate`](Self::aggregate) with a fallible accumulator.
    ///
    /// The caller's error type must absorb [`QueryError`] so the empty case
    /// can be reported through the same channel.
    pub fn try_aggregate<E, F>(&self, accumulator: F) -> std::result::Result<T, E>
    where
        E: From<QueryError>,
        F: Fn(&T, T) -> std::result::Result<T, E>,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| QueryError::empty("try_aggregate"))?;
        rest.iter()
            .try_fold(first.clone(), |running, item| accumulator(item, running))
    }
}

impl<T> Sequence<T> {
    /// Folds the sequence left to right starting from `seed`.
    ///
    /// Never fails; an empty sequence returns the seed.
    pub fn fold<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: Fn(&T, A) -> A,
    {
        self.iter()
            .fold(seed, |running, item| accumulator(item, running))
    }
}
