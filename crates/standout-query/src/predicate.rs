//! Composable conditions.
//!
//! A [`Predicate`] wraps a boolean test so it can be built once, combined
//! with others, and reused across queries. Combination follows fixed group
//! semantics:
//!
//! ```text
//! all_of([])  = true     all_of(ps) = every p matches
//! any_of([])  = false    any_of(ps) = at least one p matches
//! ```

use std::ops::Not;

use regex::Regex;

use crate::error::Result;

/// A reusable boolean test over `T`.
///
/// # Example
///
/// ```
/// use standout_query::{Predicate, Sequence};
///
/// #[derive(Clone)]
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// let tasks = Sequence::from(vec![
///     Task { name: "Fix login bug".into(), priority: 5 },
///     Task { name: "Write docs".into(), priority: 2 },
///     Task { name: "Fix typo".into(), priority: 1 },
/// ]);
///
/// let urgent_fix = Predicate::starts_with(|t: &Task| t.name.as_str(), "Fix")
///     .and(Predicate::new(|t: &Task| t.priority >= 3));
///
/// let picked = tasks.filter(urgent_fix.as_fn());
/// assert_eq!(picked.len(), 1);
/// assert_eq!(picked.first().unwrap().name, "Fix login bug");
/// ```
pub struct Predicate<'a, T: ?Sized> {
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized> Predicate<'a, T> {
    /// Evaluates the predicate.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }

    /// Borrows the predicate as a closure, for use with any operator that
    /// takes one.
    pub fn as_fn(&self) -> &(dyn Fn(&T) -> bool + 'a) {
        &*self.test
    }
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    /// Wraps a closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Predicate {
            test: Box::new(test),
        }
    }

    /// A predicate that matches everything.
    pub fn always() -> Self {
        Predicate::new(|_| true)
    }

    /// A predicate that matches nothing.
    pub fn never() -> Self {
        Predicate::new(|_| false)
    }

    /// Matches when both predicates match. `other` is not evaluated when
    /// `self` fails.
    pub fn and(self, other: Predicate<'a, T>) -> Self {
        Predicate::new(move |item| self.test(item) && other.test(item))
    }

    /// Matches when either predicate matches. `other` is not evaluated when
    /// `self` matches.
    pub fn or(self, other: Predicate<'a, T>) -> Self {
        Predicate::new(move |item| self.test(item) || other.test(item))
    }

    /// Matches when every predicate matches. Empty input matches everything.
    pub fn all_of<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a, T>>,
    {
        let predicates: Vec<_> = predicates.into_iter().collect();
        Predicate::new(move |item| predicates.iter().all(|p| p.test(item)))
    }

    /// Matches when at least one predicate matches. Empty input matches
    /// nothing.
    pub fn any_of<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a, T>>,
    {
        let predicates: Vec<_> = predicates.into_iter().collect();
        Predicate::new(move |item| predicates.iter().any(|p| p.test(item)))
    }

    // ========================================================================
    // Text predicates
    // ========================================================================

    /// Matches when the selected text matches the regular expression.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn matches_regex<F>(selector: F, pattern: &str) -> Result<Self>
    where
        F: for<'x> Fn(&'x T) -> &'x str + 'a,
    {
        let regex = Regex::new(pattern)?;
        Ok(Predicate::new(move |item| regex.is_match(selector(item))))
    }

    /// Matches when the selected text contains `needle`.
    pub fn contains_text<F>(selector: F, needle: impl Into<String>) -> Self
    where
        F: for<'x> Fn(&'x T) -> &'x str + 'a,
    {
        let needle = needle.into();
        Predicate::new(move |item| selector(item).contains(needle.as_str()))
    }

    /// Matches when the selected text starts with `prefix`.
    pub fn starts_with<F>(selector: F, prefix: impl Into<String>) -> Self
    where
        F: for<'x> Fn(&'x T) -> &'x str + 'a,
    {
        let prefix = prefix.into();
        Predicate::new(move |item| selector(item).starts_with(prefix.as_str()))
    }

    /// Matches when the selected text ends with `suffix`.
    pub fn ends_with<F>(selector: F, suffix: impl Into<String>) -> Self
    where
        F: for<'x> Fn(&'x T) -> &'x str + 'a,
    {
        let suffix = suffix.into();
        Predicate::new(move |item| selector(item).ends_with(suffix.as_str()))
    }
}

impl<'a, T: ?Sized + 'a> Not for Predicate<'a, T> {
    type Output = Predicate<'a, T>;

    fn not(self) -> Self::Output {
        Predicate::new(move |item| !self.test(item))
    }
}

impl<T: ?Sized> std::fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::Sequence;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: String,
        priority: i64,
        archived: bool,
    }

    fn name(task: &Task) -> &str {
        &task.name
    }

    fn sample_tasks() -> Sequence<Task> {
        let task = |name: &str, priority, archived| Task {
            name: name.to_string(),
            priority,
            archived,
        };
        Sequence::from(vec![
            task("Task A", 1, false),
            task("Task B", 2, false),
            task("Urgent Task", 5, false),
            task("Critical Task", 5, true),
            task("Done Task", 3, true),
        ])
    }

    fn names(tasks: &Sequence<Task>) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn always_and_never() {
        let tasks = sample_tasks();
        assert_eq!(tasks.matching(&Predicate::always()).len(), 5);
        assert!(tasks.matching(&Predicate::never()).is_empty());
    }

    #[test]
    fn and_or_not() {
        let tasks = sample_tasks();
        let high = || Predicate::new(|t: &Task| t.priority >= 5);
        let archived = || Predicate::new(|t: &Task| t.archived);

        assert_eq!(
            names(&tasks.matching(&high().and(!archived()))),
            vec!["Urgent Task"]
        );
        assert_eq!(
            names(&tasks.matching(&high().or(archived()))),
            vec!["Urgent Task", "Critical Task", "Done Task"]
        );
    }

    #[test]
    fn and_short_circuits() {
        let second_ran = std::cell::Cell::new(false);
        let p = Predicate::never().and(Predicate::new(|_: &i32| {
            second_ran.set(true);
            true
        }));
        assert!(!p.test(&1));
        assert!(!second_ran.get());
    }

    #[test]
    fn group_semantics_for_empty_input() {
        let all: Predicate<'_, i32> = Predicate::all_of(Vec::new());
        let any: Predicate<'_, i32> = Predicate::any_of(Vec::new());
        assert!(all.test(&0));
        assert!(!any.test(&0));
    }

    #[test]
    fn all_of_and_any_of() {
        let tasks = sample_tasks();
        let p = Predicate::all_of([
            Predicate::ends_with(name, "Task"),
            Predicate::new(|t: &Task| t.priority > 2),
        ]);
        assert_eq!(
            names(&tasks.matching(&p)),
            vec!["Urgent Task", "Critical Task", "Done Task"]
        );

        let q = Predicate::any_of([
            Predicate::contains_text(name, "B"),
            Predicate::starts_with(name, "Done"),
        ]);
        assert_eq!(names(&tasks.matching(&q)), vec!["Task B", "Done Task"]);
    }

    #[test]
    fn regex_predicate() {
        let tasks = sample_tasks();
        let p = Predicate::matches_regex(name, r"^Task [AB]$").unwrap();
        assert_eq!(names(&tasks.matching(&p)), vec!["Task A", "Task B"]);
    }

    #[test]
    fn invalid_regex() {
        let result = Predicate::matches_regex(name, "[invalid");
        assert!(matches!(result, Err(QueryError::InvalidRegex(_))));
    }

    #[test]
    fn drives_other_operators() {
        let tasks = sample_tasks();
        let archived = Predicate::new(|t: &Task| t.archived);
        assert_eq!(tasks.count(archived.as_fn()), 2);
        assert!(tasks.any(archived.as_fn()));
        assert!(!tasks.all(archived.as_fn()));
    }
}
