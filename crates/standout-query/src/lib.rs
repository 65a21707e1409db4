//! Query - Fluent query operators for in-memory sequences and dictionaries.
//!
//! Query provides eager, composable operators over two containers:
//!
//! - [`Sequence`]: an ordered list that may hold duplicates
//! - [`Dictionary`]: a mapping from unique keys to values
//!
//! Each operator borrows its source, runs caller-supplied closures
//! (selectors, predicates, accumulators, comparators) and returns a new
//! container or scalar. Sources are never modified, so one sequence can feed
//! any number of pipelines.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_query::Sequence;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Task {
//!     name: String,
//!     project: &'static str,
//!     priority: i32,
//!     archived: bool,
//! }
//!
//! let tasks = Sequence::from(vec![
//!     Task { name: "Write docs".into(), project: "web", priority: 3, archived: false },
//!     Task { name: "Fix bug".into(), project: "api", priority: 5, archived: false },
//!     Task { name: "Old task".into(), project: "web", priority: 1, archived: true },
//!     Task { name: "Add cache".into(), project: "api", priority: 4, archived: false },
//! ]);
//!
//! // Filter, order and project.
//! let open: Vec<String> = tasks
//!     .filter(|t| !t.archived)
//!     .sort_by_key_desc(|t| t.priority)
//!     .select(|t| t.name.clone())
//!     .into_vec();
//! assert_eq!(open, vec!["Fix bug", "Add cache", "Write docs"]);
//!
//! // Group into a dictionary, then summarize each group.
//! let per_project = tasks
//!     .group_by(|t| t.project)
//!     .select(|_, group| group.fold(0, |t, total| total + t.priority));
//! assert_eq!(per_project.get("api"), Some(&9));
//! assert_eq!(per_project.get("web"), Some(&4));
//! ```
//!
//! # Operator Semantics
//!
//! | Operator | Empty input | Notes |
//! |----------|-------------|-------|
//! | `filter`, `select`, `select_many`, `of_type` | empty | source order kept |
//! | `sort*`, `order_by` | empty | stable; descending keeps ties in source order |
//! | `distinct`, `distinct_by` | empty | first occurrence kept |
//! | `group_by` | empty dictionary | groups keep source order |
//! | `to_dictionary*` | empty dictionary | later element wins on key collision |
//! | `aggregate` | [`QueryError::EmptySequence`] | seeded by the first element |
//! | `first`, `last` | `None` | never fails |
//! | `skip`, `take` | empty | counts past the end are clamped |
//! | `any` | `false` | stops at the first match |
//! | `all` | `true` | stops at the first failure |
//! | `count` | `0` | always scans everything |
//! | `Dictionary::merge` | receiver copy | argument wins on key collision |
//!
//! # Errors
//!
//! Operators that can fail return [`Result`]. Closures passed to the `try_*`
//! variants may fail with their own error type; the first failure aborts the
//! operator and is returned unchanged, with no partial result.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Sequence`] (as a list) and
//!   [`Dictionary`] (as a map).

mod aggregate;
mod dictionary;
mod error;
mod grouping;
mod ordering;
mod predicate;
mod sequence;
mod traits;

// Re-export public API
pub use dictionary::{Dictionary, Pairs};
pub use error::{QueryError, Result};
pub use ordering::{compare_partial, Dir};
pub use predicate::Predicate;
pub use sequence::Sequence;
pub use traits::Variant;
