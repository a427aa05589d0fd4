//! Multiset algebra over plain sequences.
//!
//! The functions in this module treat their inputs as multisets: the order
//! of the input is irrelevant but the number of times each element occurs is
//! not.  Every function returns a new vector and leaves its inputs untouched.
//!
//! # Output order
//!
//! When both inputs are non-empty, results list the copies of each element
//! next to each other.  Elements appear in the order of their first
//! occurrence in the left input, followed by the elements that only occur in
//! the right input, again in order of first occurrence.  The order is
//! therefore deterministic for a given pair of inputs.
//!
//! [`union`] with one empty input returns the other input unchanged, in its
//! original order.
//!
//! # Examples
//!
//! ```
//! use collkit::algebra::{disjunction, intersection, union};
//!
//! let left = ["a", "b", "c", "c", "c"];
//! let right = ["a", "b", "c", "c"];
//!
//! assert_eq!(union(&left, &right), ["a", "b", "c", "c", "c"]);
//! assert_eq!(intersection(&left, &right), ["a", "b", "c", "c"]);
//! assert_eq!(disjunction(&left, &right), ["c"]);
//! ```


mod multiset;

pub use multiset::{count_map, Multiset};

use std::{collections::HashSet, hash::Hash};

fn counts<T>(values: &[T]) -> Multiset<&T>
where
    T: Eq + Hash,
{
    values.iter().collect()
}

fn cloned<T>(multiset: Multiset<&T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    multiset.into_vec().into_iter().cloned().collect()
}

/// Multiset union: every element occurs `max(count_left, count_right)` times.
///
/// If one side is empty the other side is returned as is, in its original
/// order.
pub fn union<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    cloned(counts(left).union(&counts(right)))
}

/// Left fold of [`union`] over `left`, `right` and every sequence in `rest`.
pub fn union_all<T>(left: &[T], right: &[T], rest: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    rest.iter()
        .fold(union(left, right), |acc, next| union(&acc, next))
}

/// Multiset intersection: every element occurs `min(count_left,
/// count_right)` times.  Empty if either side is empty.
pub fn intersection<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    cloned(counts(left).intersection(&counts(right)))
}

/// Left fold of [`intersection`] over `left`, `right` and every sequence in
/// `rest`.
///
/// Stops as soon as an intermediate result is empty: the remaining inputs
/// are never examined.
pub fn intersection_all<T>(left: &[T], right: &[T], rest: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut result = intersection(left, right);
    for next in rest {
        if result.is_empty() {
            break;
        }
        result = intersection(&result, next);
    }
    result
}

/// Symmetric difference with multiplicities: every element occurs
/// `|count_left - count_right|` times.
///
/// Unlike the textbook symmetric difference, the result is empty when either
/// side is empty, mirroring [`intersection`].  Callers that need the
/// non-empty side in that case must handle it themselves.
pub fn disjunction<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    cloned(counts(left).disjunction(&counts(right)))
}

/// Returns `true` if at least one value occurs in both sequences.
///
/// The shorter sequence is scanned against a hash set built from the longer
/// one, stopping at the first common value.
pub fn contains_any<T>(left: &[T], right: &[T]) -> bool
where
    T: Eq + Hash,
{
    if left.is_empty() || right.is_empty() {
        return false;
    }

    let (outer, inner) = if left.len() < right.len() {
        (left, right)
    } else {
        (right, left)
    };
    let inner: HashSet<&T> = inner.iter().collect();

    outer.iter().any(|value| inner.contains(value))
}
