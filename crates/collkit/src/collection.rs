//! Assorted helpers for slices, stacks and maps.

use crate::{
    error::{Error, Result},
    order::Comparator,
};
use indexmap::{IndexMap, IndexSet};
use std::hash::{BuildHasher, Hash};

/// Removes duplicates, keeping the first occurrence of each element in its
/// original position.
pub fn distinct<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    values
        .iter()
        .collect::<IndexSet<&T>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Returns `values[start..end]` after normalizing the bounds.
///
/// Reversed bounds are swapped and `end` is clamped to the length.  Returns
/// `None` if `values` is empty, or if `end` lies past the end and `start` is
/// not a valid index.  An empty range ending at the length is `Some(&[])`.
pub fn sub<T>(values: &[T], start: usize, end: usize) -> Option<&[T]> {
    if values.is_empty() {
        return None;
    }
    let (start, end) = if start > end {
        (end, start)
    } else {
        (start, end)
    };
    let len = values.len();
    if end > len && start >= len {
        return None;
    }

    Some(&values[start..end.min(len)])
}

/// Splits `values` into consecutive chunks of `size` elements; the last
/// chunk may be shorter.
pub fn split<T>(values: &[T], size: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone,
{
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    Ok(values.chunks(size).map(<[T]>::to_vec).collect())
}

/// Pops up to `part_size` elements off the top of `stack`, in pop order.
///
/// Returns `None` if the stack is empty.
pub fn pop_part<T>(stack: &mut Vec<T>, part_size: usize) -> Option<Vec<T>> {
    if stack.is_empty() {
        return None;
    }

    let split_at = stack.len().saturating_sub(part_size);
    let mut part = stack.split_off(split_at);
    part.reverse();
    Some(part)
}

/// Returns a sorted copy of `values`.  The sort is stable.
pub fn sorted_by<T, C>(values: &[T], comparator: C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut sorted = values.to_vec();
    sorted.sort_by(|left, right| comparator.compare(left, right));
    sorted
}

/// Sorts key/value pairs by value, keeping pairs with equal values in their
/// original order.
pub fn sort_entries_by_value<K, V, I>(entries: I) -> Vec<(K, V)>
where
    V: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut entries: Vec<(K, V)> = entries.into_iter().collect();
    entries.sort_by(|(_, left), (_, right)| left.cmp(right));
    entries
}

/// Number of elements for which `predicate` holds.
pub fn count_matching<I, P>(values: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    values.into_iter().filter(|value| predicate(value)).count()
}

/// Looks up each key in `map`, returning `None` at the position of keys that
/// are not present.
pub fn values_of_keys<'a, K, V, S, I>(map: &'a IndexMap<K, V, S>, keys: I) -> Vec<Option<&'a V>>
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = &'a K>,
{
    keys.into_iter().map(|key| map.get(key)).collect()
}

/// Appends the elements of `other` that `list` does not contain yet.
///
/// Returns the number of appended elements.
pub fn add_all_if_absent<T>(list: &mut Vec<T>, other: &[T]) -> usize
where
    T: PartialEq + Clone,
{
    let before = list.len();
    for value in other {
        if !list.contains(value) {
            list.push(value.clone());
        }
    }
    list.len() - before
}

#[cfg(test)]
mod tests {
    use super::{
        add_all_if_absent, count_matching, distinct, pop_part, sort_entries_by_value, sorted_by,
        split, sub, values_of_keys,
    };
    use crate::{error::Error, order::Reversed, zip, Natural};
    use pretty_assertions::assert_eq;

    #[test]
    fn distinct_keeps_first_occurrence() {
        assert_eq!(vec![3, 1, 2], distinct(&[3, 1, 3, 2, 1]));
        assert!(distinct::<u8>(&[]).is_empty());
    }

    #[test]
    fn sub_normalizes_bounds() {
        let values = [0, 1, 2, 3, 4];
        assert_eq!(Some(&[1, 2][..]), sub(&values, 1, 3));
        assert_eq!(Some(&[1, 2][..]), sub(&values, 3, 1));
        assert_eq!(Some(&[3, 4][..]), sub(&values, 3, 100));
        assert_eq!(Some(&[][..]), sub(&values, 2, 2));
        assert_eq!(None, sub(&values, 5, 9));
        assert_eq!(None, sub::<u8>(&[], 0, 1));
    }

    #[test]
    fn sub_empty_range_at_end() {
        let values = [0, 1, 2, 3, 4];
        assert_eq!(Some(&[][..]), sub(&values, 5, 5));
        assert_eq!(Some(&[3, 4][..]), sub(&values, 5, 3));
        assert_eq!(None, sub(&values, 5, 6));
        assert_eq!(None, sub(&values, 7, 7));
        assert_eq!(None, sub::<u8>(&[], 0, 0));
    }

    #[test]
    fn split_into_chunks() {
        assert_eq!(
            vec![vec![1, 2], vec![3, 4], vec![5]],
            split(&[1, 2, 3, 4, 5], 2).unwrap()
        );
        assert!(split::<u8>(&[], 3).unwrap().is_empty());
        assert_eq!(Err(Error::InvalidChunkSize), split(&[1], 0));
    }

    #[test]
    fn pop_part_from_stack() {
        let mut stack = vec![1, 2, 3, 4, 5];
        assert_eq!(Some(vec![5, 4]), pop_part(&mut stack, 2));
        assert_eq!(vec![1, 2, 3], stack);
        assert_eq!(Some(vec![3, 2, 1]), pop_part(&mut stack, 10));
        assert!(stack.is_empty());
        assert_eq!(None, pop_part(&mut stack, 1));
    }

    #[test]
    fn sorting_helpers() {
        let values = [3, 1, 2];
        assert_eq!(vec![1, 2, 3], sorted_by(&values, Natural));
        assert_eq!(vec![3, 2, 1], sorted_by(&values, Reversed(Natural)));
        assert_eq!([3, 1, 2], values);

        assert_eq!(
            vec![("b", 1), ("d", 1), ("a", 2), ("c", 3)],
            sort_entries_by_value([("c", 3), ("b", 1), ("a", 2), ("d", 1)])
        );
    }

    #[test]
    fn count_with_predicate() {
        let values = [1, 3, 4, 3];
        assert_eq!(4, count_matching(values, |_| true));
        assert_eq!(3, count_matching(values, |&value| value > 1));
    }

    #[test]
    fn lookup_values() {
        let map = zip(["a", "b", "c"], [1, 2, 3]);
        assert_eq!(
            vec![Some(&3), None, Some(&1)],
            values_of_keys(&map, &["c", "x", "a"])
        );
    }

    #[test]
    fn append_missing() {
        let mut list = vec![1, 2];
        assert_eq!(2, add_all_if_absent(&mut list, &[2, 3, 1, 4]));
        assert_eq!(vec![1, 2, 3, 4], list);
    }
}
