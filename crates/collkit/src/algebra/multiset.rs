use indexmap::{map::Entry, IndexMap};
use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
    iter::repeat,
    num::NonZeroUsize,
};

/// A multiset: a collection in which every element has a multiplicity.
///
/// Elements are compared with their `Eq` and `Hash` implementations, never
/// by identity.  An element that is not in the multiset has multiplicity 0
/// and no entry; entries with a zero count are never stored.
///
/// Iteration visits distinct elements in the order in which they were first
/// inserted.  Equality ignores that order: two multisets are equal when every
/// element has the same multiplicity in both.
#[derive(Clone)]
pub struct Multiset<T> {
    counts: IndexMap<T, NonZeroUsize>,
    len: usize,
}

impl<T> Multiset<T> {
    /// Total number of elements, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct elements.
    #[inline]
    pub fn support_size(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over `(element, multiplicity)` pairs in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (value, count.get()))
    }

    /// Iterates over the elements, repeating each one as many times as it
    /// occurs.  Copies of the same element are adjacent.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(value, count)| repeat(value).take(count.get()))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }
}

impl<T> Multiset<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: IndexMap::with_capacity(capacity),
            len: 0,
        }
    }

    /// Converts the multiset into its occurrence-count mapping.
    pub fn into_counts(self) -> IndexMap<T, usize> {
        self.counts
            .into_iter()
            .map(|(value, count)| (value, count.get()))
            .collect()
    }

    /// Adds one occurrence of `value`.
    #[inline]
    pub fn insert(&mut self, value: T) {
        self.insert_many(value, 1);
    }

    /// Adds `count` occurrences of `value`.  Adding zero occurrences is a
    /// no-op and does not create an entry.
    pub fn insert_many(&mut self, value: T, count: usize) {
        let Some(count) = NonZeroUsize::new(count) else {
            return;
        };

        match self.counts.entry(value) {
            Entry::Occupied(mut entry) => {
                let current = entry.get_mut();
                *current = current.saturating_add(count.get());
            }
            Entry::Vacant(entry) => {
                entry.insert(count);
            }
        }
        self.len += count.get();
    }

    /// Removes one occurrence of `value`, dropping its entry once the count
    /// reaches zero.  Returns `false` if `value` was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(count) = self.counts.get_mut(value) else {
            return false;
        };

        match NonZeroUsize::new(count.get() - 1) {
            Some(decremented) => *count = decremented,
            None => {
                // `shift_remove` keeps the first-insertion order of the rest.
                self.counts.shift_remove(value);
            }
        }
        self.len -= 1;
        true
    }

    /// Multiplicity of `value`; 0 when absent.
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).map_or(0, |count| count.get())
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }

    /// Returns `true` if no element occurs in both multisets.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.support_size() <= other.support_size() {
            (self, other)
        } else {
            (other, self)
        };
        !small.counts.keys().any(|value| large.contains(value))
    }
}

impl<T> Multiset<T>
where
    T: Eq + Hash + Clone,
{
    /// Combines two multisets element by element.
    ///
    /// Visits the distinct elements of `self` in order, followed by the
    /// elements that only occur in `other`, and gives each one the
    /// multiplicity `combine(count_in_self, count_in_other)`.
    fn combine<F>(&self, other: &Self, combine: F) -> Self
    where
        F: Fn(usize, usize) -> usize,
    {
        let mut result = Self::with_capacity(self.support_size().max(other.support_size()));

        for (value, count) in self.iter() {
            result.insert_many(value.clone(), combine(count, other.count(value)));
        }
        for (value, count) in other.iter() {
            if !self.contains(value) {
                result.insert_many(value.clone(), combine(0, count));
            }
        }

        result
    }

    /// Each element occurs `max(count_self, count_other)` times.
    pub fn union(&self, other: &Self) -> Self {
        self.combine(other, usize::max)
    }

    /// Each element occurs `min(count_self, count_other)` times.
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        self.combine(other, usize::min)
    }

    /// Each element occurs `|count_self - count_other|` times.
    ///
    /// This is the symmetric difference with multiplicities, except that
    /// when either side is empty the result is empty, not the other side.
    pub fn disjunction(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        self.combine(other, usize::abs_diff)
    }

    /// Expands the multiset into a vector in which each element is repeated
    /// as many times as it occurs.
    pub fn into_vec(self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len);
        for (value, count) in self.counts {
            result.extend(repeat(value).take(count.get()));
        }
        result
    }
}

impl<T> Default for Multiset<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Multiset<T>
where
    T: Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T> Extend<T> for Multiset<T>
where
    T: Eq + Hash,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> PartialEq for Multiset<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.support_size() == other.support_size()
            && self.iter().all(|(value, count)| other.count(value) == count)
    }
}

impl<T> Eq for Multiset<T> where T: Eq + Hash {}

impl<T> Debug for Multiset<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Display for Multiset<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (value, count)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}=>{count}")?;
        }
        f.write_str("}")
    }
}

/// Builds the occurrence-count mapping of `values`.
///
/// Each distinct element maps to the number of times it occurs; keys are in
/// order of first occurrence.  For example `[a, b, c, c, c]` produces
/// `{a: 1, b: 1, c: 3}`.
pub fn count_map<I>(values: I) -> IndexMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    values.into_iter().collect::<Multiset<_>>().into_counts()
}
