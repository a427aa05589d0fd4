//! Comparison functions used to order elements in the bounded queue and the
//! paginated sort-merge.
//!
//! A [`Comparator`] is any value that can compare two elements.  Closures of
//! type `Fn(&T, &T) -> Ordering` are comparators, as are [`Natural`] (the
//! element type's own [`Ord`]), [`Reversed`], [`ByKey`] and [`WithCmpFunc`],
//! which lifts a type-level [`CmpFunc`] into a value.
//!
//! ## Correctness
//!
//! A comparator must establish a _total_ order over the elements it is
//! given.  Elements it considers `Equal` are kept in insertion order by every
//! algorithm in this crate.

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

/// A value that orders elements of type `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` sorts strictly before `right`.
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders elements by their [`Ord`] implementation.
///
/// This is the comparator to use when the caller does not supply one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Reverses the order established by the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Orders elements by a key extracted with `F`.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<F> Debug for ByKey<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

/// Custom comparison function fixed at the type level.
pub trait CmpFunc<T> {
    fn cmp(left: &T, right: &T) -> Ordering;
}

/// Comparator that delegates to the type-level comparison function `F`.
pub struct WithCmpFunc<F> {
    phantom: PhantomData<fn() -> F>,
}

impl<F> WithCmpFunc<F> {
    pub const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<F> Default for WithCmpFunc<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for WithCmpFunc<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for WithCmpFunc<F> {}

impl<F> Debug for WithCmpFunc<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithCmpFunc").finish()
    }
}

impl<T, F> Comparator<T> for WithCmpFunc<F>
where
    F: CmpFunc<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        F::cmp(left, right)
    }
}

/// Borrows a comparator so that it can be handed to code that takes
/// comparators by value.
pub(crate) struct Borrowed<'a, C: ?Sized>(pub(crate) &'a C);

impl<T, C> Comparator<T> for Borrowed<'_, C>
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(left, right)
    }
}
