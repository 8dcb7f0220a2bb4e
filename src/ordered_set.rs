//! Insertion-ordered set backed by a dynamic array.
//!
//! This module provides [`OrderedSet`], a mutable collection of unique values
//! that remembers the order in which values were first added. It mirrors the
//! surface of a native set type (`add`, `has`, `delete`, `clear`, `values`,
//! `keys`, `entries`, `for_each` and `size`) on top of a plain growable array.
//!
//! # Overview
//!
//! - Uniqueness is decided by `PartialEq` on the element type alone. There is
//!   no hashing and no ordering requirement, so any comparable type works.
//! - Values are kept in insertion order. Deleting a value shifts the later
//!   values left and never reorders the survivors.
//! - Up to 8 values are stored inline (`SmallVec`), so small sets never touch
//!   the heap.
//! - The backing array is private. There is no raw `push`, `splice` or index
//!   assignment that could smuggle a duplicate in.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `add` / `insert`   | O(n)       |
//! | `has`              | O(n)       |
//! | `delete`           | O(n)       |
//! | `clear`            | O(n) drop  |
//! | `size` / `len`     | O(1)       |
//! | `values` / `keys`  | O(n)       |
//! | `entries`          | O(n)       |
//! | `for_each`         | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use simple_set::OrderedSet;
//!
//! let mut set = OrderedSet::from_values(["a", "b", "b", "c"]);
//! assert_eq!(set.size(), 3);
//! assert_eq!(set.values(), vec!["a", "b", "c"]);
//!
//! // `add` returns the set, so calls chain. Duplicates are absorbed.
//! set.add("d").add("a").add("d");
//! assert_eq!(set.size(), 4);
//!
//! assert!(set.delete("b"));
//! assert!(!set.delete("b"));
//! assert_eq!(set.values(), vec!["a", "c", "d"]);
//!
//! assert_eq!(set.entries(), vec![("a", "a"), ("c", "c"), ("d", "d")]);
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;

use crate::error::DuplicateValueError;
use crate::trace::trace_event;

/// Number of values stored inline before the backing array spills to the heap.
const INLINE_CAPACITY: usize = 8;

/// Message constant for panic when the size counter drifts from the backing array.
const SIZE_INVARIANT_PANIC_MESSAGE: &str =
    "OrderedSet size counter must equal the number of stored values";

/// A set of unique values that preserves insertion order.
///
/// `OrderedSet` owns a private dynamic array of values plus a counter that
/// always equals the array's length. All operations are linear scans using
/// `PartialEq`, which makes the set usable with element types that are
/// neither `Hash` nor `Ord`.
///
/// # Type Parameters
///
/// * `T` - The element type. Most operations require `PartialEq`; snapshot
///   views additionally require `Clone`.
///
/// # Examples
///
/// ```rust
/// use simple_set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.add(3).add(1).add(2).add(1);
///
/// // Iteration follows insertion order, not value order.
/// let collected: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(collected, vec![3, 1, 2]);
/// ```
///
/// The backing array cannot be reached from outside the set:
///
/// ```compile_fail
/// use simple_set::OrderedSet;
///
/// let mut set = OrderedSet::from_values(["a"]);
/// set.elements.push("a");
/// ```
///
/// Nor can the set be assembled without going through a constructor:
///
/// ```compile_fail
/// use simple_set::OrderedSet;
///
/// let set: OrderedSet<i32> = OrderedSet { elements: Default::default(), size: 0 };
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
    size: usize,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(OrderedSet<i32>: Copy);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
            size: 0,
        }
    }

    /// Creates a new empty set with room for at least `capacity` values.
    ///
    /// Capacities up to 8 are always satisfied inline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set: OrderedSet<u64> = OrderedSet::with_capacity(64);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns the number of values in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["a", "b", "c"]);
    /// assert_eq!(set.size(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of values in the set.
    ///
    /// Alias of [`size`](Self::size) for code written against std collections.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set contains no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every value from the set.
    ///
    /// The size drops to zero and every view becomes empty. Values added
    /// afterwards behave exactly as on a freshly constructed set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values(["first", "second"]);
    /// set.clear();
    /// assert_eq!(set.size(), 0);
    ///
    /// set.add("first");
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.elements.clear();
        self.size = 0;
        trace_event!("cleared ordered set");
    }

    /// Returns an iterator over references to the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values([10, 20, 30]);
    /// let doubled: Vec<i32> = set.iter().map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![20, 40, 60]);
    /// ```
    #[inline]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Calls `callback` once per value, in insertion order.
    ///
    /// The callback receives `(value, key, set)`. Keys and values coincide in
    /// a set, so the first two arguments are the same reference. The third
    /// argument is the set itself, which serves as the default callback
    /// context. Use [`for_each_with`](Self::for_each_with) to supply another
    /// context.
    ///
    /// A panic raised inside the callback unwinds straight to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["first", "second"]);
    /// let mut visited = Vec::new();
    /// set.for_each(|value, key, context| {
    ///     visited.push((context.size(), *value, *key));
    /// });
    /// assert_eq!(visited, vec![(2, "first", "first"), (2, "second", "second")]);
    /// ```
    ///
    /// The set is borrowed for the whole walk, so the callback cannot mutate it:
    ///
    /// ```compile_fail
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values([1, 2]);
    /// set.for_each(|value, _, _| {
    ///     set.add(*value + 10);
    /// });
    /// ```
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, &T, &Self),
    {
        for value in &self.elements {
            callback(value, value, self);
        }
    }

    /// Calls `callback` once per value with an explicit context.
    ///
    /// The callback receives `(value, key, context)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// struct Greeting {
    ///     hello: &'static str,
    /// }
    ///
    /// let set = OrderedSet::from_values(["first", "second"]);
    /// let context = Greeting { hello: "world" };
    /// let mut lines = Vec::new();
    /// set.for_each_with(&context, |value, _key, context| {
    ///     lines.push(format!("{} {}", context.hello, value));
    /// });
    /// assert_eq!(lines, vec!["world first", "world second"]);
    /// ```
    pub fn for_each_with<C, F>(&self, context: &C, mut callback: F)
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C),
    {
        for value in &self.elements {
            callback(value, value, context);
        }
    }

    /// Calls a fallible `callback` once per value, stopping at the first error.
    ///
    /// The error is returned to the caller exactly as the callback produced it.
    /// Values after the failing one are not visited.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `callback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values([1, 2, 3, 4]);
    /// let mut seen = Vec::new();
    /// let result = set.try_for_each(|value, _key, _set| {
    ///     if *value == 3 {
    ///         return Err(format!("rejected {value}"));
    ///     }
    ///     seen.push(*value);
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err("rejected 3".to_string()));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn try_for_each<E, F>(&self, mut callback: F) -> Result<(), E>
    where
        F: FnMut(&T, &T, &Self) -> Result<(), E>,
    {
        self.elements
            .iter()
            .try_for_each(|value| callback(value, value, self))
    }

    /// Calls a fallible `callback` once per value with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `callback`, unchanged.
    pub fn try_for_each_with<C, E, F>(&self, context: &C, mut callback: F) -> Result<(), E>
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Result<(), E>,
    {
        self.elements
            .iter()
            .try_for_each(|value| callback(value, value, context))
    }

    #[inline]
    fn debug_assert_size(&self) {
        debug_assert_eq!(
            self.size,
            self.elements.len(),
            "{}",
            SIZE_INVARIANT_PANIC_MESSAGE
        );
    }

    /// Returns `true` if the values are stored inline.
    ///
    /// This is primarily useful for testing the inline storage threshold.
    #[cfg(test)]
    fn is_inline(&self) -> bool {
        !self.elements.spilled()
    }
}

impl<T: PartialEq> OrderedSet<T> {
    /// Creates a set from a sequence of initial values.
    ///
    /// Each value goes through [`add`](Self::add), so later duplicates are
    /// absorbed and the size counts distinct values only. The first
    /// occurrence decides the position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(vec!["a", "b", "b", "c"]);
    /// assert_eq!(set.size(), 3);
    /// assert_eq!(set.values(), vec!["a", "b", "c"]);
    ///
    /// let empty: OrderedSet<&str> = OrderedSet::from_values([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        // No capacity hint: repeated input would over-allocate past the inline store.
        let mut set = Self::new();
        for value in values {
            set.add(value);
        }
        set
    }

    /// Creates a set from a vector that must not contain repeated values.
    ///
    /// Unlike [`from_values`](Self::from_values), a duplicate is reported
    /// instead of absorbed. On success the vector is adopted as the backing
    /// array without copying.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateValueError`] naming the first repeated value's two
    /// positions.
    ///
    /// # Complexity
    ///
    /// O(n²)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::{DuplicateValueError, OrderedSet};
    ///
    /// let set = OrderedSet::try_from_unique(vec![3, 1, 2]).unwrap();
    /// assert_eq!(set.values(), vec![3, 1, 2]);
    ///
    /// let error = OrderedSet::try_from_unique(vec![3, 1, 3]).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     DuplicateValueError {
    ///         first_index: 0,
    ///         duplicate_index: 2,
    ///     }
    /// );
    /// ```
    pub fn try_from_unique(values: Vec<T>) -> Result<Self, DuplicateValueError> {
        for (duplicate_index, value) in values.iter().enumerate() {
            if let Some(first_index) = values[..duplicate_index]
                .iter()
                .position(|element| element == value)
            {
                trace_event!(
                    first = first_index,
                    duplicate = duplicate_index,
                    "rejected repeated value in strict construction"
                );
                return Err(DuplicateValueError {
                    first_index,
                    duplicate_index,
                });
            }
        }

        let size = values.len();
        Ok(Self {
            elements: SmallVec::from_vec(values),
            size,
        })
    }

    /// Adds a value to the end of the set, returning the set for chaining.
    ///
    /// If an equal value is already present the set is left untouched.
    ///
    /// # Complexity
    ///
    /// O(n) for the duplicate scan, amortized O(1) for the append.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values(["first", "second"]);
    /// set.add("second").add("fifth").add("fifth");
    /// assert_eq!(set.size(), 3);
    /// assert_eq!(set.values(), vec!["first", "second", "fifth"]);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        self.insert(value);
        self
    }

    /// Adds a value to the end of the set.
    ///
    /// Returns `true` if the value was newly added, `false` if an equal value
    /// was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.position(&value).is_some() {
            return false;
        }
        self.elements.push(value);
        self.size += 1;
        trace_event!(size = self.size, "added value to ordered set");
        self.debug_assert_size();
        true
    }

    /// Returns `true` if the set contains a value equal to `value`.
    ///
    /// The lookup accepts any borrowed form of the element type, so a set of
    /// `String` can be queried with `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["first".to_string(), "second".to_string()]);
    /// assert!(set.has("first"));
    /// assert!(!set.has("third"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(value).is_some()
    }

    /// Alias of [`has`](Self::has) for code written against std collections.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.has(value)
    }

    /// Removes the value equal to `value`, if present.
    ///
    /// Returns `true` if a value was removed. Later values shift left by one
    /// position; the relative order of the survivors is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values(["first", "second", "third"]);
    /// assert!(!set.delete("kthxbai"));
    /// assert_eq!(set.size(), 3);
    ///
    /// assert!(set.delete("first"));
    /// assert_eq!(set.values(), vec!["second", "third"]);
    /// assert_eq!(set.size(), 2);
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(index) = self.position(value) else {
            return false;
        };
        self.elements.remove(index);
        self.size -= 1;
        trace_event!(
            removed = index,
            size = self.size,
            "deleted value from ordered set"
        );
        self.debug_assert_size();
        true
    }

    /// Alias of [`delete`](Self::delete) for code written against std collections.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.delete(value)
    }

    fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements
            .iter()
            .position(|element| element.borrow() == value)
    }
}

impl<T: Clone> OrderedSet<T> {
    /// Returns a snapshot of the values in insertion order.
    ///
    /// The returned vector is a shallow copy. Mutating the set afterwards does
    /// not change it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values(["first", "second"]);
    /// let snapshot = set.values();
    /// set.add("third");
    /// assert_eq!(snapshot, vec!["first", "second"]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Returns a snapshot of the keys in insertion order.
    ///
    /// Keys and values coincide in a set, so this is the same as
    /// [`values`](Self::values).
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Vec<T> {
        self.values()
    }

    /// Returns a snapshot of `(value, value)` pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["first", "second"]);
    /// assert_eq!(
    ///     set.entries(),
    ///     vec![("first", "first"), ("second", "second")]
    /// );
    /// ```
    #[must_use]
    pub fn entries(&self) -> Vec<(T, T)> {
        self.elements
            .iter()
            .map(|value| (value.clone(), value.clone()))
            .collect()
    }
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the values of an [`OrderedSet`], in insertion order.
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Clone for OrderedSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator over the values of an [`OrderedSet`], in insertion order.
pub struct OrderedSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: PartialEq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: PartialEq + Copy + 'a> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.add(*value);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T: PartialEq> From<Vec<T>> for OrderedSet<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

// =============================================================================
// Formatting and Equality
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

/// Two sets are equal when they hold the same values, regardless of order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.has(value))
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse exactly as they do for `from_values`.
        let mut set = OrderedSet::new();
        while let Some(value) = seq.next_element()? {
            set.add(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
