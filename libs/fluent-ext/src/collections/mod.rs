//! Collection utilities: absence/emptiness predicates, duplicate detection and
//! counting of absent items.
//!
//! Sequences that may be missing altogether are modelled as `Option<I>` where
//! `I: IntoIterator`. Only the emptiness predicates accept a missing sequence;
//! every other helper rejects it with [`ExtError::InvalidArgument`].
//!
//! Duplicate detection groups elements in a single pass with a hash map
//! (key → group slot) and then keeps the groups whose size reaches the
//! configured threshold. Groups keep the order in which their key was first
//! seen.
//!
//! ```
//! use fluent_ext::collections::{duplicates, is_empty_or_absent};
//!
//! assert!(is_empty_or_absent(None::<Vec<u8>>));
//! assert_eq!(duplicates(Some(vec![1, 2, 1, 3, 2, 1])).unwrap(), vec![1, 2]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use config::constants::DuplicateConfig;

use crate::error::{ExtError, ExtResult};

/// Name reported when a required sequence is absent.
const SEQUENCE_ARG: &str = "sequence";

// =============================================================================
// GROUP
// =============================================================================

/// A maximal run of elements sharing an equal key, in encounter order.
///
/// # Examples
/// ```
/// use fluent_ext::collections::duplicates_by;
///
/// let words = vec!["ant", "bee", "asp"];
/// let groups = duplicates_by(Some(words), |w| w.as_bytes()[0], |g| g.members().to_vec()).unwrap();
/// assert_eq!(groups, vec![vec!["ant", "asp"]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    key: K,
    members: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// The key shared by every member.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Members of the group in the order they appeared in the sequence.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by grouping; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the group, returning its key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the group, returning key and members.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.members)
    }
}

impl<K, T> IntoIterator for Group<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

/// Partitions `items` into groups of equal keys, preserving first-seen order.
fn group_by_key<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();
    let mut seen = 0usize;

    for item in items {
        seen += 1;
        let key = key_fn(&item);
        if let Some(&slot) = slots.get(&key) {
            groups[slot].members.push(item);
        } else {
            slots.insert(key.clone(), groups.len());
            groups.push(Group {
                key,
                members: vec![item],
            });
        }
    }

    tracing::trace!(elements = seen, groups = groups.len(), "grouped sequence by key");
    groups
}

fn select_duplicates<I>(items: I, config: &DuplicateConfig) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    group_by_key(items, |item| item.clone())
        .into_iter()
        .filter(|group| config.is_duplicate_count(group.len()))
        .map(Group::into_key)
        .collect()
}

fn select_duplicates_by<I, K, R, KF, RF>(items: I, key_fn: KF, result_fn: RF) -> Vec<R>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    KF: FnMut(&I::Item) -> K,
    RF: FnMut(Group<K, I::Item>) -> R,
{
    let config = DuplicateConfig::default();
    group_by_key(items, key_fn)
        .into_iter()
        .filter(|group| config.is_duplicate_count(group.len()))
        .map(result_fn)
        .collect()
}

// =============================================================================
// ABSENT ITEMS
// =============================================================================

/// An element that may itself be absent.
///
/// Implemented for `Option<T>` and `&Option<T>` so both owned and borrowed
/// sequences of optional values can be counted.
pub trait MaybeAbsent {
    /// Returns true when the element holds no value.
    fn is_absent(&self) -> bool;
}

impl<T> MaybeAbsent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> MaybeAbsent for &Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Returns true if the sequence is absent or yields no elements.
///
/// An absent sequence is never touched; a present one is advanced at most once.
///
/// # Examples
/// ```
/// use fluent_ext::collections::is_empty_or_absent;
///
/// assert!(is_empty_or_absent(None::<&[i32]>));
/// assert!(is_empty_or_absent(Some(Vec::<i32>::new())));
/// assert!(!is_empty_or_absent(Some([7])));
/// ```
pub fn is_empty_or_absent<I: IntoIterator>(seq: Option<I>) -> bool {
    match seq {
        None => true,
        Some(items) => items.into_iter().next().is_none(),
    }
}

/// Negation of [`is_empty_or_absent`].
pub fn is_present_and_nonempty<I: IntoIterator>(seq: Option<I>) -> bool {
    !is_empty_or_absent(seq)
}

/// Returns one representative of every value that occurs more than once.
///
/// The result behaves as a set: each duplicated value appears exactly once,
/// regardless of how often it repeats. Values are returned in the order their
/// first occurrence was seen.
///
/// # Errors
///
/// [`ExtError::InvalidArgument`] if the sequence is absent.
///
/// # Examples
/// ```
/// use fluent_ext::collections::duplicates;
///
/// let dups = duplicates(Some(vec![1, 2, 3, 4, 3, 5, 1])).unwrap();
/// assert_eq!(dups, vec![1, 3]);
/// assert!(duplicates(Some(vec![1, 2, 3])).unwrap().is_empty());
/// ```
pub fn duplicates<I>(seq: Option<I>) -> ExtResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    duplicates_with(seq, &DuplicateConfig::default())
}

/// Like [`duplicates`], but keeps values seen at least
/// `config.min_occurrences` times.
///
/// # Errors
///
/// [`ExtError::InvalidArgument`] if the sequence is absent.
pub fn duplicates_with<I>(seq: Option<I>, config: &DuplicateConfig) -> ExtResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let items = seq.ok_or_else(|| ExtError::missing(SEQUENCE_ARG))?;
    Ok(select_duplicates(items, config))
}

/// Like [`duplicates_with`], validating a raw threshold first.
///
/// # Errors
///
/// [`ExtError::Config`] if `min_occurrences < 2`, then
/// [`ExtError::InvalidArgument`] if the sequence is absent.
///
/// # Examples
/// ```
/// use fluent_ext::collections::duplicates_at_least;
///
/// let triples = duplicates_at_least(Some("aabbbc".chars()), 3).unwrap();
/// assert_eq!(triples, vec!['b']);
/// assert!(duplicates_at_least(Some("ab".chars()), 1).is_err());
/// ```
pub fn duplicates_at_least<I>(seq: Option<I>, min_occurrences: usize) -> ExtResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let config = DuplicateConfig::new(min_occurrences)?;
    duplicates_with(seq, &config)
}

/// Groups elements by `key_fn` and maps every group with more than one member
/// through `result_fn`.
///
/// `result_fn` receives the whole [`Group`]: the key and all its members.
///
/// # Errors
///
/// [`ExtError::InvalidArgument`] if the sequence is absent.
///
/// # Examples
/// ```
/// use fluent_ext::collections::duplicates_by;
///
/// let items = vec!["apple", "banana", "apple", "cherry", "banana"];
/// let upper = duplicates_by(Some(items), |s| *s, |g| g.key().to_uppercase()).unwrap();
/// assert_eq!(upper, vec!["APPLE", "BANANA"]);
/// ```
pub fn duplicates_by<I, K, R, KF, RF>(
    seq: Option<I>,
    key_fn: KF,
    result_fn: RF,
) -> ExtResult<Vec<R>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    KF: FnMut(&I::Item) -> K,
    RF: FnMut(Group<K, I::Item>) -> R,
{
    let items = seq.ok_or_else(|| ExtError::missing(SEQUENCE_ARG))?;
    Ok(select_duplicates_by(items, key_fn, result_fn))
}

/// Counts the elements that are themselves absent.
///
/// # Errors
///
/// [`ExtError::InvalidArgument`] if the sequence is absent.
///
/// # Examples
/// ```
/// use fluent_ext::collections::count_absent_items;
///
/// let names = vec![Some("a"), None, Some("b"), None];
/// assert_eq!(count_absent_items(Some(&names)).unwrap(), 2);
/// ```
pub fn count_absent_items<I>(seq: Option<I>) -> ExtResult<usize>
where
    I: IntoIterator,
    I::Item: MaybeAbsent,
{
    let items = seq.ok_or_else(|| ExtError::missing(SEQUENCE_ARG))?;
    Ok(items.into_iter().filter(|item| item.is_absent()).count())
}

// =============================================================================
// EXTENSION TRAITS
// =============================================================================

/// Method syntax for iterators. Infallible, since the receiver exists.
///
/// Only iterators get these methods, so an `Option` or a `Vec` never groups
/// itself as a one-element sequence; call `.iter()`/`.into_iter()` first, or
/// use [`OptionalSequenceExt`] for a sequence that may be absent.
///
/// # Examples
/// ```
/// use fluent_ext::collections::SequenceExt;
///
/// let tags = ["red", "blue", "red"];
/// assert_eq!(tags.iter().duplicates(), vec![&"red"]);
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// See [`duplicates`].
    fn duplicates(self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        select_duplicates(self, &DuplicateConfig::default())
    }

    /// See [`duplicates_with`].
    fn duplicates_with(self, config: &DuplicateConfig) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        select_duplicates(self, config)
    }

    /// See [`duplicates_by`].
    fn duplicates_by<K, R, KF, RF>(self, key_fn: KF, result_fn: RF) -> Vec<R>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        RF: FnMut(Group<K, Self::Item>) -> R,
    {
        select_duplicates_by(self, key_fn, result_fn)
    }

    /// See [`count_absent_items`].
    fn count_absent(self) -> usize
    where
        Self::Item: MaybeAbsent,
    {
        self.filter(|item| item.is_absent()).count()
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Method syntax for sequences that may be absent.
///
/// The emptiness predicates accept an absent sequence; the grouping and
/// counting methods reject it with [`ExtError::InvalidArgument`].
///
/// # Examples
/// ```
/// use fluent_ext::collections::OptionalSequenceExt;
///
/// let missing: Option<Vec<u8>> = None;
/// assert!(missing.clone().is_empty_or_absent());
/// assert!(missing.duplicates().is_err());
/// assert!(Some(vec![1u8]).is_present_and_nonempty());
/// assert_eq!(Some(vec![1u8, 1, 2]).duplicates().unwrap(), vec![1]);
/// ```
pub trait OptionalSequenceExt: Sized {
    /// Element type of the wrapped sequence.
    type Item;

    /// See [`is_empty_or_absent`].
    fn is_empty_or_absent(self) -> bool;

    /// See [`is_present_and_nonempty`].
    fn is_present_and_nonempty(self) -> bool;

    /// See [`duplicates`].
    fn duplicates(self) -> ExtResult<Vec<Self::Item>>
    where
        Self::Item: Eq + Hash + Clone;

    /// See [`duplicates_by`].
    fn duplicates_by<K, R, KF, RF>(self, key_fn: KF, result_fn: RF) -> ExtResult<Vec<R>>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        RF: FnMut(Group<K, Self::Item>) -> R;

    /// See [`count_absent_items`].
    fn count_absent_items(self) -> ExtResult<usize>
    where
        Self::Item: MaybeAbsent;
}

impl<I: IntoIterator> OptionalSequenceExt for Option<I> {
    type Item = I::Item;

    fn is_empty_or_absent(self) -> bool {
        is_empty_or_absent(self)
    }

    fn is_present_and_nonempty(self) -> bool {
        is_present_and_nonempty(self)
    }

    fn duplicates(self) -> ExtResult<Vec<Self::Item>>
    where
        Self::Item: Eq + Hash + Clone,
    {
        duplicates(self)
    }

    fn duplicates_by<K, R, KF, RF>(self, key_fn: KF, result_fn: RF) -> ExtResult<Vec<R>>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        RF: FnMut(Group<K, Self::Item>) -> R,
    {
        duplicates_by(self, key_fn, result_fn)
    }

    fn count_absent_items(self) -> ExtResult<usize>
    where
        Self::Item: MaybeAbsent,
    {
        count_absent_items(self)
    }
}

#[cfg(test)]
mod tests;
