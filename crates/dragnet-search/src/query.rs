// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Query Dispatch
//!
//! Search modes, outcomes, and the dispatching `search` entry point.
//!
//! ## Motivation
//!
//! The two answer shapes want different algorithms. A presence query always
//! gets the bisection speedup, paying an upfront sort of a scratch copy when
//! the input is not asserted sorted. A first-position query must preserve the
//! caller's original ordering (a sort would change what "first occurrence"
//! means), so it accepts the linear-time scan as the trade-off.

use crate::algorithm::binary::binary_search;
use crate::algorithm::linear::linear_search;
use crate::index::ItemIndex;
use crate::item::SearchItem;
use smallvec::SmallVec;

/// Number of haystack items the presence-query sort scratch holds inline
/// before spilling to the heap.
const SORT_SCRATCH_INLINE: usize = 32;

/// The kind of answer a search should produce.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SearchMode {
    /// Answer whether the item is present at all (boolean).
    #[default]
    Presence,
    /// Answer where the item first occurs in the original ordering
    /// (index or absence).
    FirstPosition,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Presence => write!(f, "Presence"),
            SearchMode::FirstPosition => write!(f, "FirstPosition"),
        }
    }
}

/// The caller's assertion about haystack ordering.
///
/// # Invariants
///
/// - `Sorted` asserts ascending order and is never validated; a wrong
///   assertion yields silently wrong results. Use
///   [`crate::algorithm::is_sorted_ascending`] to check first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortedHint {
    /// The haystack is sorted in ascending order.
    Sorted,
    /// No ordering is asserted.
    #[default]
    Unsorted,
}

impl SortedHint {
    /// Returns `true` if the caller asserted ascending order.
    #[inline(always)]
    pub const fn is_sorted(self) -> bool {
        matches!(self, SortedHint::Sorted)
    }
}

impl std::fmt::Display for SortedHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortedHint::Sorted => write!(f, "Sorted"),
            SortedHint::Unsorted => write!(f, "Unsorted"),
        }
    }
}

/// The answer of a search, shaped by the requested [`SearchMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The item is present (`true`) or absent (`false`).
    Presence(bool),
    /// The first occurrence of the item in the original ordering,
    /// or `None` if absent.
    FirstPosition(Option<ItemIndex>),
}

impl SearchOutcome {
    /// Returns `true` if the search found the item, under either mode.
    #[inline]
    pub fn was_found(&self) -> bool {
        match self {
            SearchOutcome::Presence(found) => *found,
            SearchOutcome::FirstPosition(position) => position.is_some(),
        }
    }

    /// Returns the first-occurrence index, if this outcome carries one.
    ///
    /// Presence outcomes never carry an index.
    #[inline]
    pub fn position(&self) -> Option<ItemIndex> {
        match self {
            SearchOutcome::Presence(_) => None,
            SearchOutcome::FirstPosition(position) => *position,
        }
    }

    #[inline]
    pub fn is_presence(&self) -> bool {
        matches!(self, SearchOutcome::Presence(_))
    }

    #[inline]
    pub fn is_first_position(&self) -> bool {
        matches!(self, SearchOutcome::FirstPosition(_))
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Presence(true) => write!(f, "Present"),
            SearchOutcome::Presence(false) => write!(f, "Absent"),
            SearchOutcome::FirstPosition(Some(index)) => write!(f, "FoundAt({})", index),
            SearchOutcome::FirstPosition(None) => write!(f, "NotFound"),
        }
    }
}

/// Searches for an item in a haystack, routing by the requested mode.
///
/// - `SearchMode::Presence`: guarantees a sorted view of the haystack
///   (borrowing it as-is when `sorted` asserts ascending order, otherwise
///   sorting a scratch copy) and delegates to
///   [`binary_search`](crate::algorithm::binary::binary_search).
/// - `SearchMode::FirstPosition`: delegates to
///   [`linear_search`](crate::algorithm::linear::linear_search) over the
///   original ordering with the caller's hint.
///
/// The haystack itself is never mutated or retained past the call.
///
/// # Examples
///
/// ```rust
/// use dragnet_search::query::{search, SearchMode, SearchOutcome, SortedHint};
///
/// let haystack = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
/// let outcome = search(&7, &haystack, SearchMode::Presence, SortedHint::Unsorted);
/// assert!(outcome.was_found());
///
/// let outcome = search(&7, &haystack, SearchMode::FirstPosition, SortedHint::Unsorted);
/// assert_eq!(outcome.position().map(|i| i.get()), Some(2));
/// ```
pub fn search<T>(item: &T, haystack: &[T], mode: SearchMode, sorted: SortedHint) -> SearchOutcome
where
    T: SearchItem,
{
    match mode {
        SearchMode::Presence => {
            if sorted.is_sorted() {
                SearchOutcome::Presence(binary_search(item, haystack))
            } else {
                let mut scratch: SmallVec<[T; SORT_SCRATCH_INLINE]> =
                    haystack.iter().cloned().collect();
                scratch.sort();
                SearchOutcome::Presence(binary_search(item, &scratch))
            }
        }
        SearchMode::FirstPosition => {
            SearchOutcome::FirstPosition(linear_search(item, haystack, sorted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn ascending(n: IntegerType) -> Vec<IntegerType> {
        (0..n).collect()
    }

    fn descending(n: IntegerType) -> Vec<IntegerType> {
        (0..n).rev().collect()
    }

    #[test]
    fn test_search_presence_sorted_input() {
        let haystack = ascending(10);
        let outcome = search(&5, &haystack, SearchMode::Presence, SortedHint::Sorted);
        assert_eq!(outcome, SearchOutcome::Presence(true));
        assert!(outcome.was_found());
    }

    #[test]
    fn test_search_presence_unsorted_input() {
        let haystack = descending(10);
        assert_eq!(
            search(&7, &haystack, SearchMode::Presence, SortedHint::Unsorted),
            SearchOutcome::Presence(true)
        );
        assert_eq!(
            search(&15, &haystack, SearchMode::Presence, SortedHint::Unsorted),
            SearchOutcome::Presence(false)
        );
    }

    #[test]
    fn test_search_presence_does_not_mutate_haystack() {
        let haystack = descending(10);
        let before = haystack.clone();
        let _ = search(&3, &haystack, SearchMode::Presence, SortedHint::Unsorted);
        assert_eq!(haystack, before);
    }

    #[test]
    fn test_search_presence_spills_past_inline_scratch() {
        // More items than the inline scratch capacity; the copy spills to
        // the heap and the answer must not change.
        let haystack: Vec<IntegerType> = (0..200).rev().collect();
        assert_eq!(
            search(&199, &haystack, SearchMode::Presence, SortedHint::Unsorted),
            SearchOutcome::Presence(true)
        );
        assert_eq!(
            search(&200, &haystack, SearchMode::Presence, SortedHint::Unsorted),
            SearchOutcome::Presence(false)
        );
    }

    #[test]
    fn test_search_first_position_unsorted_input() {
        let haystack = descending(10);
        assert_eq!(
            search(
                &15,
                &haystack,
                SearchMode::FirstPosition,
                SortedHint::Unsorted
            ),
            SearchOutcome::FirstPosition(None)
        );
        assert_eq!(
            search(
                &9,
                &haystack,
                SearchMode::FirstPosition,
                SortedHint::Unsorted
            )
            .position(),
            Some(ItemIndex::new(0))
        );
    }

    #[test]
    fn test_search_first_position_preserves_original_ordering() {
        let haystack = vec![4, 2, 4, 1];
        let outcome = search(
            &4,
            &haystack,
            SearchMode::FirstPosition,
            SortedHint::Unsorted,
        );
        assert_eq!(outcome.position(), Some(ItemIndex::new(0)));
    }

    #[test]
    fn test_search_idempotent() {
        let haystack = descending(10);
        let first = search(&4, &haystack, SearchMode::Presence, SortedHint::Unsorted);
        let second = search(&4, &haystack, SearchMode::Presence, SortedHint::Unsorted);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_empty_haystack() {
        let haystack: Vec<IntegerType> = vec![];
        assert_eq!(
            search(&1, &haystack, SearchMode::Presence, SortedHint::Unsorted),
            SearchOutcome::Presence(false)
        );
        assert_eq!(
            search(
                &1,
                &haystack,
                SearchMode::FirstPosition,
                SortedHint::Unsorted
            ),
            SearchOutcome::FirstPosition(None)
        );
    }

    #[test]
    fn test_search_outcome_accessors() {
        let presence = SearchOutcome::Presence(true);
        assert!(presence.is_presence());
        assert!(!presence.is_first_position());
        assert_eq!(presence.position(), None);

        let position = SearchOutcome::FirstPosition(Some(ItemIndex::new(2)));
        assert!(position.is_first_position());
        assert!(position.was_found());
        assert_eq!(position.position(), Some(ItemIndex::new(2)));
    }

    #[test]
    fn test_search_outcome_display() {
        assert_eq!(format!("{}", SearchOutcome::Presence(true)), "Present");
        assert_eq!(format!("{}", SearchOutcome::Presence(false)), "Absent");
        assert_eq!(
            format!("{}", SearchOutcome::FirstPosition(Some(ItemIndex::new(5)))),
            "FoundAt(ItemIndex(5))"
        );
        assert_eq!(
            format!("{}", SearchOutcome::FirstPosition(None)),
            "NotFound"
        );
    }

    #[test]
    fn test_search_agrees_with_std_on_shuffled_haystacks() {
        use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let mut haystack: Vec<IntegerType> = (0..50).map(|i| i % 17).collect();
            haystack.shuffle(&mut rng);

            for item in -1..18 {
                let presence = search(&item, &haystack, SearchMode::Presence, SortedHint::Unsorted);
                assert_eq!(presence, SearchOutcome::Presence(haystack.contains(&item)));

                let position = search(
                    &item,
                    &haystack,
                    SearchMode::FirstPosition,
                    SortedHint::Unsorted,
                );
                assert_eq!(
                    position.position().map(|i| i.get()),
                    haystack.iter().position(|candidate| *candidate == item)
                );
            }
        }
    }

    #[test]
    fn test_mode_and_hint_display() {
        assert_eq!(format!("{}", SearchMode::Presence), "Presence");
        assert_eq!(format!("{}", SearchMode::FirstPosition), "FirstPosition");
        assert_eq!(format!("{}", SortedHint::Sorted), "Sorted");
        assert_eq!(format!("{}", SortedHint::Unsorted), "Unsorted");
    }
}
