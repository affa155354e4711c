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

use crate::item::SearchItem;

/// Binary search for the presence of an item in a sorted haystack.
///
/// Bisects the current `[lo, hi)` window around its midpoint: a midpoint
/// match reports presence immediately, otherwise the search continues in the
/// half that could still contain the item. An empty window reports absence.
/// Only presence is reported; a midpoint hit among duplicates says nothing
/// about the first occurrence, so no index is surfaced.
///
/// # Invariants
///
/// - The haystack must be sorted in ascending order. This is not validated;
///   an unsorted haystack yields silently wrong results.
///
/// # Complexity
///
/// O(log n).
#[inline]
pub fn binary_search<T>(item: &T, haystack: &[T]) -> bool
where
    T: SearchItem,
{
    let mut lo: usize = 0;
    let mut hi: usize = haystack.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < haystack.len(),
            "`binary_search` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= haystack.len(),
        // therefore mid < haystack.len()
        let candidate = unsafe { haystack.get_unchecked(mid) };
        if candidate == item {
            return true;
        }
        if item < candidate {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn ascending(n: IntegerType) -> Vec<IntegerType> {
        (0..n).collect()
    }

    #[test]
    fn test_binary_search_found() {
        let haystack = ascending(10);
        assert!(binary_search(&5, &haystack));
        assert!(binary_search(&0, &haystack));
        assert!(binary_search(&9, &haystack));
    }

    #[test]
    fn test_binary_search_not_found() {
        let haystack = ascending(10);
        assert!(!binary_search(&15, &haystack));
        assert!(!binary_search(&-1, &haystack));
    }

    #[test]
    fn test_binary_search_empty() {
        let haystack: Vec<IntegerType> = vec![];
        assert!(!binary_search(&1, &haystack));
    }

    #[test]
    fn test_binary_search_single() {
        assert!(binary_search(&7, &[7]));
        assert!(!binary_search(&8, &[7]));
    }

    #[test]
    fn test_binary_search_duplicates() {
        let haystack = vec![1, 1, 2, 2, 2, 3];
        assert!(binary_search(&2, &haystack));
        assert!(binary_search(&1, &haystack));
        assert!(!binary_search(&0, &haystack));
    }

    #[test]
    fn test_binary_search_every_element_and_gap() {
        let haystack: Vec<IntegerType> = (0..64).map(|i| i * 2).collect();
        for &present in &haystack {
            assert!(binary_search(&present, &haystack));
        }
        for absent in haystack.iter().map(|&i| i + 1) {
            assert!(!binary_search(&absent, &haystack));
        }
    }

    #[test]
    fn test_binary_search_non_numeric_items() {
        let haystack = vec!["anchor", "bowline", "capstan"];
        assert!(binary_search(&"capstan", &haystack));
        assert!(!binary_search(&"keel", &haystack));
    }
}
