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

use crate::index::ItemIndex;
use crate::item::SearchItem;
use crate::query::SortedHint;

/// Linear search for the first occurrence of an item.
///
/// Scans the haystack front to back and returns the index of the first
/// element equal to `item`, or `None` if no element matches. When the caller
/// asserts the haystack is sorted ascending, the scan short-circuits to
/// `None` as soon as it reaches an element strictly greater than `item`,
/// since no later element can match either.
///
/// # Invariants
///
/// - When `sorted` is `SortedHint::Sorted`, the haystack must be sorted in
///   ascending order. This is not validated; a wrong assertion yields
///   silently wrong results.
///
/// # Complexity
///
/// O(n) worst case; early-exit O(k) on sorted ascending input, where k is
/// the position of the first element greater than or equal to `item`.
#[inline]
pub fn linear_search<T>(item: &T, haystack: &[T], sorted: SortedHint) -> Option<ItemIndex>
where
    T: SearchItem,
{
    for (offset, candidate) in haystack.iter().enumerate() {
        if candidate == item {
            return Some(ItemIndex::new(offset));
        }
        if sorted.is_sorted() && item < candidate {
            return None;
        }
    }
    None
}
