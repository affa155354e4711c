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

//! Search algorithms over slices.
//!
//! Both algorithms are iterative, single-pass evaluations with no retained
//! state between calls. Sortedness assumptions are a caller contract; the
//! `is_sorted_ascending` probe is provided for callers that want to verify
//! the contract before asserting it.

pub mod binary;
pub mod linear;

/// Checks whether the given items are sorted in ascending order.
///
/// Returns `true` for empty and single-element slices, and for slices with
/// equal adjacent elements.
#[inline(always)]
pub fn is_sorted_ascending<T>(items: &[T]) -> bool
where
    T: PartialOrd,
{
    items.windows(2).all(|w| w[0] <= w[1])
}
