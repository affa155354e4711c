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

//! # Search Item Trait
//!
//! Unified bound for item types that can be searched for. `SearchItem`
//! collects the capabilities the search paths rely on into a single alias,
//! simplifying generic signatures across the crate.
//!
//! ## Motivation
//!
//! Search pipelines should remain generic over item types while retaining
//! predictable comparison semantics. Binary search and the sorted
//! short-circuit need a total order, presence queries over unsorted input
//! need to clone the haystack into a sortable scratch buffer, and
//! diagnostics need `Debug`.

/// A trait alias for item types that can be searched for.
///
/// This covers any totally ordered, cloneable type: integers, strings,
/// or user-defined types with an `Ord` implementation.
pub trait SearchItem: Ord + Clone + std::fmt::Debug {}

impl<T> SearchItem for T where T: Ord + Clone + std::fmt::Debug {}
