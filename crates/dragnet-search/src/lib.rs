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

//! Dragnet-Search: sequence search with mode dispatch
//!
//! This crate answers two kinds of question about an item and a slice:
//! whether the item is present (a boolean), and where it first occurs
//! (a typed index, or absence). The two questions are served by different
//! algorithms, and a dispatch layer routes between them.
//!
//! Core flow
//! - Presence queries guarantee a sorted view of the haystack (sorting a
//!   scratch copy when the caller has not asserted sortedness) and run an
//!   iterative binary search.
//! - First-position queries run an iterative linear scan over the original
//!   ordering, since sorting would change what "first occurrence" means.
//! - The `Searcher` facade bundles a configured mode with per-run statistics.
//!
//! Assumptions and guarantees
//! - Sortedness assertions are a caller contract and are never validated;
//!   asserting sortedness over an unsorted haystack yields silently wrong
//!   results. `algorithm::is_sorted_ascending` is exported for callers that
//!   want to check first.
//! - Absence is an ordinary `Option`/boolean outcome, never an error.
//! - All searches are single-threaded, side-effect-free, and deterministic.
//!
//! Module map
//! - `algorithm`: the linear and binary search loops and the sortedness probe.
//! - `index`: the strongly typed haystack position (`ItemIndex`).
//! - `item`: the `SearchItem` bound shared by every search API.
//! - `query`: search modes, outcomes, and the dispatching `search` function.
//! - `searcher`: configured facade bundling outcomes with statistics.
//! - `stats`: lightweight per-run counters/timing.

pub mod algorithm;
pub mod index;
pub mod item;
pub mod query;
pub mod searcher;
pub mod stats;
