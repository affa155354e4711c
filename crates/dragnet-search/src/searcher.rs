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

//! # Configured Searcher Facade
//!
//! A high-level entry point that carries a search configuration (mode and
//! sortedness hint) and bundles each run's outcome with its statistics.
//!
//! ## Motivation
//!
//! Callers that issue many queries with the same configuration should not
//! thread mode flags through every call site. The facade holds the
//! configuration, times each run, and reports what the dispatch layer did
//! (including whether a sorted scratch copy was paid for).
//!
//! ## Usage
//!
//! ```rust
//! use dragnet_search::query::{SearchMode, SortedHint};
//! use dragnet_search::searcher::SearcherBuilder;
//!
//! let searcher = SearcherBuilder::new()
//!     .with_mode(SearchMode::Presence)
//!     .with_sorted_hint(SortedHint::Unsorted)
//!     .build();
//!
//! let haystack = vec![9, 8, 7, 6, 5];
//! let report = searcher.run(&7, &haystack);
//! assert!(report.outcome.was_found());
//! assert_eq!(report.statistics.items_searched, 5);
//! ```

use crate::item::SearchItem;
use crate::query::{search, SearchMode, SearchOutcome, SortedHint};
use crate::stats::{SearchStatistics, SearchStatisticsBuilder};

/// The outcome of a facade run together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub statistics: SearchStatistics,
}

impl SearchReport {
    #[inline]
    pub fn new(outcome: SearchOutcome, statistics: SearchStatistics) -> Self {
        Self {
            outcome,
            statistics,
        }
    }

    /// Returns `true` if the run found the item, under either mode.
    #[inline]
    pub fn was_found(&self) -> bool {
        self.outcome.was_found()
    }
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.outcome)?;
        write!(f, "{}", self.statistics)
    }
}

/// A searcher configured with a mode and a sortedness hint.
///
/// Stateless between runs: each call to [`Searcher::run`] is an independent
/// evaluation over the given haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Searcher {
    mode: SearchMode,
    sorted: SortedHint,
}

impl Searcher {
    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[inline]
    pub fn sorted_hint(&self) -> SortedHint {
        self.sorted
    }

    /// Runs a search for `item` over `haystack` with this configuration.
    pub fn run<T>(&self, item: &T, haystack: &[T]) -> SearchReport
    where
        T: SearchItem,
    {
        let start_time = std::time::Instant::now();
        let outcome = search(item, haystack, self.mode, self.sorted);
        let sorted_copy = self.mode == SearchMode::Presence && !self.sorted.is_sorted();
        let statistics = SearchStatisticsBuilder::new()
            .items_searched(haystack.len())
            .sorted_copy(sorted_copy)
            .search_duration(start_time.elapsed())
            .build();
        SearchReport::new(outcome, statistics)
    }
}

/// Builder for [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearcherBuilder {
    mode: SearchMode,
    sorted: SortedHint,
}

impl SearcherBuilder {
    /// Creates a new builder with the default configuration
    /// (`Presence`, `Unsorted`).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search mode.
    #[inline]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the sortedness hint.
    #[inline]
    pub fn with_sorted_hint(mut self, sorted: SortedHint) -> Self {
        self.sorted = sorted;
        self
    }

    /// Builds the configured [`Searcher`].
    #[inline]
    pub fn build(self) -> Searcher {
        Searcher {
            mode: self.mode,
            sorted: self.sorted,
        }
    }
}
