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

/// Statistics collected during a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of items in the searched haystack.
    pub items_searched: usize,
    /// Whether a sorted scratch copy of the haystack was made.
    pub sorted_copy: bool,
    /// Total duration of the search.
    pub search_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Items Searched: {}", self.items_searched)?;
        writeln!(f, "  Sorted Copy: {}", self.sorted_copy)?;
        writeln!(
            f,
            "  Search Duration (secs): {:.6}",
            self.search_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    items_searched: usize,
    sorted_copy: bool,
    search_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            items_searched: 0,
            sorted_copy: false,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of items searched.
    #[inline]
    pub fn items_searched(mut self, items_searched: usize) -> Self {
        self.items_searched = items_searched;
        self
    }

    /// Sets whether a sorted scratch copy was made.
    #[inline]
    pub fn sorted_copy(mut self, sorted_copy: bool) -> Self {
        self.sorted_copy = sorted_copy;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn search_duration(mut self, search_duration: std::time::Duration) -> Self {
        self.search_duration = search_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            items_searched: self.items_searched,
            sorted_copy: self.sorted_copy,
            search_duration: self.search_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use super::SearchStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn test_builder_defaults() {
        let stats = SearchStatisticsBuilder::new().build();
        assert_eq!(stats.items_searched, 0);
        assert!(!stats.sorted_copy);
        assert_eq!(stats.search_duration, Duration::ZERO);
    }

    #[test]
    fn test_builder_round_trip() {
        let stats = SearchStatisticsBuilder::new()
            .items_searched(128)
            .sorted_copy(true)
            .search_duration(Duration::from_millis(3))
            .build();
        assert_eq!(
            stats,
            SearchStatistics {
                items_searched: 128,
                sorted_copy: true,
                search_duration: Duration::from_millis(3),
            }
        );
    }

    #[test]
    fn test_display_contains_fields() {
        let stats = SearchStatisticsBuilder::new().items_searched(9).build();
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Items Searched: 9"));
        assert!(rendered.contains("Sorted Copy: false"));
    }
}
