// SPDX-License-Identifier: MPL-2.0
//! Filtering and pagination over the fetched record set.
//!
//! Everything here is a pure function of its inputs. The browser state owns
//! the record set and the query triple and derives a fresh [`PageView`]
//! after every change instead of mutating a cached one.

use crate::catalog::record::Record;

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 10;

/// A derived, non-owned view over the filtered record set for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Number of records matching the current query.
    pub total_results: usize,
    /// `ceil(total_results / page_size)`; zero when nothing matches.
    pub total_pages: u32,
    /// Records visible on the requested page, in source order.
    pub window: Vec<&'a Record>,
    /// 1-based ordinal of the first visible record; zero when nothing
    /// matches.
    pub start_result: usize,
    /// 1-based ordinal of the last visible record.
    pub end_result: usize,
}

/// Returns whether a record matches both the search text and the category
/// filter.
///
/// The title match is a case-insensitive substring test and an empty search
/// matches everything. The category match is exact and case-sensitive; an
/// empty filter matches everything. Both must hold.
fn matches(record: &Record, search: &str, category: &str) -> bool {
    let title_match =
        search.is_empty() || record.title.to_lowercase().contains(&search.to_lowercase());
    let category_match = category.is_empty() || record.category == category;
    title_match && category_match
}

/// Filters `records` by `search` and `category` and slices out the window
/// for `page`.
///
/// Expects `page >= 1` and `page_size >= 1`. A page beyond the last one
/// yields an empty window rather than an error; callers reset the page to 1
/// whenever the query changes, so that only happens transiently.
pub fn paginate<'a>(
    records: &'a [Record],
    search: &str,
    category: &str,
    page: u32,
    page_size: usize,
) -> PageView<'a> {
    let filtered: Vec<&Record> = records
        .iter()
        .filter(|record| matches(record, search, category))
        .collect();

    let total_results = filtered.len();
    let total_pages = total_results.div_ceil(page_size) as u32;

    let offset = (page as usize - 1) * page_size;
    let window: Vec<&Record> = filtered.into_iter().skip(offset).take(page_size).collect();

    let start_result = if total_results == 0 { 0 } else { offset + 1 };
    let end_result = offset + window.len();

    PageView {
        total_results,
        total_pages,
        window,
        start_result,
        end_result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> Record {
        Record {
            title: title.to_string(),
            year: "2000".to_string(),
            category: category.to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn sample_set() -> Vec<Record> {
        vec![
            record("The Matrix", "movie"),
            record("The Matrix Reloaded", "movie"),
            record("Breaking Bad", "series"),
            record("Ozymandias", "episode"),
            record("matrix of leadership", "documentary"),
        ]
    }

    #[test]
    fn empty_search_and_category_match_everything() {
        let records = sample_set();
        let view = paginate(&records, "", "", 1, PAGE_SIZE);
        assert_eq!(view.total_results, records.len());
        assert_eq!(view.window.len(), records.len());
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let records = sample_set();
        let view = paginate(&records, "MATRIX", "", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 3);
        assert!(view.window.iter().all(|r| r.title.to_lowercase().contains("matrix")));
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let records = sample_set();
        let view = paginate(&records, "", "movie", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 2);

        // No normalization is applied to category values.
        let view = paginate(&records, "", "Movie", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 0);
    }

    #[test]
    fn predicates_combine_as_conjunction() {
        let records = sample_set();
        let view = paginate(&records, "matrix", "movie", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 2);
        let view = paginate(&records, "matrix", "documentary", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample_set();
        let once: Vec<Record> = paginate(&records, "matrix", "", 1, PAGE_SIZE)
            .window
            .into_iter()
            .cloned()
            .collect();
        let twice = paginate(&once, "matrix", "", 1, PAGE_SIZE);
        assert_eq!(twice.total_results, once.len());
        assert_eq!(
            twice.window.into_iter().cloned().collect::<Vec<_>>(),
            once
        );
    }

    #[test]
    fn empty_category_is_superset_of_any_specific_category() {
        let records = sample_set();
        let unfiltered = paginate(&records, "the", "", 1, PAGE_SIZE);
        for category in ["movie", "series", "episode", "documentary"] {
            let narrowed = paginate(&records, "the", category, 1, PAGE_SIZE);
            assert!(narrowed.total_results <= unfiltered.total_results);
            for matched in &narrowed.window {
                assert!(unfiltered.window.contains(matched));
            }
        }
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_page_size() {
        let records: Vec<Record> = (0..23).map(|i| record(&format!("Film {i}"), "movie")).collect();
        let view = paginate(&records, "", "", 1, PAGE_SIZE);
        assert_eq!(view.total_pages, 3);

        let records: Vec<Record> = (0..20).map(|i| record(&format!("Film {i}"), "movie")).collect();
        let view = paginate(&records, "", "", 1, PAGE_SIZE);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn empty_filtered_set_has_zero_pages_and_zero_range() {
        let records = sample_set();
        let view = paginate(&records, "no such title", "", 1, PAGE_SIZE);
        assert_eq!(view.total_results, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.window.is_empty());
        assert_eq!(view.start_result, 0);
        assert_eq!(view.end_result, 0);
    }

    #[test]
    fn window_length_follows_page_position() {
        let records: Vec<Record> = (0..23).map(|i| record(&format!("Film {i}"), "movie")).collect();

        let view = paginate(&records, "", "", 1, PAGE_SIZE);
        assert_eq!(view.window.len(), 10);
        assert_eq!((view.start_result, view.end_result), (1, 10));

        let view = paginate(&records, "", "", 3, PAGE_SIZE);
        assert_eq!(view.window.len(), 3);
        assert_eq!((view.start_result, view.end_result), (21, 23));
    }

    #[test]
    fn page_beyond_total_yields_empty_window() {
        let records: Vec<Record> = (0..5).map(|i| record(&format!("Film {i}"), "movie")).collect();
        let view = paginate(&records, "", "", 4, PAGE_SIZE);
        assert!(view.window.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.end_result, 30);
    }

    #[test]
    fn window_preserves_source_order() {
        let records: Vec<Record> = (0..15).map(|i| record(&format!("Film {i:02}"), "movie")).collect();
        let view = paginate(&records, "", "", 2, PAGE_SIZE);
        let titles: Vec<&str> = view.window.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Film 10", "Film 11", "Film 12", "Film 13", "Film 14"]);
    }
}
