// SPDX-License-Identifier: MPL-2.0
//! Compact page-range generation for the pagination strip.
//!
//! The strip always shows the first page, the last page, and the immediate
//! neighborhood of the current page, with ellipsis gaps standing in for
//! hidden ranges. The guard conditions below are order-dependent; changing
//! their sequence changes the output near the boundaries.

/// One slot in the pagination strip: a selectable page number or an
/// ellipsis standing in for a hidden range of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Gap,
}

/// Builds the ordered marker sequence for the given position.
///
/// Callers with no pages at all should suppress the strip instead of
/// calling this: the first-page marker is emitted unconditionally, even for
/// `total_pages == 0`.
pub fn page_markers(page: u32, total_pages: u32) -> Vec<PageMarker> {
    // Widen before subtracting: `total_pages` may be 0 or 1.
    let page = i64::from(page);
    let total = i64::from(total_pages);

    let mut markers = vec![PageMarker::Page(1)];
    if page > 3 {
        markers.push(PageMarker::Gap);
    }
    if page > 2 {
        markers.push(PageMarker::Page((page - 1) as u32));
    }
    if page != 1 && page != total {
        markers.push(PageMarker::Page(page as u32));
    }
    if page < total - 1 {
        markers.push(PageMarker::Page((page + 1) as u32));
    }
    if page < total - 2 {
        markers.push(PageMarker::Gap);
    }
    if total > 1 {
        markers.push(PageMarker::Page(total as u32));
    }
    markers
}
