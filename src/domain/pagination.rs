// src/domain/pagination.rs
//
// Derived pagination over an already-filtered collection. Nothing here
// is stored: the slice is recomputed from (filtered length, page, page
// size) whenever any of them change, and the current page is pulled
// back to 1 when the filtered set shrinks underneath it.

/// The visible window of the filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub current_page: usize,
    pub total_pages: usize,
    /// Start index into the filtered collection, inclusive.
    pub start: usize,
    /// End index, exclusive.
    pub end: usize,
}

impl PageSlice {
    /// Derive the slice for `page` of a filtered collection of `len`
    /// items. If `page` has run past the end (a filter change shrank the
    /// set), it resets to page 1 rather than clamping to the last page.
    pub fn derive(len: usize, page: usize, page_size: usize) -> Self {
        let total_pages = total_pages(len, page_size);

        let mut current_page = page.max(1);
        if current_page > total_pages && total_pages > 0 {
            current_page = 1;
        }

        let start = (current_page - 1) * page_size;
        let start = start.min(len);
        let end = (start + page_size).min(len);

        Self {
            current_page,
            total_pages,
            start,
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Most page indicators a pager shows before collapsing into a window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A pager entry: a navigable page number or a decorative ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

/// Bounded list of pager entries: all pages when few enough, otherwise a
/// clamped window of `max_visible` pages near the current one, with the
/// first and last page (and ellipsis gaps) pinned at the edges.
pub fn page_numbers(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageEntry> {
    let mut pages = Vec::new();

    if total_pages <= max_visible {
        for i in 1..=total_pages {
            pages.push(PageEntry::Page(i));
        }
        return pages;
    }

    let mut start_page = current_page.saturating_sub(2).max(1);
    let end_page = (start_page + max_visible - 1).min(total_pages);

    // Window collapsed against the right edge; slide it back left.
    if end_page - start_page + 1 < max_visible {
        start_page = (end_page + 1).saturating_sub(max_visible).max(1);
    }

    if start_page > 1 {
        pages.push(PageEntry::Page(1));
        if start_page > 2 {
            pages.push(PageEntry::Ellipsis);
        }
    }

    for i in start_page..=end_page {
        pages.push(PageEntry::Page(i));
    }

    if end_page < total_pages {
        if end_page < total_pages - 1 {
            pages.push(PageEntry::Ellipsis);
        }
        pages.push(PageEntry::Page(total_pages));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageEntry::{Ellipsis, Page};

    #[test]
    fn empty_collection_has_zero_pages() {
        let slice = PageSlice::derive(0, 1, 60);
        assert_eq!(slice.total_pages, 0);
        assert!(slice.is_empty());
    }

    // Scenario: 130 records in tile mode (page size 60) give 3 pages.
    #[test]
    fn tile_page_count_for_130_records() {
        let slice = PageSlice::derive(130, 3, 60);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.start, 120);
        assert_eq!(slice.end, 130);
    }

    #[test]
    fn page_past_the_end_resets_to_one() {
        let slice = PageSlice::derive(130, 4, 60);
        assert_eq!(slice.current_page, 1);
        assert_eq!(slice.start, 0);
        assert_eq!(slice.end, 60);
    }

    #[test]
    fn slices_across_all_pages_cover_every_item_once() {
        for (len, page_size) in [(130usize, 60usize), (130, 20), (59, 60), (61, 60), (1, 20)] {
            let total = total_pages(len, page_size);
            let mut covered = 0;
            for page in 1..=total {
                let slice = PageSlice::derive(len, page, page_size);
                assert!(slice.end - slice.start <= page_size);
                covered += slice.end - slice.start;
            }
            assert_eq!(covered, len, "len={len} page_size={page_size}");
        }
    }

    #[test]
    fn few_pages_list_in_full() {
        assert_eq!(page_numbers(2, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_numbers(1, 5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn window_at_the_left_edge() {
        assert_eq!(
            page_numbers(1, 10, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn centered_window_pins_both_edges() {
        assert_eq!(
            page_numbers(5, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_at_the_right_edge() {
        assert_eq!(
            page_numbers(10, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn adjacent_edges_omit_the_ellipsis() {
        // Window 2..6 sits flush against both edges: page 1 and page 7
        // are pinned without gap markers.
        assert_eq!(
            page_numbers(4, 7, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7)
            ]
        );
    }
}
