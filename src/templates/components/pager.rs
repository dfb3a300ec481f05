use crate::domain::pagination::{PageEntry, PageSlice};
use maud::{html, Markup};

/// Pager control. `page_href` turns a page number into a listing URL
/// carrying the rest of the view state; ellipsis entries render as
/// plain, non-navigable text.
pub fn pager(
    slice: &PageSlice,
    entries: &[PageEntry],
    page_href: &dyn Fn(usize) -> String,
) -> Markup {
    html! {
        nav class="pager" {
            @if slice.current_page > 1 {
                a class="pager-step" href=(page_href(slice.current_page - 1)) { "Previous" }
            } @else {
                span class="pager-step disabled" { "Previous" }
            }

            @for entry in entries {
                @match entry {
                    PageEntry::Page(n) => {
                        @if *n == slice.current_page {
                            span class="pager-page current" { (n) }
                        } @else {
                            a class="pager-page" href=(page_href(*n)) { (n) }
                        }
                    }
                    PageEntry::Ellipsis => {
                        span class="pager-ellipsis" { "…" }
                    }
                }
            }

            @if slice.current_page < slice.total_pages {
                a class="pager-step" href=(page_href(slice.current_page + 1)) { "Next" }
            } @else {
                span class="pager-step disabled" { "Next" }
            }
        }
    }
}

/// "Showing 61-120 of 130 properties" footer line.
pub fn results_summary(slice: &PageSlice, total_filtered: usize, noun: &str) -> Markup {
    html! {
        div class="results-summary" {
            div {
                "Showing " (slice.start + 1) "-" (slice.end)
                " of " (total_filtered) " " (noun)
            }
            @if slice.total_pages > 1 {
                div { "Page " (slice.current_page) " of " (slice.total_pages) }
            }
        }
    }
}
