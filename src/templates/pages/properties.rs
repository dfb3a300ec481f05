use crate::backend::models::PropertyRecord;
use crate::domain::pagination::{page_numbers, PageSlice, MAX_VISIBLE_PAGES};
use crate::domain::view_state::{ScreenState, ViewMode};
use crate::domain::PropertyFilters;
use crate::query::property_query;
use crate::templates::components::{
    pager, property_card_list, property_card_tile, property_filter_panel, results_summary,
};
use crate::templates::layouts::site_layout;
use crate::templates::scripts;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub state: &'a ScreenState<PropertyFilters>,
    pub slice: PageSlice,
    pub visible: Vec<&'a PropertyRecord>,
    pub total_filtered: usize,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    let state = vm.state;
    let entries = page_numbers(vm.slice.current_page, vm.slice.total_pages, MAX_VISIBLE_PAGES);

    site_layout(
        "Available Properties",
        "/properties",
        html! {
            main class="listing-screen" {
                div class="listing-head" {
                    div {
                        h1 { "Available Properties" }
                        p { "Explore premium properties across Karachi, from luxury homes to modern apartments, commercial spaces, and plots." }
                    }
                    (view_toggle(state))
                }

                div class="listing-layout" {
                    (property_filter_panel(&state.filters, state.view_mode, state.filter_panel_open))

                    div class="listing-results" {
                        @if vm.total_filtered == 0 {
                            div class="empty-state" {
                                p class="empty-title" { "No properties found" }
                                p { "Try adjusting your filters to see more results" }
                            }
                        } @else {
                            @match state.view_mode {
                                ViewMode::Tile => {
                                    div class="card-grid" {
                                        @for p in &vm.visible {
                                            (property_card_tile(p, &detail_href(state, &p.id)))
                                        }
                                    }
                                }
                                ViewMode::List => {
                                    div class="card-stack" {
                                        @for p in &vm.visible {
                                            (property_card_list(p, &detail_href(state, &p.id)))
                                        }
                                    }
                                }
                            }

                            @if vm.slice.total_pages > 1 {
                                (pager(&vm.slice, &entries, &|page| page_href(state, page)))
                            }
                            (results_summary(&vm.slice, vm.total_filtered, "properties"))
                        }
                    }
                }
            }
            (scripts::return_link_scroll_capture())
            (scripts::scroll_restore(state.scroll_position))
        },
    )
}

fn view_toggle(state: &ScreenState<PropertyFilters>) -> Markup {
    html! {
        div class="view-toggle" {
            a class=(toggle_class(state.view_mode == ViewMode::Tile))
                href=(view_href(state, ViewMode::Tile)) { "Grid" }
            a class=(toggle_class(state.view_mode == ViewMode::List))
                href=(view_href(state, ViewMode::List)) { "List" }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "toggle active"
    } else {
        "toggle"
    }
}

/// Listing URL for a page jump: same state, different page, scroll
/// dropped so the new page opens at the top.
fn page_href(state: &ScreenState<PropertyFilters>, page: usize) -> String {
    let mut snap = state.snapshot();
    snap.current_page = page;
    snap.scroll_position = 0;
    format!("/properties?{}", property_query(&snap))
}

/// Listing URL for a view-mode switch, which restarts at page 1.
fn view_href(state: &ScreenState<PropertyFilters>, mode: ViewMode) -> String {
    let mut snap = state.snapshot();
    snap.view_mode = mode;
    snap.current_page = 1;
    snap.scroll_position = 0;
    format!("/properties?{}", property_query(&snap))
}

/// Detail URL carrying the return snapshot. The scroll offset is filled
/// in client-side at click time; without scripting the return trip still
/// restores filters, view mode, and page.
fn detail_href(state: &ScreenState<PropertyFilters>, id: &str) -> String {
    let mut snap = state.snapshot();
    snap.scroll_position = 0;
    format!("/properties/{id}?{}", property_query(&snap))
}
