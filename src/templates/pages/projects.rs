use crate::backend::models::ProjectRecord;
use crate::domain::pagination::{page_numbers, PageSlice, MAX_VISIBLE_PAGES};
use crate::domain::view_state::{ScreenState, ViewMode};
use crate::domain::ProjectFilters;
use crate::query::project_query;
use crate::templates::components::{
    pager, project_card_list, project_card_tile, project_filter_panel, results_summary,
};
use crate::templates::layouts::site_layout;
use crate::templates::scripts;
use maud::{html, Markup};

pub struct ProjectsVm<'a> {
    pub state: &'a ScreenState<ProjectFilters>,
    pub slice: PageSlice,
    pub visible: Vec<&'a ProjectRecord>,
    pub total_filtered: usize,
}

pub fn projects_page(vm: &ProjectsVm) -> Markup {
    let state = vm.state;
    let entries = page_numbers(vm.slice.current_page, vm.slice.total_pages, MAX_VISIBLE_PAGES);

    site_layout(
        "Our Projects",
        "/projects",
        html! {
            main class="listing-screen" {
                div class="listing-head" {
                    div {
                        h1 { "Our Projects" }
                        p { "Discover residential and commercial developments at every stage, from upcoming launches to completed communities." }
                    }
                    (view_toggle(state))
                }

                div class="listing-layout" {
                    (project_filter_panel(&state.filters, state.view_mode, state.filter_panel_open))

                    div class="listing-results" {
                        @if vm.total_filtered == 0 {
                            div class="empty-state" {
                                p class="empty-title" { "No projects found" }
                                p { "Try adjusting your filters to see more results" }
                            }
                        } @else {
                            @match state.view_mode {
                                ViewMode::Tile => {
                                    div class="card-grid" {
                                        @for p in &vm.visible {
                                            (project_card_tile(p, &detail_href(state, &p.id)))
                                        }
                                    }
                                }
                                ViewMode::List => {
                                    div class="card-stack" {
                                        @for p in &vm.visible {
                                            (project_card_list(p, &detail_href(state, &p.id)))
                                        }
                                    }
                                }
                            }

                            @if vm.slice.total_pages > 1 {
                                (pager(&vm.slice, &entries, &|page| page_href(state, page)))
                            }
                            (results_summary(&vm.slice, vm.total_filtered, "projects"))
                        }
                    }
                }
            }
            (scripts::return_link_scroll_capture())
            (scripts::scroll_restore(state.scroll_position))
        },
    )
}

fn view_toggle(state: &ScreenState<ProjectFilters>) -> Markup {
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

fn page_href(state: &ScreenState<ProjectFilters>, page: usize) -> String {
    let mut snap = state.snapshot();
    snap.current_page = page;
    snap.scroll_position = 0;
    format!("/projects?{}", project_query(&snap))
}

fn view_href(state: &ScreenState<ProjectFilters>, mode: ViewMode) -> String {
    let mut snap = state.snapshot();
    snap.view_mode = mode;
    snap.current_page = 1;
    snap.scroll_position = 0;
    format!("/projects?{}", project_query(&snap))
}

fn detail_href(state: &ScreenState<ProjectFilters>, id: &str) -> String {
    let mut snap = state.snapshot();
    snap.scroll_position = 0;
    format!("/projects/{id}?{}", project_query(&snap))
}
