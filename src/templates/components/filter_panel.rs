use crate::domain::filters::{ProjectFilters, PropertyFilters};
use crate::domain::price::{format_pkr, parse_price};
use crate::domain::view_state::ViewMode;
use maud::{html, Markup};

const PROPERTY_TYPES: &[&str] = &["Any", "Apartment", "House", "Plot", "Shop", "Office"];
const PURPOSES: &[&str] = &["Any", "Sale", "Rent"];
const COUNTS: &[&str] = &["Any", "1", "2", "3", "4", "5+"];
const CATEGORIES: &[&str] = &["All", "Apartment", "House", "Shop", "Plot", "Office"];
const STATUSES: &[&str] = &["Any", "Upcoming", "Under Construction", "Completed"];

/// Filter sidebar for the properties screen. A plain GET form: submitting
/// re-enters the screen with the filters as transient state, which also
/// restarts browsing at page 1.
pub fn property_filter_panel(f: &PropertyFilters, view_mode: ViewMode, open: bool) -> Markup {
    let area_label = if matches!(
        f.property_type.to_lowercase().as_str(),
        "apartment" | "office" | "shop"
    ) {
        "Area (Sq. Ft.)"
    } else {
        "Area (Sq. Yd.)"
    };

    html! {
        aside class=(panel_class(open)) {
            h2 { "Filters" }
            form method="get" action="/properties" {
                input type="hidden" name="view" value=(view_mode.as_str());
                @if open { input type="hidden" name="panel" value="1"; }

                (select_field("Property Type", "type", &f.property_type, PROPERTY_TYPES))
                (select_field("Purpose", "purpose", &f.purpose, PURPOSES))

                label { "Location"
                    input type="text" name="location" value=(f.location) placeholder="Enter area";
                }

                fieldset {
                    legend { (area_label) }
                    div class="range" {
                        input type="number" name="min_area" value=(f.min_area) placeholder="Min";
                        span { "to" }
                        input type="number" name="max_area" value=(f.max_area) placeholder="Max";
                    }
                }

                fieldset {
                    legend { "Price (PKR)" }
                    div class="range" {
                        input type="number" name="min_price" value=(f.min_price) placeholder="Min";
                        span { "to" }
                        input type="number" name="max_price" value=(f.max_price) placeholder="Max";
                    }
                    div class="price-hints" {
                        span { (price_hint(&f.min_price)) }
                        span { (price_hint(&f.max_price)) }
                    }
                }

                (select_field("Bed(s)", "beds", &f.beds, COUNTS))
                (select_field("Bath(s)", "baths", &f.baths, COUNTS))

                button type="submit" { "Apply Filters" }
            }
        }
    }
}

/// Filter sidebar for the projects screen.
pub fn project_filter_panel(f: &ProjectFilters, view_mode: ViewMode, open: bool) -> Markup {
    html! {
        aside class=(panel_class(open)) {
            h2 { "Filters" }
            form method="get" action="/projects" {
                input type="hidden" name="view" value=(view_mode.as_str());
                @if open { input type="hidden" name="panel" value="1"; }

                (select_field("Category", "category", &f.category, CATEGORIES))
                (select_field("Status", "status", &f.status, STATUSES))
                (select_field("Project Type", "project_type", &f.project_type, PURPOSES))

                label { "Completion Year"
                    input type="text" name="completion" value=(f.completion) placeholder="e.g. 2025";
                }

                label { "Location"
                    input type="text" name="location" value=(f.location) placeholder="Enter area";
                }

                fieldset {
                    legend { "Price (PKR)" }
                    div class="range" {
                        input type="number" name="min_price" value=(f.min_price) placeholder="Min";
                        span { "to" }
                        input type="number" name="max_price" value=(f.max_price) placeholder="Max";
                    }
                    div class="price-hints" {
                        span { (price_hint(&f.min_price)) }
                        span { (price_hint(&f.max_price)) }
                    }
                }

                button type="submit" { "Apply Filters" }
            }
        }
    }
}

fn panel_class(open: bool) -> &'static str {
    if open {
        "filter-sidebar open"
    } else {
        "filter-sidebar"
    }
}

fn select_field(label: &str, name: &str, value: &str, options: &[&str]) -> Markup {
    html! {
        label { (label)
            select name=(name) {
                @for &option in options {
                    option value=(option) selected[option == value] { (option) }
                }
            }
        }
    }
}

/// Echo the raw typed-in number back as a human scale string.
fn price_hint(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    format_pkr(parse_price(raw))
}
