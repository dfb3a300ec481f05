// src/query.rs
//
// Query-string form of the listing view state. The query string is the
// transient tier of state restoration: listing URLs carry filters, view
// mode, page, and (on a back navigation) the scroll offset; detail
// links carry the same bundle so the detail page can echo it back on
// its back link. Absent keys simply fall through to the next
// restoration tier, so encoding skips default values.

use crate::domain::filters::{ProjectFilters, PropertyFilters};
use crate::domain::view_state::{MountState, NavigationSnapshot, ViewMode};
use url::form_urlencoded;

/// Decoded query pairs for one request.
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn has_any(&self, keys: &[&str]) -> bool {
        self.pairs.iter().any(|(k, _)| keys.contains(&k.as_str()))
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }
}

const PROPERTY_FILTER_KEYS: [&str; 9] = [
    "type",
    "purpose",
    "location",
    "beds",
    "baths",
    "min_area",
    "max_area",
    "min_price",
    "max_price",
];

const PROJECT_FILTER_KEYS: [&str; 7] = [
    "category",
    "completion",
    "status",
    "location",
    "project_type",
    "min_price",
    "max_price",
];

pub fn property_mount(q: &QueryMap) -> MountState<PropertyFilters> {
    let filters = q.has_any(&PROPERTY_FILTER_KEYS).then(|| {
        let d = PropertyFilters::default();
        PropertyFilters {
            property_type: pick(q, "type", d.property_type),
            purpose: pick(q, "purpose", d.purpose),
            location: pick(q, "location", d.location),
            beds: pick(q, "beds", d.beds),
            baths: pick(q, "baths", d.baths),
            min_area: pick(q, "min_area", d.min_area),
            max_area: pick(q, "max_area", d.max_area),
            min_price: pick(q, "min_price", d.min_price),
            max_price: pick(q, "max_price", d.max_price),
        }
    });
    mount_shell(q, filters)
}

pub fn project_mount(q: &QueryMap) -> MountState<ProjectFilters> {
    let filters = q.has_any(&PROJECT_FILTER_KEYS).then(|| {
        let d = ProjectFilters::default();
        ProjectFilters {
            category: pick(q, "category", d.category),
            completion: pick(q, "completion", d.completion),
            status: pick(q, "status", d.status),
            location: pick(q, "location", d.location),
            project_type: pick(q, "project_type", d.project_type),
            min_price: pick(q, "min_price", d.min_price),
            max_price: pick(q, "max_price", d.max_price),
        }
    });
    mount_shell(q, filters)
}

fn pick(q: &QueryMap, key: &str, default: String) -> String {
    q.non_empty(key).map(str::to_string).unwrap_or(default)
}

fn mount_shell<F>(q: &QueryMap, filters: Option<F>) -> MountState<F> {
    MountState {
        filters,
        view_mode: q.non_empty("view").and_then(ViewMode::parse),
        current_page: q.non_empty("page").and_then(|v| v.parse().ok()),
        scroll_position: q.non_empty("scroll").and_then(|v| v.parse().ok()),
        filter_panel_open: q.non_empty("panel").map(|v| v == "1"),
    }
}

/// Encode a snapshot as a query string (no leading '?'). Filter keys at
/// their default value are omitted; view mode and page are always
/// present; scroll and the panel flag appear only when meaningful.
pub fn property_query(snap: &NavigationSnapshot<PropertyFilters>) -> String {
    let d = PropertyFilters::default();
    let f = &snap.filters;
    let filter_pairs = [
        ("type", &f.property_type, &d.property_type),
        ("purpose", &f.purpose, &d.purpose),
        ("location", &f.location, &d.location),
        ("beds", &f.beds, &d.beds),
        ("baths", &f.baths, &d.baths),
        ("min_area", &f.min_area, &d.min_area),
        ("max_area", &f.max_area, &d.max_area),
        ("min_price", &f.min_price, &d.min_price),
        ("max_price", &f.max_price, &d.max_price),
    ];
    encode(snap, &filter_pairs)
}

pub fn project_query(snap: &NavigationSnapshot<ProjectFilters>) -> String {
    let d = ProjectFilters::default();
    let f = &snap.filters;
    let filter_pairs = [
        ("category", &f.category, &d.category),
        ("completion", &f.completion, &d.completion),
        ("status", &f.status, &d.status),
        ("location", &f.location, &d.location),
        ("project_type", &f.project_type, &d.project_type),
        ("min_price", &f.min_price, &d.min_price),
        ("max_price", &f.max_price, &d.max_price),
    ];
    encode(snap, &filter_pairs)
}

fn encode<F>(
    snap: &NavigationSnapshot<F>,
    filter_pairs: &[(&str, &String, &String)],
) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (key, value, default) in filter_pairs {
        if value != default && !value.trim().is_empty() {
            ser.append_pair(key, value);
        }
    }
    ser.append_pair("view", snap.view_mode.as_str());
    ser.append_pair("page", &snap.current_page.to_string());
    if snap.scroll_position > 0 {
        ser.append_pair("scroll", &snap.scroll_position.to_string());
    }
    if snap.filter_panel_open {
        ser.append_pair("panel", "1");
    }
    ser.finish()
}
