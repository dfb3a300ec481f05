// src/backend/envelope.rs
//
// The backend answers collection requests in more than one shape: a
// plain JSON array, or an object wrapping an items array plus a total
// ({"properties": [...], "pagination": {"total": n}} or a flat
// {"properties": [...], "total": n}). Everything is normalized into one
// canonical page right here, so nothing past the fetch boundary ever
// branches on response shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Canonical collection shape: the records plus the backend's total
/// count (which may exceed items.len() for a server-paginated reply).
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

// Keys the backend has been seen using for the items array.
const ITEM_KEYS: [&str; 3] = ["items", "properties", "projects"];

/// Normalize any known response shape into a `Page`. Unknown shapes
/// yield an empty page; records that fail to deserialize are dropped
/// individually so one malformed record cannot empty the screen.
pub fn normalize<T: DeserializeOwned>(value: Value) -> Page<T> {
    match value {
        Value::Array(raw) => {
            let items = deserialize_items(raw);
            let total = items.len();
            Page { items, total }
        }
        Value::Object(mut map) => {
            let raw = ITEM_KEYS
                .iter()
                .find_map(|k| match map.remove(*k) {
                    Some(Value::Array(arr)) => Some(arr),
                    _ => None,
                });
            let Some(raw) = raw else {
                return Page::empty();
            };

            let reported_total = map
                .get("pagination")
                .and_then(|p| p.get("total"))
                .or_else(|| map.get("total"))
                .and_then(Value::as_u64);

            let items = deserialize_items(raw);
            let total = reported_total
                .map(|t| t as usize)
                .unwrap_or(items.len());
            Page { items, total }
        }
        _ => Page::empty(),
    }
}

fn deserialize_items<T: DeserializeOwned>(raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|v| match serde_json::from_value(v) {
            Ok(item) => Some(item),
            Err(e) => {
                eprintln!("Skipping malformed record: {e}");
                None
            }
        })
        .collect()
}
