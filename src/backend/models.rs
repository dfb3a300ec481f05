// src/backend/models.rs
//
// Wire shapes for the REST backend. The backend is sloppy about types:
// ids and counts arrive as numbers or strings depending on the record,
// beds/baths carry sentinel strings like "N/A", and optional fields are
// simply absent. Deserialization is permissive on purpose so one odd
// record never sinks a whole collection fetch.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "flex_string")]
    pub id: String,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub price: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub area_size: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub beds: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub baths: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "flex_string")]
    pub id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub completion: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub price: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub area_size: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub beds: String,
    #[serde(default, deserialize_with = "flex_string")]
    pub baths: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
}

impl PropertyRecord {
    /// Area as a number; unparseable or missing values count as 0.
    pub fn area_value(&self) -> f64 {
        parse_loose_number(&self.area_size)
    }

    /// Bed count for filtering; "N/A", "-" and friends count as 0.
    pub fn beds_value(&self) -> u32 {
        leading_count(&self.beds)
    }

    pub fn baths_value(&self) -> u32 {
        leading_count(&self.baths)
    }

    /// Beds string for the card, suppressed when the backend stored a
    /// placeholder. Display keeps its own rule (hides "0" too) distinct
    /// from the filter rule, which treats sentinels as a count of 0.
    pub fn display_beds(&self) -> Option<&str> {
        displayable_count(&self.beds)
    }

    pub fn display_baths(&self) -> Option<&str> {
        displayable_count(&self.baths)
    }
}

impl ProjectRecord {
    pub fn display_beds(&self) -> Option<&str> {
        displayable_count(&self.beds)
    }

    pub fn display_baths(&self) -> Option<&str> {
        displayable_count(&self.baths)
    }

    pub fn area_value(&self) -> f64 {
        parse_loose_number(&self.area_size)
    }
}

/// Accepts a JSON string, number, or null and yields a plain String.
fn flex_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn parse_loose_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Leading integer of a count-ish string: "3" -> 3, "3.5" -> 3,
/// "N/A" -> 0.
fn leading_count(text: &str) -> u32 {
    let text = text.trim();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse::<u32>().unwrap_or(0)
}

fn displayable_count(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();
    if trimmed.is_empty() || matches!(lowered.as_str(), "n/a" | "-" | "0") {
        None
    } else {
        Some(trimmed)
    }
}
