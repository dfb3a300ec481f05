// src/domain/filters.rs
//
// Filter criteria and the predicate evaluator for the two listing
// screens. Criteria are conjunctive: a record is shown only when every
// active filter passes. "Any"/"All" (and the empty string for free-text
// and threshold fields) are the no-constraint sentinels, so every key
// always holds a defined value and the predicates never branch on an
// absent criterion.

use crate::backend::models::{ProjectRecord, PropertyRecord};
use crate::domain::price::parse_price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilters {
    pub property_type: String,
    pub purpose: String,
    pub location: String,
    pub beds: String,
    pub baths: String,
    pub min_area: String,
    pub max_area: String,
    pub min_price: String,
    pub max_price: String,
}

impl Default for PropertyFilters {
    fn default() -> Self {
        Self {
            property_type: "Any".to_string(),
            purpose: "Any".to_string(),
            location: String::new(),
            beds: "Any".to_string(),
            baths: "Any".to_string(),
            min_area: String::new(),
            max_area: String::new(),
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

impl PropertyFilters {
    /// Pure inclusion test. Short-circuits on the first failing
    /// criterion; criteria are independent so evaluation order does not
    /// change the result.
    pub fn matches(&self, p: &PropertyRecord) -> bool {
        if !equals_unless_any(&self.property_type, &p.property_type) {
            return false;
        }
        if !equals_unless_any(&self.purpose, &p.purpose) {
            return false;
        }
        if !contains_unless_empty(&self.location, &p.location) {
            return false;
        }
        if !count_matches(&self.beds, p.beds_value()) {
            return false;
        }
        if !count_matches(&self.baths, p.baths_value()) {
            return false;
        }
        if let Some(min) = threshold(&self.min_area) {
            if p.area_value() < min {
                return false;
            }
        }
        if let Some(max) = threshold(&self.max_area) {
            if p.area_value() > max {
                return false;
            }
        }
        price_in_range(&p.price, &self.min_price, &self.max_price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilters {
    pub category: String,
    pub completion: String,
    pub status: String,
    pub location: String,
    pub project_type: String,
    pub min_price: String,
    pub max_price: String,
}

impl Default for ProjectFilters {
    fn default() -> Self {
        Self {
            category: "All".to_string(),
            completion: String::new(),
            status: "Any".to_string(),
            location: String::new(),
            project_type: "Any".to_string(),
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

impl ProjectFilters {
    pub fn matches(&self, p: &ProjectRecord) -> bool {
        if self.category != "All" && !equals_ci(&self.category, &p.category) {
            return false;
        }
        // Completion is a contains match, not equality: criterion "2024"
        // matches a stored "2024-2025".
        if !contains_unless_empty(&self.completion, &p.completion) {
            return false;
        }
        if !equals_unless_any(&self.status, &p.status) {
            return false;
        }
        if !contains_unless_empty(&self.location, &p.location) {
            return false;
        }
        if !equals_unless_any(&self.project_type, &p.project_type) {
            return false;
        }
        price_in_range(&p.price, &self.min_price, &self.max_price)
    }
}

fn equals_ci(criterion: &str, field: &str) -> bool {
    field.trim().to_lowercase() == criterion.trim().to_lowercase()
}

/// Exact case-insensitive equality, skipped for the "Any" sentinel.
/// A record with the field missing (empty) fails any active criterion.
fn equals_unless_any(criterion: &str, field: &str) -> bool {
    if criterion.is_empty() || criterion == "Any" {
        return true;
    }
    equals_ci(criterion, field)
}

/// Case-insensitive substring containment, skipped for an empty criterion.
fn contains_unless_empty(criterion: &str, field: &str) -> bool {
    let criterion = criterion.trim();
    if criterion.is_empty() {
        return true;
    }
    field.to_lowercase().contains(&criterion.to_lowercase())
}

/// Beds/baths criterion: "N+" means at least N, a bare "N" means exactly
/// N. A criterion with no leading digits ("Any") applies no constraint.
fn count_matches(criterion: &str, value: u32) -> bool {
    let criterion = criterion.trim();
    if criterion.is_empty() || criterion == "Any" {
        return true;
    }
    let digits: String = criterion
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let Ok(n) = digits.parse::<u32>() else {
        return true;
    };
    if criterion.ends_with('+') {
        value >= n
    } else {
        value == n
    }
}

/// Threshold criteria are skipped when empty or unparseable.
fn threshold(criterion: &str) -> Option<f64> {
    let criterion = criterion.trim();
    if criterion.is_empty() {
        return None;
    }
    criterion.parse::<f64>().ok()
}

/// Inclusive min/max bounds against the parsed price string.
fn price_in_range(price: &str, min: &str, max: &str) -> bool {
    let value = parse_price(price);
    if let Some(min) = threshold(min) {
        if value < min {
            return false;
        }
    }
    if let Some(max) = threshold(max) {
        if value > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(fields: serde_json::Value) -> PropertyRecord {
        serde_json::from_value(fields).unwrap()
    }

    fn project(fields: serde_json::Value) -> ProjectRecord {
        serde_json::from_value(fields).unwrap()
    }

    fn sample_properties() -> Vec<PropertyRecord> {
        vec![
            property(serde_json::json!({
                "id": "1", "property_type": "House", "purpose": "Sale",
                "location": "DHA Phase 6", "beds": 5, "baths": 4,
                "area_size": 500, "price": "8.5 Crore"
            })),
            property(serde_json::json!({
                "id": "2", "property_type": "Apartment", "purpose": "Rent",
                "location": "Clifton Block 2", "beds": 2, "baths": 2,
                "area_size": 1200, "price": "85 Thousand"
            })),
            property(serde_json::json!({
                "id": "3", "property_type": "Plot", "purpose": "Sale",
                "location": "Scheme 33", "beds": "N/A", "baths": "N/A",
                "area_size": 240, "price": "49 Lakh"
            })),
        ]
    }

    #[test]
    fn default_filters_pass_everything() {
        let filters = PropertyFilters::default();
        let all = sample_properties();
        assert!(all.iter().all(|p| filters.matches(p)));
    }

    #[test]
    fn filtered_set_is_a_subset() {
        let filters = PropertyFilters {
            purpose: "Sale".to_string(),
            ..Default::default()
        };
        let all = sample_properties();
        let kept: Vec<_> = all.iter().filter(|p| filters.matches(p)).collect();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|p| p.purpose == "Sale"));
    }

    #[test]
    fn reapplying_the_same_filters_is_idempotent() {
        let filters = PropertyFilters {
            property_type: "house".to_string(),
            ..Default::default()
        };
        let all = sample_properties();
        let once: Vec<_> = all.iter().filter(|p| filters.matches(p)).collect();
        let twice: Vec<_> = once
            .iter()
            .copied()
            .filter(|p| filters.matches(p))
            .collect();
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn type_equality_is_case_insensitive() {
        let filters = PropertyFilters {
            property_type: "apartment".to_string(),
            ..Default::default()
        };
        let all = sample_properties();
        let kept: Vec<_> = all.iter().filter(|p| filters.matches(p)).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");
    }

    #[test]
    fn location_is_a_substring_match() {
        let filters = PropertyFilters {
            location: "clifton".to_string(),
            ..Default::default()
        };
        let all = sample_properties();
        assert_eq!(all.iter().filter(|p| filters.matches(p)).count(), 1);
    }

    #[test]
    fn missing_field_fails_an_active_equality_filter() {
        let blank = property(serde_json::json!({ "id": "9" }));
        let filters = PropertyFilters {
            purpose: "Sale".to_string(),
            ..Default::default()
        };
        assert!(!filters.matches(&blank));
    }

    // Scenario: minPrice 5,000,000 keeps "50 Lakh" (inclusive boundary)
    // and drops "49 Lakh".
    #[test]
    fn min_price_boundary_is_inclusive() {
        let filters = PropertyFilters {
            min_price: "5000000".to_string(),
            ..Default::default()
        };
        let at_boundary = property(serde_json::json!({ "id": "1", "price": "50 Lakh" }));
        let below = property(serde_json::json!({ "id": "2", "price": "49 Lakh" }));
        assert!(filters.matches(&at_boundary));
        assert!(!filters.matches(&below));
    }

    // Scenario: "3+" is at-least-3, bare "3" is exactly 3.
    #[test]
    fn beds_plus_suffix_means_at_least() {
        let at_least = PropertyFilters {
            beds: "3+".to_string(),
            ..Default::default()
        };
        let exact = PropertyFilters {
            beds: "3".to_string(),
            ..Default::default()
        };
        let five_beds = property(serde_json::json!({ "id": "1", "beds": 5 }));
        let two_beds = property(serde_json::json!({ "id": "2", "beds": 2 }));

        assert!(at_least.matches(&five_beds));
        assert!(!at_least.matches(&two_beds));
        assert!(!exact.matches(&five_beds));
    }

    #[test]
    fn sentinel_beds_count_as_zero_for_thresholds() {
        let filters = PropertyFilters {
            beds: "3+".to_string(),
            ..Default::default()
        };
        let na = property(serde_json::json!({ "id": "3", "beds": "N/A" }));
        assert!(!filters.matches(&na));
    }

    #[test]
    fn area_range_bounds_are_inclusive() {
        let filters = PropertyFilters {
            min_area: "240".to_string(),
            max_area: "500".to_string(),
            ..Default::default()
        };
        let all = sample_properties();
        let kept: Vec<_> = all.iter().filter(|p| filters.matches(p)).collect();
        assert_eq!(kept.len(), 2); // 500 and 240, not 1200
    }

    #[test]
    fn completion_year_matches_by_containment() {
        let filters = ProjectFilters {
            completion: "2024".to_string(),
            ..Default::default()
        };
        let spanning = project(serde_json::json!({ "id": "1", "completion": "2024-2025" }));
        let other = project(serde_json::json!({ "id": "2", "completion": "2026" }));
        let missing = project(serde_json::json!({ "id": "3" }));

        assert!(filters.matches(&spanning));
        assert!(!filters.matches(&other));
        assert!(!filters.matches(&missing));
    }

    #[test]
    fn project_status_and_type_are_case_insensitive() {
        let filters = ProjectFilters {
            status: "under construction".to_string(),
            project_type: "sale".to_string(),
            ..Default::default()
        };
        let p = project(serde_json::json!({
            "id": "1", "status": "Under Construction", "project_type": "Sale"
        }));
        assert!(filters.matches(&p));
    }

    #[test]
    fn all_category_sentinel_applies_no_constraint() {
        let filters = ProjectFilters::default();
        let uncategorized = project(serde_json::json!({ "id": "1" }));
        assert!(filters.matches(&uncategorized));
    }
}
