use crate::backend::models::{MediaItem, ProjectRecord, PropertyRecord};
use maud::{html, Markup};

const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Apartments, offices and shops are measured in square feet; houses
/// and plots in square yards.
pub fn area_unit(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "apartment" | "office" | "shop" => "Sq.Ft",
        _ => "Sq.Yd",
    }
}

pub fn property_card_tile(p: &PropertyRecord, href: &str) -> Markup {
    html! {
        a class="card card-tile" href=(href) data-return-link {
            div class="card-media" {
                img src=(cover_url(&p.images)) alt=(p.property_name);
                span class="badge badge-purpose" { (p.purpose.to_uppercase()) }
                span class="pill pill-location" { (p.location) }
                (media_counts(&p.images, &p.videos))
            }
            div class="card-body" {
                p class="price" { span class="currency" { "PKR" } " " (p.price) }
                h2 { (p.property_name) }
                div class="facts" {
                    @if let Some(beds) = p.display_beds() {
                        span { "Bed: " (beds) }
                    }
                    @if let Some(baths) = p.display_baths() {
                        span { "Bath: " (baths) }
                    }
                    span { (p.area_size) " " (area_unit(&p.property_type)) }
                }
                p class="description" { (description_or_default(&p.description)) }
            }
        }
    }
}

pub fn property_card_list(p: &PropertyRecord, href: &str) -> Markup {
    html! {
        a class="card card-list" href=(href) data-return-link {
            div class="card-media" {
                img src=(cover_url(&p.images)) alt=(p.property_name);
                span class="badge badge-purpose" { (p.purpose.to_uppercase()) }
                (media_counts(&p.images, &p.videos))
            }
            div class="card-body" {
                div class="card-head" {
                    div {
                        h2 { (p.property_name) }
                        p class="location" { (p.location) }
                    }
                    p class="price" { span class="currency" { "PKR" } " " (p.price) }
                }
                div class="facts" {
                    span { (p.property_type) }
                    @if let Some(beds) = p.display_beds() {
                        span { "Bed: " (beds) }
                    }
                    @if let Some(baths) = p.display_baths() {
                        span { "Bath: " (baths) }
                    }
                    span { (p.area_size) " " (area_unit(&p.property_type)) }
                }
                p class="description" { (description_or_default(&p.description)) }
            }
        }
    }
}

pub fn project_card_tile(p: &ProjectRecord, href: &str) -> Markup {
    html! {
        a class="card card-tile" href=(href) data-return-link {
            div class="card-media" {
                img src=(cover_url(&p.images)) alt=(p.project_name);
                span class=(format!("badge {}", status_class(&p.status))) { (p.status.to_uppercase()) }
                span class=(format!("badge badge-right {}", project_type_class(&p.project_type))) {
                    (p.project_type.to_uppercase())
                }
                span class="pill pill-location" { (p.location) }
                (media_counts(&p.images, &p.videos))
            }
            div class="card-body" {
                p class="price" { span class="currency" { "PKR" } " " (p.price) }
                h2 { (p.project_name) }
                div class="facts" {
                    span { (p.category) }
                    @if !p.completion.is_empty() {
                        span { "Completion: " (p.completion) }
                    }
                    @if let Some(beds) = p.display_beds() {
                        span { "Bed: " (beds) }
                    }
                    @if let Some(baths) = p.display_baths() {
                        span { "Bath: " (baths) }
                    }
                }
                p class="description" { (description_or_default(&p.description)) }
            }
        }
    }
}

pub fn project_card_list(p: &ProjectRecord, href: &str) -> Markup {
    html! {
        a class="card card-list" href=(href) data-return-link {
            div class="card-media" {
                img src=(cover_url(&p.images)) alt=(p.project_name);
                span class=(format!("badge {}", status_class(&p.status))) { (p.status.to_uppercase()) }
                (media_counts(&p.images, &p.videos))
            }
            div class="card-body" {
                div class="card-head" {
                    div {
                        h2 { (p.project_name) }
                        p class="location" { (p.location) }
                    }
                    p class="price" { span class="currency" { "PKR" } " " (p.price) }
                }
                div class="facts" {
                    span { (p.category) }
                    span { (p.status) }
                    @if !p.completion.is_empty() {
                        span { "Completion: " (p.completion) }
                    }
                }
                p class="description" { (description_or_default(&p.description)) }
            }
        }
    }
}

fn cover_url(images: &[MediaItem]) -> &str {
    images
        .first()
        .map(|m| m.url.as_str())
        .filter(|u| !u.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

fn media_counts(images: &[MediaItem], videos: &[MediaItem]) -> Markup {
    html! {
        span class="pill pill-media" {
            span { (images.len()) " photos" }
            span { (videos.len()) " videos" }
        }
    }
}

fn description_or_default(description: &str) -> &str {
    if description.trim().is_empty() {
        "No description available for this property."
    } else {
        description
    }
}

fn status_class(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "upcoming" => "badge-upcoming",
        "under construction" => "badge-construction",
        "completed" => "badge-completed",
        _ => "badge-neutral",
    }
}

fn project_type_class(project_type: &str) -> &'static str {
    match project_type.trim().to_lowercase().as_str() {
        "sale" => "badge-sale",
        "rent" => "badge-rent",
        _ => "badge-neutral",
    }
}
