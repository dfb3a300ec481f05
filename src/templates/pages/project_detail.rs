use crate::backend::models::ProjectRecord;
use crate::templates::components::area_unit;
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

use super::property_detail::{fact, media_gallery};

pub fn project_detail_page(p: &ProjectRecord, back_href: &str) -> Markup {
    site_layout(
        &p.project_name,
        "/projects",
        html! {
            main class="detail-screen" {
                a class="back-link" href=(back_href) { "\u{2190} Back to Projects" }

                div class="detail-head" {
                    div {
                        h1 { (p.project_name) }
                        p class="location" { (p.location) }
                    }
                    p class="price" { span class="currency" { "PKR" } " " (p.price) }
                }

                (media_gallery(&p.images, &p.videos, &p.project_name))

                div class="detail-facts" {
                    (fact("Category", &p.category))
                    (fact("Status", &p.status))
                    (fact("Type", &p.project_type))
                    @if !p.completion.trim().is_empty() {
                        (fact("Completion", &p.completion))
                    }
                    @if let Some(beds) = p.display_beds() {
                        (fact("Beds", beds))
                    }
                    @if let Some(baths) = p.display_baths() {
                        (fact("Baths", baths))
                    }
                    @if !p.area_size.trim().is_empty() {
                        (fact(
                            "Area",
                            &format!("{} {}", p.area_size, area_unit(&p.category)),
                        ))
                    }
                }

                section class="detail-description" {
                    h2 { "Description" }
                    @if p.description.trim().is_empty() {
                        p { "No description available for this property." }
                    } @else {
                        p { (p.description) }
                    }
                }
            }
        },
    )
}
