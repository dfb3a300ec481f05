use crate::backend::models::PropertyRecord;
use crate::templates::components::area_unit;
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

/// Detail view for one property. The back link echoes the browsing
/// snapshot the listing attached to the card link, so following it
/// lands the visitor exactly where they left off.
pub fn property_detail_page(p: &PropertyRecord, back_href: &str) -> Markup {
    site_layout(
        &p.property_name,
        "/properties",
        html! {
            main class="detail-screen" {
                a class="back-link" href=(back_href) { "\u{2190} Back to Properties" }

                div class="detail-head" {
                    div {
                        h1 { (p.property_name) }
                        p class="location" { (p.location) }
                    }
                    p class="price" { span class="currency" { "PKR" } " " (p.price) }
                }

                (media_gallery(&p.images, &p.videos, &p.property_name))

                div class="detail-facts" {
                    (fact("Type", &p.property_type))
                    (fact("Purpose", &p.purpose))
                    @if let Some(beds) = p.display_beds() {
                        (fact("Beds", beds))
                    }
                    @if let Some(baths) = p.display_baths() {
                        (fact("Baths", baths))
                    }
                    @if !p.area_size.trim().is_empty() {
                        (fact(
                            "Area",
                            &format!("{} {}", p.area_size, area_unit(&p.property_type)),
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

pub(super) fn fact(label: &str, value: &str) -> Markup {
    html! {
        div class="fact" {
            span class="fact-label" { (label) }
            span class="fact-value" { (value) }
        }
    }
}

pub(super) fn media_gallery(
    images: &[crate::backend::models::MediaItem],
    videos: &[crate::backend::models::MediaItem],
    alt: &str,
) -> Markup {
    html! {
        div class="detail-gallery" {
            @if images.is_empty() {
                img src="/static/placeholder.svg" alt=(alt);
            } @else {
                @for image in images {
                    img src=(image.url) alt=(alt);
                }
            }
            @for video in videos {
                video controls src=(video.url) {}
            }
        }
    }
}
