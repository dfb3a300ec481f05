use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    site_layout(
        "Contact Us",
        "/contact",
        html! {
            main class="static-page" {
                h1 { "Contact Us" }
                p { "Have a question about a listing or a project? Reach out and an advisor will get back to you within one business day." }

                section class="contact-details" {
                    div {
                        h2 { "Office" }
                        p { "Suite 4, Crescent Plaza, Khayaban-e-Ittehad, DHA Phase 6, Karachi" }
                    }
                    div {
                        h2 { "Phone" }
                        p { "+92 21 3530 0000" }
                    }
                    div {
                        h2 { "Email" }
                        p { "info@crescentestates.pk" }
                    }
                }
            }
        },
    )
}
