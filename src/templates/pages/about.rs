use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    site_layout(
        "About Us",
        "/about",
        html! {
            main class="static-page" {
                h1 { "About Crescent Estates" }
                p { "Crescent Estates has helped families and investors find the right property in Karachi for over a decade. We combine deep local knowledge with a verified catalogue of homes, commercial spaces, and development projects." }
                p { "Our advisors walk every listing before it is published, and our project desk tracks construction progress across the city so you always know where a development really stands." }

                section {
                    h2 { "What We Do" }
                    ul {
                        li { "Residential and commercial sales and rentals" }
                        li { "New project marketing for trusted developers" }
                        li { "Investment advisory and portfolio management" }
                    }
                }
            }
        },
    )
}
