use crate::templates::layouts::site_layout;
use maud::{html, Markup};

const SEARCH_TYPES: &[&str] = &["Any", "Apartment", "House", "Plot", "Shop", "Office"];

/// Landing page. The hero search is a plain GET form into the
/// properties screen, so a search lands there with the chosen filters
/// as transient state.
pub fn home_page() -> Markup {
    site_layout(
        "Crescent Estates",
        "/",
        html! {
            main {
                section class="hero" {
                    h1 { "Find Your Perfect Property in Karachi" }
                    p { "Luxury homes, modern apartments, commercial spaces, and plots across the city's finest neighbourhoods." }

                    form class="hero-search" method="get" action="/properties" {
                        select name="type" {
                            @for &option in SEARCH_TYPES {
                                option value=(option) { (option) }
                            }
                        }
                        select name="purpose" {
                            option value="Any" { "Buy or Rent" }
                            option value="Sale" { "Buy" }
                            option value="Rent" { "Rent" }
                        }
                        input type="number" name="max_area" placeholder="Max area";
                        input type="number" name="max_price" placeholder="Max price (PKR)";
                        button type="submit" { "Search" }
                    }

                    div class="hero-shortcuts" {
                        a href="/properties?purpose=Sale" { "Buy" }
                        a href="/properties?purpose=Rent" { "Rent" }
                        a href="/projects" { "New Projects" }
                    }
                }

                section class="highlights" {
                    div class="highlight" {
                        h2 { "Curated Listings" }
                        p { "Every property is verified before it appears here." }
                    }
                    div class="highlight" {
                        h2 { "Trusted Developers" }
                        p { "Projects from Karachi's most established builders." }
                    }
                    div class="highlight" {
                        h2 { "Local Expertise" }
                        p { "Advisors who know every phase of DHA, Clifton, and beyond." }
                    }
                }
            }
        },
    )
}
