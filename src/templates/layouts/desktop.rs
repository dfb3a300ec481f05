use maud::{html, Markup, DOCTYPE};

/// Shared page chrome: header navigation, footer, stylesheet.
/// `active` is the nav path to highlight ("/properties" etc.).
pub fn site_layout(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Crescent Estates" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Crescent Estates" }
                    nav {
                        ul {
                            @for &(href, label) in NAV_LINKS {
                                li {
                                    a href=(href)
                                        class=[(href == active).then_some("active")] {
                                        (label)
                                    }
                                }
                            }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    div class="footer-col" {
                        h4 { "Crescent Estates" }
                        p { "Premium properties across Karachi, from luxury homes to modern apartments, commercial spaces, and plots." }
                    }
                    div class="footer-col" {
                        h4 { "Contact" }
                        ul {
                            li { "Shahrah-e-Faisal, Karachi" }
                            li { "+92 21 111 222 333" }
                            li { "info@crescentestates.pk" }
                        }
                    }
                    div class="footer-col" {
                        h4 { "Browse" }
                        ul {
                            li { a href="/properties" { "Properties" } }
                            li { a href="/projects" { "Projects" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                }
            }
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/properties", "Properties"),
    ("/projects", "Projects"),
    ("/about", "About"),
    ("/contact", "Contact"),
];
