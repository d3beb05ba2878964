//! Page shell around the timeline: navigation bar, hero banner and footer.

use chrono::Datelike;
use dioxus::prelude::*;
use journey_core::SiteInfo;

/// In-page anchors shown in the navigation bar.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "#home"),
    ("Upcoming Events", "#timeline"),
    ("Contacts", "#footer"),
];

#[component]
pub fn Navbar(site: SiteInfo) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                a { class: "navbar-brand", href: "#home",
                    span { class: "navbar-logo", "G" }
                    span { class: "navbar-name", "{site.name}" }
                }
                ul { class: "navbar-links",
                    for (label, href) in NAV_LINKS {
                        li { key: "{href}",
                            a { href: "{href}", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Hero(site: SiteInfo) -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "{site.title}" }
                p { class: "hero-tagline", "{site.tagline}" }
                if let Some(url) = &site.join_url {
                    a { class: "hero-cta", href: "{url}", target: "_blank", "Join Our Community →" }
                } else {
                    a { class: "hero-cta", href: "#footer", "Join Our Community →" }
                }
            }
        }
    }
}

/// Copyright notice for the given year.
pub fn copyright_line(holder: &str, year: i32) -> String {
    format!("© {year} {holder}. All rights reserved.")
}

#[component]
pub fn Footer(site: SiteInfo) -> Element {
    let notice = copyright_line(&site.copyright_holder, chrono::Local::now().year());

    rsx! {
        footer { id: "footer", class: "footer",
            h2 { class: "footer-name", "{site.name}" }
            p { class: "footer-blurb", "{site.footer_blurb}" }
            div { class: "footer-copyright", "{notice}" }
        }
    }
}
