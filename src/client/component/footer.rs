use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx!(footer {
        class: "footer footer-center gap-2 p-6 bg-base-200 text-base-content",
        nav {
            class: "flex gap-4",
            Link { to: Route::Home {}, class: "link link-hover", "Home" }
            Link { to: Route::About {}, class: "link link-hover", "About" }
        }
        p { "© {year} {SITE_NAME}" }
    })
}
