use dioxus::prelude::*;

use crate::client::component::{Footer, Header, RouteGate};

/// Persistent chrome around whatever the router selected.
#[component]
pub fn Shell() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        main {
            class: "flex-1",
            RouteGate {  }
        }
        Footer {  }
    })
}
