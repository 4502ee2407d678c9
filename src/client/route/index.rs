use dioxus::prelude::*;

use crate::client::component::LoadingPage;

/// Bare root. The route gate replaces it with the home page before anything
/// here is visible.
#[component]
pub fn Index() -> Element {
    rsx!(LoadingPage {})
}
