use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, model::auth::AuthContext};

/// Admin-only content. Only mounted after the route gate let it through.
#[component]
pub fn SecretPage() -> Element {
    let auth = use_context::<AuthContext>();

    let Some(session) = auth.session() else {
        return rsx!();
    };
    let since = session.logged_in_at.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            h1 { class: "text-3xl font-bold", "Welcome, {session.fullname}" }
            p { class: "opacity-80", "Signed in as {session.email} since {since}." }
            div {
                class: "card bg-base-200 w-full max-w-xl",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Late slip requests" }
                    p { "There are no pending requests." }
                }
            }
        }
    }
}
