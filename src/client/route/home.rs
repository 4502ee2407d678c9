use dioxus::prelude::*;

use crate::client::{
    component::Page, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let session = auth.session();

    rsx! {
        Title { "Home | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center text-center",
            h1 { class: "text-4xl font-bold", "{SITE_NAME}" }
            p {
                class: "max-w-xl opacity-80",
                "Review and approve late slip requests from students."
            }
            div {
                class: "flex gap-2",
                if session.is_some() {
                    Link { to: Route::SecretPage {}, class: "btn btn-primary", "Open admin area" }
                } else {
                    Link { to: Route::AdminLogin {}, class: "btn btn-primary", "Admin login" }
                    Link { to: Route::AdminSignUp {}, class: "btn btn-outline", "Create an account" }
                }
            }
        }
    }
}
