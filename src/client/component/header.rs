use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaLock, FaRightFromBracket, FaRightToBracket, FaUserPlus},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let session = auth.session();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
            Link { to: Route::About {}, class: "link link-hover", "About" }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(session) = session {
                span { class: "hidden md:inline opacity-80", "{session.fullname}" }
                Link {
                    to: Route::SecretPage {},
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon { width: 18, height: 18, icon: FaLock }
                    p { "Secret" }
                }
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: move |_| auth.logout(),
                    Icon { width: 18, height: 18, icon: FaRightFromBracket }
                    p { "Logout" }
                }
            } else {
                Link {
                    to: Route::AdminSignUp {},
                    class: "btn btn-ghost flex gap-2 items-center",
                    Icon { width: 18, height: 18, icon: FaUserPlus }
                    p { "Sign up" }
                }
                Link {
                    to: Route::AdminLogin {},
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon { width: 18, height: 18, icon: FaRightToBracket }
                    p { "Login" }
                }
            }
        }
    })
}
