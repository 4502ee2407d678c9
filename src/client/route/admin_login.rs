use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{LoadingPage, Page},
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, ReturnTo},
            directory::DirectoryContext,
        },
        navigation::{AuthStatus, NavigatorConfig},
        router::Route,
    },
    model::admin::AdminLoginDto,
};

#[component]
pub fn AdminLogin() -> Element {
    let mut auth = use_context::<AuthContext>();
    let directory = use_context::<DirectoryContext>();
    let mut return_to = use_context::<ReturnTo>();
    let config = use_context::<NavigatorConfig>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let status = auth.status();

    // Leave the login page once logged in: back to the refused location, else home
    use_effect(use_reactive!(|status| {
        if status != AuthStatus::Authorized {
            return;
        }

        let target = return_to
            .take()
            .unwrap_or_else(|| config.home_path.clone());
        match target.parse::<Route>() {
            Ok(_) => {
                nav.replace(NavigationTarget::Internal(target));
            }
            Err(e) => {
                tracing::error!("Cannot continue to '{}': {}", target, e);
                nav.replace(Route::Home {});
            }
        }
    }));

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let login = AdminLoginDto {
            email: email(),
            password: password(),
        };

        match directory.authenticate(&login) {
            Ok(session) => {
                error.set(None);
                auth.login(session);
            }
            Err(e) => {
                tracing::warn!("Login failed for {}: {}", login.email, e);
                error.set(Some(e.to_string()));
            }
        }
    };

    if status == AuthStatus::Authorized {
        // Render nothing while redirecting
        return rsx!(LoadingPage {});
    }

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center",
            h1 { class: "text-2xl font-semibold", "Admin login" }
            form {
                class: "flex flex-col gap-4 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "flex flex-col gap-2",
                    label { class: "label", span { class: "label-text", "Email" } }
                    input {
                        r#type: "email",
                        class: "input input-bordered w-full",
                        placeholder: "admin@college.edu",
                        value: "{email}",
                        required: true,
                        oninput: move |e| email.set(e.value())
                    }
                }
                div {
                    class: "flex flex-col gap-2",
                    label { class: "label", span { class: "label-text", "Password" } }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        value: "{password}",
                        required: true,
                        oninput: move |e| password.set(e.value())
                    }
                }

                // Error Message
                if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }

                button { r#type: "submit", class: "btn btn-primary", "Login" }
                p {
                    class: "text-sm text-center",
                    "No account yet? "
                    Link { to: Route::AdminSignUp {}, class: "link", "Sign up" }
                }
            }
        }
    }
}
