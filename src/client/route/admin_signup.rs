use dioxus::prelude::*;

use crate::{
    client::{
        component::Page, constant::SITE_NAME, model::directory::DirectoryContext, router::Route,
    },
    model::admin::{AdminSignupDto, MIN_PASSWORD_LENGTH},
};

#[component]
pub fn AdminSignUp() -> Element {
    let mut directory = use_context::<DirectoryContext>();

    let mut form = use_signal(AdminSignupDto::default);
    let mut error = use_signal(|| None::<String>);
    let mut created = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match directory.register(&form()) {
            Ok(()) => {
                error.set(None);
                form.set(AdminSignupDto::default());
                created.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let current = form();

    rsx! {
        Title { "Sign up | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center",
            h1 { class: "text-2xl font-semibold", "Create an admin account" }
            if created() {
                div {
                    class: "alert alert-success w-full max-w-sm",
                    span { "Account created. " }
                    Link { to: Route::AdminLogin {}, class: "link", "Log in" }
                }
            }
            form {
                class: "flex flex-col gap-4 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "flex flex-col gap-2",
                    label { class: "label", span { class: "label-text", "Full name" } }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: "{current.fullname}",
                        required: true,
                        oninput: move |e| form.write().fullname = e.value()
                    }
                }
                div {
                    class: "flex flex-col gap-2",
                    label { class: "label", span { class: "label-text", "Email" } }
                    input {
                        r#type: "email",
                        class: "input input-bordered w-full",
                        placeholder: "admin@college.edu",
                        value: "{current.email}",
                        required: true,
                        oninput: move |e| form.write().email = e.value()
                    }
                }
                div {
                    class: "flex flex-col gap-2",
                    label { class: "label", span { class: "label-text", "Password" } }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        minlength: "{MIN_PASSWORD_LENGTH}",
                        value: "{current.password}",
                        required: true,
                        oninput: move |e| form.write().password = e.value()
                    }
                }

                // Error Message
                if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }

                button { r#type: "submit", class: "btn btn-primary", "Sign up" }
            }
        }
    }
}
