use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::client::{component::Page, constant::SITE_NAME};

const ABOUT: &str = r#"
## About the portal

Students who arrive after the start of a session request a **late slip**.
Admins review the pending requests and approve or reject them.

### Getting access

1. Create an admin account on the *Sign up* page.
2. Log in with the same email and password.
3. The admin area opens once you are logged in.

Accounts and sessions only last while this tab is open.
"#;

#[component]
pub fn About() -> Element {
    let content = use_hook(|| {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(ABOUT, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        Title { "About | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            article {
                class: "prose max-w-2xl",
                dangerous_inner_html: "{content}"
            }
        }
    }
}
