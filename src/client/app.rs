use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::ErrorPage,
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, ReturnTo},
        directory::DirectoryContext,
    },
    navigation::NavigatorConfig,
    router::{route_table, Route, SharedRoutes},
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(AuthContext::new);
    use_context_provider(ReturnTo::new);
    use_context_provider(DirectoryContext::new);
    let config = use_context_provider(NavigatorConfig::default);

    // Build and check the route table once; a broken table must not render a blank app
    let routes = use_hook(|| {
        let table = match route_table() {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Invalid route table: {}", e);
                return None;
            }
        };

        if let Err(e) = config.validate(&table) {
            tracing::error!("Invalid navigation config: {}", e);
            return None;
        }

        Some(SharedRoutes::new(table))
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Admin portal for late slip requests"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        if let Some(routes) = routes {
            PortalRouter { routes }
        } else {
            ErrorPage { status: 500, message: "The portal is misconfigured" }
        }
    }
}

#[component]
fn PortalRouter(routes: SharedRoutes) -> Element {
    use_context_provider(|| routes);

    rsx! {
        Router::<Route> {}
    }
}
