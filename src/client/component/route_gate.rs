use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, ReturnTo},
    navigation::{path::normalize, AuthPredicate, Decision, NavigatorConfig, RedirectReason},
    router::{Route, SharedRoutes},
};

/// Outlet that applies the route table's policy to the current route.
///
/// Canonical redirects (`/` to `/home`) and guard refusals replace the current
/// history entry. Guarded pages render only once the auth predicate answers
/// `Authorized`; while it is pending a spinner is shown instead. More than
/// `max_redirects` redirects in a row stop on an error page.
#[component]
pub fn RouteGate() -> Element {
    let routes = use_context::<SharedRoutes>();
    let config = use_context::<NavigatorConfig>();
    let auth = try_use_context::<AuthContext>();
    let mut return_to = use_context::<ReturnTo>();
    let nav = navigator();
    let mut redirects = use_signal(|| 0usize);

    // Full location so a refused visitor comes back with the same query
    let location = router().full_route_string();
    let status = auth.map(|auth| auth.status());
    let decision = routes.decide(
        &location,
        &config.guard(),
        status.as_ref().map(|s| s as &dyn AuthPredicate),
    );

    let redirect = match &decision {
        Decision::Redirect { to, reason } => Some((to.clone(), reason.clone())),
        _ => None,
    };
    let on_login = normalize(&location) == normalize(&config.login_path);
    let max_redirects = config.max_redirects;

    // Redirect based on the decision for the current location
    use_effect(use_reactive!(|redirect, on_login| {
        let Some((to, reason)) = redirect else {
            if *redirects.peek() != 0 {
                redirects.set(0);
            }
            // A refused location only survives the trip to the login page
            if !on_login {
                return_to.clear();
            }
            return;
        };

        let count = *redirects.peek() + 1;
        redirects.set(count);
        if count > max_redirects {
            tracing::error!("Stopped after {} redirects at '{}'", max_redirects, to);
            return;
        }

        if let RedirectReason::Unauthorized { return_to: refused } = reason {
            return_to.set(refused);
        }

        match to.parse::<Route>() {
            Ok(_) => {
                tracing::debug!("Replacing location with '{}'", to);
                nav.replace(NavigationTarget::Internal(to));
            }
            Err(e) => tracing::error!("Redirect target '{}' is not a route: {}", to, e),
        }
    }));

    if redirects() > max_redirects {
        return rsx! {
            ErrorPage { status: 508, message: "Too many redirects" }
        };
    }

    match decision {
        Decision::Render { .. } | Decision::NotFound { .. } => rsx!(Outlet::<Route> {}),
        Decision::Pending { .. } => rsx!(LoadingPage {}),
        // Render nothing while redirecting via the use_effect
        Decision::Redirect { .. } => rsx!(),
    }
}
