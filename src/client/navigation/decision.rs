use crate::client::navigation::{
    guard::{AuthPredicate, GuardDecision, RouteGuard},
    resolve::Resolution,
    table::RouteTable,
};

/// Why a navigation is being redirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectReason {
    /// A redirect entry in the table, such as the root index sending `/` to `/home`.
    Canonical,
    /// The route guard refused the location.
    Unauthorized { return_to: String },
}

/// Final answer for one location: what to render, or where to go instead.
///
/// Every redirect is a history replace.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<P> {
    Render {
        path: String,
        page: P,
        layouts: Vec<P>,
    },
    /// A guarded page is waiting on the auth predicate. The chrome still renders.
    Pending { path: String, layouts: Vec<P> },
    Redirect { to: String, reason: RedirectReason },
    NotFound { path: String },
}

impl<P: Clone> RouteTable<P> {
    /// Resolves `location` and runs the guard when the match is protected.
    ///
    /// The guard sees `location` as given, query and fragment included, so a
    /// refused visitor can be sent back to exactly what they asked for.
    pub fn decide(
        &self,
        location: &str,
        guard: &RouteGuard,
        auth: Option<&dyn AuthPredicate>,
    ) -> Decision<P> {
        match self.resolve(location) {
            Resolution::NotFound { path } => Decision::NotFound { path },
            Resolution::Redirect { to, guarded: false, .. } => Decision::Redirect {
                to,
                reason: RedirectReason::Canonical,
            },
            Resolution::Redirect {
                from,
                to,
                layouts,
                guarded: true,
            } => match guard.evaluate(location, auth) {
                GuardDecision::Render => Decision::Redirect {
                    to,
                    reason: RedirectReason::Canonical,
                },
                GuardDecision::Pending => Decision::Pending {
                    path: from,
                    layouts,
                },
                GuardDecision::Redirect { to, return_to } => Decision::Redirect {
                    to,
                    reason: RedirectReason::Unauthorized { return_to },
                },
            },
            Resolution::Page {
                path,
                page,
                layouts,
                guarded: false,
            } => Decision::Render {
                path,
                page,
                layouts,
            },
            Resolution::Page {
                path,
                page,
                layouts,
                guarded: true,
            } => match guard.evaluate(location, auth) {
                GuardDecision::Render => Decision::Render {
                    path,
                    page,
                    layouts,
                },
                GuardDecision::Pending => Decision::Pending { path, layouts },
                GuardDecision::Redirect { to, return_to } => Decision::Redirect {
                    to,
                    reason: RedirectReason::Unauthorized { return_to },
                },
            },
        }
    }
}
