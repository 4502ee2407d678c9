//! Route table, route guard and navigation state.
//!
//! Independent of the renderer: everything here works on plain location
//! strings and opaque page handles, so routing and guard decisions can be
//! exercised without mounting any component.
//!
//! - **Table** (`table`) - Validated route tree built once at startup
//! - **Resolve** (`resolve`) - Location to route matching with index fallback
//! - **Guard** (`guard`) - Auth predicate and render/redirect/pending decision
//! - **Decision** (`decision`) - Resolution and guard combined for one location
//! - **History** (`history`) - Push/replace history model
//! - **Navigator** (`navigator`) - Redirect-following navigation over a history
//! - **Session** (`session`) - Auth store with stale-check protection

pub mod decision;
pub mod error;
pub mod guard;
pub mod history;
pub mod navigator;
pub mod path;
pub mod resolve;
pub mod session;
pub mod table;

#[cfg(test)]
mod test;

pub use decision::{Decision, RedirectReason};
pub use error::{NavigationError, RouteTableError, StaleCheck};
pub use guard::{AuthPredicate, AuthStatus, GuardDecision, RouteGuard};
pub use history::History;
pub use navigator::{Navigator, NavigatorConfig, Outcome, View};
pub use resolve::Resolution;
pub use session::{AuthStore, CheckTicket, SessionState};
pub use table::{Element, RouteDef, RouteEntry, RoutePath, RouteTable, Target};
