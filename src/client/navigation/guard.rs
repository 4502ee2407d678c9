use dioxus_logger::tracing;

/// Answer of an authentication source at the time it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authorized,
    Unauthorized,
    /// The source is still working out the answer (e.g. an async session check).
    Pending,
}

/// Injectable source of truth for "is the visitor logged in".
///
/// Evaluated fresh on every guard invocation; implementations must not change
/// their answer as a side effect of being asked.
pub trait AuthPredicate {
    fn status(&self) -> AuthStatus;
}

impl AuthPredicate for AuthStatus {
    fn status(&self) -> AuthStatus {
        *self
    }
}

/// A fixed login flag.
impl AuthPredicate for bool {
    fn status(&self) -> AuthStatus {
        if *self {
            AuthStatus::Authorized
        } else {
            AuthStatus::Unauthorized
        }
    }
}

/// What the guard wants done with a protected subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content unmodified.
    Render,
    /// Replace the current history entry with the login path.
    ///
    /// `return_to` is the location that was refused, kept so the visitor can be
    /// sent back after logging in.
    Redirect { to: String, return_to: String },
    /// Render neither the content nor a redirect until the predicate settles.
    Pending,
}

/// Gates rendering of a subtree behind an [`AuthPredicate`].
///
/// Holds no state besides the login path, so evaluating it repeatedly with an
/// unchanged predicate always yields the same decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Decides whether `intent` may render.
    ///
    /// A missing predicate counts as unauthorized.
    pub fn evaluate(&self, intent: &str, predicate: Option<&dyn AuthPredicate>) -> GuardDecision {
        let status = predicate.map_or(AuthStatus::Unauthorized, |p| p.status());

        match status {
            AuthStatus::Authorized => GuardDecision::Render,
            AuthStatus::Pending => GuardDecision::Pending,
            AuthStatus::Unauthorized => {
                tracing::info!(
                    "Refused '{}', redirecting to '{}'",
                    intent,
                    self.login_path
                );
                GuardDecision::Redirect {
                    to: self.login_path.clone(),
                    return_to: intent.to_string(),
                }
            }
        }
    }
}
