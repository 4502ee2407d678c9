use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::navigation::{AuthPredicate, AuthStatus, AuthStore};

/// The logged-in admin.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub fullname: String,
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Shared handle to the session's [`AuthStore`].
///
/// Provided once by `App`; every guard evaluation reads it fresh.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthStore<AdminSession>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthStore::new()),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.inner.read().status()
    }

    pub fn session(&self) -> Option<AdminSession> {
        self.inner.read().user().cloned()
    }

    pub fn login(&mut self, session: AdminSession) {
        tracing::info!("Admin {} logged in", session.email);
        self.inner.write().login(session);
    }

    pub fn logout(&mut self) {
        tracing::info!("Admin logged out");
        self.inner.write().logout();
    }
}

/// Location the route guard refused, to continue to after login.
#[derive(Clone, Copy)]
pub struct ReturnTo {
    inner: Signal<Option<String>>,
}

impl ReturnTo {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(None),
        }
    }

    pub fn set(&mut self, location: String) {
        self.inner.set(Some(location));
    }

    pub fn take(&mut self) -> Option<String> {
        self.inner.write().take()
    }

    pub fn clear(&mut self) {
        if self.inner.peek().is_some() {
            self.inner.set(None);
        }
    }
}
