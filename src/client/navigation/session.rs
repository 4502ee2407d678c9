use dioxus_logger::tracing;

use crate::client::navigation::{
    error::StaleCheck,
    guard::{AuthPredicate, AuthStatus},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<U> {
    Anonymous,
    /// An auth check is in flight.
    Checking,
    Authenticated(U),
}

/// Handle for an in-flight auth check.
///
/// Only the most recent check started after the last login/logout, for the
/// navigation that is still current, may settle the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    epoch: u64,
    generation: u64,
}

impl CheckTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// In-memory authentication store backing the route guard.
///
/// Writes go through `&mut self`, so they are serialized by ownership; each one
/// bumps the epoch and thereby invalidates every outstanding [`CheckTicket`].
/// Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStore<U> {
    state: SessionState<U>,
    epoch: u64,
}

impl<U> Default for AuthStore<U> {
    fn default() -> Self {
        Self {
            state: SessionState::Anonymous,
            epoch: 0,
        }
    }
}

impl<U> AuthStore<U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState<U> {
        &self.state
    }

    pub fn user(&self) -> Option<&U> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn login(&mut self, user: U) {
        self.epoch += 1;
        self.state = SessionState::Authenticated(user);
    }

    pub fn logout(&mut self) {
        self.epoch += 1;
        self.state = SessionState::Anonymous;
    }

    /// Marks the store as checking on behalf of navigation `generation`.
    pub fn begin_check(&mut self, generation: u64) -> CheckTicket {
        self.epoch += 1;
        self.state = SessionState::Checking;

        CheckTicket {
            epoch: self.epoch,
            generation,
        }
    }

    /// Applies the result of a check. `Some(user)` authenticates, `None`
    /// leaves the visitor anonymous.
    ///
    /// Fails with [`StaleCheck`], leaving the store untouched, when a login,
    /// logout or newer check happened in between, or when `current_generation`
    /// shows that a newer navigation superseded the one the check was for.
    pub fn complete_check(
        &mut self,
        ticket: CheckTicket,
        current_generation: u64,
        result: Option<U>,
    ) -> Result<AuthStatus, StaleCheck> {
        if ticket.epoch != self.epoch || ticket.generation != current_generation {
            tracing::debug!(
                "Discarding auth check from generation {} (current {})",
                ticket.generation,
                current_generation
            );
            return Err(StaleCheck);
        }

        self.state = match result {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        };

        Ok(self.status())
    }
}

impl<U> AuthPredicate for AuthStore<U> {
    fn status(&self) -> AuthStatus {
        match self.state {
            SessionState::Anonymous => AuthStatus::Unauthorized,
            SessionState::Checking => AuthStatus::Pending,
            SessionState::Authenticated(_) => AuthStatus::Authorized,
        }
    }
}
