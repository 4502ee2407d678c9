use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    client::model::auth::AdminSession,
    model::admin::{normalize_email, AdminLoginDto, AdminSignupDto, FormError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An account with this email was already signed up.
    #[error("User already exists")]
    AlreadyExists(String),

    /// Unknown email or wrong password; the two are not told apart.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Debug, Clone, PartialEq)]
struct AdminAccount {
    fullname: String,
    email: String,
    password: String,
}

/// Admin accounts signed up during this browser session.
///
/// Kept in memory only and lost on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDirectory {
    accounts: HashMap<String, AdminAccount>,
}

impl AdminDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn register(&mut self, signup: &AdminSignupDto) -> Result<(), DirectoryError> {
        signup.validate()?;

        let key = normalize_email(&signup.email);
        if self.accounts.contains_key(&key) {
            return Err(DirectoryError::AlreadyExists(key));
        }

        tracing::info!("Registered admin {}", key);
        self.accounts.insert(
            key.clone(),
            AdminAccount {
                fullname: signup.fullname.trim().to_string(),
                email: key,
                password: signup.password.clone(),
            },
        );

        Ok(())
    }

    pub fn authenticate(
        &self,
        login: &AdminLoginDto,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, DirectoryError> {
        login.validate()?;

        let account = self
            .accounts
            .get(&normalize_email(&login.email))
            .filter(|account| account.password == login.password)
            .ok_or(DirectoryError::InvalidCredentials)?;

        Ok(AdminSession {
            fullname: account.fullname.clone(),
            email: account.email.clone(),
            logged_in_at: now,
        })
    }
}

/// Shared handle to the [`AdminDirectory`] of this session.
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    inner: Signal<AdminDirectory>,
}

impl DirectoryContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AdminDirectory::new()),
        }
    }

    pub fn register(&mut self, signup: &AdminSignupDto) -> Result<(), DirectoryError> {
        self.inner.write().register(signup)
    }

    pub fn authenticate(&self, login: &AdminLoginDto) -> Result<AdminSession, DirectoryError> {
        self.inner.read().authenticate(login, Utc::now())
    }
}
