use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation failure of an admin form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank.
    ///
    /// # Fields
    /// - Human-readable field name
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AdminSignupDto {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AdminLoginDto {
    pub email: String,
    pub password: String,
}

impl AdminSignupDto {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.fullname.trim().is_empty() {
            return Err(FormError::Required("Full name"));
        }
        validate_email(&self.email)?;

        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }

        Ok(())
    }
}

impl AdminLoginDto {
    /// Login only checks shape; length rules are enforced at signup.
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)?;

        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }

        Ok(())
    }
}

/// Lowercased, trimmed email used as the account key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::Required("Email"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::InvalidEmail);
    };

    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty());

    if local.is_empty() || !domain_ok || domain.contains('@') || email.contains(char::is_whitespace)
    {
        return Err(FormError::InvalidEmail);
    }

    Ok(())
}
