//! Bootstrap administrator account.
//!
//! The account is inserted into the profile store at startup so there is
//! always someone able to pass the admin gate on a fresh process.
//!
//! # Environment Variables
//!
//! - `ADMIN_USERNAME`: Login name (required to enable bootstrap)
//! - `ADMIN_PASSWORD`: Clear-text password, hashed before storage (required to enable bootstrap)
//! - `ADMIN_EMAIL`: Contact address (default: empty)
//! - `ADMIN_IS_ADMIN`: Whether the account gets the admin flag (default: `true`)

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub email: String,
    pub username: String,
    pub password: String,
    pub admin: bool,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

impl AdminConfig {
    /// Returns `None` unless both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = var("ADMIN_USERNAME").filter(|v| !v.trim().is_empty())?;
        let password = var("ADMIN_PASSWORD").filter(|v| !v.trim().is_empty())?;

        Some(Self {
            email: var("ADMIN_EMAIL").unwrap_or_default(),
            username,
            password,
            admin: var("ADMIN_IS_ADMIN")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
