//! The stored profile record and its partial-update patch.

use crate::ids::ProfileId;
use std::fmt;

/// A user profile as held by the store.
///
/// `password` always holds a bcrypt hash once the HTTP layer has processed
/// the request that produced it.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub id: ProfileId,
    pub email: String,
    pub username: String,
    pub password: String,
    pub admin: bool,
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<hash>")
            .field("admin", &self.admin)
            .finish()
    }
}

/// Field-by-field update for a stored [`Profile`].
///
/// `None` leaves the stored value untouched, and so does an empty string.
/// `admin` is tri-state, so `Some(false)` demotes an admin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub admin: Option<bool>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProfilePatch {
    /// The username this patch would write, if any.
    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    /// The password (hash) this patch would write, if any.
    pub fn password(&self) -> Option<&str> {
        non_empty(&self.password)
    }

    /// Merges the present fields into `profile`. The id is never touched.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(email) = non_empty(&self.email) {
            profile.email = email.to_string();
        }
        if let Some(username) = self.username() {
            profile.username = username.to_string();
        }
        if let Some(password) = self.password() {
            profile.password = password.to_string();
        }
        if let Some(admin) = self.admin {
            profile.admin = admin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Profile {
        Profile {
            id: ProfileId::new(),
            email: "old@example.com".to_string(),
            username: "test".to_string(),
            password: "oldHash".to_string(),
            admin: true,
        }
    }

    #[test]
    fn test_email_only_patch() {
        let mut profile = stored();
        let before = profile.clone();

        ProfilePatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.email, "new@example.com");
        assert_eq!(profile.id, before.id);
        assert_eq!(profile.username, before.username);
        assert_eq!(profile.password, before.password);
        assert_eq!(profile.admin, before.admin);
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let mut profile = stored();
        let before = profile.clone();

        let patch = ProfilePatch {
            email: Some(String::new()),
            username: Some(String::new()),
            password: Some(String::new()),
            admin: None,
        };
        patch.apply(&mut profile);

        assert_eq!(profile, before);
    }

    #[test]
    fn test_admin_can_be_demoted() {
        let mut profile = stored();

        ProfilePatch {
            admin: Some(false),
            ..Default::default()
        }
        .apply(&mut profile);

        assert!(!profile.admin);
    }

    #[test]
    fn test_debug_hides_password() {
        let debug_str = format!("{:?}", stored());
        assert!(!debug_str.contains("oldHash"));
        assert!(debug_str.contains("test"));
    }
}
