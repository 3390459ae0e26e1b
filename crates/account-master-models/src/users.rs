//! Wire DTOs for the `/user` endpoints.
//!
//! Requests carry `{email, username, password, admin}`; responses carry
//! `{id, email, username, admin}` and never echo the password.

use crate::ids::ProfileId;
use crate::profile::{Profile, ProfilePatch};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Passwords are hashed trimmed, so whitespace alone counts as empty.
fn not_blank(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("password must not be empty"));
        return Err(err);
    }
    Ok(())
}

/// DTO for creating a new user.
///
/// `username` and `password` must be non-empty. `email` and `admin` are
/// optional and default to `""` and `false`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "secret123")]
    pub password: String,
    #[serde(default)]
    pub admin: bool,
}

impl CreateUserDto {
    /// Builds the record to insert. The store assigns the real id.
    pub fn into_profile(self, password_hash: String) -> Profile {
        Profile {
            id: ProfileId::new(),
            email: self.email,
            username: self.username,
            password: password_hash,
            admin: self.admin,
        }
    }
}

/// DTO for a partial update. Every field is optional; empty strings are
/// treated the same as absent ones.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub admin: Option<bool>,
}

impl UpdateUserDto {
    /// Clear-text password to hash, if the request changes it.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn into_patch(self, password_hash: Option<String>) -> ProfilePatch {
        ProfilePatch {
            email: self.email,
            username: self.username,
            password: password_hash,
            admin: self.admin,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    pub id: ProfileId,
    pub email: String,
    pub username: String,
    pub admin: bool,
}

impl From<Profile> for UserResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            username: profile.username,
            admin: profile.admin,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_dto_defaults() {
        let json = r#"{"username":"alice","password":"secret123"}"#;
        let dto: CreateUserDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.username, "alice");
        assert_eq!(dto.email, "");
        assert!(!dto.admin);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_rejects_empty_username() {
        let dto = CreateUserDto {
            email: String::new(),
            username: String::new(),
            password: "secret123".to_string(),
            admin: false,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_missing_password() {
        let json = r#"{"username":"alice"}"#;
        assert!(serde_json::from_str::<CreateUserDto>(json).is_err());
    }

    #[test]
    fn test_update_user_dto_keeps_explicit_false() {
        let dto: UpdateUserDto = serde_json::from_str(r#"{"admin":false}"#).unwrap();
        let patch = dto.into_patch(None);

        assert_eq!(patch.admin, Some(false));
        assert!(patch.email.is_none());
    }

    #[test]
    fn test_create_user_dto_rejects_blank_password() {
        let dto = CreateUserDto {
            email: String::new(),
            username: "ws".to_string(),
            password: "   ".to_string(),
            admin: false,
        };
        let errors = dto.validate().unwrap_err();

        let field_errors = errors.field_errors();
        let password_errors = field_errors["password"];
        assert_eq!(
            password_errors[0].message.as_deref(),
            Some("password must not be empty")
        );
    }

    #[test]
    fn test_update_user_dto_empty_password_is_not_new() {
        let dto: UpdateUserDto = serde_json::from_str(r#"{"password":""}"#).unwrap();
        assert!(dto.new_password().is_none());

        let dto: UpdateUserDto = serde_json::from_str(r#"{"password":" \t "}"#).unwrap();
        assert!(dto.new_password().is_none());
        assert!(dto.into_patch(None).password.is_none());
    }

    #[test]
    fn test_user_response_has_no_password() {
        let profile = Profile {
            id: ProfileId::new(),
            email: "bob@example.com".to_string(),
            username: "bob".to_string(),
            password: "$2b$12$hash".to_string(),
            admin: false,
        };
        let serialized = serde_json::to_string(&UserResponse::from(profile)).unwrap();

        assert!(serialized.contains("bob@example.com"));
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("$2b$"));
    }
}
