//! # Account Master Core
//!
//! Foundational types shared by every Account Master crate:
//!
//! - [`errors`]: the transport-level [`AppError`] and its HTTP response shape
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use account_master_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret123")?;
//! assert!(verify_password("secret123", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("User not found"));
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, BASIC_CHALLENGE};
pub use password::{PasswordError, hash_password, verify_password};
