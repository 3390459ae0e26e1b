//! Middleware for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Basic-auth gate and the [`AuthUser`](auth::AuthUser) extractor
//! - [`role`]: admin-only gate
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Basic <base64(username:password)>`
//! 2. `authenticate` looks the username up in the profile store and verifies
//!    the password against the stored bcrypt hash
//! 3. On success the caller's username and admin flag are attached to the
//!    request as an `AuthUser`
//! 4. On admin-only routes `require_admin` checks that flag
//! 5. The handler runs if every gate passed
//!
//! A failing gate answers immediately; later gates and the handler never run.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn whoami(auth_user: AuthUser) -> impl IntoResponse {
//!     auth_user.username
//! }
//! ```

pub mod auth;
pub mod role;
