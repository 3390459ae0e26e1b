//! # Account Master Models
//!
//! Domain records and wire DTOs.
//!
//! # Modules
//!
//! - [`ids`]: the [`ProfileId`] newtype
//! - [`profile`]: the stored [`Profile`] and its [`ProfilePatch`]
//! - [`users`]: request/response DTOs for the `/user` endpoints

pub mod ids;
pub mod profile;
pub mod users;

pub use ids::ProfileId;
pub use profile::{Profile, ProfilePatch};
pub use users::{CreateUserDto, ErrorResponse, MessageResponse, UpdateUserDto, UserResponse};
