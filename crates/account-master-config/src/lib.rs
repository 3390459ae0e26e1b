//! # Account Master Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: listen address and request/shutdown timeouts
//! - [`admin`]: optional bootstrap administrator account
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use account_master_config::{AdminConfig, CorsConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let server = ServerConfig::from_env();
//! let admin = AdminConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod admin;
pub mod cors;
pub mod server;

pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;
