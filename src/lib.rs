//! # Account Master
//!
//! A small account service built with Rust and Axum. User profiles live in
//! an in-memory store; every request authenticates with HTTP Basic
//! credentials checked against bcrypt hashes, and mutations are reserved for
//! administrators.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── account-master-core/           # AppError, password hashing
//! ├── account-master-config/         # Environment-driven settings
//! ├── account-master-models/         # Profile, patch and wire DTOs
//! ├── account-master-store/          # Concurrent profile store
//! └── account-master-observability/  # Tracing setup, request logging
//! src/
//! ├── middleware/     # authenticate and require_admin gates
//! ├── modules/users/  # controller, service, router
//! ├── bootstrap.rs    # startup admin account
//! ├── docs.rs         # OpenAPI document
//! ├── router.rs       # application router
//! ├── state.rs        # shared state
//! └── validator.rs    # ValidatedJson extractor
//! ```
//!
//! ## Routes
//!
//! | Method | Path         | Access        |
//! |--------|--------------|---------------|
//! | GET    | `/user`      | authenticated |
//! | GET    | `/user/{id}` | authenticated |
//! | POST   | `/user`      | admin         |
//! | PUT    | `/user/{id}` | admin         |
//! | DELETE | `/user/{id}` | admin         |
//!
//! ## Quick Start
//!
//! ```bash
//! ADMIN_USERNAME=root
//! ADMIN_PASSWORD=changeme
//! SERVER_PORT=3000
//! ```
//!
//! The store starts empty apart from the configured admin. Without
//! `ADMIN_USERNAME`/`ADMIN_PASSWORD` nobody can log in.
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod bootstrap;
pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use account_master_config;
pub use account_master_core;
pub use account_master_models;
pub use account_master_observability;
pub use account_master_store;
