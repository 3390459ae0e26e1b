//! Account Master Observability
//!
//! Structured logging for the service:
//! - Global `tracing` subscriber with console and rolling JSON file output
//! - HTTP request/response logging middleware
//!
//! # Examples
//!
//! ```no_run
//! use account_master_observability::init_tracing;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//! }
//! ```

pub mod logging;

pub use logging::{init_tracing, logging_middleware};
