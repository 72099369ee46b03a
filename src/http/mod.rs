//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! request
//!     → server.rs (Axum setup, middleware layers)
//!     → guards.rs (resolve account / to-do, enforce quota)
//!     → handlers/ (store reads and mutations)
//!     → error.rs (failures rendered as JSON)
//!     → response serialized
//! ```

pub mod error;
pub mod guards;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
