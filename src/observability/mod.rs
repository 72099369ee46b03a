//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; fields over format strings
//! - Request IDs set and propagated by the HTTP middleware stack
//! - `RUST_LOG` overrides the configured level

pub mod logging;
