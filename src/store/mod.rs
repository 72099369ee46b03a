//! In-memory storage subsystem.
//!
//! # Design Decisions
//! - One ordered collection of user records behind a single async lock
//! - Linear scans; collections stay small enough that indexes add nothing
//! - Mutations happen in place; to-dos never move between users

pub mod memory;

pub use memory::TodoStore;
