//! Route handlers, one per endpoint.

pub mod todos;
pub mod users;
