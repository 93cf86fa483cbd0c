//! Domain types shared across the CTMS workspace.
//!
//! Pure logic only: enums, validation helpers, and the core error type.
//! Nothing in this crate touches the database.

pub mod category;
pub mod error;
pub mod role;
pub mod types;
pub mod validation;
