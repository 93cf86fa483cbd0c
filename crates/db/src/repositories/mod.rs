//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories speak raw
//! SQL and return `sqlx::Error`; domain semantics (conflict pre-checks,
//! not-found mapping) live in the store layer above.

pub mod assignment_repo;
pub mod investigator_repo;
pub mod portfolio_repo;

pub use assignment_repo::AssignmentRepo;
pub use investigator_repo::InvestigatorRepo;
pub use portfolio_repo::PortfolioRepo;
