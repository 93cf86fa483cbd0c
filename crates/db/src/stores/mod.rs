//! Store layer: the external contract of the data layer.
//!
//! Stores compose repositories into the domain operations, owning the
//! uniqueness pre-checks, not-found mapping, and relation attachment.
//! Every operation is independently callable from any number of
//! concurrent tasks; the unique constraints in the schema close the
//! check-then-write races the pre-checks cannot.

pub mod investigator_store;
pub mod portfolio_store;

pub use investigator_store::InvestigatorStore;
pub use portfolio_store::PortfolioStore;
