//! Billing data models
//!
//! Shared between the reconciliation engine and the display layer (via JSON).
//! Field names serialize in camelCase for the admin frontend.

pub mod bill;
pub mod confirmation;
pub mod month;
pub mod order;

// Re-exports
pub use bill::*;
pub use confirmation::*;
pub use month::*;
pub use order::*;
