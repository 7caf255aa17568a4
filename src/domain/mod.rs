// Domain layer - operation orchestration with no HTTP concerns.
// Existence checks, the clamped score contract, and transaction
// boundaries for multi-step writes all live here.

pub mod consistency;
pub mod identity;
pub mod reputation;
pub mod verification;


use crate::db::errors::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DatabaseError> for DomainError {
    fn from(e: DatabaseError) -> Self {
        DomainError::Database(e.to_string())
    }
}

// Re-export commonly used operations
pub use consistency::{list_consistency_checks, run_consistency_check};
pub use identity::{
    create_identity, export_identity, get_identity_details, get_statistics, get_trust_history,
    list_identities, search_identities,
};
pub use reputation::log_reputation_event;
pub use verification::{add_verification, list_verifications};
