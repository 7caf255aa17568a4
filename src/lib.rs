pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod scoring;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{create_pool, DatabaseError};
pub use domain::DomainError;
pub use models::{
    AnchorRecord, ConsistencyCheckRecord, ReputationEventRecord, Statistics, TrustHistory,
    VerificationRecord, VerificationWithScore,
};
pub use scoring::{compute_consistency_score, generate_identity_key, generate_verification_token};
