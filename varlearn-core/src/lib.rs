//! # varlearn-core
//!
//! Foundation crate for the varlearn workspace.
//! Defines the weight and grammar primitives, relevance annotations,
//! config, errors, traits, and shared models.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod grammar;
pub mod models;
pub mod relevance;
pub mod traits;
pub mod weight;

// Re-export the most commonly used types at the crate root.
pub use config::LearnerConfig;
pub use errors::{DomainError, LearnerError, VarlearnError, VarlearnResult};
pub use grammar::{GrammarId, SentenceId};
pub use models::TrialResult;
pub use relevance::Relevance;
pub use traits::{EvidenceContext, IGrammarDomain, IUpdatePolicy};
pub use weight::Weight;
