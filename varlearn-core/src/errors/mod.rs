//! Error taxonomy for the varlearn workspace.

mod domain_error;
mod learner_error;

pub use domain_error::DomainError;
pub use learner_error::LearnerError;

/// Unified error type covering all varlearn subsystems.
#[derive(Debug, thiserror::Error)]
pub enum VarlearnError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Learner(#[from] LearnerError),
}

/// Convenience alias used across the workspace.
pub type VarlearnResult<T> = Result<T, VarlearnError>;
