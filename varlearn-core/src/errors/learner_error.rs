/// Configuration and liveness failures in the learner core.
#[derive(Debug, thiserror::Error)]
pub enum LearnerError {
    #[error("learning rate must be in (0, 1], got {rate}")]
    InvalidLearningRate { rate: f64 },

    #[error("convergence threshold must be in (0, 1], got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("weight vector has {actual} entries but the domain has {expected} parameters")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("domain reports {num_params} parameters, supported range is 1..=64")]
    ParamCountOutOfRange { num_params: usize },

    #[error("no legal grammar sampled after {attempts} attempts")]
    SamplerStalled { attempts: u64 },
}
