//! # varlearn-learner
//!
//! The learner core: hypothesis sampling, the consume/update cycle, and
//! the four weight-update strategies.

pub mod learner;
pub mod sampler;
pub mod strategies;

pub use learner::VariationalLearner;
pub use strategies::{PunishOnly, RelevanceFiltered, RewardOnly, Skeptical, StrategyKind};
