//! # varlearn-sim
//!
//! Simulation harness: drives one learner against one target language
//! until convergence or a sentence budget, and streams per-trial results
//! across many grammars and trials.

pub mod harness;

pub use harness::{run_many, run_one, Language, TrialStream};
