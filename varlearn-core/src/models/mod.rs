//! Shared result records.

mod trial;

pub use trial::TrialResult;
