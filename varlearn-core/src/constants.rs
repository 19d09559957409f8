/// Varlearn system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default step size for weight updates.
pub const DEFAULT_LEARNING_RATE: f64 = 5e-4;

/// Default distance from a boundary at which a weight counts as decided.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.02;

/// Weight every parameter starts at (maximal uncertainty).
pub const INITIAL_WEIGHT: f64 = 0.5;
