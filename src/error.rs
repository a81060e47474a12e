//! Error types for annealing configuration.

/// Error returned when an annealing configuration cannot be run.
///
/// Every variant is produced before the search loop starts. The loop
/// itself has no error path: numeric trouble in the acceptance test is
/// absorbed locally, and a panicking cost function propagates to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Returned when a mode name is not recognized.
    #[error("unknown mode '{0}': expected \"combinatorial\" or \"continuous\"")]
    UnknownMode(String),

    /// Returned when a cooling schedule name is not recognized.
    #[error(
        "unknown cooling schedule '{0}': expected \"linear\", \"exponential\", \"logarithmic\", or \"quadratic\""
    )]
    UnknownCoolingSchedule(String),

    /// Returned when `step_max` is zero.
    #[error("step_max must be at least 1")]
    InvalidStepMax,

    /// Returned when the initial state has no elements.
    #[error("initial state must not be empty")]
    EmptyState,

    /// Returned when the number of bounds does not match the state dimension.
    #[error("bounds dimension mismatch: expected {expected} bounds but got {got}")]
    BoundsDimensionMismatch {
        /// The dimension of the initial state.
        expected: usize,
        /// The number of bounds supplied.
        got: usize,
    },

    /// Returned when a bound pair is inverted or not a number.
    #[error("invalid bounds at index {index}: min ({min}) must be less than or equal to max ({max})")]
    InvalidBounds {
        /// The coordinate the bound applies to.
        index: usize,
        /// The lower bound value.
        min: f64,
        /// The upper bound value.
        max: f64,
    },

    /// Returned when a scalar parameter has an unusable value.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// The name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when continuous mode is requested for a non-numeric sequence.
    #[error("continuous mode requires a numeric state; use combinatorial mode for sequences")]
    ModeMismatch,
}

/// A convenience result alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
