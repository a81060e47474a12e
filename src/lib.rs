//! Simulated annealing minimizer.
//!
//! Minimizes an arbitrary scalar cost over either a continuous vector or a
//! combinatorial sequence by running one annealing trajectory:
//!
//! - **Continuous mode**: uniform per-coordinate perturbation with optional
//!   box clipping.
//! - **Combinatorial mode**: swap of two uniformly chosen positions.
//! - **Cooling schedules**: linear, quadratic, exponential and logarithmic,
//!   each in additive or multiplicative form depending on `alpha`.
//!
//! Configuration and execution are separate: build an
//! [`AnnealConfig`](sa::AnnealConfig), then hand it to
//! [`Annealer`](sa::Annealer) together with a cost function and a starting
//! state. Configuration problems surface as [`ConfigurationError`] before any
//! cost evaluation happens.
//!
//! # Example
//!
//! ```
//! use u_anneal::sa::{AnnealConfig, Annealer, Mode};
//!
//! // Sort a sequence by minimizing adjacent inversions.
//! let inversions = |s: &[u8]| s.windows(2).filter(|w| w[0] > w[1]).count() as f64;
//! let config = AnnealConfig::default()
//!     .with_mode(Mode::Combinatorial)
//!     .with_step_max(5000)
//!     .with_temperatures(0.0, 2.0)
//!     .with_seed(3);
//!
//! let result = Annealer::minimize_sequence(inversions, b"annealing", &config)?;
//! assert!(result.best_energy <= inversions(b"annealing"));
//! # Ok::<(), u_anneal::ConfigurationError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configuration, schedule and result types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at run start, on new best, and at termination | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod sa;

pub use error::ConfigurationError;
