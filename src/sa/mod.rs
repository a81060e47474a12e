//! Simulated Annealing (SA).
//!
//! A single-trajectory minimizer inspired by the physical annealing
//! process. Worse neighbors are accepted with probability
//! `exp(-dE / T)`, so the search can climb out of local minima while the
//! temperature `T` is high and turns greedy as it cools. The best state ever
//! proposed is tracked separately from the working state and is never lost.
//!
//! # Key Types
//!
//! - [`AnnealConfig`]: mode, cooling schedule, temperatures, bounds, seed
//! - [`Schedule`]: the temperature update resolved from the configuration
//! - [`Annealer`]: executes the search loop
//! - [`AnnealResult`]: best state, trajectory history and statistics
//!
//! # Neighborhoods
//!
//! - [`Mode::Continuous`]: uniform perturbation of every coordinate, scaled by
//!   `damping` and clipped into optional per-coordinate [`Bounds`]
//! - [`Mode::Combinatorial`]: swap of two uniformly drawn positions
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod acceptance;
mod config;
mod neighbor;
mod runner;
mod schedule;

pub use acceptance::{acceptance_probability, saturating_exp};
pub use config::{AnnealConfig, Bounds, CoolingSchedule, Mode, QuadraticScale};
pub use neighbor::{perturb, swap};
pub use runner::{AnnealResult, Annealer, HistoryRecord, Summary};
pub use schedule::{Schedule, DEFAULT_ALPHA};
