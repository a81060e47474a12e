//! SA execution loop.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::acceptance::acceptance_probability;
use super::config::{AnnealConfig, Mode};
use super::neighbor::{perturb, swap};
use super::schedule::Schedule;
use crate::error::{ConfigurationError, Result};

/// One iteration of the search trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    /// Step index, starting at 1.
    pub step: usize,
    /// Temperature used for this step's acceptance test.
    pub temperature: f64,
    /// Energy of the working state after the acceptance test.
    pub current_energy: f64,
    /// Lowest energy seen so far, including this step's proposal.
    pub best_energy: f64,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult<T> {
    /// The best state found.
    pub best: Vec<T>,

    /// Energy of the best state.
    pub best_energy: f64,

    /// One record per evaluated proposal, in order.
    pub history: Vec<HistoryRecord>,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Step counter when the loop stopped. Never exceeds `step_max`.
    pub final_step: usize,

    /// Number of proposals adopted as the working state.
    pub accepted_moves: usize,

    /// Number of accepted proposals that strictly lowered the working energy.
    pub improving_moves: usize,

    /// `accepted_moves / final_step`.
    pub acceptance_rate: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Neighbor strategy that produced this run.
    pub mode: Mode,

    /// Temperature update used by this run.
    pub schedule: Schedule,

    /// Initial temperature.
    pub t_max: f64,

    /// Configured step budget.
    pub step_max: usize,

    /// Perturbation scale (continuous mode).
    pub damping: f64,
}

impl<T> AnnealResult<T> {
    /// Printable run report.
    pub fn summary(&self) -> Summary {
        Summary {
            mode: self.mode,
            schedule: self.schedule.name(),
            damping: self.damping,
            t_max: self.t_max,
            final_temperature: self.final_temperature,
            step_max: self.step_max,
            final_step: self.final_step,
            best_energy: self.best_energy,
        }
    }
}

/// Human-readable view over an [`AnnealResult`].
///
/// ```text
/// +------------------------ RESULTS -------------------------+
///
///       opt.mode: continuous
/// cooling sched.: linear additive cooling
///
///   initial temp: 1
///     final temp: 0.002000
///      max steps: 1000
///     final step: 1000
///
///   final energy: 0.000131
///
/// +-------------------------- END ---------------------------+
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mode: Mode,
    pub schedule: &'static str,
    pub damping: f64,
    pub t_max: f64,
    pub final_temperature: f64,
    pub step_max: usize,
    pub final_step: usize,
    pub best_energy: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------------------------ RESULTS -------------------------+")?;
        writeln!(f)?;
        writeln!(f, "      opt.mode: {}", self.mode)?;
        writeln!(f, "cooling sched.: {}", self.schedule)?;
        if self.damping != 1.0 {
            writeln!(f, "       damping: {}", self.damping)?;
        }
        writeln!(f)?;
        writeln!(f, "  initial temp: {}", self.t_max)?;
        writeln!(f, "    final temp: {:.6}", self.final_temperature)?;
        writeln!(f, "     max steps: {}", self.step_max)?;
        writeln!(f, "    final step: {}", self.final_step)?;
        writeln!(f)?;
        writeln!(f, "  final energy: {:.6}", self.best_energy)?;
        writeln!(f)?;
        write!(f, "+-------------------------- END ---------------------------+")
    }
}

/// Executes the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealConfig, Annealer};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let config = AnnealConfig::default()
///     .with_step_max(1000)
///     .with_temperatures(0.0, 1.0)
///     .with_seed(42);
///
/// let result = Annealer::minimize(sphere, &[1.0, 2.0, 3.0], &config).unwrap();
/// assert_eq!(result.best.len(), 3);
/// assert!(result.best_energy < 14.0);
/// ```
pub struct Annealer;

impl Annealer {
    /// Minimizes `cost` over numeric states, using the neighbor strategy
    /// named by `config.mode`.
    pub fn minimize<F>(cost: F, x0: &[f64], config: &AnnealConfig) -> Result<AnnealResult<f64>>
    where
        F: FnMut(&[f64]) -> f64,
    {
        Self::minimize_with_cancel(cost, x0, config, None)
    }

    /// Runs [`minimize`](Self::minimize) with an optional cancellation token.
    pub fn minimize_with_cancel<F>(
        cost: F,
        x0: &[f64],
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<f64>>
    where
        F: FnMut(&[f64]) -> f64,
    {
        let mut rng = create_rng(config.seed);
        Self::run_numeric(cost, x0, config, &mut rng, cancel.as_deref())
    }

    /// Runs [`minimize`](Self::minimize) with a caller-supplied random source.
    /// `config.seed` is ignored.
    pub fn minimize_with_rng<F, R>(
        cost: F,
        x0: &[f64],
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<f64>>
    where
        F: FnMut(&[f64]) -> f64,
        R: Rng,
    {
        Self::run_numeric(cost, x0, config, rng, None)
    }

    /// Minimizes `cost` over orderings of arbitrary elements.
    ///
    /// Only [`Mode::Combinatorial`] applies to non-numeric sequences;
    /// a continuous configuration is rejected with
    /// [`ConfigurationError::ModeMismatch`].
    pub fn minimize_sequence<T, F>(
        cost: F,
        x0: &[T],
        config: &AnnealConfig,
    ) -> Result<AnnealResult<T>>
    where
        T: Clone,
        F: FnMut(&[T]) -> f64,
    {
        let mut rng = create_rng(config.seed);
        Self::minimize_sequence_with_rng(cost, x0, config, &mut rng)
    }

    /// Runs [`minimize_sequence`](Self::minimize_sequence) with a
    /// caller-supplied random source. `config.seed` is ignored.
    pub fn minimize_sequence_with_rng<T, F, R>(
        cost: F,
        x0: &[T],
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<T>>
    where
        T: Clone,
        F: FnMut(&[T]) -> f64,
        R: Rng,
    {
        if config.mode != Mode::Combinatorial {
            return Err(ConfigurationError::ModeMismatch);
        }
        config.validate(x0.len())?;
        Ok(anneal(cost, x0, config, swap, rng, None))
    }

    fn run_numeric<F, R>(
        cost: F,
        x0: &[f64],
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnnealResult<f64>>
    where
        F: FnMut(&[f64]) -> f64,
        R: Rng,
    {
        config.validate(x0.len())?;
        let result = match config.mode {
            Mode::Continuous => {
                let (damping, bounds) = (config.damping, config.bounds.as_slice());
                let propose = |state: &[f64], rng: &mut R| perturb(state, damping, bounds, rng);
                anneal(cost, x0, config, propose, rng, cancel)
            }
            Mode::Combinatorial => anneal(cost, x0, config, swap, rng, cancel),
        };
        Ok(result)
    }
}

/// Upper bound on history slots reserved before the loop starts.
const HISTORY_RESERVE: usize = 4096;

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// The annealing loop. `config` must already be validated.
fn anneal<T, F, P, R>(
    mut cost: F,
    x0: &[T],
    config: &AnnealConfig,
    mut propose: P,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> AnnealResult<T>
where
    T: Clone,
    F: FnMut(&[T]) -> f64,
    P: FnMut(&[T], &mut R) -> Vec<T>,
    R: Rng,
{
    let schedule = Schedule::from_config(config);

    trace_info!(
        mode = config.mode.name(),
        schedule = schedule.name(),
        step_max = config.step_max,
        t_max = config.t_max,
        "annealing started"
    );

    let mut current = x0.to_vec();
    let mut current_energy = cost(&current);
    let mut best = current.clone();
    let mut best_energy = current_energy;

    let mut temperature = config.t_max;
    let mut step = 1usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;
    // The loop may end on t_min long before step_max; cap the reservation.
    let mut history = Vec::with_capacity(config.step_max.saturating_sub(1).min(HISTORY_RESERVE));

    while step < config.step_max && temperature >= config.t_min && temperature > 0.0 {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }

        let neighbor = propose(&current, &mut *rng);
        let neighbor_energy = cost(&neighbor);

        // Best tracking is independent of acceptance.
        if neighbor_energy < best_energy {
            best_energy = neighbor_energy;
            best.clone_from(&neighbor);
            trace_debug!(step, best_energy, "new best");
        }

        let probability = acceptance_probability(current_energy, neighbor_energy, temperature);
        if rng.random::<f64>() < probability {
            if neighbor_energy < current_energy {
                improving_moves += 1;
            }
            current = neighbor;
            current_energy = neighbor_energy;
            accepted_moves += 1;
        }

        history.push(HistoryRecord {
            step,
            temperature,
            current_energy,
            best_energy,
        });

        temperature = schedule.next_temperature(step);
        step += 1;
    }

    let acceptance_rate = accepted_moves as f64 / step as f64;

    trace_info!(
        final_step = step,
        final_temperature = temperature,
        best_energy,
        acceptance_rate,
        cancelled,
        "annealing finished"
    );

    AnnealResult {
        best,
        best_energy,
        history,
        final_temperature: temperature,
        final_step: step,
        accepted_moves,
        improving_moves,
        acceptance_rate,
        cancelled,
        mode: config.mode,
        schedule,
        t_max: config.t_max,
        step_max: config.step_max,
        damping: config.damping,
    }
}
