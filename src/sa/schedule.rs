//! Resolved temperature update rules.

use super::config::{AnnealConfig, CoolingSchedule, QuadraticScale};

/// `alpha` substituted for exponential and logarithmic cooling when the
/// configuration leaves it unset.
pub const DEFAULT_ALPHA: f64 = 0.8;

/// A concrete temperature update, fixed for the lifetime of a run.
///
/// Built from a [`CoolingSchedule`] plus the optional `alpha` by
/// [`Schedule::from_config`]. Each variant carries exactly the
/// parameters its formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// `T = t_min + (t_max - t_min) * (step_max - step) / step_max`
    LinearAdditive {
        /// Temperature reached at `step_max`.
        t_min: f64,
        /// Temperature at step 0.
        t_max: f64,
        /// Step at which `t_min` is reached.
        step_max: usize,
    },

    /// `T = t_max / (1 + alpha * step)`
    LinearMultiplicative {
        /// Temperature at step 0.
        t_max: f64,
        /// Decay rate.
        alpha: f64,
    },

    /// `T = t_min + (t_max - t_min) * ((step_max - step) / step_max)^2`
    QuadraticAdditive {
        /// Temperature reached at `step_max`.
        t_min: f64,
        /// Temperature at step 0.
        t_max: f64,
        /// Step at which `t_min` is reached.
        step_max: usize,
    },

    /// `T = scale / (1 + alpha * step^2)`, where `scale` is `t_min` unless
    /// [`QuadraticScale::TMax`] was requested.
    QuadraticMultiplicative {
        /// Temperature at step 0: `t_min` or `t_max`.
        scale: f64,
        /// Decay rate.
        alpha: f64,
    },

    /// `T = t_max * alpha^step`
    Exponential {
        /// Temperature at step 0.
        t_max: f64,
        /// Per-step cooling factor.
        alpha: f64,
    },

    /// `T = t_max / (alpha * ln(step + 1))`
    Logarithmic {
        /// Numerator of the update.
        t_max: f64,
        /// Divisor applied to `ln(step + 1)`.
        alpha: f64,
    },
}

impl Schedule {
    /// Resolves the update rule selected by `config`.
    pub fn from_config(config: &AnnealConfig) -> Self {
        let AnnealConfig {
            t_min,
            t_max,
            step_max,
            alpha,
            ..
        } = *config;

        match (config.cooling, alpha) {
            (CoolingSchedule::Linear, None) => Schedule::LinearAdditive {
                t_min,
                t_max,
                step_max,
            },
            (CoolingSchedule::Linear, Some(alpha)) => {
                Schedule::LinearMultiplicative { t_max, alpha }
            }
            (CoolingSchedule::Quadratic, None) => Schedule::QuadraticAdditive {
                t_min,
                t_max,
                step_max,
            },
            (CoolingSchedule::Quadratic, Some(alpha)) => {
                let scale = match config.quadratic_scale {
                    QuadraticScale::TMin => t_min,
                    QuadraticScale::TMax => t_max,
                };
                Schedule::QuadraticMultiplicative { scale, alpha }
            }
            (CoolingSchedule::Exponential, alpha) => Schedule::Exponential {
                t_max,
                alpha: alpha.unwrap_or(DEFAULT_ALPHA),
            },
            (CoolingSchedule::Logarithmic, alpha) => Schedule::Logarithmic {
                t_max,
                alpha: alpha.unwrap_or(DEFAULT_ALPHA),
            },
        }
    }

    /// Temperature for the given step.
    pub fn next_temperature(&self, step: usize) -> f64 {
        let k = step as f64;
        match *self {
            Schedule::LinearAdditive {
                t_min,
                t_max,
                step_max,
            } => t_min + (t_max - t_min) * remaining_fraction(step, step_max),
            Schedule::LinearMultiplicative { t_max, alpha } => t_max / (1.0 + alpha * k),
            Schedule::QuadraticAdditive {
                t_min,
                t_max,
                step_max,
            } => t_min + (t_max - t_min) * remaining_fraction(step, step_max).powi(2),
            Schedule::QuadraticMultiplicative { scale, alpha } => {
                scale / (1.0 + alpha * k * k)
            }
            Schedule::Exponential { t_max, alpha } => t_max * alpha.powf(k),
            Schedule::Logarithmic { t_max, alpha } => t_max / (alpha * (k + 1.0).ln()),
        }
    }

    /// Human-readable name used in run summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Schedule::LinearAdditive { .. } => "linear additive cooling",
            Schedule::LinearMultiplicative { .. } => "linear multiplicative cooling",
            Schedule::QuadraticAdditive { .. } => "quadratic additive cooling",
            Schedule::QuadraticMultiplicative { .. } => "quadratic multiplicative cooling",
            Schedule::Exponential { .. } => "exponential multiplicative cooling",
            Schedule::Logarithmic { .. } => "logarithmic multiplicative cooling",
        }
    }
}

/// `(step_max - step) / step_max`, signed so steps past the budget go negative.
fn remaining_fraction(step: usize, step_max: usize) -> f64 {
    (step_max as f64 - step as f64) / step_max as f64
}
