//! SA configuration: optimization mode, cooling schedule and loop bounds.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result};

/// How neighbors of the current state are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Swap two positions chosen uniformly with replacement.
    Combinatorial,

    /// Perturb every coordinate by a uniform draw centered at zero,
    /// scaled by `damping`, then clip into the configured bounds.
    #[default]
    Continuous,
}

impl Mode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Combinatorial => "combinatorial",
            Mode::Continuous => "continuous",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "combinatorial" => Ok(Mode::Combinatorial),
            "continuous" => Ok(Mode::Continuous),
            other => Err(ConfigurationError::UnknownMode(other.to_string())),
        }
    }
}

/// Cooling schedule family.
///
/// Combined with [`AnnealConfig::alpha`] this resolves to a concrete
/// [`Schedule`](super::Schedule):
///
/// - `Linear` and `Quadratic` switch from the additive to the multiplicative
///   formula when `alpha` is present.
/// - `Exponential` and `Logarithmic` are always multiplicative and fall back
///   to `alpha = 0.8` when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoolingSchedule {
    /// Linear decay to `t_min` over `step_max`, or `t_max / (1 + alpha * k)`.
    #[default]
    Linear,

    /// Geometric decay: `T = t_max * alpha^k`.
    Exponential,

    /// `T = t_max / (alpha * ln(k + 1))`.
    Logarithmic,

    /// Quadratic decay to `t_min` over `step_max`, or `scale / (1 + alpha * k^2)`.
    Quadratic,
}

impl CoolingSchedule {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            CoolingSchedule::Linear => "linear",
            CoolingSchedule::Exponential => "exponential",
            CoolingSchedule::Logarithmic => "logarithmic",
            CoolingSchedule::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoolingSchedule {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(CoolingSchedule::Linear),
            "exponential" => Ok(CoolingSchedule::Exponential),
            "logarithmic" => Ok(CoolingSchedule::Logarithmic),
            "quadratic" => Ok(CoolingSchedule::Quadratic),
            other => Err(ConfigurationError::UnknownCoolingSchedule(
                other.to_string(),
            )),
        }
    }
}

/// Numerator used by the multiplicative quadratic schedule.
///
/// The historical formula is `t_min / (1 + alpha * step^2)`, unlike every
/// other multiplicative schedule which scales `t_max`. `TMin` keeps that
/// behavior; `TMax` selects `t_max / (1 + alpha * step^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadraticScale {
    /// Scale by `t_min` (historical behavior).
    #[default]
    TMin,

    /// Scale by `t_max`, like the other multiplicative schedules.
    TMax,
}

/// Inclusive box constraint for one coordinate of a continuous state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `x` into `[min, max]`.
    pub fn clip(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    /// Whether `x` lies inside the inclusive interval.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Configuration for a simulated annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealConfig, CoolingSchedule, Mode};
///
/// let config = AnnealConfig::default()
///     .with_mode(Mode::Continuous)
///     .with_cooling(CoolingSchedule::Exponential)
///     .with_alpha(0.95)
///     .with_step_max(5000)
///     .with_temperatures(0.0, 10.0)
///     .with_bounds(vec![(-5.0, 5.0), (-5.0, 5.0)])
///     .with_seed(7);
///
/// assert!(config.validate(2).is_ok());
/// assert!(config.validate(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Neighbor generation strategy.
    pub mode: Mode,

    /// Cooling schedule family.
    pub cooling: CoolingSchedule,

    /// Step budget. The counter starts at 1, so at most `step_max - 1`
    /// proposals are evaluated.
    pub step_max: usize,

    /// Minimum temperature. The loop stops once T drops below this.
    pub t_min: f64,

    /// Initial temperature.
    pub t_max: f64,

    /// Per-coordinate box constraints for continuous mode. Empty = unbounded.
    /// Ignored in combinatorial mode.
    pub bounds: Vec<Bounds>,

    /// Decay parameter. See [`CoolingSchedule`] for how presence or absence
    /// changes the schedule.
    pub alpha: Option<f64>,

    /// Scale of continuous perturbations.
    pub damping: f64,

    /// Numerator of the multiplicative quadratic schedule.
    pub quadratic_scale: QuadraticScale,

    /// Random seed for reproducibility. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            cooling: CoolingSchedule::default(),
            step_max: 1000,
            t_min: 0.0,
            t_max: 100.0,
            bounds: Vec::new(),
            alpha: None,
            damping: 1.0,
            quadratic_scale: QuadraticScale::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_step_max(mut self, n: usize) -> Self {
        self.step_max = n;
        self
    }

    pub fn with_t_min(mut self, t: f64) -> Self {
        self.t_min = t;
        self
    }

    pub fn with_t_max(mut self, t: f64) -> Self {
        self.t_max = t;
        self
    }

    /// Sets both temperature bounds at once.
    pub fn with_temperatures(self, t_min: f64, t_max: f64) -> Self {
        self.with_t_min(t_min).with_t_max(t_max)
    }

    pub fn with_bounds<B: Into<Bounds>>(mut self, bounds: Vec<B>) -> Self {
        self.bounds = bounds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_quadratic_scale(mut self, scale: QuadraticScale) -> Self {
        self.quadratic_scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses mode and cooling schedule names, e.g. from a CLI or a
    /// config file, and applies them to the default configuration.
    ///
    /// ```
    /// use u_anneal::sa::AnnealConfig;
    ///
    /// assert!(AnnealConfig::from_names("continuous", "quadratic").is_ok());
    /// assert!(AnnealConfig::from_names("discrete", "linear").is_err());
    /// ```
    pub fn from_names(mode: &str, cooling: &str) -> Result<Self> {
        Ok(Self::default()
            .with_mode(mode.parse()?)
            .with_cooling(cooling.parse()?))
    }

    /// Validates the configuration against a state of `dim` elements.
    pub fn validate(&self, dim: usize) -> Result<()> {
        if self.step_max == 0 {
            return Err(ConfigurationError::InvalidStepMax);
        }
        if dim == 0 {
            return Err(ConfigurationError::EmptyState);
        }
        for (name, value) in [("t_min", self.t_min), ("t_max", self.t_max)] {
            if value.is_nan() {
                return Err(ConfigurationError::InvalidParameter { name, value });
            }
        }
        if let Some(alpha) = self.alpha {
            if alpha.is_nan() {
                return Err(ConfigurationError::InvalidParameter {
                    name: "alpha",
                    value: alpha,
                });
            }
        }

        if self.mode == Mode::Continuous {
            if !self.damping.is_finite() {
                return Err(ConfigurationError::InvalidParameter {
                    name: "damping",
                    value: self.damping,
                });
            }
            if !self.bounds.is_empty() && self.bounds.len() != dim {
                return Err(ConfigurationError::BoundsDimensionMismatch {
                    expected: dim,
                    got: self.bounds.len(),
                });
            }
            for (index, b) in self.bounds.iter().enumerate() {
                // `!(a <= b)` also rejects NaN on either side.
                if !(b.min <= b.max) {
                    return Err(ConfigurationError::InvalidBounds {
                        index,
                        min: b.min,
                        max: b.max,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.mode, Mode::Continuous);
        assert_eq!(config.cooling, CoolingSchedule::Linear);
        assert_eq!(config.step_max, 1000);
        assert!(config.t_min.abs() < 1e-15);
        assert!((config.t_max - 100.0).abs() < 1e-10);
        assert!((config.damping - 1.0).abs() < 1e-15);
        assert!(config.alpha.is_none());
        assert!(config.bounds.is_empty());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("continuous".parse::<Mode>().unwrap(), Mode::Continuous);
        assert_eq!(
            "combinatorial".parse::<Mode>().unwrap(),
            Mode::Combinatorial
        );
        for name in ["linear", "exponential", "logarithmic", "quadratic"] {
            let schedule: CoolingSchedule = name.parse().unwrap();
            assert_eq!(schedule.to_string(), name);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "Continuous".parse::<Mode>(),
            Err(ConfigurationError::UnknownMode("Continuous".into()))
        );
        assert_eq!(
            "cubic".parse::<CoolingSchedule>(),
            Err(ConfigurationError::UnknownCoolingSchedule("cubic".into()))
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate(3).is_ok());
    }

    #[test]
    fn test_validate_zero_step_max() {
        let config = AnnealConfig::default().with_step_max(0);
        assert_eq!(config.validate(3), Err(ConfigurationError::InvalidStepMax));
    }

    #[test]
    fn test_validate_empty_state() {
        assert_eq!(
            AnnealConfig::default().validate(0),
            Err(ConfigurationError::EmptyState)
        );
    }

    #[test]
    fn test_validate_bounds_length() {
        let config = AnnealConfig::default().with_bounds(vec![(0.0, 1.0)]);
        assert_eq!(
            config.validate(2),
            Err(ConfigurationError::BoundsDimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = AnnealConfig::default().with_bounds(vec![(0.0, 1.0), (2.0, -2.0)]);
        assert!(matches!(
            config.validate(2),
            Err(ConfigurationError::InvalidBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_bounds_ignored_in_combinatorial_mode() {
        let config = AnnealConfig::default()
            .with_mode(Mode::Combinatorial)
            .with_bounds(vec![(0.0, 1.0)]);
        assert!(config.validate(5).is_ok());
    }

    #[test]
    fn test_validate_nan_parameters() {
        let config = AnnealConfig::default().with_alpha(f64::NAN);
        assert!(config.validate(1).is_err());

        let config = AnnealConfig::default().with_damping(f64::INFINITY);
        assert!(config.validate(1).is_err());
    }

    #[test]
    fn test_bounds_clip() {
        let b = Bounds::new(-1.0, 2.0);
        assert_eq!(b.clip(-3.0), -1.0);
        assert_eq!(b.clip(5.0), 2.0);
        assert_eq!(b.clip(0.5), 0.5);
        assert!(b.contains(2.0));
        assert!(!b.contains(2.0001));
    }
}
