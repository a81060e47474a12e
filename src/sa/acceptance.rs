//! Metropolis acceptance with a saturating exponential.

/// `exp(x)`, or `0.0` when the result would overflow or `x` is NaN.
///
/// An overflowing exponent yields probability zero rather than infinity.
/// This keeps a long search running under pathological `T`/`dE`
/// combinations; the proposal can still be recorded as the best state.
pub fn saturating_exp(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    let y = x.exp();
    if y.is_infinite() {
        0.0
    } else {
        y
    }
}

/// Probability of moving from energy `current` to `proposed` at `temperature`.
///
/// Equal to `exp(-(proposed - current) / temperature)`, unclamped: any
/// value >= 1 means the move is always taken. Non-positive temperatures
/// give zero.
pub fn acceptance_probability(current: f64, proposed: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 || temperature.is_nan() {
        return 0.0;
    }
    saturating_exp(-(proposed - current) / temperature)
}
