//! Exponential distribution MGF.
//!
//! For `X ~ Exponential(rate)` the moment-generating function is
//! `M(t) = rate / (rate - t)`, converging only for `t < rate`.
//!
//! [`mgf`] and [`partial`] never validate the rate: a non-positive or
//! non-finite rate flows straight through the comparison and the division.
//! Use [`try_mgf`] or [`ExponentialMgf::new`] when invalid input should be
//! an error instead.

use mgf_core::{Error, MomentGeneratingFunction, Result};
use serde::{Deserialize, Serialize};

/// MGF of an Exponential distribution with rate `rate`, evaluated at `t`.
///
/// Returns `NaN` for `t >= rate` (the boundary itself is excluded).
#[inline]
pub fn mgf(t: f64, rate: f64) -> f64 {
    if t >= rate {
        return f64::NAN;
    }
    rate / (rate - t)
}

/// Fix `rate` and return an evaluator of `t`.
///
/// `partial(rate)(t)` is exactly `mgf(t, rate)`.
pub fn partial(rate: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    move |t| mgf(t, rate)
}

/// Check that `rate` is finite and strictly positive.
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::Validation(format!(
            "rate must be finite and > 0, got {}",
            rate
        )));
    }
    Ok(())
}

/// Checked MGF: rejects an invalid rate, a non-finite `t`, and `t >= rate`.
pub fn try_mgf(t: f64, rate: f64) -> Result<f64> {
    let res = checked_mgf(t, rate);
    if let Err(e) = &res {
        log::debug!("exponential mgf rejected t={} rate={}: {}", t, rate, e);
    }
    res
}

fn checked_mgf(t: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if !t.is_finite() {
        return Err(Error::Validation(format!("t must be finite, got {}", t)));
    }
    if t >= rate {
        return Err(Error::Domain { t, rate });
    }
    Ok(mgf(t, rate))
}

/// Exponential MGF with the rate bound up front.
///
/// Serializes as `{"rate": <f64>}`. Deserialization does not validate;
/// call [`ExponentialMgf::validate`] on untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialMgf {
    rate: f64,
}

impl ExponentialMgf {
    /// Create an evaluator, requiring a finite `rate > 0`.
    pub fn new(rate: f64) -> Result<Self> {
        validate_rate(rate)?;
        Ok(Self { rate })
    }

    /// Create an evaluator without validating `rate` (same contract as [`partial`]).
    pub fn new_unchecked(rate: f64) -> Self {
        Self { rate }
    }

    /// Rate parameter.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Re-check the rate, e.g. after deserialization.
    pub fn validate(&self) -> Result<()> {
        validate_rate(self.rate)
    }

    /// Evaluate `M(t)`; `NaN` for `t >= rate`.
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        mgf(t, self.rate)
    }

    /// Mean, `M'(0) = 1 / rate`.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Variance, `M''(0) - M'(0)^2 = 1 / rate^2`.
    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    /// Raw moment `E[X^n] = n! / rate^n`, the n-th derivative of `M` at zero.
    pub fn raw_moment(&self, n: u32) -> f64 {
        (1..=n).fold(1.0, |acc, k| acc * f64::from(k) / self.rate)
    }
}

impl MomentGeneratingFunction for ExponentialMgf {
    fn mgf(&self, t: f64) -> f64 {
        self.eval(t)
    }

    fn domain_upper_bound(&self) -> f64 {
        self.rate
    }

    /// Same checks as the free [`try_mgf`], so unchecked or deserialized
    /// values with a bad rate are rejected too.
    fn try_mgf(&self, t: f64) -> Result<f64> {
        try_mgf(t, self.rate)
    }
}
