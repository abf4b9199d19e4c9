//! Core traits
//!
//! A distribution with a closed-form MGF exposes it through
//! [`MomentGeneratingFunction`]. The required method is permissive and
//! reports divergence as NaN; the provided methods build the checked and
//! derived quantities on top of it.

use crate::{Error, Result};

/// Moment-generating function `M(t) = E[exp(tX)]` of a scalar distribution.
pub trait MomentGeneratingFunction {
    /// Evaluate `M(t)`. Returns NaN where the MGF does not converge.
    fn mgf(&self, t: f64) -> f64;

    /// Exclusive upper bound of the convergence domain (`t < bound`).
    fn domain_upper_bound(&self) -> f64;

    /// Evaluate `M(t)`, reporting a non-finite `t` or divergence as an error.
    fn try_mgf(&self, t: f64) -> Result<f64> {
        if !t.is_finite() {
            return Err(Error::Validation(format!("t must be finite, got {}", t)));
        }
        let bound = self.domain_upper_bound();
        if t >= bound {
            return Err(Error::Domain { t, rate: bound });
        }
        Ok(self.mgf(t))
    }

    /// Cumulant generating function `K(t) = ln M(t)`.
    fn cgf(&self, t: f64) -> f64 {
        self.mgf(t).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Degenerate point mass at `c`: `M(t) = exp(ct)`, defined everywhere.
    struct PointMass {
        c: f64,
    }

    impl MomentGeneratingFunction for PointMass {
        fn mgf(&self, t: f64) -> f64 {
            (self.c * t).exp()
        }

        fn domain_upper_bound(&self) -> f64 {
            f64::INFINITY
        }
    }

    /// `M(t) = 1 / (1 - t)` for `t < 1`.
    struct UnitRate;

    impl MomentGeneratingFunction for UnitRate {
        fn mgf(&self, t: f64) -> f64 {
            if t >= 1.0 { f64::NAN } else { 1.0 / (1.0 - t) }
        }

        fn domain_upper_bound(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_cgf_of_point_mass_is_linear() {
        let d = PointMass { c: 1.5 };
        assert_relative_eq!(d.cgf(2.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(d.cgf(0.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_try_mgf_unbounded_domain() {
        let d = PointMass { c: 0.5 };
        assert_relative_eq!(d.try_mgf(4.0).unwrap(), 2.0f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_try_mgf_reports_domain_error() {
        assert_eq!(UnitRate.try_mgf(1.0), Err(Error::Domain { t: 1.0, rate: 1.0 }));
        assert_eq!(UnitRate.try_mgf(0.5), Ok(2.0));
    }

    #[test]
    fn test_try_mgf_rejects_non_finite_t() {
        assert!(matches!(UnitRate.try_mgf(f64::NAN), Err(Error::Validation(_))));
        assert!(matches!(UnitRate.try_mgf(f64::NEG_INFINITY), Err(Error::Validation(_))));
    }

    #[test]
    fn test_cgf_propagates_nan() {
        assert!(UnitRate.cgf(2.0).is_nan());
    }
}
