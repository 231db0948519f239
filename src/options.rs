//! Settings for building basis coefficients.

use crate::error::{Error, Result};

/// Conditioning limits applied when inverting the Vandermonde matrix.
///
/// The monomial Vandermonde matrix at equispaced nodes grows badly conditioned
/// with degree. The 1-norm condition estimate is compared against these limits
/// after inversion. Both limits must be finite and at least 1 (no matrix has
/// a smaller condition number), with `warn_condition <= max_condition`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisOptions {
    /// Estimate above which construction fails.
    pub max_condition: f64,
    /// Estimate above which construction logs a warning.
    pub warn_condition: f64,
}

impl Default for BasisOptions {
    fn default() -> Self {
        BasisOptions {
            max_condition: 1e13,
            warn_condition: 1e8,
        }
    }
}

impl BasisOptions {
    pub fn with_max_condition(mut self, max_condition: f64) -> Self {
        self.max_condition = max_condition;
        self
    }

    pub fn with_warn_condition(mut self, warn_condition: f64) -> Self {
        self.warn_condition = warn_condition;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_condition", self.max_condition),
            ("warn_condition", self.warn_condition),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(Error::InvalidOptions(format!(
                    "{} must be finite and at least 1, got {}",
                    name, value
                )));
            }
        }
        if self.warn_condition > self.max_condition {
            return Err(Error::InvalidOptions(format!(
                "warn_condition {:e} exceeds max_condition {:e}",
                self.warn_condition, self.max_condition
            )));
        }
        Ok(())
    }
}
