//! Run configuration for the simplifier

use crate::error::{Error, Result};

/// Default tolerance in degrees, balanced for mobile clients.
///
/// Rough guide for lon/lat input:
/// - 0.0005 - minimal simplification, high precision
/// - 0.001  - balanced
/// - 0.002  - aggressive
/// - 0.005  - maximum, for very large files
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Options for one simplification run
#[derive(Clone, Debug, PartialEq)]
pub struct SimplifyOptions {
    /// Maximum deviation introduced by removing a point, in input units
    pub tolerance: f64,
    /// Simplify features on the rayon pool; output order is unchanged
    pub parallel: bool,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            parallel: false,
        }
    }
}

impl SimplifyOptions {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
