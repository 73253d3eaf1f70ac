use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{Result, SolverError};

/// rate search configuration for the bracketed root-find
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSearchConfig {
    /// lower bracket bound for the annual rate
    pub lower_bound: Rate,
    /// upper bracket bound for the annual rate
    pub upper_bound: Rate,
    /// convergence tolerance on the annual rate, in percentage points
    pub tolerance: Decimal,
    /// iteration cap for the bisection loop
    pub max_iterations: u32,
}

impl Default for RateSearchConfig {
    fn default() -> Self {
        Self {
            lower_bound: Rate::from_percentage(dec!(0.01)),
            upper_bound: Rate::from_percentage(dec!(50)),
            tolerance: dec!(0.000001),
            max_iterations: 128,
        }
    }
}

impl RateSearchConfig {
    /// validate bracket bounds and tolerances
    pub fn validate(&self) -> Result<()> {
        if self.lower_bound.is_negative() {
            return Err(SolverError::InvalidConfiguration {
                message: "lower bound must not be negative".to_string(),
            });
        }
        if self.upper_bound <= self.lower_bound {
            return Err(SolverError::InvalidConfiguration {
                message: "upper bound must exceed lower bound".to_string(),
            });
        }
        if self.tolerance <= Decimal::ZERO {
            return Err(SolverError::InvalidConfiguration {
                message: "tolerance must be positive".to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfiguration {
                message: "max iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
