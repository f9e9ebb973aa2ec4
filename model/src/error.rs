use std::fmt::{Display, Formatter};

use crate::Apy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateError {
    /// APY is negative, NaN or infinite.
    InvalidInput { apy: Apy },

    /// Annual growth factor is outside of the logarithm's domain.
    /// Unreachable while `InvalidInput` rejects APY below zero.
    NumericDomain { growth_factor: f64 },

    /// Scaled rate read from outside of `RateConverter` is negative, NaN or infinite.
    InvalidScaledRate { value: f64 },
}

impl Display for RateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::InvalidInput { apy } => {
                write!(f, "APY must be a finite non-negative percentage, got {apy}")
            }
            RateError::NumericDomain { growth_factor } => {
                write!(f, "Annual growth factor must be positive, got {growth_factor}")
            }
            RateError::InvalidScaledRate { value } => {
                write!(f, "Scaled rate must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for RateError {}

#[cfg(test)]
mod tests {
    use crate::RateError;

    #[test]
    fn error_messages() {
        assert_eq!(
            RateError::InvalidInput { apy: -1.0 }.to_string(),
            "APY must be a finite non-negative percentage, got -1"
        );
        assert_eq!(
            RateError::NumericDomain { growth_factor: 0.0 }.to_string(),
            "Annual growth factor must be positive, got 0"
        );
        assert_eq!(
            RateError::InvalidScaledRate { value: f64::NAN }.to_string(),
            "Scaled rate must be finite and non-negative, got NaN"
        );
    }
}
