use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("exactly one field must be left blank: {missing} of 4 are missing")]
    WrongMissingFieldCount {
        missing: usize,
    },

    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: String,
        reason: String,
    },

    #[error("tenure cannot be computed with these values: payment {payment} does not cover period interest {interest}")]
    TenureNotComputable {
        payment: Money,
        interest: Money,
    },

    #[error("payment too low to cover the loan: minimum {minimum}, provided {provided}")]
    PaymentTooLow {
        minimum: Money,
        provided: Money,
    },

    #[error("rate could not be determined: no root between {lower} and {upper}")]
    RateNotBracketed {
        lower: Rate,
        upper: Rate,
    },

    #[error("rate could not be determined within {iterations} iterations: bracket width {width}")]
    RateNotConverged {
        iterations: u32,
        width: Decimal,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SolverError {
    fn from(err: serde_json::Error) -> Self {
        SolverError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for SolverError {
    fn from(err: csv::Error) -> Self {
        SolverError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
