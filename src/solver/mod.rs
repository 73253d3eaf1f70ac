pub mod closed_form;
pub mod rate;

pub use closed_form::{solve_payment, solve_principal, solve_tenure};
pub use rate::{solve_rate, solve_rate_with};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::RateSearchConfig;
use crate::errors::{Result, SolverError};
use crate::schedule::Schedule;
use crate::types::{DerivedValue, LoanTerms, SolveRequest};

/// outcome of a solve: the derived quantity, the resolved terms, and the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub derived: DerivedValue,
    pub terms: LoanTerms,
    pub schedule: Schedule,
}

/// derive the missing quantity and generate the repayment schedule
pub fn solve(request: SolveRequest) -> Result<Solution> {
    solve_with(request, &RateSearchConfig::default())
}

/// same as [`solve`] with an explicit rate search configuration
///
/// after a principal, tenure or rate solve the payment is re-derived from the
/// resolved terms, so the returned schedule always amortizes to zero instead of
/// inheriting the drift of a rounded or caller-supplied payment.
pub fn solve_with(request: SolveRequest, config: &RateSearchConfig) -> Result<Solution> {
    let (derived, terms) = match request {
        SolveRequest::Payment {
            principal,
            annual_rate,
            tenure,
        } => {
            let payment = solve_payment(principal, annual_rate, tenure)?;
            (
                DerivedValue::Payment(payment),
                LoanTerms {
                    principal,
                    annual_rate,
                    tenure,
                    payment,
                },
            )
        }
        SolveRequest::Principal {
            payment,
            annual_rate,
            tenure,
        } => {
            let principal = solve_principal(payment, annual_rate, tenure)?;
            let payment = solve_payment(principal, annual_rate, tenure)?;
            (
                DerivedValue::Principal(principal),
                LoanTerms {
                    principal,
                    annual_rate,
                    tenure,
                    payment,
                },
            )
        }
        SolveRequest::Tenure {
            principal,
            annual_rate,
            payment,
        } => {
            let periods = solve_tenure(principal, annual_rate, payment)?;
            let tenure = round_tenure(periods)?;
            let payment = solve_payment(principal, annual_rate, tenure)?;
            (
                DerivedValue::Tenure(tenure),
                LoanTerms {
                    principal,
                    annual_rate,
                    tenure,
                    payment,
                },
            )
        }
        SolveRequest::Rate {
            principal,
            tenure,
            payment,
        } => {
            let annual_rate = solve_rate_with(principal, tenure, payment, config)?;
            let payment = solve_payment(principal, annual_rate, tenure)?;
            (
                DerivedValue::Rate(annual_rate),
                LoanTerms {
                    principal,
                    annual_rate,
                    tenure,
                    payment,
                },
            )
        }
    };

    let schedule = Schedule::generate_with_payment(
        terms.principal,
        terms.annual_rate,
        terms.tenure,
        terms.payment,
    )?;

    Ok(Solution {
        derived,
        terms,
        schedule,
    })
}

/// round a real period count to whole periods, half away from zero
fn round_tenure(periods: Decimal) -> Result<u32> {
    let rounded = periods.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded < Decimal::ONE {
        return Err(SolverError::InvalidInput {
            field: "tenure".to_string(),
            reason: format!("{} periods rounds below one", periods),
        });
    }
    rounded.to_u32().ok_or_else(|| SolverError::InvalidInput {
        field: "tenure".to_string(),
        reason: format!("{} periods exceeds the supported range", rounded),
    })
}
