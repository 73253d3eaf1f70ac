use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolverError};

/// which loan quantity a solve derives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveTarget {
    Payment,
    Principal,
    Tenure,
    Rate,
}

impl fmt::Display for SolveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveTarget::Payment => "payment",
            SolveTarget::Principal => "principal",
            SolveTarget::Tenure => "tenure",
            SolveTarget::Rate => "rate",
        };
        write!(f, "{}", name)
    }
}

/// fully resolved loan terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure: u32,
    pub payment: Money,
}

/// solve request carrying the three known quantities, one variant per unknown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolveRequest {
    /// derive the periodic payment
    Payment {
        principal: Money,
        annual_rate: Rate,
        tenure: u32,
    },
    /// derive the principal
    Principal {
        payment: Money,
        annual_rate: Rate,
        tenure: u32,
    },
    /// derive the tenure in periods
    Tenure {
        principal: Money,
        annual_rate: Rate,
        payment: Money,
    },
    /// derive the annual rate
    Rate {
        principal: Money,
        tenure: u32,
        payment: Money,
    },
}

impl SolveRequest {
    /// the field this request derives
    pub fn target(&self) -> SolveTarget {
        match self {
            SolveRequest::Payment { .. } => SolveTarget::Payment,
            SolveRequest::Principal { .. } => SolveTarget::Principal,
            SolveRequest::Tenure { .. } => SolveTarget::Tenure,
            SolveRequest::Rate { .. } => SolveTarget::Rate,
        }
    }
}

/// the derived quantity, tagged with the field that was computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DerivedValue {
    Payment(Money),
    Principal(Money),
    Tenure(u32),
    Rate(Rate),
}

impl DerivedValue {
    /// the field this value was computed for
    pub fn target(&self) -> SolveTarget {
        match self {
            DerivedValue::Payment(_) => SolveTarget::Payment,
            DerivedValue::Principal(_) => SolveTarget::Principal,
            DerivedValue::Tenure(_) => SolveTarget::Tenure,
            DerivedValue::Rate(_) => SolveTarget::Rate,
        }
    }
}

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivedValue::Payment(payment) => write!(f, "payment {:.2}", payment),
            DerivedValue::Principal(principal) => write!(f, "principal {:.2}", principal),
            DerivedValue::Tenure(tenure) => write!(f, "tenure {} periods", tenure),
            DerivedValue::Rate(rate) => write!(f, "rate {:.2}%", rate.as_percentage()),
        }
    }
}

/// loan terms with any subset known; exactly one blank field resolves to a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTerms {
    pub principal: Option<Money>,
    pub annual_rate: Option<Rate>,
    pub tenure: Option<u32>,
    pub payment: Option<Money>,
}

impl PartialTerms {
    /// number of blank fields
    pub fn missing_count(&self) -> usize {
        [
            self.principal.is_none(),
            self.annual_rate.is_none(),
            self.tenure.is_none(),
            self.payment.is_none(),
        ]
        .iter()
        .filter(|missing| **missing)
        .count()
    }

    /// resolve to a solve request when exactly one field is blank
    pub fn to_request(&self) -> Result<SolveRequest> {
        match (self.principal, self.annual_rate, self.tenure, self.payment) {
            (Some(principal), Some(annual_rate), Some(tenure), None) => Ok(SolveRequest::Payment {
                principal,
                annual_rate,
                tenure,
            }),
            (None, Some(annual_rate), Some(tenure), Some(payment)) => Ok(SolveRequest::Principal {
                payment,
                annual_rate,
                tenure,
            }),
            (Some(principal), Some(annual_rate), None, Some(payment)) => Ok(SolveRequest::Tenure {
                principal,
                annual_rate,
                payment,
            }),
            (Some(principal), None, Some(tenure), Some(payment)) => Ok(SolveRequest::Rate {
                principal,
                tenure,
                payment,
            }),
            _ => Err(SolverError::WrongMissingFieldCount {
                missing: self.missing_count(),
            }),
        }
    }
}

impl TryFrom<PartialTerms> for SolveRequest {
    type Error = SolverError;

    fn try_from(terms: PartialTerms) -> Result<Self> {
        terms.to_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn full_terms() -> PartialTerms {
        PartialTerms {
            principal: Some(Money::from_major(500_000)),
            annual_rate: Some(Rate::from_percentage(dec!(10.5))),
            tenure: Some(60),
            payment: Some(Money::from_decimal(dec!(10746.95))),
        }
    }

    #[test]
    fn test_missing_count() {
        assert_eq!(full_terms().missing_count(), 0);
        assert_eq!(PartialTerms::default().missing_count(), 4);

        let mut terms = full_terms();
        terms.payment = None;
        assert_eq!(terms.missing_count(), 1);
    }

    #[test]
    fn test_resolves_each_target() {
        let mut terms = full_terms();
        terms.payment = None;
        assert_eq!(terms.to_request().unwrap().target(), SolveTarget::Payment);

        let mut terms = full_terms();
        terms.principal = None;
        assert_eq!(terms.to_request().unwrap().target(), SolveTarget::Principal);

        let mut terms = full_terms();
        terms.tenure = None;
        assert_eq!(terms.to_request().unwrap().target(), SolveTarget::Tenure);

        let mut terms = full_terms();
        terms.annual_rate = None;
        assert_eq!(terms.to_request().unwrap().target(), SolveTarget::Rate);
    }

    #[test]
    fn test_wrong_missing_count_rejected() {
        // nothing blank
        let result = full_terms().to_request();
        assert!(matches!(
            result,
            Err(SolverError::WrongMissingFieldCount { missing: 0 })
        ));

        // two blanks
        let mut terms = full_terms();
        terms.payment = None;
        terms.tenure = None;
        let result = terms.to_request();
        assert!(matches!(
            result,
            Err(SolverError::WrongMissingFieldCount { missing: 2 })
        ));

        // everything blank
        let result = PartialTerms::default().to_request();
        assert!(matches!(
            result,
            Err(SolverError::WrongMissingFieldCount { missing: 4 })
        ));
    }

    #[test]
    fn test_try_from_conversion() {
        let mut terms = full_terms();
        terms.annual_rate = None;
        let request = SolveRequest::try_from(terms).unwrap();
        assert_eq!(request.target(), SolveTarget::Rate);
    }

    #[test]
    fn test_derived_value_display() {
        let derived = DerivedValue::Payment(Money::from_decimal(dec!(10746.95)));
        assert_eq!(derived.to_string(), "payment 10746.95");

        let derived = DerivedValue::Tenure(60);
        assert_eq!(derived.to_string(), "tenure 60 periods");

        let derived = DerivedValue::Rate(Rate::from_percentage(dec!(10.5)));
        assert_eq!(derived.to_string(), "rate 10.50%");
    }
}
