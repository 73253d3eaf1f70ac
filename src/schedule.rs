use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolverError};
use crate::solver::closed_form::{
    ensure_non_negative_rate, ensure_positive_money, ensure_positive_tenure,
};
use crate::solver::solve_payment;

/// decimal places for emitted rows
const ROW_DECIMALS: u32 = 2;

/// single period of a repayment schedule, values rounded for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub balance: Money,
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure: u32,
    pub payment: Money,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl Schedule {
    /// generate a schedule, deriving the payment from the terms
    pub fn generate(principal: Money, annual_rate: Rate, tenure: u32) -> Result<Self> {
        let payment = solve_payment(principal, annual_rate, tenure)?;
        Self::generate_with_payment(principal, annual_rate, tenure, payment)
    }

    /// generate a schedule with a payment the caller already holds
    ///
    /// row values are rounded to 2 decimals; the balance carried into the next
    /// period is the unrounded post-clamp value, so presentation rounding never
    /// compounds. the terminal balance may sit within a few cents of zero.
    pub fn generate_with_payment(
        principal: Money,
        annual_rate: Rate,
        tenure: u32,
        payment: Money,
    ) -> Result<Self> {
        ensure_positive_money(principal, "principal")?;
        ensure_positive_tenure(tenure)?;
        ensure_non_negative_rate(annual_rate)?;
        ensure_positive_money(payment, "payment")?;

        let r = annual_rate.monthly_rate().as_decimal();
        let emi = payment.as_decimal();

        // a payment at or below the first period interest never amortizes
        if emi <= principal.as_decimal() * r {
            return Err(SolverError::InvalidInput {
                field: "payment".to_string(),
                reason: "does not cover first period interest".to_string(),
            });
        }

        let mut rows = Vec::with_capacity(tenure as usize);
        let mut balance = principal.as_decimal();
        let mut total_interest = Decimal::ZERO;

        for period in 1..=tenure {
            let interest = balance * r;
            let principal_component = emi - interest;
            // clamp absorbs the drift a final payment leaves behind
            balance = (balance - principal_component).max(Decimal::ZERO);

            total_interest += interest;

            rows.push(ScheduleRow {
                period,
                payment: Money::from_decimal(emi.round_dp(ROW_DECIMALS)),
                principal_component: Money::from_decimal(principal_component.round_dp(ROW_DECIMALS)),
                interest_component: Money::from_decimal(interest.round_dp(ROW_DECIMALS)),
                balance: Money::from_decimal(balance.round_dp(ROW_DECIMALS)),
            });
        }

        let total_paid = emi * Decimal::from(tenure);

        Ok(Self {
            principal,
            annual_rate,
            tenure,
            payment,
            rows,
            total_interest: Money::from_decimal(total_interest.round_dp(ROW_DECIMALS)),
            total_paid: Money::from_decimal(total_paid.round_dp(ROW_DECIMALS)),
        })
    }

    /// number of periods
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// row for a 1-based period
    pub fn row(&self, period: u32) -> Option<&ScheduleRow> {
        if period == 0 {
            return None;
        }
        self.rows.get((period - 1) as usize)
    }

    /// remaining balance after a 1-based period, or the full principal before period 1
    pub fn balance_after(&self, period: u32) -> Money {
        self.row(period).map(|row| row.balance).unwrap_or(self.principal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }
}
