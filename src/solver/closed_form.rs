use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolverError};

pub(crate) fn ensure_positive_money(value: Money, field: &str) -> Result<()> {
    if !value.is_positive() {
        return Err(SolverError::InvalidInput {
            field: field.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_positive_tenure(tenure: u32) -> Result<()> {
    if tenure == 0 {
        return Err(SolverError::InvalidInput {
            field: "tenure".to_string(),
            reason: "must be at least one period".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_non_negative_rate(rate: Rate) -> Result<()> {
    if rate.is_negative() {
        return Err(SolverError::InvalidInput {
            field: "annual_rate".to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

/// compound growth factor (1 + r)^n for a periodic rate
pub(crate) fn compound_factor(periodic_rate: Decimal, periods: u32) -> Result<Decimal> {
    (Decimal::ONE + periodic_rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| SolverError::CalculationError {
            message: format!("compound factor overflows for {} periods", periods),
        })
}

fn natural_log(value: Decimal, context: &str) -> Result<Decimal> {
    value
        .checked_ln()
        .ok_or_else(|| SolverError::CalculationError {
            message: format!("logarithm of non-positive value in {}", context),
        })
}

/// periodic payment for a loan of `principal` at `annual_rate` over `tenure` periods
///
/// E = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when the rate is zero.
/// the payment strictly exceeds the interest-free P / n whenever the rate is positive.
pub fn solve_payment(principal: Money, annual_rate: Rate, tenure: u32) -> Result<Money> {
    ensure_positive_money(principal, "principal")?;
    ensure_positive_tenure(tenure)?;
    ensure_non_negative_rate(annual_rate)?;

    let r = annual_rate.monthly_rate().as_decimal();
    if r.is_zero() {
        return Ok(Money::from_decimal(
            principal.as_decimal() / Decimal::from(tenure),
        ));
    }

    let factor = compound_factor(r, tenure)?;
    let payment = principal.as_decimal() * r * factor / (factor - Decimal::ONE);
    Ok(Money::from_decimal(payment))
}

/// principal that a payment of `payment` per period amortizes over `tenure` periods
///
/// P = E * ((1 + r)^n - 1) / (r * (1 + r)^n), or E * n when the rate is zero.
pub fn solve_principal(payment: Money, annual_rate: Rate, tenure: u32) -> Result<Money> {
    ensure_positive_money(payment, "payment")?;
    ensure_positive_tenure(tenure)?;
    ensure_non_negative_rate(annual_rate)?;

    let r = annual_rate.monthly_rate().as_decimal();
    if r.is_zero() {
        return Ok(Money::from_decimal(
            payment.as_decimal() * Decimal::from(tenure),
        ));
    }

    let factor = compound_factor(r, tenure)?;
    let principal = payment.as_decimal() * (factor - Decimal::ONE) / (r * factor);
    Ok(Money::from_decimal(principal))
}

/// real-valued period count needed to repay `principal` with `payment` per period
///
/// N = ln(E / (E - P * r)) / ln(1 + r), or P / E when the rate is zero.
/// callers round the result to whole periods; partial periods are not meaningful.
pub fn solve_tenure(principal: Money, annual_rate: Rate, payment: Money) -> Result<Decimal> {
    ensure_positive_money(principal, "principal")?;
    ensure_positive_money(payment, "payment")?;
    ensure_non_negative_rate(annual_rate)?;

    let r = annual_rate.monthly_rate().as_decimal();
    if r.is_zero() {
        return Ok(principal.as_decimal() / payment.as_decimal());
    }

    // a payment at or below the first period interest never amortizes
    let first_interest = Money::from_decimal(principal.as_decimal() * r);
    if payment <= first_interest {
        return Err(SolverError::TenureNotComputable {
            payment,
            interest: first_interest,
        });
    }

    let ratio = payment.as_decimal() / (payment.as_decimal() - first_interest.as_decimal());
    let numerator = natural_log(ratio, "tenure numerator")?;
    let denominator = natural_log(Decimal::ONE + r, "tenure denominator")?;
    Ok(numerator / denominator)
}
