use rust_decimal::Decimal;

use crate::config::RateSearchConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolverError};
use crate::solver::closed_form::{ensure_positive_money, ensure_positive_tenure, solve_payment};

/// annual rate recovered from principal, tenure and payment using the default search
pub fn solve_rate(principal: Money, tenure: u32, payment: Money) -> Result<Rate> {
    solve_rate_with(principal, tenure, payment, &RateSearchConfig::default())
}

/// bisection over the configured bracket
///
/// the payment is strictly increasing in the rate for fixed principal and tenure,
/// so one sign change across the bracket pins the root. resolves the annual rate
/// to the configured tolerance in percentage points.
pub fn solve_rate_with(
    principal: Money,
    tenure: u32,
    payment: Money,
    config: &RateSearchConfig,
) -> Result<Rate> {
    config.validate()?;
    ensure_positive_money(principal, "principal")?;
    ensure_positive_tenure(tenure)?;
    ensure_positive_money(payment, "payment")?;

    // no positive rate can reconcile a payment below the interest-free minimum
    let minimum = Money::from_decimal(principal.as_decimal() / Decimal::from(tenure));
    if payment < minimum {
        return Err(SolverError::PaymentTooLow {
            minimum,
            provided: payment,
        });
    }

    let objective = |rate: Rate| -> Result<Decimal> {
        Ok(solve_payment(principal, rate, tenure)?.as_decimal() - payment.as_decimal())
    };

    let mut lower = config.lower_bound;
    let mut upper = config.upper_bound;
    let mut f_lower = objective(lower)?;
    let f_upper = objective(upper)?;

    if f_lower.is_zero() {
        return Ok(lower);
    }
    if f_upper.is_zero() {
        return Ok(upper);
    }
    if f_lower.is_sign_positive() == f_upper.is_sign_positive() {
        return Err(SolverError::RateNotBracketed {
            lower: config.lower_bound,
            upper: config.upper_bound,
        });
    }

    for _ in 0..config.max_iterations {
        let mid = midpoint(lower, upper);
        let f_mid = objective(mid)?;

        if f_mid.is_zero() {
            return Ok(mid);
        }
        if f_mid.is_sign_positive() == f_lower.is_sign_positive() {
            lower = mid;
            f_lower = f_mid;
        } else {
            upper = mid;
        }

        if bracket_width(lower, upper) < config.tolerance {
            return Ok(midpoint(lower, upper));
        }
    }

    Err(SolverError::RateNotConverged {
        iterations: config.max_iterations,
        width: bracket_width(lower, upper),
    })
}

fn midpoint(lower: Rate, upper: Rate) -> Rate {
    Rate::from_decimal((lower.as_decimal() + upper.as_decimal()) / Decimal::TWO)
}

/// bracket width in percentage points
fn bracket_width(lower: Rate, upper: Rate) -> Decimal {
    upper.as_percentage() - lower.as_percentage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_round_trip() {
        let principal = Money::from_major(500_000);
        let payment = solve_payment(principal, Rate::from_percentage(dec!(10.5)), 60).unwrap();

        let recovered = solve_rate(principal, 60, payment).unwrap();
        assert!((recovered.as_percentage() - dec!(10.5)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_rate_round_trip_with_rounded_payment() {
        // a payment quoted to the cent still recovers the rate to 4 decimal places
        let recovered = solve_rate(Money::from_major(500_000), 60, Money::from_decimal(dec!(10746.95)))
            .unwrap();
        assert!((recovered.as_percentage() - dec!(10.5)).abs() < dec!(0.001));
    }

    #[test]
    fn test_rate_fails_below_interest_free_minimum() {
        // interest-free minimum on 100k over 12 periods is ~8333
        let result = solve_rate(Money::from_major(100_000), 12, Money::from_major(1));
        assert!(matches!(result, Err(SolverError::PaymentTooLow { .. })));
    }

    #[test]
    fn test_rate_fails_when_not_bracketed() {
        // payment exactly at the interest-free minimum sits below any positive rate
        let result = solve_rate(
            Money::from_major(120_000),
            12,
            Money::from_major(10_000),
        );
        assert!(matches!(result, Err(SolverError::RateNotBracketed { .. })));
    }

    #[test]
    fn test_rate_fails_above_upper_bound() {
        // a payment implying more than 50% annual is out of the search domain
        let payment = solve_payment(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(75)),
            24,
        )
        .unwrap();
        let result = solve_rate(Money::from_major(10_000), 24, payment);
        assert!(matches!(result, Err(SolverError::RateNotBracketed { .. })));
    }

    #[test]
    fn test_rate_low_end_of_bracket() {
        let principal = Money::from_major(50_000);
        let payment = solve_payment(principal, Rate::from_percentage(dec!(0.05)), 36).unwrap();

        let recovered = solve_rate(principal, 36, payment).unwrap();
        assert!((recovered.as_percentage() - dec!(0.05)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_rate_reports_non_convergence() {
        let principal = Money::from_major(500_000);
        let payment = solve_payment(principal, Rate::from_percentage(dec!(10.5)), 60).unwrap();

        let config = RateSearchConfig {
            tolerance: dec!(0.0000000001),
            max_iterations: 3,
            ..RateSearchConfig::default()
        };
        let result = solve_rate_with(principal, 60, payment, &config);
        assert!(matches!(result, Err(SolverError::RateNotConverged { .. })));
    }

    #[test]
    fn test_rate_with_custom_bracket() {
        let principal = Money::from_major(10_000);
        let payment = solve_payment(principal, Rate::from_percentage(dec!(75)), 24).unwrap();

        let config = RateSearchConfig {
            upper_bound: Rate::from_percentage(dec!(100)),
            ..RateSearchConfig::default()
        };
        let recovered = solve_rate_with(principal, 24, payment, &config).unwrap();
        assert!((recovered.as_percentage() - dec!(75)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_rate_rejects_invalid_config() {
        let config = RateSearchConfig {
            max_iterations: 0,
            ..RateSearchConfig::default()
        };
        let result = solve_rate_with(Money::from_major(1000), 12, Money::from_major(100), &config);
        assert!(matches!(result, Err(SolverError::InvalidConfiguration { .. })));
    }
}
