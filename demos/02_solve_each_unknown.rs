/// solve each unknown - the four solve targets on one consistent loan
use loan_solver_rs::{solve, Money, Rate, SolveRequest};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== solve each unknown ===\n");

    let principal = Money::from_major(500_000);
    let annual_rate = Rate::from_percentage(dec!(10.5));
    let tenure = 60;

    // payment unknown
    let solution = solve(SolveRequest::Payment {
        principal,
        annual_rate,
        tenure,
    })?;
    let payment = solution.terms.payment;
    println!("{}", solution.derived);

    // principal unknown
    let solution = solve(SolveRequest::Principal {
        payment,
        annual_rate,
        tenure,
    })?;
    println!("{}", solution.derived);

    // tenure unknown
    let solution = solve(SolveRequest::Tenure {
        principal,
        annual_rate,
        payment,
    })?;
    println!("{}", solution.derived);

    // rate unknown
    let solution = solve(SolveRequest::Rate {
        principal,
        tenure,
        payment,
    })?;
    println!("{}", solution.derived);

    Ok(())
}
