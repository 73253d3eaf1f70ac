/// missing field - resolve a partially filled form into a solve request
use loan_solver_rs::{solve, Money, PartialTerms, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== missing field example ===\n");

    // exactly one blank field: the payment
    let terms = PartialTerms {
        principal: Some(Money::from_major(250_000)),
        annual_rate: Some(Rate::from_percentage(dec!(9.25))),
        tenure: Some(48),
        payment: None,
    };

    let solution = solve(terms.to_request()?)?;
    println!("one field blank, solved: {}", solution.derived);

    // two blank fields is a caller error, not a solver error
    let incomplete = PartialTerms {
        principal: Some(Money::from_major(250_000)),
        annual_rate: None,
        tenure: Some(48),
        payment: None,
    };

    match incomplete.to_request() {
        Ok(_) => println!("unexpected: request resolved"),
        Err(err) => println!("two fields blank, rejected: {}", err),
    }

    Ok(())
}
