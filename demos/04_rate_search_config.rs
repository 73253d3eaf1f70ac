/// rate search config - widen the bracket for loans priced past 50% annual
use loan_solver_rs::{solve, solve_with, Money, Rate, RateSearchConfig, SolveRequest};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== rate search config example ===\n");

    // payment priced at 75% annual, outside the default 0.01%..50% bracket
    let request = SolveRequest::Rate {
        principal: Money::from_major(10_000),
        tenure: 24,
        payment: Money::from_decimal(dec!(815.28)),
    };

    match solve(request) {
        Ok(_) => println!("unexpected: rate inside default bracket"),
        Err(err) => println!("default bracket: {}", err),
    }

    let config = RateSearchConfig {
        upper_bound: Rate::from_percentage(dec!(100)),
        ..RateSearchConfig::default()
    };
    let solution = solve_with(request, &config)?;
    println!("widened bracket: {}", solution.derived);

    Ok(())
}
