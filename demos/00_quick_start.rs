/// quick start - solve the payment for a loan and print its schedule
use loan_solver_rs::{solve, Money, Rate, SolveRequest};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 500k loan at 10.5% over 60 months, payment unknown
    let solution = solve(SolveRequest::Payment {
        principal: Money::from_major(500_000),
        annual_rate: Rate::from_percentage(dec!(10.5)),
        tenure: 60,
    })?;

    println!("derived: {}", solution.derived);
    println!("total interest: {:.2}", solution.schedule.total_interest);
    println!("total paid: {:.2}\n", solution.schedule.total_paid);

    // first three periods
    for row in solution.schedule.iter().take(3) {
        println!(
            "period {:>2}: payment {:.2}, principal {:.2}, interest {:.2}, balance {:.2}",
            row.period, row.payment, row.principal_component, row.interest_component, row.balance
        );
    }

    Ok(())
}
