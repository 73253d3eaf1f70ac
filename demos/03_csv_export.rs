/// csv export - serialize a schedule for spreadsheet consumption
use loan_solver_rs::{to_csv_string, write_csv, Money, Rate, Schedule};
use rust_decimal_macros::dec;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== csv export example ===\n");

    let schedule = Schedule::generate(
        Money::from_major(120_000),
        Rate::from_percentage(dec!(7.9)),
        24,
    )?;

    // print the first few lines
    let csv = to_csv_string(&schedule)?;
    for line in csv.lines().take(4) {
        println!("{}", line);
    }

    // write the full table to a file
    let path = std::env::temp_dir().join("amortization_schedule.csv");
    write_csv(&schedule, File::create(&path)?)?;
    println!("\nwrote {} rows to {}", schedule.len(), path.display());

    Ok(())
}
