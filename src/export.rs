use std::io::Write;

use crate::errors::{Result, SolverError};
use crate::schedule::Schedule;
use crate::solver::Solution;

/// column order for the tabular schedule export
pub const SCHEDULE_COLUMNS: [&str; 5] = ["Period", "Payment", "Principal", "Interest", "Balance"];

/// write a schedule as csv, one row per period
pub fn write_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(SCHEDULE_COLUMNS)?;

    for row in &schedule.rows {
        out.write_record([
            row.period.to_string(),
            format!("{:.2}", row.payment),
            format!("{:.2}", row.principal_component),
            format!("{:.2}", row.interest_component),
            format!("{:.2}", row.balance),
        ])?;
    }

    out.flush()
        .map_err(|err| SolverError::SerializationError(err.to_string()))?;
    Ok(())
}

/// csv text for a schedule
pub fn to_csv_string(schedule: &Schedule) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(schedule, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| SolverError::SerializationError(err.to_string()))
}

impl Schedule {
    /// pretty-printed json for the schedule
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Solution {
    /// pretty-printed json for the full solve outcome
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
