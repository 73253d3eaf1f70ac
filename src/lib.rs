pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod schedule;
pub mod solver;
pub mod types;

// re-export key types
pub use config::RateSearchConfig;
pub use decimal::{Money, Rate};
pub use errors::{Result, SolverError};
pub use export::{to_csv_string, write_csv, SCHEDULE_COLUMNS};
pub use schedule::{Schedule, ScheduleRow};
pub use solver::{
    solve, solve_payment, solve_principal, solve_rate, solve_rate_with, solve_tenure, solve_with,
    Solution,
};
pub use types::{DerivedValue, LoanTerms, PartialTerms, SolveRequest, SolveTarget};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
