//! PPE requirement calculator.
//!
//! Turns a worker count, a number of working days and an equipment
//! selection into monthly quantities, and renders the printable report.

pub mod calculator;
pub mod error;
pub mod report;
pub mod state;

pub use calculator::{Calculation, CalculationLine, Calculator};
pub use error::CalcError;
pub use state::CalculatorState;
