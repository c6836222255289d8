//! Plain-text rendering of a calculation, for printing.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::calculator::Calculation;

const DISCLAIMER: &str =
    "These are estimated quantities. Adjust based on your specific needs.";
const FOOTER: &str =
    "This is an estimate. Always consult with safety professionals for exact requirements.";

/// Format an integer with comma thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Calculation {
    /// Render the printable requirements sheet.
    pub fn render_report(&self, generated_on: NaiveDate) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "PPE Requirements Calculation");
        let _ = writeln!(out, "Generated on {} from PPEMarts.com", generated_on.format("%Y-%m-%d"));
        let _ = writeln!(out);

        for line in &self.lines {
            let _ = writeln!(
                out,
                "{:<20} {:>12} {}",
                line.name,
                format_thousands(line.quantity),
                line.unit
            );
            let _ = writeln!(
                out,
                "  {:<32} {} {}/worker/day",
                line.description, line.per_worker_per_day, line.unit
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Total Monthly Requirement: {} items",
            format_thousands(self.total)
        );
        let _ = writeln!(
            out,
            "For {} workers × {} days",
            format_thousands(u64::from(self.workers)),
            self.work_days
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", DISCLAIMER);
        let _ = writeln!(out, "{}", FOOTER);
        out
    }
}
