use crate::ledger::{Ledger, Totals};

use super::format::format_currency;

/// The three totals lines shown beside the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLines {
    pub totals: Totals,
    pub total_budgeted: String,
    pub total_spent: String,
    pub total_remaining: String,
}

impl SummaryLines {
    pub fn project(ledger: &Ledger) -> Self {
        let totals = ledger.totals();
        Self {
            totals,
            total_budgeted: format!("Total Budget: {}", format_currency(totals.budgeted)),
            total_spent: format!("Total Spent: {}", format_currency(totals.spent)),
            total_remaining: format!(
                "Remaining Balance: {}",
                format_currency(totals.remaining)
            ),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [
            self.total_budgeted.as_str(),
            self.total_spent.as_str(),
            self.total_remaining.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_reports_zeroes() {
        let summary = SummaryLines::project(&Ledger::new());
        assert_eq!(
            summary.lines(),
            [
                "Total Budget: $0.00",
                "Total Spent: $0.00",
                "Remaining Balance: $0.00"
            ]
        );
    }

    #[test]
    fn negative_balance_is_shown_with_sign() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 100.0, 150.0);
        let summary = SummaryLines::project(&ledger);
        assert_eq!(summary.total_remaining, "Remaining Balance: -$50.00");
    }
}
