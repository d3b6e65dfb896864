use crate::ledger::{Ledger, Totals};

pub struct SummaryService;

impl SummaryService {
    pub fn current_totals(ledger: &Ledger) -> Totals {
        ledger.totals()
    }

    /// Number of records whose spending went past the budget.
    pub fn over_budget_count(ledger: &Ledger) -> usize {
        ledger
            .records()
            .iter()
            .filter(|record| record.is_over_budget())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append("Food", 200.0, 150.0);
        ledger.append("Rent", 1000.0, 1000.0);
        ledger
    }

    #[test]
    fn current_totals_match_reference_scenario() {
        let totals = SummaryService::current_totals(&household());
        assert_eq!(totals.budgeted, 1200.0);
        assert_eq!(totals.spent, 1150.0);
        assert_eq!(totals.remaining, 50.0);
    }

    #[test]
    fn over_budget_count_ignores_exact_spend() {
        let mut ledger = household();
        assert_eq!(SummaryService::over_budget_count(&ledger), 0);
        ledger.append("Travel", 100.0, 120.0);
        assert_eq!(SummaryService::over_budget_count(&ledger), 1);
    }
}
