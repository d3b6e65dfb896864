use serde::{Deserialize, Serialize};

use super::{record::ExpenseRecord, totals::Totals};

/// Append-only, insertion-ordered collection of expense records.
///
/// The ledger does not validate what it is given; callers go through
/// [`SubmissionService`](crate::core::services::SubmissionService) for that.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, category: impl Into<String>, budgeted: f64, spent: f64) {
        self.records.push(ExpenseRecord::new(category, budgeted, spent));
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn totals(&self) -> Totals {
        self.records
            .iter()
            .fold(Totals::default(), |mut totals, record| {
                totals.budgeted += record.budgeted;
                totals.spent += record.spent;
                totals.remaining += record.remaining();
                totals
            })
    }

    /// One entry per record, duplicates included, in insertion order.
    pub fn remaining_by_category(&self) -> Vec<(String, f64)> {
        self.records
            .iter()
            .map(|record| (record.category.clone(), record.remaining()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
        assert!(ledger.remaining_by_category().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append("Rent", 1000.0, 1000.0);
        ledger.append("Food", 200.0, 150.0);
        ledger.append("Fun", 50.0, 0.0);

        let names: Vec<&str> = ledger
            .records()
            .iter()
            .map(|record| record.category.as_str())
            .collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn append_accepts_anything_without_validation() {
        let mut ledger = Ledger::new();
        ledger.append("", -5.0, -1.0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].remaining(), -4.0);
    }

    #[test]
    fn totals_agree_with_derived_remaining() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 200.10, 150.35);
        ledger.append("Rent", 1000.0, 1000.0);
        ledger.append("Travel", 300.0, 412.5);

        let totals = ledger.totals();
        assert!(approx(totals.budgeted, 1500.10));
        assert!(approx(totals.spent, 1562.85));
        assert!(approx(totals.remaining, totals.budgeted - totals.spent));
        assert!(totals.is_over_budget());
    }

    #[test]
    fn duplicate_categories_stay_separate() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 100.0, 40.0);
        ledger.append("Food", 80.0, 90.0);

        assert_eq!(
            ledger.remaining_by_category(),
            vec![("Food".to_string(), 60.0), ("Food".to_string(), -10.0)]
        );
    }
}
