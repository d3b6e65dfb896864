use serde::{Deserialize, Serialize};

/// One row of the budget: a spending category with what was planned and what went out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, budgeted: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            budgeted,
            spent,
        }
    }

    /// Derived on every call so it always tracks `budgeted` and `spent`.
    pub fn remaining(&self) -> f64 {
        self.budgeted - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budgeted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_follows_field_changes() {
        let mut record = ExpenseRecord::new("Food", 200.0, 150.0);
        assert_eq!(record.remaining(), 50.0);

        record.spent = 250.0;
        assert_eq!(record.remaining(), -50.0);
        assert!(record.is_over_budget());
    }
}
