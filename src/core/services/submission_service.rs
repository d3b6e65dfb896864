//! The "Add Expense" flow: gate a draft, append it, report back.

use crate::core::validation::{self, Advisory, ExpenseDraft};
use crate::errors::SubmissionError;
use crate::ledger::Ledger;
use crate::presentation::format::format_currency;

/// Confirmation returned after a draft is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    pub advisories: Vec<Advisory>,
    pub record_count: usize,
}

impl SubmissionReceipt {
    pub fn message(&self) -> String {
        format!(
            "Added {} with Budgeted: {} and Spent: {}",
            self.category,
            format_currency(self.budgeted),
            format_currency(self.spent)
        )
    }
}

pub struct SubmissionService;

impl SubmissionService {
    /// Appends the draft when it passes validation; otherwise the ledger is left as is.
    pub fn submit(
        ledger: &mut Ledger,
        draft: &ExpenseDraft,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let notes = validation::advisories(draft);
        let expense = match validation::validate(draft) {
            Ok(expense) => expense,
            Err(err) => {
                tracing::debug!(issues = ?err.issues(), "submission rejected");
                return Err(err);
            }
        };

        ledger.append(expense.category.clone(), expense.budgeted, expense.spent);
        tracing::info!(
            category = %expense.category,
            budgeted = expense.budgeted,
            spent = expense.spent,
            records = ledger.len(),
            "expense added"
        );

        Ok(SubmissionReceipt {
            category: expense.category,
            budgeted: expense.budgeted,
            spent: expense.spent,
            advisories: notes,
            record_count: ledger.len(),
        })
    }
}
