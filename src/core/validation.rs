//! Draft input checks: advisories that never block, and the hard gate applied on submit.

use std::fmt;

use crate::errors::{SubmissionError, SubmissionIssue};

/// Values currently typed into the "Add New Expense" fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
}

impl ExpenseDraft {
    pub fn new(category: impl Into<String>, budgeted: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            budgeted,
            spent,
        }
    }
}

/// Informational notice shown while the user edits a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    BudgetExceeded,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::BudgetExceeded => f.write_str("Spent amount exceeds the budgeted amount."),
        }
    }
}

/// A draft that passed [`validate`]; the category is already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
}

pub fn advisories(draft: &ExpenseDraft) -> Vec<Advisory> {
    let mut notes = Vec::new();
    if draft.budgeted < draft.spent {
        notes.push(Advisory::BudgetExceeded);
    }
    notes
}

/// Hard gate: non-empty category, `budgeted > 0`, `spent >= 0`.
///
/// `budgeted < spent` is allowed here; it only produces an [`Advisory`].
pub fn validate(draft: &ExpenseDraft) -> Result<ValidatedExpense, SubmissionError> {
    let category = draft.category.trim();
    let mut issues = Vec::new();

    if category.is_empty() {
        issues.push(SubmissionIssue::MissingCategory);
    }
    // Written so NaN fails both checks.
    if !(draft.budgeted > 0.0) {
        issues.push(SubmissionIssue::NonPositiveBudget);
    }
    if !(draft.spent >= 0.0) {
        issues.push(SubmissionIssue::NegativeSpent);
    }

    if !issues.is_empty() {
        return Err(SubmissionError::InvalidSubmission(issues));
    }

    Ok(ValidatedExpense {
        category: category.to_string(),
        budgeted: draft.budgeted,
        spent: draft.spent,
    })
}
