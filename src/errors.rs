use std::fmt;

use thiserror::Error;

/// Unified error type for configuration and storage concerns.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::ConfigError(err.to_string())
    }
}

/// Fatal errors that stop the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

/// A single reason a draft expense cannot be added to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionIssue {
    MissingCategory,
    NonPositiveBudget,
    NegativeSpent,
}

impl fmt::Display for SubmissionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionIssue::MissingCategory => "category is required",
            SubmissionIssue::NonPositiveBudget => "budgeted amount must be greater than zero",
            SubmissionIssue::NegativeSpent => "spent amount cannot be negative",
        };
        f.write_str(label)
    }
}

/// Raised when a submission is rejected. The ledger is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please fill all fields with valid data. ({})", describe_issues(.0))]
    InvalidSubmission(Vec<SubmissionIssue>),
}

impl SubmissionError {
    pub fn issues(&self) -> &[SubmissionIssue] {
        match self {
            SubmissionError::InvalidSubmission(issues) => issues,
        }
    }
}

fn describe_issues(issues: &[SubmissionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_submission_lists_every_issue() {
        let err = SubmissionError::InvalidSubmission(vec![
            SubmissionIssue::MissingCategory,
            SubmissionIssue::NegativeSpent,
        ]);
        let message = err.to_string();
        assert!(message.starts_with("Please fill all fields with valid data."));
        assert!(message.contains("category is required; spent amount cannot be negative"));
    }
}
