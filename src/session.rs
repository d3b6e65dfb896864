//! Session-scoped state: one ledger plus the draft being typed, keyed by a session id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::services::{SubmissionReceipt, SubmissionService};
use crate::core::validation::{self, Advisory, ExpenseDraft};
use crate::errors::SubmissionError;
use crate::ledger::Ledger;
use crate::presentation::Dashboard;

/// Input events a presentation layer feeds into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SetCategory(String),
    SetBudgeted(f64),
    SetSpent(f64),
    Submit,
}

/// User-facing outcome of handling one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Advisory(Advisory),
    Added(SubmissionReceipt),
    Rejected(SubmissionError),
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::Advisory(_) | Notice::Rejected(_))
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Advisory(advisory) => advisory.to_string(),
            Notice::Added(receipt) => receipt.message(),
            Notice::Rejected(err) => err.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    ledger: Ledger,
    draft: ExpenseDraft,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            ledger: Ledger::new(),
            draft: ExpenseDraft::default(),
        };
        tracing::info!(session = %session.id, "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        validation::advisories(&self.draft)
    }

    /// Applies one event. Draft edits report advisories; a submit reports the
    /// advisories in force when the button was pressed followed by the outcome.
    /// The draft is cleared once it lands in the ledger and kept on rejection.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Notice> {
        match event {
            SessionEvent::SetCategory(category) => {
                self.draft.category = category;
                self.advisory_notices()
            }
            SessionEvent::SetBudgeted(amount) => {
                self.draft.budgeted = amount;
                self.advisory_notices()
            }
            SessionEvent::SetSpent(amount) => {
                self.draft.spent = amount;
                self.advisory_notices()
            }
            SessionEvent::Submit => {
                let mut notices = self.advisory_notices();
                match SubmissionService::submit(&mut self.ledger, &self.draft) {
                    Ok(receipt) => {
                        self.draft = ExpenseDraft::default();
                        notices.push(Notice::Added(receipt));
                    }
                    Err(err) => notices.push(Notice::Rejected(err)),
                }
                notices
            }
        }
    }

    /// Recomputes every view from the current ledger.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::project(&self.ledger)
    }

    /// Consumes the session; its ledger goes with it.
    pub fn end(self) -> usize {
        let records = self.ledger.len();
        tracing::info!(session = %self.id, records, "session ended");
        records
    }

    fn advisory_notices(&self) -> Vec<Notice> {
        self.advisories().into_iter().map(Notice::Advisory).collect()
    }
}
