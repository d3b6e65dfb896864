pub mod submission_service;
pub mod summary_service;

pub use submission_service::{SubmissionReceipt, SubmissionService};
pub use summary_service::SummaryService;
