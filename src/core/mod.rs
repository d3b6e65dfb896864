//! Validation rules and services layered over the ledger.

pub mod services;
pub mod utils;
pub mod validation;
