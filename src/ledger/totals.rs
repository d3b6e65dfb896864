use serde::Serialize;

/// Aggregate sums over every record in a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl Totals {
    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}
