use serde::Serialize;

use crate::ledger::Ledger;

pub const CHART_TITLE: &str = "Remaining Budget by Category";

/// Input for a pie-chart collaborator: one slice per record, never merged.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieChartSpec {
    pub fn project(ledger: &Ledger) -> Self {
        let slices = ledger
            .remaining_by_category()
            .into_iter()
            .map(|(label, value)| PieSlice { label, value })
            .collect();
        Self {
            title: CHART_TITLE.to_string(),
            slices,
        }
    }

    /// Sum of the non-negative slice values; the base for share percentages.
    pub fn positive_total(&self) -> f64 {
        self.slices
            .iter()
            .filter(|slice| slice.value > 0.0)
            .map(|slice| slice.value)
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_pass_through() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 100.0, 150.0);
        ledger.append("Rent", 1000.0, 400.0);

        let chart = PieChartSpec::project(&ledger);
        assert_eq!(chart.slices[0].value, -50.0);
        assert_eq!(chart.positive_total(), 600.0);
    }
}
