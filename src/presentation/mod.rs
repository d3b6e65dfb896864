//! Pure projections of a [`Ledger`] into the views the dashboard renders.
//!
//! Nothing here mutates the ledger; every call recomputes from the records.

pub mod chart;
pub mod format;
pub mod summary;
pub mod table_view;

pub use chart::{PieChartSpec, PieSlice};
pub use summary::SummaryLines;
pub use table_view::{TableView, TableViewRow};

use crate::ledger::Ledger;

/// Everything one redraw needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub table: TableView,
    pub summary: SummaryLines,
    pub chart: PieChartSpec,
}

impl Dashboard {
    pub fn project(ledger: &Ledger) -> Self {
        Self {
            table: TableView::project(ledger),
            summary: SummaryLines::project(ledger),
            chart: PieChartSpec::project(ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_projects_all_three_views() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 200.0, 150.0);
        ledger.append("Rent", 1000.0, 1000.0);

        let dashboard = Dashboard::project(&ledger);
        assert_eq!(dashboard.table.rows.len(), 2);
        assert_eq!(dashboard.summary.total_budgeted, "Total Budget: $1200.00");
        assert_eq!(dashboard.summary.total_spent, "Total Spent: $1150.00");
        assert_eq!(dashboard.summary.total_remaining, "Remaining Balance: $50.00");
        assert_eq!(
            dashboard.chart.slices,
            vec![
                PieSlice {
                    label: "Food".into(),
                    value: 50.0
                },
                PieSlice {
                    label: "Rent".into(),
                    value: 0.0
                },
            ]
        );
    }
}
