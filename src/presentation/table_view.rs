use crate::ledger::Ledger;

use super::format::format_amount;

pub const TABLE_COLUMNS: [&str; 4] = ["Category", "Budgeted", "Spent", "Remaining"];

/// Row-oriented snapshot of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<TableViewRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewRow {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl TableViewRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            format_amount(self.budgeted),
            format_amount(self.spent),
            format_amount(self.remaining),
        ]
    }
}

impl TableView {
    pub fn project(ledger: &Ledger) -> Self {
        let rows = ledger
            .records()
            .iter()
            .map(|record| TableViewRow {
                category: record.category.clone(),
                budgeted: record.budgeted,
                spent: record.spent,
                remaining: record.remaining(),
            })
            .collect();
        Self {
            columns: TABLE_COLUMNS.iter().map(|name| name.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(TableViewRow::cells).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_insertion_order_with_remaining() {
        let mut ledger = Ledger::new();
        ledger.append("Food", 200.0, 150.0);
        ledger.append("Rent", 1000.0, 1000.0);

        let view = TableView::project(&ledger);
        assert_eq!(view.columns, TABLE_COLUMNS);
        assert_eq!(
            view.cell_rows(),
            vec![
                vec!["Food", "200.00", "150.00", "50.00"],
                vec!["Rent", "1000.00", "1000.00", "0.00"],
            ]
        );
    }
}
