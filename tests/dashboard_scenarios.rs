mod common;

use budget_planner::core::validation::Advisory;
use budget_planner::errors::SubmissionIssue;
use budget_planner::presentation::{Dashboard, PieSlice};
use budget_planner::session::{Notice, Session};
use common::{approx_eq, enter_expense};

#[test]
fn record_count_tracks_accepted_submissions() {
    let mut session = Session::new();
    let amounts = [(12.5, 3.0), (40.0, 40.0), (99.99, 0.0), (5.0, 7.25)];
    for (n, (budgeted, spent)) in amounts.iter().enumerate() {
        enter_expense(&mut session, &format!("Item {n}"), *budgeted, *spent);
        assert_eq!(session.ledger().len(), n + 1);
    }
    // rejected ones do not count
    enter_expense(&mut session, "Broken", 0.0, 1.0);
    assert_eq!(session.ledger().len(), amounts.len());
}

#[test]
fn remaining_and_totals_are_rederived() {
    let mut session = Session::new();
    enter_expense(&mut session, "Food", 210.35, 199.99);
    enter_expense(&mut session, "Transport", 60.0, 72.4);
    enter_expense(&mut session, "Rent", 1000.0, 1000.0);

    for record in session.ledger().records() {
        assert!(approx_eq(record.remaining(), record.budgeted - record.spent));
    }
    let totals = session.ledger().totals();
    assert!(approx_eq(totals.remaining, totals.budgeted - totals.spent));
}

#[test]
fn empty_category_is_rejected_and_ledger_unchanged() {
    let mut session = Session::new();
    enter_expense(&mut session, "Food", 20.0, 5.0);
    let notices = enter_expense(&mut session, "", 20.0, 5.0);

    let rejected = notices
        .iter()
        .find_map(|notice| match notice {
            Notice::Rejected(err) => Some(err.issues().to_vec()),
            _ => None,
        })
        .expect("rejection notice");
    assert_eq!(rejected, vec![SubmissionIssue::MissingCategory]);
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn zero_budget_is_rejected_regardless_of_spent() {
    for spent in [0.0, 1.0, 250.0] {
        let mut session = Session::new();
        enter_expense(&mut session, "Food", 0.0, spent);
        assert!(session.ledger().is_empty(), "spent = {spent}");
    }
}

#[test]
fn zero_spent_is_accepted() {
    let mut session = Session::new();
    enter_expense(&mut session, "Savings", 10.0, 0.0);
    assert_eq!(session.ledger().records()[0].remaining(), 10.0);
}

#[test]
fn food_and_rent_scenario() {
    let mut session = Session::new();
    enter_expense(&mut session, "Food", 200.00, 150.00);
    enter_expense(&mut session, "Rent", 1000.00, 1000.00);

    let Dashboard {
        table,
        summary,
        chart,
    } = session.dashboard();

    assert!(approx_eq(summary.totals.budgeted, 1200.0));
    assert!(approx_eq(summary.totals.spent, 1150.0));
    assert!(approx_eq(summary.totals.remaining, 50.0));

    let categories: Vec<&str> = table.rows.iter().map(|row| row.category.as_str()).collect();
    assert_eq!(categories, vec!["Food", "Rent"]);

    assert_eq!(
        chart.slices,
        vec![
            PieSlice {
                label: "Food".into(),
                value: 50.0,
            },
            PieSlice {
                label: "Rent".into(),
                value: 0.0,
            },
        ]
    );
}

#[test]
fn overspend_warns_but_is_accepted() {
    let mut session = Session::new();
    let notices = enter_expense(&mut session, "Food", 100.00, 150.00);

    assert!(notices.contains(&Notice::Advisory(Advisory::BudgetExceeded)));
    assert!(notices
        .iter()
        .any(|notice| matches!(notice, Notice::Added(_))));
    assert_eq!(session.ledger().records()[0].remaining(), -50.0);
    assert_eq!(session.dashboard().chart.slices[0].value, -50.0);
}

#[test]
fn duplicate_categories_produce_separate_rows_and_slices() {
    let mut session = Session::new();
    enter_expense(&mut session, "Food", 100.0, 20.0);
    enter_expense(&mut session, "Food", 50.0, 45.0);

    let dashboard = session.dashboard();
    assert_eq!(dashboard.table.rows.len(), 2);
    let labels: Vec<&str> = dashboard
        .chart
        .slices
        .iter()
        .map(|slice| slice.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Food", "Food"]);
    assert_eq!(dashboard.chart.slices[0].value, 80.0);
    assert_eq!(dashboard.chart.slices[1].value, 5.0);
}
