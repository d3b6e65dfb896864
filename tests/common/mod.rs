#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use budget_planner::session::{Notice, Session, SessionEvent};

/// Script-mode invocation of the binary with an isolated config home.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_planner").expect("binary builds");
    cmd.env("BUDGET_PLANNER_CLI_SCRIPT", "1")
        .env("BUDGET_PLANNER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Types all three fields and presses submit, like a user in the sidebar.
pub fn enter_expense(
    session: &mut Session,
    category: &str,
    budgeted: f64,
    spent: f64,
) -> Vec<Notice> {
    let mut notices = session.handle(SessionEvent::SetCategory(category.to_string()));
    notices.extend(session.handle(SessionEvent::SetBudgeted(budgeted)));
    notices.extend(session.handle(SessionEvent::SetSpent(spent)));
    notices.extend(session.handle(SessionEvent::Submit));
    notices
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
