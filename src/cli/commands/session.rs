use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::core::services::SummaryService;
use crate::presentation::format::format_currency;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "session",
        "Show the current session, or start a fresh one",
        "session [new]",
        cmd_session,
    ));
}

fn cmd_session(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let session = &context.session;
            let ledger = session.ledger();
            output::section("Session");
            output::plain(format!("id:       {}", session.id()));
            output::plain(format!(
                "started:  {}",
                session.started_at().format("%Y-%m-%d %H:%M:%S UTC")
            ));
            output::plain(format!("records:  {}", ledger.len()));
            output::plain(format!(
                "balance:  {}",
                format_currency(SummaryService::current_totals(ledger).remaining)
            ));
            output::plain(format!(
                "over budget: {}",
                SummaryService::over_budget_count(ledger)
            ));
            Ok(())
        }
        ["new"] => {
            let dropped = context.restart_session();
            cli_io::print_success(format!(
                "Started a new session ({} entr{} discarded).",
                dropped,
                if dropped == 1 { "y" } else { "ies" }
            ));
            context.refresh();
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: session [new]".into())),
    }
}
