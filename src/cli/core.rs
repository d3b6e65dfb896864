//! Dispatch, event application and the redraw pass shared by every command.

use std::io;

use strsim::levenshtein;
use thiserror::Error;

use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::ui::{banner::Banner, chart_renderer::ChartRenderer, table_renderer::Table};
use crate::errors::{BudgetError, CliError};
use crate::presentation::{PieChartSpec, SummaryLines, TableView};
use crate::session::{Notice, Session, SessionEvent};

pub use crate::cli::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one line the same way the interactive loop does.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit budget planner? Entries are not saved.", false)
            .map_err(|err| CliError::Input(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::warn!(command = ?self.last_command, error = %other, "command failed");
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    /// Feeds one event to the session, prints what came of it, then redraws.
    pub(crate) fn apply_event(&mut self, event: SessionEvent) -> CommandResult {
        let notices = self.session.handle(event);
        self.report_notices(&notices);
        self.refresh();
        Ok(())
    }

    pub(crate) fn report_notices(&self, notices: &[Notice]) {
        for notice in notices {
            match notice {
                Notice::Added(_) => cli_io::print_success(notice.message()),
                Notice::Advisory(_) | Notice::Rejected(_) => {
                    cli_io::print_warning(notice.message())
                }
            }
        }
    }

    /// Redraws after an event unless auto-refresh is switched off.
    pub(crate) fn refresh(&self) {
        if self.config.auto_refresh {
            self.redraw();
        }
    }

    /// Recomputes every view from the ledger once and prints table, totals and chart.
    pub fn redraw(&self) {
        let dashboard = self.session.dashboard();
        self.render_table(&dashboard.table);
        self.render_totals(&dashboard.summary);
        self.render_chart(&dashboard.chart);
    }

    pub(crate) fn render_table(&self, table: &TableView) {
        output::section("Budget Overview");
        if table.is_empty() {
            cli_io::print_info("No expenses recorded yet.");
        } else {
            output::plain(Table::from_view(table).render());
        }
    }

    pub(crate) fn render_totals(&self, summary: &SummaryLines) {
        output::section("Totals");
        for line in summary.lines() {
            output::plain(line);
        }
    }

    pub(crate) fn render_chart(&self, chart: &PieChartSpec) {
        output::section("Chart");
        let renderer = match self.mode {
            CliMode::Interactive => {
                ChartRenderer::fitted_to_terminal(self.config.layout.chart_width())
            }
            CliMode::Script => ChartRenderer::new(self.config.layout.chart_width()),
        };
        output::plain(renderer.render(chart));
    }

    pub(crate) fn print_banner(&self) {
        output::section(Banner::title(&self.config));
        if let Some(welcome) = Banner::welcome(&self.config) {
            cli_io::print_info(welcome);
        }
    }

    pub(crate) fn prompt(&self) -> String {
        Banner::prompt(&self.config, self.session.ledger().len())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config);
        Ok(())
    }

    /// Drops the current session and starts an empty one.
    pub(crate) fn restart_session(&mut self) -> usize {
        let previous = std::mem::replace(&mut self.session, Session::new());
        previous.end()
    }

    /// Ends the live session without starting another; returns how many entries it held.
    pub(crate) fn shutdown(self) -> usize {
        self.session.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use tempfile::TempDir;

    fn context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut ctx = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
        ctx.config.auto_refresh = false;
        (ctx, temp)
    }

    #[test]
    fn add_command_appends_record() {
        let (mut ctx, _temp) = context();
        ctx.process_line("add Food 200 150").unwrap();
        ctx.process_line("add \"Eating out\" 80.5 20").unwrap();
        let records = ctx.session.ledger().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, "Eating out");
        assert_eq!(records[1].remaining(), 60.5);
    }

    #[test]
    fn field_commands_then_submit() {
        let (mut ctx, _temp) = context();
        ctx.process_line("category Rent").unwrap();
        ctx.process_line("budgeted 1000").unwrap();
        ctx.process_line("spent 1000").unwrap();
        assert!(ctx.session.ledger().is_empty());
        ctx.process_line("submit").unwrap();
        assert_eq!(ctx.session.ledger().len(), 1);
    }

    #[test]
    fn invalid_submission_is_not_a_command_error() {
        let (mut ctx, _temp) = context();
        let outcome = ctx.process_line("add Food 0 10").unwrap();
        assert_eq!(outcome, LoopControl::Continue);
        assert!(ctx.session.ledger().is_empty());
    }

    #[test]
    fn bad_amount_is_an_argument_error_and_keeps_draft() {
        let (mut ctx, _temp) = context();
        ctx.process_line("budgeted 40").unwrap();
        let err = ctx.process_line("budgeted lots").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(ctx.session.draft().budgeted, 40.0);
    }

    #[test]
    fn unknown_commands_continue_and_exit_stops() {
        let (mut ctx, _temp) = context();
        assert_eq!(ctx.process_line("sumbit").unwrap(), LoopControl::Continue);
        assert_eq!(ctx.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!ctx.running);
    }

    #[test]
    fn new_session_discards_ledger() {
        let (mut ctx, _temp) = context();
        let first = ctx.session.id();
        ctx.process_line("add Food 10 1").unwrap();
        ctx.process_line("session new").unwrap();
        assert_ne!(ctx.session.id(), first);
        assert!(ctx.session.ledger().is_empty());
    }

    #[test]
    fn shutdown_ends_the_live_session() {
        let (mut ctx, _temp) = context();
        ctx.process_line("add Food 10 1").unwrap();
        ctx.process_line("add Rent 500 500").unwrap();
        assert_eq!(ctx.shutdown(), 2);
    }
}
