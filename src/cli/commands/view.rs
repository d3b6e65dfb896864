use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::presentation::{PieChartSpec, SummaryLines, TableView};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "dashboard",
        "Show table, totals and chart",
        "dashboard",
        cmd_dashboard,
    ));
    registry.register(CommandEntry::new(
        "table",
        "Show the expense table",
        "table",
        cmd_table,
    ));
    registry.register(CommandEntry::new(
        "totals",
        "Show total budget, spent and remaining balance",
        "totals",
        cmd_totals,
    ));
    registry.register(CommandEntry::new(
        "chart",
        "Show remaining budget by category, or its JSON specification",
        "chart [--json]",
        cmd_chart,
    ));
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.redraw();
    Ok(())
}

fn cmd_table(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_table(&TableView::project(context.session.ledger()));
    Ok(())
}

fn cmd_totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_totals(&SummaryLines::project(context.session.ledger()));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let chart = PieChartSpec::project(context.session.ledger());
    match args {
        [] => {
            context.render_chart(&chart);
            Ok(())
        }
        ["--json"] => {
            output::plain(chart.to_json()?);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: chart [--json]".into())),
    }
}
