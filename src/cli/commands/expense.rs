//! Commands that edit the draft and press "Add Expense".

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io::{self as cli_io, parse_amount};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::presentation::format::format_currency;
use crate::session::SessionEvent;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "category",
        "Set the category of the expense being entered",
        "category <name>",
        cmd_category,
    ));
    registry.register(CommandEntry::new(
        "budgeted",
        "Set the budgeted amount",
        "budgeted <amount>",
        cmd_budgeted,
    ));
    registry.register(CommandEntry::new(
        "spent",
        "Set the amount actually spent",
        "spent <amount>",
        cmd_spent,
    ));
    registry.register(CommandEntry::new(
        "submit",
        "Add the expense being entered",
        "submit",
        cmd_submit,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Enter and submit an expense in one step",
        "add <category> <budgeted> <spent>",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "form",
        "Fill in an expense through prompts",
        "form",
        cmd_form,
    ));
    registry.register(CommandEntry::new(
        "draft",
        "Show the expense being entered",
        "draft",
        cmd_draft,
    ));
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.apply_event(SessionEvent::SetCategory(args.join(" ")))
}

fn cmd_budgeted(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = single_amount(args, "budgeted <amount>")?;
    context.apply_event(SessionEvent::SetBudgeted(amount))
}

fn cmd_spent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = single_amount(args, "spent <amount>")?;
    context.apply_event(SessionEvent::SetSpent(amount))
}

fn cmd_submit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: submit".into()));
    }
    context.apply_event(SessionEvent::Submit)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, budgeted, spent] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <category> <budgeted> <spent>".into(),
        ));
    };
    // Parse both amounts before touching the draft so a typo changes nothing.
    let budgeted = parse_amount(budgeted)?;
    let spent = parse_amount(spent)?;

    let mut notices = Vec::new();
    notices.extend(
        context
            .session
            .handle(SessionEvent::SetCategory(category.to_string())),
    );
    notices.extend(context.session.handle(SessionEvent::SetBudgeted(budgeted)));
    notices.extend(context.session.handle(SessionEvent::SetSpent(spent)));
    // The submit pass repeats any advisory already collected above.
    notices.retain(|notice| !notice.is_warning());
    notices.extend(context.session.handle(SessionEvent::Submit));

    context.report_notices(&notices);
    context.refresh();
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "`form` needs an interactive terminal; use `add <category> <budgeted> <spent>`".into(),
        ));
    }
    let draft = context.session.draft().clone();

    let category = cli_io::prompt_text(
        &context.theme,
        "Category (e.g., Food, Rent, Entertainment)",
    )?;
    let budgeted = cli_io::prompt_amount(&context.theme, "Budgeted Amount", draft.budgeted)?;
    let spent = cli_io::prompt_amount(&context.theme, "Spent Amount", draft.spent)?;

    context.session.handle(SessionEvent::SetCategory(category));
    context.session.handle(SessionEvent::SetBudgeted(budgeted));
    let notices = context.session.handle(SessionEvent::SetSpent(spent));
    context.report_notices(&notices);

    if cli_io::confirm_action(&context.theme, "Add Expense?", true)? {
        context.apply_event(SessionEvent::Submit)
    } else {
        cli_io::print_info("Expense kept as a draft. Use `submit` to add it later.");
        Ok(())
    }
}

fn cmd_draft(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let draft = context.session.draft();
    output::section("Add New Expense");
    let category = if draft.category.trim().is_empty() {
        "(empty)"
    } else {
        draft.category.as_str()
    };
    output::plain(format!("Category: {}", category));
    output::plain(format!("Budgeted: {}", format_currency(draft.budgeted)));
    output::plain(format!("Spent:    {}", format_currency(draft.spent)));
    for advisory in context.session.advisories() {
        cli_io::print_warning(advisory);
    }
    Ok(())
}

fn single_amount(args: &[&str], usage: &str) -> Result<f64, CommandError> {
    match args {
        [value] => parse_amount(value),
        _ => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
    }
}
