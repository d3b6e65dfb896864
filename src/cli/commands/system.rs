use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::utils::build_info;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <value> | path]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the planner (entries are not kept)",
        "exit",
        cmd_exit,
    ));
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            let entries = context.config.entries();
            let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            for (key, value) in entries {
                output::plain(format!("  {:<width$}  {}", key, value, width = width));
            }
            Ok(())
        }
        ["path"] => {
            output::plain(context.config_manager.path().display());
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            tracing::info!(key = %key, value = %value, "config updated");
            cli_io::print_success(format!("Set `{}` to `{}`.", key, value));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value> | path]".into(),
        )),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for line in build_info::current().summary_lines() {
        output::plain(line);
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .get(&name.to_lowercase())
            .ok_or_else(|| CommandError::InvalidArguments(format!("no command named `{}`", name)))?;
        output::plain(format!("{}\n  usage: {}", entry.description, entry.usage));
        return Ok(());
    }

    output::section("Commands");
    let entries = context.registry.list();
    let width = entries
        .iter()
        .map(|entry| entry.usage.len())
        .max()
        .unwrap_or(0);
    for entry in entries {
        output::plain(format!(
            "  {:<width$}  {}",
            entry.usage,
            entry.description,
            width = width
        ));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
