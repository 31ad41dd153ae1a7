//! Shell commands. Each handler maps to one page interaction.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::{output, render};
use crate::config::Config;
use crate::ledger::Period;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "income",
        "Set total income (invalid input resets it to 0)",
        "income <amount>",
        cmd_income,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Record an expense",
        "add <category> <amount>",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "remove",
        "Delete the expense shown at <index> in the list",
        "remove <index>",
        cmd_remove,
    ));
    registry.register(CommandEntry::new(
        "clear",
        "Delete every expense (income is kept)",
        "clear",
        cmd_clear,
    ));
    registry.register(CommandEntry::new(
        "period",
        "Show or change the active period",
        "period [week|month|year|all]",
        cmd_period,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show expenses in the active period",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "summary",
        "Show income, expenses and savings",
        "summary",
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "chart",
        "Show spending by category",
        "chart",
        cmd_chart,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show|set <key> <value>|reset]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
}

fn usage_error(context: &ShellContext, name: &str) -> CommandError {
    let usage = context
        .registry
        .get(name)
        .map(|entry| entry.usage)
        .unwrap_or(name);
    CommandError::InvalidArguments(format!("Usage: {}", usage))
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    // A blank entry is allowed and resets income, like clearing the field.
    let raw = args.first().copied().unwrap_or("");
    if args.len() > 1 {
        return Err(usage_error(context, "income"));
    }
    context.session.set_income(raw);
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount) = match args {
        [amount] => ("", *amount),
        [category, amount] => (*category, *amount),
        _ => return Err(usage_error(context, "add")),
    };
    let record = context.session.add_expense(category, amount)?;
    output::success(format!(
        "Added {}: {}",
        record.category,
        context.session.money().format(record.amount)
    ));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(usage_error(context, "remove"));
    };
    let index: usize = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a list index", raw)))?;
    let Some(item) = context.session.list_items().into_iter().nth(index) else {
        output::warning(format!("No expense at index {}.", index));
        return Ok(());
    };
    let prompt = format!("Delete {}: {}?", item.category, item.amount_label);
    if !context.confirm(&prompt)? {
        return Ok(());
    }
    if let Some(removed) = context.session.remove_visible(index) {
        output::success(format!("Removed {}.", removed.category));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage_error(context, "clear"));
    }
    if context.session.ledger().is_empty() {
        output::info("Nothing to clear.");
        return Ok(());
    }
    if !context.confirm("Delete all expenses?")? {
        return Ok(());
    }
    context.session.clear();
    output::success("All expenses deleted.");
    Ok(())
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!("Active period: {}", context.session.period()));
            Ok(())
        }
        [raw] => {
            let period: Period = raw
                .parse()
                .map_err(|err: crate::ledger::ParsePeriodError| {
                    CommandError::InvalidArguments(err.to_string())
                })?;
            context.session.set_period(period);
            Ok(())
        }
        _ => Err(usage_error(context, "period")),
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_list(&context.session.list_items());
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_summary(&context.session.summary());
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_chart(&context.session.chart());
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::info(format!("  locale          {}", context.config.locale));
            output::info(format!("  currency        {}", context.config.currency));
            output::info(format!("  default_period  {}", context.config.default_period));
            output::info(format!(
                "  ui_color        {}",
                if context.config.ui_color_enabled { "on" } else { "off" }
            ));
            Ok(())
        }
        ["set", key, value] => {
            context.config.set(key, value)?;
            context.apply_config()?;
            output::success(format!("{} updated.", key));
            Ok(())
        }
        ["reset"] => {
            context.config = Config::default();
            context.apply_config()?;
            output::success("Preferences reset.");
            Ok(())
        }
        _ => Err(usage_error(context, "config")),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => {
            output::section("Available commands");
            for line in context.registry.overview_lines() {
                output::info(line);
            }
            output::info("Use `help <command>` for details.");
        }
        Some(name) => match context.registry.get(&name.to_lowercase()) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                for line in entry.help_lines() {
                    output::info(line);
                }
            }
            None => context.suggest_command(name),
        },
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
