use std::path::Path;

use chrono::NaiveDate;
use colored::Colorize;

use crate::{
    cli::{chart, help, output, table, LoopControl, ShellContext},
    core::reports,
    domain::{TransactionDraft, TransactionKind},
    errors::{CliError, LedgerError},
};

/// One entry in the command registry, driving dispatch, completion, and help.
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add <income|expense> <category> <amount> <date> [note...]",
        description: "Record a transaction (date is YYYY-MM-DD)",
    },
    CommandSpec {
        name: "remove",
        usage: "remove <id>",
        description: "Delete the transaction with the given id",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        description: "Show the transaction table (respects the active filter)",
    },
    CommandSpec {
        name: "totals",
        usage: "totals",
        description: "Show income, expense, and balance",
    },
    CommandSpec {
        name: "months",
        usage: "months",
        description: "List the months present in the ledger",
    },
    CommandSpec {
        name: "month",
        usage: "month <YYYY-MM|all>",
        description: "Restrict the view to one month, or clear with `all`",
    },
    CommandSpec {
        name: "search",
        usage: "search [term...]",
        description: "Filter by note/category substring; no term clears it",
    },
    CommandSpec {
        name: "chart",
        usage: "chart",
        description: "Draw the monthly income/expense bar chart",
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        description: "Show spending per category, largest first",
    },
    CommandSpec {
        name: "export",
        usage: "export <path>",
        description: "Write the ledger to a JSON file",
    },
    CommandSpec {
        name: "import",
        usage: "import <path>",
        description: "Replace the ledger with a JSON file",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        description: "Delete every transaction and the persisted file",
    },
    CommandSpec {
        name: "help",
        usage: "help [command]",
        description: "Show this overview or help for one command",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Leave the shell",
    },
];

pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name == name)
}

pub fn dispatch(
    context: &mut ShellContext,
    command: &str,
    args: &[&str],
) -> Result<LoopControl, CliError> {
    match command {
        "add" => cmd_add(context, args)?,
        "remove" | "rm" => cmd_remove(context, args)?,
        "list" | "ls" => cmd_list(context),
        "totals" => cmd_totals(context),
        "months" => cmd_months(context),
        "month" => cmd_month(context, args)?,
        "search" => cmd_search(context, args),
        "chart" => cmd_chart(context),
        "categories" => cmd_categories(context),
        "export" => cmd_export(context, args)?,
        "import" => cmd_import(context, args)?,
        "clear" => cmd_clear(context)?,
        "help" => cmd_help(args),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => {
            output::warning(format!("Unknown command `{other}`. Try `help`."));
        }
    }
    Ok(LoopControl::Continue)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> Result<(), CliError> {
    if args.len() < 4 {
        return Err(usage_error("add"));
    }
    let kind = TransactionKind::parse(args[0]).ok_or_else(|| {
        LedgerError::InvalidInput("transaction type must be `income` or `expense`".into())
    })?;
    let category = args[1].to_string();
    let amount: f64 = args[2]
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("`{}` is not a number", args[2])))?;
    let date = parse_date(args[3])?;
    let note = args[4..].join(" ");

    let draft = TransactionDraft {
        kind,
        category,
        amount,
        date,
        note,
    };
    let id = context.add_transaction(draft)?;
    let formatted = context.currency().format(amount);
    output::success(format!("Added transaction {id} ({formatted})."));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> Result<(), CliError> {
    let raw = args.first().ok_or_else(|| usage_error("remove"))?;
    let id: u64 = raw
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("`{raw}` is not a transaction id")))?;
    let removed = context.remove_transaction(id)?;
    let formatted = context.currency().format(removed.amount);
    output::success(format!(
        "Removed transaction {id} ({} {formatted}).",
        removed.category
    ));
    Ok(())
}

fn cmd_list(context: &ShellContext) {
    let filter = context.state().filter();
    if filter.is_active() {
        let month = filter.month.as_deref().unwrap_or("all");
        let search = if filter.search.trim().is_empty() {
            "-".to_string()
        } else {
            format!("`{}`", filter.search.trim())
        };
        output::info(format!("Filter: month {month}, search {search}"));
    }
    let rows = context.state().visible();
    println!("{}", table::render_transactions(&rows, context.currency()));
}

fn cmd_totals(context: &ShellContext) {
    let sums = reports::totals(context.state().transactions());
    let currency = context.currency();
    output::section("Totals");
    output::info(format!("Income:  {}", currency.format(sums.income)));
    output::info(format!("Expense: {}", currency.format(sums.expense)));

    let balance = format!("Balance: {}", currency.format(sums.balance()));
    if sums.is_overdrawn() {
        if output::current_preferences().plain_mode {
            output::info(format!("{balance} (overdrawn)"));
        } else {
            output::info(balance.bright_red().to_string());
        }
    } else {
        output::info(balance);
    }
}

fn cmd_months(context: &ShellContext) {
    let months = reports::months(context.state().transactions());
    if months.is_empty() {
        output::info("No months yet.");
        return;
    }
    for month in months {
        output::info(month);
    }
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> Result<(), CliError> {
    let raw = args.first().copied();
    match raw {
        None => {
            let current = context.state().filter().month.as_deref().unwrap_or("all");
            output::info(format!("Month filter: {current}"));
            return Ok(());
        }
        Some("all") => context.state_mut().set_month(None),
        Some(month) => {
            if !is_month_key(month) {
                return Err(
                    LedgerError::InvalidInput(format!("`{month}` is not a YYYY-MM month")).into(),
                );
            }
            context.state_mut().set_month(Some(month.to_string()));
        }
    }
    cmd_list(context);
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) {
    context.state_mut().set_search(args.join(" "));
    cmd_list(context);
}

fn cmd_chart(context: &ShellContext) {
    let flows = reports::monthly_flows(context.state().transactions());
    output::section("Monthly flows");
    println!("{}", chart::render(&flows, context.currency()));
}

fn cmd_categories(context: &ShellContext) {
    let spends = reports::category_breakdown(context.state().transactions());
    if spends.is_empty() {
        output::info("No categories yet.");
        return;
    }
    output::section("Spending by category");
    let width = spends
        .iter()
        .map(|s| s.category.len())
        .max()
        .unwrap_or(0);
    for entry in spends {
        output::info(format!(
            "{:<width$}  {}",
            entry.category,
            context.currency().format(entry.spend()),
        ));
    }
}

fn cmd_export(context: &ShellContext, args: &[&str]) -> Result<(), CliError> {
    let path = args.first().ok_or_else(|| usage_error("export"))?;
    context
        .store()
        .export_to_path(context.state().document(), Path::new(path))?;
    output::success(format!(
        "Exported {} transactions to {path}.",
        context.state().document().len()
    ));
    Ok(())
}

fn cmd_import(context: &mut ShellContext, args: &[&str]) -> Result<(), CliError> {
    let path = args.first().ok_or_else(|| usage_error("import"))?;
    let doc = context.store().import_from_path(Path::new(path))?;
    let count = doc.len();
    context.import_document(doc);
    output::success(format!("Imported {count} transactions from {path}."));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext) -> Result<(), CliError> {
    context.store().clear()?;
    context.reset_state();
    output::success("Ledger cleared.");
    Ok(())
}

fn cmd_help(args: &[&str]) {
    match args.first().and_then(|name| find(&name.to_lowercase())) {
        Some(entry) => help::print_command(entry),
        None => help::print_overview(),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidInput(format!("`{raw}` is not a YYYY-MM-DD date")))
}

fn is_month_key(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !raw[..4].chars().all(|c| c.is_ascii_digit())
        || !raw[5..].chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }
    matches!(raw[5..].parse::<u32>(), Ok(1..=12))
}

fn usage_error(name: &str) -> CliError {
    let usage = find(name).map(|c| c.usage).unwrap_or(name);
    LedgerError::InvalidInput(format!("usage: {usage}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_keys_are_validated() {
        assert!(is_month_key("2026-08"));
        assert!(is_month_key("1999-12"));
        assert!(!is_month_key("2026-13"));
        assert!(!is_month_key("2026-00"));
        assert!(!is_month_key("2026-8"));
        assert!(!is_month_key("aug-2026"));
    }

    #[test]
    fn dates_must_be_iso() {
        assert!(parse_date("2026-08-12").is_ok());
        assert!(parse_date("12/08/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn every_command_has_a_registry_entry() {
        for name in ["add", "remove", "list", "totals", "months", "month", "search", "chart", "categories", "export", "import", "clear", "help", "exit"] {
            assert!(find(name).is_some(), "missing registry entry for {name}");
        }
    }
}
