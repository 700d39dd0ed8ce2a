use std::str::FromStr;

use crate::cli::core::{parse_position, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::ledger::{parse_amount, parse_date, ExpenseField};

const ADD_USAGE: &str = "add <amount> <description> <category> [YYYY-MM-DD]";
const EDIT_USAGE: &str = "edit <#> <Date|Description|Amount|Category> <value>";
const DELETE_USAGE: &str = "delete <#>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandEntry::new("edit", "Change one field of an expense", EDIT_USAGE, cmd_edit),
        CommandEntry::new("delete", "Remove an expense", DELETE_USAGE, cmd_delete),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.mode() == CliMode::Interactive && args.is_empty() {
        return add_interactive(context);
    }

    let [amount, description, category, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", ADD_USAGE)));
    };
    if rest.len() > 1 {
        return Err(CommandError::InvalidArguments(format!("usage: {}", ADD_USAGE)));
    }

    // Validate everything before touching categories.
    let amount = parse_amount(amount)?;
    let date = match rest.first().map(|raw| raw.trim()) {
        Some(raw) if !raw.is_empty() => Some(parse_date(raw)?),
        _ => None,
    };
    let category = context.entry_category(category)?;
    let index = context.ledger.record(amount, description, &category, date)?;
    report_added(context, index);
    Ok(())
}

fn add_interactive(context: &mut ShellContext) -> CommandResult {
    let amount = context.ask_amount("Amount")?;
    let description = io::prompt_text(context.theme(), "Description")?;
    let date = context.ask_date("Date (YYYY-MM-DD, blank for today)")?;
    let category = context.ask_category()?;
    let index = context
        .ledger
        .record(amount, &description, &category, Some(date))?;
    report_added(context, index);
    Ok(())
}

fn report_added(context: &ShellContext, index: usize) {
    if let Ok(expense) = context.ledger.expense(index) {
        io::print_success(format!(
            "Expense #{} added: {} {} ({})",
            index + 1,
            context.format_amount(expense.amount),
            expense.description,
            expense.category
        ));
    }
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.mode() == CliMode::Interactive && args.is_empty() {
        return edit_interactive(context);
    }

    let [position, field, value @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", EDIT_USAGE)));
    };
    if value.is_empty() {
        return Err(CommandError::InvalidArguments(format!("usage: {}", EDIT_USAGE)));
    }
    let index = parse_position(position)?;
    let value = value.join(" ");
    apply_edit(context, index, field, &value)
}

fn edit_interactive(context: &mut ShellContext) -> CommandResult {
    let Some(index) = context.select_expense("Select an expense to edit")? else {
        return Ok(());
    };
    let labels: Vec<&str> = ExpenseField::ALL.iter().map(|field| field.label()).collect();
    let Some(choice) = io::select_index(context.theme(), "Field to change", &labels)? else {
        return Ok(());
    };
    let field = ExpenseField::ALL[choice];
    let current = field.current_value(context.ledger.expense(index)?);
    let value = io::prompt_text_with_initial(context.theme(), field.label(), &current)?;
    apply_edit(context, index, field.label(), &value)
}

fn apply_edit(context: &mut ShellContext, index: usize, field: &str, value: &str) -> CommandResult {
    // Bad positions are reported before bad field names.
    context.ledger.expense(index)?;
    let parsed = ExpenseField::from_str(field)?;
    let value = match parsed {
        ExpenseField::Category => context.entry_category(value)?,
        _ => value.to_string(),
    };
    context.ledger.edit_field(index, parsed.label(), &value)?;
    io::print_success(format!("Expense #{} updated ({}).", index + 1, parsed));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = match args {
        [position] => parse_position(position)?,
        [] if context.mode() == CliMode::Interactive => {
            let Some(index) = context.select_expense("Select an expense to delete")? else {
                return Ok(());
            };
            let expense = context.ledger.expense(index)?;
            let question = format!("Delete #{} {}?", index + 1, expense);
            if !io::confirm_action(context.theme(), &question, false)? {
                io::print_info("Nothing deleted.");
                return Ok(());
            }
            index
        }
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {}",
                DELETE_USAGE
            )))
        }
    };

    let removed = context.ledger.delete_expense(index)?;
    io::print_success(format!(
        "Deleted expense #{}: {} {}",
        index + 1,
        context.format_amount(removed.amount),
        removed.description
    ));
    Ok(())
}
