use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ACTIONS: [(&str, &str); 3] = [
    ("list", "List categories"),
    ("add", "Add a custom category"),
    ("remove", "Remove a custom category"),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List, add, or remove categories",
        "category <list|add <name>|remove <name>>",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.mode() == CliMode::Interactive && args.is_empty() {
        return run_category_menu(context);
    }

    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: category <list|add <name>|remove <name>>".into(),
        ));
    };
    dispatch_category_action(context, action, rest)
}

fn run_category_menu(context: &mut ShellContext) -> CommandResult {
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let Some(choice) = io::select_index(context.theme(), "Categories", &labels)? else {
        return Ok(());
    };
    dispatch_category_action(context, ACTIONS[choice].0, &[])
}

fn dispatch_category_action(
    context: &mut ShellContext,
    action: &str,
    args: &[&str],
) -> CommandResult {
    match action.to_lowercase().as_str() {
        "list" => handle_list(context),
        "add" => handle_add(context, args),
        "remove" => handle_remove(context, args),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn handle_list(context: &ShellContext) -> CommandResult {
    let categories = context.ledger.categories();
    output::section("Categories");
    for (idx, label) in categories.iter().enumerate() {
        let marker = if categories.is_custom(label) {
            " (custom)"
        } else {
            ""
        };
        io::print_info(format!("  {:>2}. {}{}", idx + 1, label, marker));
    }
    Ok(())
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if args.is_empty() && context.mode() == CliMode::Interactive {
        io::prompt_text(context.theme(), "New category name")?
    } else {
        args.join(" ")
    };
    let label = context.ledger.add_category(&name)?;
    io::print_success(format!("Category `{}` added.", label));
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if args.is_empty() && context.mode() == CliMode::Interactive {
        let custom = context.ledger.categories().custom().to_vec();
        if custom.is_empty() {
            io::print_info("There are no custom categories to remove.");
            return Ok(());
        }
        match io::select_index(context.theme(), "Category to remove", &custom)? {
            Some(idx) => custom[idx].clone(),
            None => return Ok(()),
        }
    } else if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: category remove <name>".into(),
        ));
    } else {
        args.join(" ")
    };
    let label = context.ledger.remove_category(&name)?;
    io::print_success(format!("Category `{}` removed.", label));
    Ok(())
}
