use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{chart, format_share, BarChart, Table, TableColumn};
use crate::export::export_to_path;

const DESCRIPTION_WIDTH: usize = 32;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show every recorded expense", "list", cmd_list),
        CommandEntry::new(
            "summary",
            "Category totals, averages, and extremes",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Bar chart and distribution of spending by category",
            "chart",
            cmd_chart,
        ),
        CommandEntry::new(
            "export",
            "Write expenses to a CSV file",
            "export [path]",
            cmd_export,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.ledger.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Date"),
        TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
        TableColumn::right("Amount"),
        TableColumn::left("Category"),
    ]);
    for (idx, expense) in context.ledger.list_expenses().iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            expense.date_label(),
            expense.description.clone(),
            context.format_amount(expense.amount),
            expense.category.clone(),
        ]);
    }

    output::section("Expenses");
    io::print_info(table.render());
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.ledger.summarize()?;

    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Count"),
        TableColumn::right("Total"),
        TableColumn::right("Average"),
        TableColumn::right("Share"),
    ]);
    for row in &summary.categories {
        table.push_row(vec![
            row.category.clone(),
            row.count.to_string(),
            context.format_amount(row.total),
            context.format_amount(row.average),
            format_share(summary.share(row)),
        ]);
    }

    output::section("Summary");
    io::print_info(table.render());
    output::blank_line();

    let category_total = |name: &str| {
        summary
            .category_total(name)
            .map(|total| context.format_amount(total))
            .unwrap_or_default()
    };
    io::print_info(format!(
        "Total spending: {}",
        context.format_amount(summary.total)
    ));
    io::print_info(format!(
        "Highest spending category: {} ({})",
        summary.highest_category,
        category_total(&summary.highest_category)
    ));
    io::print_info(format!(
        "Lowest spending category: {} ({})",
        summary.lowest_category,
        category_total(&summary.lowest_category)
    ));
    for (label, ranked) in [
        ("Highest expense", &summary.highest_expense),
        ("Lowest expense", &summary.lowest_expense),
    ] {
        io::print_info(format!(
            "{}: #{} {} ({})",
            label,
            ranked.index + 1,
            ranked.expense.description,
            context.format_amount(ranked.expense.amount)
        ));
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.ledger.summarize()?;
    let plain = output::current_preferences().plain_mode;
    let chart = BarChart::new(&summary, &context.config.currency_symbol, plain);
    let width = chart::resolve_bar_width(&chart, context.config.chart_width);

    output::section("Spending by category");
    io::print_info(chart.render(width));
    output::section("Distribution");
    for line in chart.distribution() {
        io::print_info(format!("  {}", line));
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args {
        [] => context.config.export_path.clone(),
        [path] => PathBuf::from(path),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: export [path]".into(),
            ))
        }
    };
    let rows = export_to_path(&path, &context.ledger)?;
    io::print_success(format!(
        "Exported {} expense(s) to {}",
        rows,
        path.display()
    ));
    Ok(())
}
