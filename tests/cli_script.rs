use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use tempfile::{tempdir, TempDir};

fn tracker(home: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("expense_tracker")?;
    cmd.env("EXPENSE_TRACKER_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home.path())
        .env_remove("RUST_LOG");
    Ok(cmd)
}

const SAMPLE: &str = "add 50 Market Groceries\n\
                      add 30 Bakery Groceries 2024-05-01\n\
                      add 20 \"Cinema night\" Entertainment\n";

#[test]
fn script_mode_adds_lists_and_summarizes() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin(format!("{SAMPLE}list\nsummary\nexit\n"))
        .assert()
        .success()
        .stdout(
            contains("Expense #1 added")
                .and(contains("Cinema night"))
                .and(contains("2024-05-01"))
                .and(contains("Total spending: $100.00"))
                .and(contains("Highest spending category: Groceries ($80.00)"))
                .and(contains("Lowest spending category: Entertainment ($20.00)"))
                .and(contains("Highest expense: #1 Market ($50.00)")),
        );
    Ok(())
}

#[test]
fn chart_shows_distribution() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin(format!("{SAMPLE}config set chart_width 20\n6\n"))
        .assert()
        .success()
        .stdout(
            contains("Spending by category")
                .and(contains("Groceries: 80.0%"))
                .and(contains("Entertainment: 20.0%")),
        );
    Ok(())
}

#[test]
fn export_writes_csv_file() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    let target = home.path().join("report.csv");
    tracker(&home)?
        .write_stdin(format!("{SAMPLE}export \"{}\"\n", target.display()))
        .assert()
        .success()
        .stdout(contains("Exported 3 expense(s)"));

    let csv = std::fs::read_to_string(&target)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Description,Amount,Category");
    assert_eq!(lines[2], "2024-05-01,Bakery,30,Groceries");
    assert_eq!(lines.len(), 4);
    Ok(())
}

#[test]
fn errors_are_reported_and_session_continues() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin("summary\nexport\nadd abc Thing Other\ndelete 3\nlsit\nadd 5 Snack Garden\nlist\n")
        .assert()
        .success()
        .stdout(
            contains("No expenses recorded yet")
                .and(contains("amount `abc` is not a number"))
                .and(contains("No expense #3 (ledger holds 0)"))
                .and(contains("Suggestion: `list`?"))
                .and(contains("Unknown category `Garden`; recorded as `Other`."))
                .and(contains("Snack")),
        );
    Ok(())
}

#[test]
fn preferences_persist_between_sessions() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin(
            "config set currency_symbol EUR\nconfig set fallback_category Misc\nconfig set fallback_category bills\n",
        )
        .assert()
        .success()
        .stdout(contains("fallback_category must be one of"));

    tracker(&home)?
        .write_stdin("add 7 Stamps Postage\nlist\nconfig show\n")
        .assert()
        .success()
        .stdout(
            contains("EUR7.00")
                .and(contains("recorded as `Bills`"))
                .and(contains("fallback_category")),
        );
    Ok(())
}

#[test]
fn custom_categories_are_accepted_after_adding() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin("category add Gifts\ncategory add gifts\nadd 25 Flowers gifts\ncategory list\ncategory remove Bills\n")
        .assert()
        .success()
        .stdout(
            contains("Category `Gifts` added.")
                .and(contains("Invalid or duplicate category `gifts`"))
                .and(contains("(Gifts)"))
                .and(contains("Gifts (custom)"))
                .and(contains("Category `Bills` is not a custom category")),
        );
    Ok(())
}

#[test]
fn help_and_version_are_available() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    tracker(&home)?
        .write_stdin("help\nhelp add\nversion\nmenu\n")
        .assert()
        .success()
        .stdout(
            contains("Available commands")
                .and(contains("Usage: add <amount> <description> <category> [YYYY-MM-DD]"))
                .and(contains("Expense Tracker 0.1.0"))
                .and(contains("1. Add expense")),
        );
    Ok(())
}
