use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandRegistry;

/// Numbered main menu: shortcut, command, label.
pub const MAIN_MENU: [(&str, &str, &str); 10] = [
    ("1", "add", "Add expense"),
    ("2", "list", "View expenses"),
    ("3", "edit", "Edit expense"),
    ("4", "delete", "Delete expense"),
    ("5", "summary", "Category summary"),
    ("6", "chart", "Spending chart"),
    ("7", "export", "Export to CSV"),
    ("8", "category", "Manage categories"),
    ("9", "config", "Preferences"),
    ("0", "exit", "Exit"),
];

pub(crate) fn register_shortcuts(registry: &mut CommandRegistry) {
    for (shortcut, command, _) in MAIN_MENU {
        registry.register_shortcut(shortcut, command);
    }
}

pub fn print_menu() {
    section("Expense Tracker");
    for (shortcut, command, label) in MAIN_MENU {
        io::print_info(format!("  {}. {:<18} ({})", shortcut, label, command));
    }
    io::print_info("Type a number or a command; `help` lists every command.");
}
