use crate::cli::io;
use crate::cli::menu::MAIN_MENU;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        let shortcut = shortcut_for(entry.name)
            .map(|key| format!("[{}]", key))
            .unwrap_or_default();
        io::print_info(format!("  {:<4}{:<10} {}", shortcut, entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
    if let Some(key) = shortcut_for(entry.name) {
        io::print_info(format!("  Menu: {}", key));
    }
}

fn shortcut_for(command: &str) -> Option<&'static str> {
    MAIN_MENU
        .iter()
        .find(|(_, name, _)| *name == command)
        .map(|(key, _, _)| *key)
}
