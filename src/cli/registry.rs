use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands known to the shell, in registration order, plus the menu
/// shortcuts that point at them.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
    shortcuts: HashMap<&'static str, &'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`; a later entry with the same name replaces the earlier
    /// one but keeps its position.
    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    /// Makes `shortcut` (a menu number) run the command `target`.
    pub fn register_shortcut(&mut self, shortcut: &'static str, target: &'static str) {
        self.shortcuts.insert(shortcut, target);
    }

    /// Looks a command up by name or by menu shortcut.
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        let name = self.shortcuts.get(input).copied().unwrap_or(input);
        self.commands.get(name)
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, input: &str) -> Option<CommandHandler> {
        self.resolve(input).map(|entry| entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn shortcuts_resolve_to_commands() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("add", "Add", "add", noop));
        registry.register(CommandEntry::new("list", "List", "list", noop));
        registry.register_shortcut("1", "add");

        assert_eq!(registry.resolve("1").map(|entry| entry.name), Some("add"));
        assert_eq!(registry.resolve("list").map(|entry| entry.name), Some("list"));
        assert!(registry.resolve("2").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["add", "list"]);
    }
}
