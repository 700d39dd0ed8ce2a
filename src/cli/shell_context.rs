use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    ledger::Ledger,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// Line editor plus dialoguer prompts for missing arguments.
    Interactive,
    /// Commands read from stdin; nothing is ever prompted.
    Script,
}

/// State shared by every command handler for one session.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, expenses: {}, last_command: {:?} }}",
            self.running,
            self.ledger.len(),
            self.last_command
        )
    }
}
