//! Dispatch, error reporting, and the prompting helpers shared by commands.

use std::io;

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use rust_decimal::Decimal;
use strsim::levenshtein;
use tracing::debug;

use crate::{
    config::{Config, ConfigManager},
    errors::{ConfigError, ExportError, LedgerError},
    ledger::{parse_amount, parse_date, CategoryMatch, Ledger},
};

pub use crate::errors::CliError;
pub use crate::cli::shell_context::{CliMode, ShellContext};

use super::commands;
use super::io as cli_io;
use super::menu;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::ui::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    /// Builds a session whose preferences live under the standard location.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::apply_config(&config);

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        menu::register_shortcuts(&mut registry);

        debug!(path = %config_manager.config_path().display(), ?mode, "shell context ready");
        Ok(Self {
            mode,
            registry,
            ledger: Ledger::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn prompt(&self) -> String {
        format!("expenses [{}]> ", self.ledger.len())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.resolve(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit the expense tracker?", false)
            .map_err(|err| CliError::Terminal(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        debug!(error = %err, "command failed");
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(LedgerError::EmptyLedger)
            | CommandError::Export(ExportError::Ledger(LedgerError::EmptyLedger)) => {
                cli_io::print_error(LedgerError::EmptyLedger);
                cli_io::print_hint("Record an expense with `add` first.");
            }
            CommandError::Ledger(err @ LedgerError::ExpenseNotFound { .. }) => {
                cli_io::print_error(err);
                cli_io::print_hint("Use `list` to see expense numbers.");
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    pub(crate) fn format_amount(&self, amount: Decimal) -> String {
        format_amount(&self.config.currency_symbol, amount)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::apply_config(&self.config);
        Ok(())
    }

    /// Turns a typed category into the label to store.
    ///
    /// Known names map to their canonical spelling. Unknown names are offered
    /// as a new custom category in interactive mode; declining, or running a
    /// script, stores the fallback label instead.
    pub(crate) fn entry_category(&mut self, input: &str) -> Result<String, CommandError> {
        match self.ledger.resolve_category(input) {
            CategoryMatch::Known(label) => Ok(label),
            CategoryMatch::Unknown(name) if name.is_empty() => {
                Err(CommandError::InvalidArguments("category must not be empty".into()))
            }
            CategoryMatch::Unknown(name) => {
                let fallback = self.config.fallback_category.clone();
                if self.mode == CliMode::Interactive {
                    let question = format!("`{}` is not a category. Add new category?", name);
                    if cli_io::confirm_action(&self.theme, &question, true)? {
                        let label = self.ledger.add_category(&name)?;
                        cli_io::print_success(format!("Category `{}` added.", label));
                        return Ok(label);
                    }
                    cli_io::print_info(format!("Using `{}` instead.", fallback));
                } else {
                    cli_io::print_warning(format!(
                        "Unknown category `{}`; recorded as `{}`.",
                        name, fallback
                    ));
                }
                Ok(fallback)
            }
        }
    }

    /// Asks until the answer parses as a positive amount.
    pub(crate) fn ask_amount(&self, prompt: &str) -> Result<Decimal, CommandError> {
        loop {
            let raw = cli_io::prompt_text(&self.theme, prompt)?;
            match parse_amount(&raw) {
                Ok(amount) => return Ok(amount),
                Err(err) => cli_io::print_warning(err),
            }
        }
    }

    /// Asks for a date; a blank answer means today.
    pub(crate) fn ask_date(&self, prompt: &str) -> Result<NaiveDate, CommandError> {
        loop {
            let raw = cli_io::prompt_text(&self.theme, prompt)?;
            if raw.trim().is_empty() {
                return Ok(Local::now().date_naive());
            }
            match parse_date(&raw) {
                Ok(date) => return Ok(date),
                Err(err) => cli_io::print_warning(err),
            }
        }
    }

    /// Lets the user pick a category by number or by typing a name.
    pub(crate) fn ask_category(&mut self) -> Result<String, CommandError> {
        let labels: Vec<String> = self.ledger.categories().iter().map(str::to_string).collect();
        for (idx, label) in labels.iter().enumerate() {
            cli_io::print_info(format!("  {:>2}. {}", idx + 1, label));
        }
        loop {
            let raw = cli_io::prompt_text(&self.theme, "Category (number or name)")?;
            let choice = raw.trim();
            if choice.is_empty() {
                cli_io::print_warning("Pick a category.");
                continue;
            }
            if let Ok(number) = choice.parse::<usize>() {
                match labels.get(number.wrapping_sub(1)) {
                    Some(label) => return Ok(label.clone()),
                    None => {
                        cli_io::print_warning(format!("Choose 1-{}.", labels.len()));
                        continue;
                    }
                }
            }
            return self.entry_category(choice);
        }
    }

    /// Lets the user pick an expense; `None` when the prompt is dismissed.
    pub(crate) fn select_expense(&self, prompt: &str) -> Result<Option<usize>, CommandError> {
        if self.ledger.is_empty() {
            return Err(LedgerError::EmptyLedger.into());
        }
        let items: Vec<String> = self
            .ledger
            .list_expenses()
            .iter()
            .enumerate()
            .map(|(idx, expense)| format!("#{} {}", idx + 1, expense))
            .collect();
        cli_io::select_index(&self.theme, prompt, &items)
    }
}

/// Converts a one-based expense number typed by the user to an index.
pub(crate) fn parse_position(raw: &str) -> Result<usize, CommandError> {
    let number: usize = raw.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!("expense number `{}` must be numeric", raw.trim()))
    })?;
    number
        .checked_sub(1)
        .ok_or_else(|| CommandError::InvalidArguments("expense numbers start at 1".into()))
}

pub(crate) fn config_snapshot(config: &Config) -> Vec<(&'static str, String)> {
    Config::KEYS
        .iter()
        .filter_map(|key| config.display_value(key).map(|value| (*key, value)))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[cfg(test)]
pub(crate) fn process_script(context: &mut ShellContext, lines: &[&str]) -> Result<(), CliError> {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}
