use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// ASCII only, no colours or symbols.
    pub plain_mode: bool,
    /// Bold instead of coloured emphasis.
    pub high_contrast_mode: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_output,
            high_contrast_mode: config.high_contrast,
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

pub fn apply_config(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
}

fn label(kind: MessageKind, prefs: &OutputPreferences) -> &'static str {
    match (kind, prefs.plain_mode) {
        (MessageKind::Success, false) => "✔",
        (MessageKind::Success, true) => "OK:",
        (MessageKind::Warning, false) => "⚠",
        (MessageKind::Warning, true) => "WARNING:",
        (MessageKind::Error, false) => "✖",
        (MessageKind::Error, true) => "ERROR:",
        (MessageKind::Hint, _) => "hint:",
        (MessageKind::Info | MessageKind::Section, _) => "",
    }
}

/// Formats `message` the way [`print`] would, without writing it.
pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        _ => format!("{} {}", label(kind, prefs), text),
    };

    if prefs.plain_mode || matches!(kind, MessageKind::Info) {
        return base;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Hint => base,
            _ => base.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = styled(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn blank_line() {
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_ascii_labels() {
        let prefs = OutputPreferences {
            plain_mode: true,
            high_contrast_mode: false,
        };
        assert_eq!(
            styled(MessageKind::Warning, "careful", &prefs),
            "WARNING: careful"
        );
        assert_eq!(styled(MessageKind::Section, " Summary ", &prefs), "=== Summary ===");
        assert_eq!(styled(MessageKind::Info, "plain", &prefs), "plain");
    }

    #[test]
    fn styled_output_keeps_message_text() {
        let prefs = OutputPreferences::default();
        let text = styled(MessageKind::Success, "Expense added", &prefs);
        assert!(text.contains("✔ Expense added"));
    }
}
