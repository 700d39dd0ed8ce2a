use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_EXPORT_FILE;
use crate::ledger::{DEFAULT_FALLBACK_CATEGORY, PREDEFINED_CATEGORIES};

/// Narrowest and widest bar area accepted for charts.
pub const CHART_WIDTH_RANGE: (u16, u16) = (10, 200);

/// User-configurable preferences for the tracker shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Label applied to expenses whose category is not in the set.
    #[serde(default = "Config::default_fallback_category")]
    pub fallback_category: String,
    #[serde(default = "Config::default_export_path")]
    pub export_path: PathBuf,
    /// Bar area width for charts; `None` follows the terminal width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_width: Option<u16>,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            fallback_category: Self::default_fallback_category(),
            export_path: Self::default_export_path(),
            chart_width: None,
            plain_output: false,
            high_contrast: false,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_fallback_category() -> String {
        DEFAULT_FALLBACK_CATEGORY.into()
    }

    pub fn default_export_path() -> PathBuf {
        PathBuf::from(DEFAULT_EXPORT_FILE)
    }

    /// Keys accepted by [`Config::set`], in display order.
    pub const KEYS: [&'static str; 6] = [
        "currency_symbol",
        "fallback_category",
        "export_path",
        "chart_width",
        "plain_output",
        "high_contrast",
    ];

    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "fallback_category" => {
                if value.is_empty() {
                    return Err("fallback_category must not be empty".into());
                }
                let label = predefined_label(value).ok_or_else(|| {
                    format!(
                        "fallback_category must be one of: {}",
                        PREDEFINED_CATEGORIES.join(", ")
                    )
                })?;
                self.fallback_category = label.to_string();
            }
            "export_path" => {
                self.export_path = if value.is_empty() {
                    Self::default_export_path()
                } else {
                    PathBuf::from(value)
                };
            }
            "chart_width" => {
                if value.is_empty() || value.eq_ignore_ascii_case("auto") {
                    self.chart_width = None;
                } else {
                    let (min, max) = CHART_WIDTH_RANGE;
                    let parsed: u16 = value
                        .parse()
                        .map_err(|_| format!("chart_width must be numeric ({min}-{max}) or `auto`"))?;
                    if !(min..=max).contains(&parsed) {
                        return Err(format!("chart_width must be between {min} and {max}"));
                    }
                    self.chart_width = Some(parsed);
                }
            }
            "plain_output" => self.plain_output = parse_switch(key, value)?,
            "high_contrast" => self.high_contrast = parse_switch(key, value)?,
            other => return Err(format!("unknown config key `{}`", other)),
        }
        Ok(())
    }

    /// Replaces values a hand-edited file may carry but `set` would refuse.
    /// Returns the keys that were reset.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let mut reset = Vec::new();
        match predefined_label(&self.fallback_category) {
            Some(label) => self.fallback_category = label.to_string(),
            None => {
                self.fallback_category = Self::default_fallback_category();
                reset.push("fallback_category");
            }
        }
        if let Some(width) = self.chart_width {
            let (min, max) = CHART_WIDTH_RANGE;
            let clamped = width.clamp(min, max);
            if clamped != width {
                self.chart_width = Some(clamped);
                reset.push("chart_width");
            }
        }
        reset
    }

    /// Current value of `key` as shown by `config show`.
    pub fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "currency_symbol" => self.currency_symbol.clone(),
            "fallback_category" => self.fallback_category.clone(),
            "export_path" => self.export_path.display().to_string(),
            "chart_width" => self
                .chart_width
                .map(|width| width.to_string())
                .unwrap_or_else(|| "auto".into()),
            "plain_output" => on_off(self.plain_output).into(),
            "high_contrast" => on_off(self.high_contrast).into(),
            _ => return None,
        };
        Some(value)
    }
}

fn predefined_label(value: &str) -> Option<&'static str> {
    let value = value.trim();
    PREDEFINED_CATEGORIES
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(value))
}

fn parse_switch(key: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(format!("{} expects on/off", key.trim())),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
