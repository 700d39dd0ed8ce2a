//! Horizontal bar chart of category totals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::formatting::{format_amount, format_share, round_half_up};
use super::table::visible_width;
use crate::config::CHART_WIDTH_RANGE;
use crate::ledger::Summary;

/// Bar width used when the terminal size cannot be read.
const FALLBACK_BAR_WIDTH: usize = 40;

pub struct BarChart<'a> {
    summary: &'a Summary,
    currency_symbol: &'a str,
    plain: bool,
}

impl<'a> BarChart<'a> {
    pub fn new(summary: &'a Summary, currency_symbol: &'a str, plain: bool) -> Self {
        Self {
            summary,
            currency_symbol,
            plain,
        }
    }

    fn label_width(&self) -> usize {
        self.summary
            .categories
            .iter()
            .map(|row| visible_width(&row.category))
            .max()
            .unwrap_or(0)
    }

    /// Bar area left once labels and amounts are laid out on a line of
    /// `columns` characters.
    pub fn bar_width_for(&self, columns: usize) -> usize {
        let amount_width = self
            .summary
            .categories
            .iter()
            .map(|row| visible_width(&format_amount(self.currency_symbol, row.total)))
            .max()
            .unwrap_or(0);
        let reserved = self.label_width() + amount_width + 4;
        let (min, max) = CHART_WIDTH_RANGE;
        columns
            .saturating_sub(reserved)
            .clamp(usize::from(min), usize::from(max))
    }

    /// Renders one bar per category, longest for the largest total.
    pub fn render(&self, bar_width: usize) -> String {
        let label_width = self.label_width();
        let peak = self
            .summary
            .categories
            .iter()
            .map(|row| row.total)
            .max()
            .unwrap_or(Decimal::ZERO);
        let glyph = if self.plain { "#" } else { "█" };

        self.summary
            .categories
            .iter()
            .map(|row| {
                let length = bar_length(row.total, peak, bar_width);
                let pad = label_width.saturating_sub(visible_width(&row.category));
                format!(
                    "{}{} | {} {}",
                    row.category,
                    " ".repeat(pad),
                    glyph.repeat(length),
                    format_amount(self.currency_symbol, row.total)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One `category: share` line per category.
    pub fn distribution(&self) -> Vec<String> {
        self.summary
            .categories
            .iter()
            .map(|row| format!("{}: {}", row.category, format_share(self.summary.share(row))))
            .collect()
    }
}

/// Bar area width: the configured value, else derived from the terminal.
/// Either way the result stays within `CHART_WIDTH_RANGE`.
pub fn resolve_bar_width(chart: &BarChart<'_>, configured: Option<u16>) -> usize {
    if let Some(width) = configured {
        let (min, max) = CHART_WIDTH_RANGE;
        return usize::from(width.clamp(min, max));
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) => chart.bar_width_for(usize::from(columns)),
        Err(_) => FALLBACK_BAR_WIDTH,
    }
}

fn bar_length(value: Decimal, peak: Decimal, width: usize) -> usize {
    if peak.is_zero() || value.is_zero() {
        return 0;
    }
    // Ratio first: `value <= peak`, so the product never exceeds `width`.
    let scaled = round_half_up(value / peak * Decimal::from(width), 0);
    scaled.to_usize().unwrap_or(width).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use rust_decimal_macros::dec;

    fn summary() -> Summary {
        let mut ledger = Ledger::new();
        ledger.add_expense("50", "Market", "Groceries", "").unwrap();
        ledger.add_expense("30", "Bakery", "Groceries", "").unwrap();
        ledger.add_expense("20", "Cinema", "Fun", "").unwrap();
        ledger.summarize().unwrap()
    }

    #[test]
    fn bars_scale_to_the_largest_total() {
        let summary = summary();
        let chart = BarChart::new(&summary, "$", true);
        let rendered = chart.render(20);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], format!("Groceries | {} $80.00", "#".repeat(20)));
        assert_eq!(lines[1], format!("Fun       | {} $20.00", "#".repeat(5)));
    }

    #[test]
    fn distribution_uses_one_decimal() {
        let summary = summary();
        let chart = BarChart::new(&summary, "$", true);
        assert_eq!(chart.distribution(), vec!["Groceries: 80.0%", "Fun: 20.0%"]);
    }

    #[test]
    fn small_values_still_get_a_bar() {
        assert_eq!(bar_length(dec!(0.01), dec!(1000), 40), 1);
        assert_eq!(bar_length(dec!(0), dec!(1000), 40), 0);
    }

    #[test]
    fn bar_width_respects_bounds() {
        let summary = summary();
        let chart = BarChart::new(&summary, "$", true);
        // label 9 + amount 6 + 4 reserved
        assert_eq!(chart.bar_width_for(80), 61);
        assert_eq!(chart.bar_width_for(20), 10);
    }

    #[test]
    fn configured_width_is_clamped() {
        let summary = summary();
        let chart = BarChart::new(&summary, "$", true);
        assert_eq!(resolve_bar_width(&chart, Some(0)), 10);
        assert_eq!(resolve_bar_width(&chart, Some(u16::MAX)), 200);
        assert_eq!(resolve_bar_width(&chart, Some(35)), 35);
    }

    #[test]
    fn huge_totals_scale_without_overflow() {
        let peak = dec!(70000000000000000000000000000);
        assert_eq!(bar_length(peak, peak, 200), 200);
        assert_eq!(bar_length(dec!(35000000000000000000000000000), peak, 200), 100);
    }
}
