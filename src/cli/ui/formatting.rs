use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `places` decimals, halves away from zero.
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency amount with two decimals, e.g. `$12.50`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, round_half_up(amount, 2))
}

/// Percentage with one decimal, e.g. `80.0%`.
pub fn format_share(share: Decimal) -> String {
    format!("{:.1}%", round_half_up(share, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount("$", dec!(50)), "$50.00");
        assert_eq!(format_amount("€", dec!(12.345)), "€12.35");
        assert_eq!(format_amount("", dec!(0.1)), "0.10");
    }

    #[test]
    fn shares_render_with_one_decimal() {
        assert_eq!(format_share(dec!(80)), "80.0%");
        assert_eq!(format_share(dec!(33.3333)), "33.3%");
        assert_eq!(format_share(dec!(66.66667)), "66.7%");
    }
}
