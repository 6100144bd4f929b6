//! Currency formatting for ledger amounts.

use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences for monetary values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Maps an ISO 4217 code to a display symbol; unknown codes render as the
    /// code followed by a space.
    pub fn for_currency(code: &str) -> Self {
        let symbol = match code.to_ascii_uppercase().as_str() {
            "USD" | "CAD" | "AUD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" => "¥".to_string(),
            other => format!("{} ", other),
        };
        Self {
            symbol,
            ..Self::default()
        }
    }

    /// Renders an amount with two decimals and thousands grouping, e.g.
    /// `$1,234.56`; negatives render as `-$45.20`.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format_plain(amount);
        }
        let negative = amount < 0.0;
        let rounded = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = rounded
            .split_once('.')
            .unwrap_or((rounded.as_str(), "00"));
        let grouped = group_digits(int_part, self.grouping_separator);
        let sign = if negative { "-" } else { "" };
        format!(
            "{sign}{}{grouped}{}{frac_part}",
            self.symbol, self.decimal_separator
        )
    }
}

/// Fixed two-decimal `$`-prefixed fallback, no grouping.
pub fn format_plain(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
