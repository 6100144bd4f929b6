use colored::Colorize;

use crate::{cli::output, core::reports::MonthlyFlow, currency::CurrencyFormat};

const BAR_WIDTH: usize = 40;

/// Draws one stacked bar per month, income then expense, scaled to the
/// largest month total.
pub fn render(flows: &[MonthlyFlow], currency: &CurrencyFormat) -> String {
    render_with(flows, currency, output::current_preferences().plain_mode)
}

fn render_with(flows: &[MonthlyFlow], currency: &CurrencyFormat, plain: bool) -> String {
    if flows.is_empty() {
        return "No data to chart yet".to_string();
    }

    let max_total = flows
        .iter()
        .map(MonthlyFlow::total)
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);

    let mut lines = Vec::with_capacity(flows.len());
    for flow in flows {
        let total = flow.total();
        let bar_len = scaled(total, max_total, BAR_WIDTH);
        let income_len = if total > 0.0 {
            scaled(flow.income, total, bar_len)
        } else {
            0
        };
        let expense_len = bar_len - income_len;

        let bar = if plain {
            format!("{}{}", "#".repeat(income_len), "-".repeat(expense_len))
        } else {
            format!(
                "{}{}",
                "█".repeat(income_len).bright_green(),
                "█".repeat(expense_len).bright_red()
            )
        };

        lines.push(format!(
            "{}  {:<width$}  income {} / expense {}",
            flow.month,
            bar,
            currency.format(flow.income),
            currency.format(flow.expense),
            width = BAR_WIDTH,
        ));
    }
    lines.join("\n")
}

fn scaled(value: f64, max: f64, width: usize) -> usize {
    ((value / max) * width as f64).round() as usize
}
