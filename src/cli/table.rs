use crate::{currency::CurrencyFormat, domain::Transaction};

const HEADERS: [&str; 6] = ["ID", "DATE", "TYPE", "CATEGORY", "AMOUNT", "NOTE"];

/// Right-aligned columns (id and amount); the rest are left-aligned.
const RIGHT_ALIGNED: [bool; 6] = [true, false, false, false, true, false];

/// Renders the transaction table for the current view.
pub fn render_transactions(rows: &[&Transaction], currency: &CurrencyFormat) -> String {
    if rows.is_empty() {
        return "No transactions yet".to_string();
    }

    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                t.date.to_string(),
                t.kind.label().to_string(),
                t.category.clone(),
                currency.format(t.amount),
                t.note.clone(),
            ]
        })
        .collect();

    let widths = compute_widths(&cells);
    let mut out = String::new();
    out.push_str(&render_row(&HEADERS.map(String::from), &widths));
    out.push('\n');
    out.push_str(&horizontal_rule(&widths));
    for row in &cells {
        out.push('\n');
        out.push_str(&render_row(row, &widths));
    }
    out
}

fn compute_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }
    widths
}

fn render_row(row: &[String; 6], widths: &[usize; 6]) -> String {
    let rendered: Vec<String> = row
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if RIGHT_ALIGNED[idx] {
                format!("{:>width$}", cell, width = widths[idx])
            } else {
                format!("{:<width$}", cell, width = widths[idx])
            }
        })
        .collect();
    rendered.join("  ").trim_end().to_string()
}

fn horizontal_rule(widths: &[usize; 6]) -> String {
    let total: usize = widths.iter().sum::<usize>() + (widths.len() - 1) * 2;
    "-".repeat(total)
}
