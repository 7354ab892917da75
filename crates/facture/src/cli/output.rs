//! Output formatting utilities for CLI commands
//!
//! Provides consistent formatting for:
//! - Tables with column alignment
//! - Confidence and status colors
//! - Line item quantities and prices

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Color, ContentArrangement, Table};

use facture_schema::{ConfidenceTier, InvoiceStatus};

/// Print a table with headers and rows
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
}

/// Print a table with per-cell colors. Columns listed in `right_aligned`
/// get right alignment (amount columns).
pub fn print_table_colored(
    headers: &[&str],
    rows: Vec<Vec<(String, Option<Color>)>>,
    right_aligned: &[usize],
) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            let cell = Cell::new(h).fg(Color::Cyan);
            if right_aligned.contains(&idx) {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .into_iter()
            .enumerate()
            .map(|(idx, (text, color))| {
                let mut cell = Cell::new(text);
                if let Some(c) = color {
                    cell = cell.fg(c);
                }
                if right_aligned.contains(&idx) {
                    cell = cell.set_alignment(CellAlignment::Right);
                }
                cell
            })
            .collect();
        table.add_row(cells);
    }

    println!("{}", table);
}

/// Color for a confidence tier badge
pub fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => Color::Green,
        ConfidenceTier::Medium => Color::Yellow,
        ConfidenceTier::Low => Color::Red,
    }
}

/// Color for a worklist status badge. Rejected shares the warning color;
/// nothing in the workflow produces it yet.
pub fn status_color(status: InvoiceStatus) -> Color {
    match status {
        InvoiceStatus::Posted => Color::Green,
        InvoiceStatus::ReviewNeeded | InvoiceStatus::Rejected => Color::Yellow,
    }
}

/// Format a line item quantity: whole numbers without the decimal tail.
///
/// Examples:
/// - 10.0 -> "10"
/// - 2.5 -> "2.50"
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

/// Format a line item price or total with two decimals
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
