//! `facture worklist` - list the invoice queue
//!
//! Same records the TUI worklist shows, as a table or JSON for scripting.

use anyhow::Result;
use comfy_table::Color;

use facture_schema::{InvoiceSource, SeedInvoices};

use super::output::{print_table_colored, status_color};

/// Arguments for the worklist command
#[derive(Debug, clap::Args)]
pub struct WorklistArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

const HEADERS: &[&str] = &[
    "STATUS",
    "VENDOR",
    "INVOICE #",
    "DATE",
    "AMOUNT",
    "DIMENSIONS",
    "ACTION",
];

/// Column index of AMOUNT, kept right-aligned.
const AMOUNT_COLUMN: usize = 4;

pub fn run(args: WorklistArgs) -> Result<()> {
    let invoices = SeedInvoices.load();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&invoices)?);
        return Ok(());
    }

    let rows: Vec<Vec<(String, Option<Color>)>> = invoices
        .iter()
        .map(|invoice| {
            let action = if invoice.is_posted() { "" } else { "review" };
            vec![
                (
                    format!("{} {}", invoice.status.symbol(), invoice.status.as_str()),
                    Some(status_color(invoice.status)),
                ),
                (invoice.vendor.value.clone(), None),
                (invoice.invoice_number.value.clone(), None),
                (invoice.invoice_date.value.clone(), None),
                (invoice.total_amount.value.clone(), None),
                (invoice.dimensions_summary(), None),
                (action.to_string(), Some(Color::Cyan)),
            ]
        })
        .collect();

    print_table_colored(HEADERS, rows, &[AMOUNT_COLUMN]);

    let pending = invoices.iter().filter(|i| !i.is_posted()).count();
    println!();
    println!("{} records, {} awaiting review", invoices.len(), pending);

    Ok(())
}
