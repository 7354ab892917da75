//! `facture show <ID>` - one record with per-field extraction confidence
//!
//! Field rows carry the tier badge plus an alert marker for scores below
//! the warning threshold, mirroring the cockpit form.

use anyhow::{Context, Result};
use comfy_table::Color;

use facture_schema::{confidence, find_invoice, InvoiceSource, SeedInvoices};

use super::output::{format_money, format_quantity, print_table_colored, tier_color};

/// Arguments for the show command
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Record id, e.g. INV-2024-001
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let invoices = SeedInvoices.load();
    let invoice = find_invoice(&invoices, &args.id).with_context(|| {
        format!(
            "cannot show '{}' (known ids: {})",
            args.id,
            invoices
                .iter()
                .map(|i| i.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    if args.json {
        let fields: Vec<serde_json::Value> = invoice
            .extracted_fields()
            .iter()
            .map(|(label, field)| {
                serde_json::json!({
                    "field": label,
                    "value": field.value,
                    "confidence": field.confidence,
                    "tier": field.tier(),
                    "percent": confidence::percent(field.confidence),
                    "alert": field.needs_alert(),
                })
            })
            .collect();
        let payload = serde_json::json!({
            "invoice": invoice,
            "fields": fields,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}  [{}]", invoice.id, invoice.status.as_str());
    println!();

    let rows: Vec<Vec<(String, Option<Color>)>> = invoice
        .extracted_fields()
        .iter()
        .map(|(label, field)| {
            let marker = if field.needs_alert() { "!" } else { "" };
            vec![
                (label.to_string(), None),
                (field.value.clone(), None),
                (
                    confidence::badge(field.confidence),
                    Some(tier_color(field.tier())),
                ),
                (marker.to_string(), Some(Color::Red)),
            ]
        })
        .collect();
    print_table_colored(&["FIELD", "VALUE", "CONFIDENCE", ""], rows, &[]);

    println!();
    println!("Currency: {}", invoice.currency);

    if invoice.line_items.is_empty() {
        println!("No line items extracted.");
    } else {
        println!();
        let rows: Vec<Vec<(String, Option<Color>)>> = invoice
            .line_items
            .iter()
            .map(|item| {
                vec![
                    (item.description.clone(), None),
                    (format_quantity(item.quantity), None),
                    (format_money(item.unit_price), None),
                    (format_money(item.line_total), None),
                ]
            })
            .collect();
        print_table_colored(
            &["DESCRIPTION", "QTY", "UNIT PRICE", "TOTAL"],
            rows,
            &[1, 2, 3],
        );
    }

    println!();
    println!(
        "Total: {} {}  [{}]",
        invoice.total_amount.value,
        invoice.currency,
        confidence::badge(invoice.total_amount.confidence)
    );

    Ok(())
}
