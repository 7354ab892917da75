//! Built-in demo worklist
//!
//! Three records shaped like real extractor output: one messy scan with
//! shaky coding fields and line items, one clean digital invoice with no
//! line detail, and one record that already went through posting.

use crate::invoice::{ExtractedField, Invoice, InvoiceStatus, LineItem};
use crate::source::InvoiceSource;

/// The default [`InvoiceSource`]: serves [`seed_invoices`] on every load.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedInvoices;

impl InvoiceSource for SeedInvoices {
    fn load(&self) -> Vec<Invoice> {
        seed_invoices()
    }
}

fn field(value: &str, confidence: f64) -> ExtractedField {
    ExtractedField::new(value, confidence)
}

/// The static demo records, in worklist order.
pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-2024-001".to_string(),
            status: InvoiceStatus::ReviewNeeded,
            vendor: field("Acme Corp Services", 0.98),
            invoice_date: field("2024-12-12", 0.65),
            invoice_number: field("AC-99283", 0.95),
            total_amount: field("1,250.00", 0.99),
            currency: "USD".to_string(),
            gl_account: field("600100 - Office Supplies", 0.40),
            company_code: field("1000", 0.99),
            cost_center: field("CC-IT-001", 0.85),
            profit_center: field("PC-US-EAST", 0.70),
            line_items: vec![
                LineItem::new("Consulting Services - Q4", 10.0, 120.0, 1200.0),
                LineItem::new("Travel Expenses", 1.0, 50.0, 50.0),
            ],
        },
        Invoice {
            id: "INV-2024-002".to_string(),
            status: InvoiceStatus::ReviewNeeded,
            vendor: field("TechStart Logistics", 0.92),
            invoice_date: field("2024-12-10", 0.95),
            invoice_number: field("TS-2201", 0.98),
            total_amount: field("4,500.00", 0.92),
            currency: "USD".to_string(),
            gl_account: field("600300 - Travel & Entertainment", 0.90),
            company_code: field("1000", 0.99),
            cost_center: field("CC-OPS-002", 0.91),
            profit_center: field("PC-US-WEST", 0.88),
            line_items: Vec::new(),
        },
        Invoice {
            id: "INV-2024-003".to_string(),
            status: InvoiceStatus::Posted,
            vendor: field("Globex Internet", 0.99),
            invoice_date: field("2024-12-01", 0.99),
            invoice_number: field("GL-883", 0.99),
            total_amount: field("120.00", 0.99),
            currency: "USD".to_string(),
            gl_account: field("600500 - Utilities", 0.99),
            company_code: field("2000", 0.99),
            cost_center: field("CC-HQ-001", 0.99),
            profit_center: field("PC-GLOBAL", 0.99),
            line_items: Vec::new(),
        },
    ]
}
