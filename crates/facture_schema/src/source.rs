//! Data-access seam for the worklist
//!
//! The cockpit never hardcodes where records come from. It takes an
//! [`InvoiceSource`], loads once at startup and again on an explicit
//! refresh. Production wires in [`crate::SeedInvoices`]; tests inject
//! their own fixtures.

use thiserror::Error;

use crate::invoice::Invoice;

/// Supplies the read-only worklist the cockpit operates on.
pub trait InvoiceSource: Send + Sync {
    /// Load the full worklist. Called at startup and on refresh.
    fn load(&self) -> Vec<Invoice>;
}

/// Lookup against a loaded worklist missed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invoice '{0}' is not in the worklist")]
pub struct UnknownInvoice(pub String);

/// Find a record by id in a loaded worklist.
pub fn find_invoice<'a>(invoices: &'a [Invoice], id: &str) -> Result<&'a Invoice, UnknownInvoice> {
    invoices
        .iter()
        .find(|invoice| invoice.id == id)
        .ok_or_else(|| UnknownInvoice(id.to_string()))
}
