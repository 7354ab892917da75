//! Invoice worklist records and extraction confidence
//!
//! Core data model for the validation cockpit. Every value captured by the
//! upstream document-AI extractor arrives as a (value, confidence) pair, and
//! the whole record carries a worklist status.
//!
//! The confidence score is read through two independent lenses:
//!
//! 1. **Tier**: High / Medium / Low classification shown next to each field
//! 2. **Alert**: a separate, stricter threshold that drives the warning
//!    treatment on a field row
//!
//! The two cutoffs are deliberately distinct (0.90/0.70 vs 0.80) so a field
//! can sit in the Medium tier and still be flagged for attention.
//!
//! # Modules
//!
//! - [`invoice`]: record, field and line-item types plus the worklist status
//! - [`confidence`]: tier classification and alert threshold
//! - [`catalog`]: static GL account and cost center pick lists
//! - [`source`]: the data-access seam the cockpit loads records through
//! - [`seed`]: the built-in demo worklist

pub mod catalog;
pub mod confidence;
pub mod invoice;
pub mod seed;
pub mod source;

pub use confidence::ConfidenceTier;
pub use invoice::{ExtractedField, Invoice, InvoiceStatus, LineItem};
pub use seed::{seed_invoices, SeedInvoices};
pub use source::{find_invoice, InvoiceSource, UnknownInvoice};
