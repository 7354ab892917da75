//! Invoice records as extracted by the upstream document AI
//!
//! Every business value is an [`ExtractedField`]: the raw string the
//! extractor produced plus its confidence score. The cockpit edits the
//! string and leaves the score untouched, so the review styling keeps
//! reflecting extraction quality rather than user activity.

use serde::{Deserialize, Serialize};

use crate::confidence::{self, ConfidenceTier};

/// Worklist status of a record.
///
/// `Rejected` exists in the status vocabulary but no shipped action
/// produces it yet; see the Reject handling in the cockpit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[default]
    #[serde(rename = "Review Needed")]
    ReviewNeeded,
    Posted,
    Rejected,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::ReviewNeeded => "Review Needed",
            InvoiceStatus::Posted => "Posted",
            InvoiceStatus::Rejected => "Rejected",
        }
    }

    /// Single-cell marker for list rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            InvoiceStatus::Posted => "✓",
            InvoiceStatus::ReviewNeeded | InvoiceStatus::Rejected => "!",
        }
    }

    pub fn is_posted(&self) -> bool {
        matches!(self, InvoiceStatus::Posted)
    }
}

/// One extracted value with the confidence the extractor assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub value: String,
    pub confidence: f64,
}

impl ExtractedField {
    pub fn new(value: impl Into<String>, confidence: f64) -> Self {
        Self {
            value: value.into(),
            confidence,
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        confidence::classify(self.confidence)
    }

    pub fn needs_alert(&self) -> bool {
        confidence::needs_alert(self.confidence)
    }
}

/// A line on the source document. Quantities and prices come pre-parsed
/// from the extractor; totals are whatever it printed, not recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64, line_total: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            line_total,
        }
    }
}

/// One worklist record: identity, status, the extracted fields and the
/// document's line items. Amounts stay formatted strings end to end; this
/// layer never parses or validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub status: InvoiceStatus,
    pub vendor: ExtractedField,
    pub invoice_date: ExtractedField,
    pub invoice_number: ExtractedField,
    pub total_amount: ExtractedField,
    pub currency: String,
    pub gl_account: ExtractedField,
    pub company_code: ExtractedField,
    pub cost_center: ExtractedField,
    pub profit_center: ExtractedField,
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Cost center code without its catalog description, i.e. the part
    /// before the first `" - "` delimiter. Values without the delimiter
    /// pass through whole.
    pub fn cost_center_code(&self) -> &str {
        let value = self.cost_center.value.as_str();
        match value.find(" - ") {
            Some(idx) => &value[..idx],
            None => value,
        }
    }

    /// Compact coding summary for list rows: company code plus cost
    /// center code.
    pub fn dimensions_summary(&self) -> String {
        format!("Co: {} CC: {}", self.company_code.value, self.cost_center_code())
    }

    pub fn is_posted(&self) -> bool {
        self.status.is_posted()
    }

    /// Extracted fields with their display labels, in review order.
    pub fn extracted_fields(&self) -> Vec<(&'static str, &ExtractedField)> {
        vec![
            ("Vendor", &self.vendor),
            ("Invoice Date", &self.invoice_date),
            ("Invoice Number", &self.invoice_number),
            ("Total Amount", &self.total_amount),
            ("Company Code", &self.company_code),
            ("Cost Center", &self.cost_center),
            ("Profit Center", &self.profit_center),
            ("GL Account", &self.gl_account),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_cost_center(cost_center: &str) -> Invoice {
        Invoice {
            id: "INV-T-001".to_string(),
            status: InvoiceStatus::ReviewNeeded,
            vendor: ExtractedField::new("Vendor Co", 0.9),
            invoice_date: ExtractedField::new("2024-01-01", 0.9),
            invoice_number: ExtractedField::new("V-1", 0.9),
            total_amount: ExtractedField::new("10.00", 0.9),
            currency: "USD".to_string(),
            gl_account: ExtractedField::new("600100 - Office Supplies", 0.9),
            company_code: ExtractedField::new("1000", 0.9),
            cost_center: ExtractedField::new(cost_center, 0.9),
            profit_center: ExtractedField::new("PC-US-EAST", 0.9),
            line_items: Vec::new(),
        }
    }

    #[test]
    fn cost_center_code_strips_catalog_description() {
        let invoice = record_with_cost_center("CC-OPS-002 - Logistics");
        assert_eq!(invoice.cost_center_code(), "CC-OPS-002");
    }

    #[test]
    fn cost_center_code_passes_bare_values_through() {
        let invoice = record_with_cost_center("CC-IT-001");
        assert_eq!(invoice.cost_center_code(), "CC-IT-001");
    }

    #[test]
    fn dimensions_summary_pairs_company_and_cost_center() {
        let invoice = record_with_cost_center("CC-IT-001 - IT Operations");
        assert_eq!(invoice.dimensions_summary(), "Co: 1000 CC: CC-IT-001");
    }

    #[test]
    fn status_uses_worklist_display_strings() {
        assert_eq!(InvoiceStatus::ReviewNeeded.as_str(), "Review Needed");
        assert_eq!(InvoiceStatus::Posted.as_str(), "Posted");
        assert_eq!(InvoiceStatus::Rejected.as_str(), "Rejected");

        let json = serde_json::to_string(&InvoiceStatus::ReviewNeeded).unwrap();
        assert_eq!(json, "\"Review Needed\"");
        let back: InvoiceStatus = serde_json::from_str("\"Review Needed\"").unwrap();
        assert_eq!(back, InvoiceStatus::ReviewNeeded);
    }

    #[test]
    fn posted_is_the_only_checkmark_status() {
        assert_eq!(InvoiceStatus::Posted.symbol(), "✓");
        assert_eq!(InvoiceStatus::ReviewNeeded.symbol(), "!");
        assert_eq!(InvoiceStatus::Rejected.symbol(), "!");
        assert!(InvoiceStatus::Posted.is_posted());
        assert!(!InvoiceStatus::Rejected.is_posted());
    }

    #[test]
    fn editing_a_field_value_keeps_its_confidence() {
        let mut invoice = record_with_cost_center("CC-IT-001");
        invoice.vendor.value = "Corrected Vendor".to_string();
        assert_eq!(invoice.vendor.confidence, 0.9);
        assert_eq!(invoice.vendor.tier(), crate::ConfidenceTier::High);
    }

    #[test]
    fn extracted_fields_cover_the_review_form() {
        let invoice = record_with_cost_center("CC-IT-001");
        let labels: Vec<&str> = invoice.extracted_fields().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Vendor",
                "Invoice Date",
                "Invoice Number",
                "Total Amount",
                "Company Code",
                "Cost Center",
                "Profit Center",
                "GL Account",
            ]
        );
    }
}
