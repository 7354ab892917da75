//! Static coding catalogs
//!
//! Pick lists for the two coded fields. Entries use the same
//! `CODE - Description` shape the extractor emits, so a picked value can
//! replace an extracted one without reformatting.

/// GL accounts offered by the coding picker.
pub const GL_ACCOUNTS: &[&str] = &[
    "600100 - Office Supplies",
    "600200 - Professional Services",
    "600300 - Travel & Entertainment",
    "600400 - Software Licenses",
    "600500 - Utilities",
];

/// Cost centers offered by the coding picker.
pub const COST_CENTERS: &[&str] = &[
    "CC-IT-001 - IT Operations",
    "CC-HR-001 - Human Resources",
    "CC-FIN-001 - Finance Dept",
    "CC-OPS-002 - Logistics",
    "CC-HQ-001 - Headquarters",
];
