//! Posting gateway seam and the simulated SAP backend
//!
//! The cockpit posts through [`ErpGateway`], a synchronous call that takes
//! the full edited record and answers with a confirmation document id or a
//! typed failure. The only shipped backend is [`SimulatedSap`], which
//! sleeps for a fixed delay to stand in for a BAPI round trip and then
//! always confirms.
//!
//! Document ids keep the SAP incoming-invoice shape: the `510000` series
//! prefix plus a four digit suffix, zero padded, always ten characters.
//! Where the suffix comes from is its own seam ([`DocumentNumberSource`])
//! so tests can pin the ids a run will produce.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use facture_schema::Invoice;

/// Series prefix for confirmation ids minted by a post.
pub const DOCUMENT_ID_PREFIX: &str = "510000";

/// Fixed document id shown for records that arrived already posted.
/// Their posting happened upstream; no id was minted in this session.
pub const PRIOR_POST_DOCUMENT_ID: &str = "190002931";

/// Simulated BAPI round-trip time.
pub const DEFAULT_POST_DELAY: Duration = Duration::from_millis(2000);

/// A post request carries the whole edited record, not a diff.
#[derive(Debug, Clone, Serialize)]
pub struct PostRequest {
    pub invoice: Invoice,
}

/// Successful confirmation from the posting backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReceipt {
    pub document_id: String,
}

/// Failure surface of the posting seam. The simulator never raises these;
/// a real backend would.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("posting rejected by backend: {0}")]
    Rejected(String),
    #[error("posting backend unreachable: {0}")]
    Unreachable(String),
}

/// Synchronous posting seam. Callers own the threading; implementations
/// are free to block.
pub trait ErpGateway: Send + Sync {
    fn post_invoice(&self, request: &PostRequest) -> Result<PostReceipt, PostError>;
}

/// Where confirmation id suffixes come from.
pub trait DocumentNumberSource: Send + Sync {
    fn next_document_id(&self) -> String;
}

fn document_id(suffix: u32) -> String {
    format!("{}{:04}", DOCUMENT_ID_PREFIX, suffix % 10_000)
}

/// Production source: a random four digit suffix per post.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDocumentNumbers;

impl DocumentNumberSource for RandomDocumentNumbers {
    fn next_document_id(&self) -> String {
        document_id(rand::thread_rng().gen_range(0..10_000))
    }
}

/// Deterministic source for tests: counts up from a starting suffix,
/// wrapping inside the four digit space.
#[derive(Debug, Default)]
pub struct SequentialDocumentNumbers {
    next: AtomicU32,
}

impl SequentialDocumentNumbers {
    pub fn starting_at(suffix: u32) -> Self {
        Self {
            next: AtomicU32::new(suffix),
        }
    }
}

impl DocumentNumberSource for SequentialDocumentNumbers {
    fn next_document_id(&self) -> String {
        document_id(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Fixed-delay stand-in for the real S/4HANA gateway. Every post sleeps
/// for `delay`, mints the next document id and confirms.
pub struct SimulatedSap {
    delay: Duration,
    numbers: Box<dyn DocumentNumberSource>,
}

impl SimulatedSap {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_POST_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::with_parts(delay, RandomDocumentNumbers)
    }

    pub fn with_parts(delay: Duration, numbers: impl DocumentNumberSource + 'static) -> Self {
        Self {
            delay,
            numbers: Box::new(numbers),
        }
    }
}

impl Default for SimulatedSap {
    fn default() -> Self {
        Self::new()
    }
}

impl ErpGateway for SimulatedSap {
    fn post_invoice(&self, request: &PostRequest) -> Result<PostReceipt, PostError> {
        std::thread::sleep(self.delay);
        let document_id = self.numbers.next_document_id();
        tracing::info!(
            invoice = %request.invoice.id,
            document_id = %document_id,
            "simulated BAPI post confirmed"
        );
        Ok(PostReceipt { document_id })
    }
}
