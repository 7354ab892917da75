//! Application state for the TUI
//!
//! Two screens: the worklist and the validation cockpit. The cockpit owns
//! a working copy of the selected record; the worklist keeps the loaded
//! reference list untouched. Posting runs on a worker thread and reports
//! back through a channel polled from `tick`, stamped with a session
//! generation so a result for a dismissed cockpit is dropped instead of
//! applied.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use facture_erp::{ErpGateway, PostError, PostReceipt, SimulatedSap, PRIOR_POST_DOCUMENT_ID};
use facture_schema::{catalog, ExtractedField, Invoice, InvoiceSource, SeedInvoices};

use super::TuiArgs;

#[path = "views/cockpit.rs"]
mod cockpit;
#[path = "views/worklist.rs"]
mod worklist;

/// Current TUI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TuiMode {
    #[default]
    Worklist,
    Cockpit,
}

/// Global status message shown in the action bar area
#[derive(Debug, Clone)]
pub struct GlobalStatusMessage {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

/// State for the worklist screen
#[derive(Debug, Clone, Default)]
pub struct WorklistState {
    /// Loaded reference records; cockpit edits never land here
    pub invoices: Vec<Invoice>,
    /// Currently selected row
    pub selected_index: usize,
}

impl WorklistState {
    pub fn selected_invoice(&self) -> Option<&Invoice> {
        self.invoices.get(self.selected_index)
    }

    pub fn clamp_selection(&mut self) {
        let count = self.invoices.len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// (awaiting review, posted) counts for the header
    pub fn stats(&self) -> (usize, usize) {
        let posted = self.invoices.iter().filter(|i| i.is_posted()).count();
        (self.invoices.len() - posted, posted)
    }
}

/// Phase of the cockpit post workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CockpitPhase {
    /// Form is editable, Approve & Post is live
    #[default]
    Review,
    /// Post in flight; input is ignored apart from backing out
    Processing,
    /// Terminal: confirmation on screen, back to the worklist only
    Posted,
}

/// Cockpit form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Vendor,
    InvoiceDate,
    InvoiceNumber,
    TotalAmount,
    CompanyCode,
    CostCenter,
    ProfitCenter,
    GlAccount,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Vendor,
        FormField::InvoiceDate,
        FormField::InvoiceNumber,
        FormField::TotalAmount,
        FormField::CompanyCode,
        FormField::CostCenter,
        FormField::ProfitCenter,
        FormField::GlAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Vendor => "Vendor",
            FormField::InvoiceDate => "Invoice Date",
            FormField::InvoiceNumber => "Invoice Number",
            FormField::TotalAmount => "Total Amount",
            FormField::CompanyCode => "Company Code",
            FormField::CostCenter => "Cost Center",
            FormField::ProfitCenter => "Profit Center",
            FormField::GlAccount => "GL Account",
        }
    }

    /// Catalog options for picker-backed fields
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            FormField::CostCenter => Some(catalog::COST_CENTERS),
            FormField::GlAccount => Some(catalog::GL_ACCOUNTS),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn get(self, invoice: &Invoice) -> &ExtractedField {
        match self {
            FormField::Vendor => &invoice.vendor,
            FormField::InvoiceDate => &invoice.invoice_date,
            FormField::InvoiceNumber => &invoice.invoice_number,
            FormField::TotalAmount => &invoice.total_amount,
            FormField::CompanyCode => &invoice.company_code,
            FormField::CostCenter => &invoice.cost_center,
            FormField::ProfitCenter => &invoice.profit_center,
            FormField::GlAccount => &invoice.gl_account,
        }
    }

    /// Replace the working value. Confidence stays as extracted, so the
    /// review styling keeps tracking extraction quality after an edit.
    pub fn set(self, invoice: &mut Invoice, value: String) {
        match self {
            FormField::Vendor => invoice.vendor.value = value,
            FormField::InvoiceDate => invoice.invoice_date.value = value,
            FormField::InvoiceNumber => invoice.invoice_number.value = value,
            FormField::TotalAmount => invoice.total_amount.value = value,
            FormField::CompanyCode => invoice.company_code.value = value,
            FormField::CostCenter => invoice.cost_center.value = value,
            FormField::ProfitCenter => invoice.profit_center.value = value,
            FormField::GlAccount => invoice.gl_account.value = value,
        }
    }
}

/// Catalog selection modal state
#[derive(Debug, Clone)]
pub struct CatalogPicker {
    pub field: FormField,
    pub options: &'static [&'static str],
    pub selected: usize,
}

/// One cockpit session over a selected record
#[derive(Debug, Clone)]
pub struct CockpitState {
    pub phase: CockpitPhase,
    /// Working copy; edits land here and die with the session
    pub draft: Invoice,
    /// Focused form field
    pub focus: FormField,
    /// Text edit in progress on the focused field
    pub editing: bool,
    /// Edit buffer
    pub edit_value: String,
    /// Catalog picker, when open
    pub picker: Option<CatalogPicker>,
    /// Confirmation document id once posted
    pub document_id: Option<String>,
    /// Session stamp; post outcomes carrying another stamp are stale
    pub generation: u64,
}

impl CockpitState {
    /// Open a session over `invoice`. Records that arrive already posted
    /// enter the terminal phase directly, showing the upstream document id.
    pub fn open(invoice: &Invoice, generation: u64) -> Self {
        let (phase, document_id) = if invoice.is_posted() {
            (CockpitPhase::Posted, Some(PRIOR_POST_DOCUMENT_ID.to_string()))
        } else {
            (CockpitPhase::Review, None)
        };
        Self {
            phase,
            draft: invoice.clone(),
            focus: FormField::Vendor,
            editing: false,
            edit_value: String::new(),
            picker: None,
            document_id,
            generation,
        }
    }
}

/// Result envelope from the post worker thread
struct PostOutcome {
    generation: u64,
    result: Result<PostReceipt, PostError>,
}

/// Main application state
pub struct App {
    /// Whether app is running
    pub running: bool,
    /// Current mode/screen
    pub mode: TuiMode,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Worklist screen state
    pub worklist: WorklistState,
    /// Cockpit session, present while in Cockpit mode
    pub cockpit: Option<CockpitState>,
    /// Transient status message
    pub global_status: Option<GlobalStatusMessage>,
    /// Tick counter for animated elements
    pub tick_count: u64,
    /// Configuration
    pub config: TuiArgs,
    /// Where worklist records come from
    source: Arc<dyn InvoiceSource>,
    /// Posting backend
    gateway: Arc<dyn ErpGateway>,
    /// Pending outcome from the post worker
    pending_post: Option<mpsc::Receiver<PostOutcome>>,
    /// Session counter; bumped whenever a cockpit opens or closes
    generation: u64,
}

impl App {
    pub fn new(config: TuiArgs) -> Self {
        Self::with_parts(config, Arc::new(SeedInvoices), Arc::new(SimulatedSap::new()))
    }

    /// Build with an injected source and gateway
    pub fn with_parts(
        config: TuiArgs,
        source: Arc<dyn InvoiceSource>,
        gateway: Arc<dyn ErpGateway>,
    ) -> Self {
        let invoices = source.load();
        Self {
            running: true,
            mode: TuiMode::default(),
            show_help: false,
            worklist: WorklistState {
                invoices,
                selected_index: 0,
            },
            cockpit: None,
            global_status: None,
            tick_count: 0,
            config,
            source,
            gateway,
            pending_post: None,
            generation: 0,
        }
    }

    /// Set a global status message with the default 3 second expiry
    fn set_global_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.set_global_status_for(message, is_error, Duration::from_secs(3));
    }

    fn set_global_status_for(&mut self, message: impl Into<String>, is_error: bool, ttl: Duration) {
        self.global_status = Some(GlobalStatusMessage {
            message: message.into(),
            is_error,
            expires_at: Instant::now() + ttl,
        });
    }

    /// True while a form field edit buffer is live; global character keys
    /// must not fire then
    pub fn is_text_input_mode(&self) -> bool {
        self.cockpit.as_ref().map_or(false, |c| c.editing)
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help overlay swallows everything except its close keys
        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                _ => {}
            }
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            KeyCode::Char('q') if !self.is_text_input_mode() => {
                self.running = false;
                return;
            }
            KeyCode::Char('?') if !self.is_text_input_mode() => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match self.mode {
            TuiMode::Worklist => self.handle_worklist_key(key),
            TuiMode::Cockpit => self.handle_cockpit_key(key),
        }
    }

    /// Periodic tick: animation counter, status expiry, post outcomes
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(status) = &self.global_status {
            if status.expires_at <= Instant::now() {
                self.global_status = None;
            }
        }

        if let Some(rx) = &self.pending_post {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.pending_post = None;
                    self.apply_post_outcome(outcome);
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.pending_post = None;
                    tracing::warn!("post worker exited without a result");
                    if let Some(cockpit) = self.cockpit.as_mut() {
                        if cockpit.phase == CockpitPhase::Processing {
                            cockpit.phase = CockpitPhase::Review;
                            self.set_global_status("Posting failed, please retry", true);
                        }
                    }
                }
            }
        }
    }

    /// Open a cockpit session over the worklist row at `index`
    pub(crate) fn open_cockpit(&mut self, index: usize) {
        if let Some(invoice) = self.worklist.invoices.get(index) {
            self.generation = self.generation.wrapping_add(1);
            tracing::debug!(invoice = %invoice.id, "opening cockpit");
            self.cockpit = Some(CockpitState::open(invoice, self.generation));
            self.mode = TuiMode::Cockpit;
        }
    }

    /// Leave the cockpit. The draft is dropped; an in-flight post outcome
    /// will no longer match the session stamp and gets discarded in `tick`.
    pub(crate) fn close_cockpit(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.cockpit = None;
        self.mode = TuiMode::Worklist;
    }

    fn apply_post_outcome(&mut self, outcome: PostOutcome) {
        let session_matches = self
            .cockpit
            .as_ref()
            .map_or(false, |c| c.generation == outcome.generation);
        if !session_matches {
            tracing::debug!(
                generation = outcome.generation,
                "discarding post outcome for a dismissed cockpit session"
            );
            return;
        }

        if let Some(cockpit) = self.cockpit.as_mut() {
            match outcome.result {
                Ok(receipt) => {
                    tracing::info!(
                        invoice = %cockpit.draft.id,
                        document_id = %receipt.document_id,
                        "post confirmed"
                    );
                    cockpit.phase = CockpitPhase::Posted;
                    cockpit.document_id = Some(receipt.document_id);
                }
                Err(err) => {
                    tracing::error!(invoice = %cockpit.draft.id, error = %err, "post failed");
                    cockpit.phase = CockpitPhase::Review;
                    self.set_global_status(format!("Post failed: {}", err), true);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tui::test_harness::FixedInvoices;
    use facture_erp::{PostRequest, SequentialDocumentNumbers};
    use facture_schema::{seed_invoices, InvoiceStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::with_parts(
            TuiArgs::default(),
            Arc::new(SeedInvoices),
            Arc::new(SimulatedSap::with_parts(
                Duration::ZERO,
                SequentialDocumentNumbers::starting_at(4211),
            )),
        )
    }

    /// Pump ticks until `done` returns true or the attempts run out.
    fn pump_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
        for _ in 0..200 {
            if done(app) {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
            app.tick();
        }
        panic!("condition not reached while pumping ticks");
    }

    struct FailingSap;

    impl ErpGateway for FailingSap {
        fn post_invoice(&self, _request: &PostRequest) -> Result<PostReceipt, PostError> {
            Err(PostError::Unreachable("test backend offline".to_string()))
        }
    }

    #[test]
    fn worklist_navigation_stays_in_bounds() {
        let mut app = test_app();
        assert_eq!(app.worklist.selected_index, 0);

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.worklist.selected_index, 0);

        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.worklist.selected_index, 2);

        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.worklist.selected_index, 2);

        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.worklist.selected_index, 1);
    }

    #[test]
    fn enter_opens_a_cockpit_over_a_cloned_record() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, TuiMode::Cockpit);
        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.phase, CockpitPhase::Review);
        assert_eq!(cockpit.draft, app.worklist.invoices[0]);
        assert_eq!(cockpit.focus, FormField::Vendor);
    }

    #[test]
    fn enter_on_a_posted_row_stays_on_the_worklist() {
        let mut app = test_app();
        app.worklist.selected_index = 2; // INV-2024-003, already posted
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, TuiMode::Worklist);
        assert!(app.cockpit.is_none());
        let status = app.global_status.as_ref().unwrap();
        assert!(status.message.contains("INV-2024-003"));
        assert!(!status.is_error);
    }

    #[test]
    fn already_posted_records_enter_the_terminal_phase_directly() {
        let mut app = test_app();
        app.open_cockpit(2);

        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.phase, CockpitPhase::Posted);
        assert_eq!(cockpit.document_id.as_deref(), Some(PRIOR_POST_DOCUMENT_ID));
    }

    #[test]
    fn edits_land_in_the_draft_and_die_with_the_session() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));

        // Edit the vendor: open buffer, clear it, type a new name, commit.
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.is_text_input_mode());
        for _ in 0.."Acme Corp Services".len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "Acme Corp GmbH".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.draft.vendor.value, "Acme Corp GmbH");
        // Confidence is untouched by the edit.
        assert_eq!(cockpit.draft.vendor.confidence, 0.98);
        // The reference list never sees the edit.
        assert_eq!(app.worklist.invoices[0].vendor.value, "Acme Corp Services");

        // Back out and reopen: pristine record again.
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, TuiMode::Worklist);
        app.handle_key(key(KeyCode::Enter));
        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.draft.vendor.value, "Acme Corp Services");
    }

    #[test]
    fn escape_cancels_an_edit_without_committing() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('X')));
        app.handle_key(key(KeyCode::Esc));

        let cockpit = app.cockpit.as_ref().unwrap();
        assert!(!cockpit.editing);
        assert_eq!(cockpit.draft.vendor.value, "Acme Corp Services");
        // Still in the cockpit: Esc only cancelled the edit.
        assert_eq!(app.mode, TuiMode::Cockpit);
    }

    #[test]
    fn catalog_picker_commits_the_selected_entry() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));

        // Focus Cost Center (6th field) and open its picker.
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.cockpit.as_ref().unwrap().focus, FormField::CostCenter);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.cockpit.as_ref().unwrap().picker.is_some());

        // Move to the Logistics entry and select it.
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        app.handle_key(key(KeyCode::Enter));

        let cockpit = app.cockpit.as_ref().unwrap();
        assert!(cockpit.picker.is_none());
        assert_eq!(cockpit.draft.cost_center.value, "CC-OPS-002 - Logistics");
        assert_eq!(cockpit.draft.cost_center.confidence, 0.85);
    }

    #[test]
    fn approve_and_post_walks_review_processing_posted() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('p')));

        assert_eq!(app.cockpit.as_ref().unwrap().phase, CockpitPhase::Processing);

        pump_until(&mut app, |app| {
            app.cockpit
                .as_ref()
                .map_or(false, |c| c.phase == CockpitPhase::Posted)
        });

        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.document_id.as_deref(), Some("5100004211"));
        // The reference record still shows the incoming status.
        assert_eq!(app.worklist.invoices[0].status, InvoiceStatus::ReviewNeeded);

        // Only way out is back to the worklist.
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode, TuiMode::Worklist);
        assert!(app.cockpit.is_none());
    }

    #[test]
    fn form_keys_are_ignored_while_processing() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('p')));

        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('p')));
        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.phase, CockpitPhase::Processing);
        assert!(!cockpit.editing);
    }

    #[test]
    fn stale_post_outcome_is_discarded_after_backing_out() {
        let mut app = App::with_parts(
            TuiArgs::default(),
            Arc::new(SeedInvoices),
            Arc::new(SimulatedSap::with_parts(
                Duration::from_millis(20),
                SequentialDocumentNumbers::starting_at(4211),
            )),
        );

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('p')));
        // Back out while the post is still in flight.
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, TuiMode::Worklist);

        // Let the worker finish and drain the channel.
        std::thread::sleep(Duration::from_millis(40));
        for _ in 0..5 {
            app.tick();
        }

        assert!(app.cockpit.is_none());
        assert_eq!(app.worklist.invoices[0].status, InvoiceStatus::ReviewNeeded);

        // Reopening starts a fresh review session, not a posted one.
        app.handle_key(key(KeyCode::Enter));
        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.phase, CockpitPhase::Review);
        assert_eq!(cockpit.document_id, None);
    }

    #[test]
    fn failed_post_returns_to_review_with_an_error_status() {
        let mut app = App::with_parts(
            TuiArgs::default(),
            Arc::new(SeedInvoices),
            Arc::new(FailingSap),
        );
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('p')));

        pump_until(&mut app, |app| {
            app.cockpit
                .as_ref()
                .map_or(false, |c| c.phase == CockpitPhase::Review)
        });

        let status = app.global_status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.message.contains("Post failed"));
    }

    #[test]
    fn reject_is_a_no_op() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('x')));

        let cockpit = app.cockpit.as_ref().unwrap();
        assert_eq!(cockpit.phase, CockpitPhase::Review);
        assert_eq!(cockpit.draft.status, InvoiceStatus::ReviewNeeded);
        assert_eq!(app.mode, TuiMode::Cockpit);
    }

    #[test]
    fn refresh_reloads_from_the_source() {
        let mut app = test_app();
        app.worklist.selected_index = 2;
        app.handle_key(key(KeyCode::Char('r')));

        assert_eq!(app.worklist.invoices, seed_invoices());
        assert_eq!(app.worklist.selected_index, 2);
        assert!(app.global_status.is_some());
    }

    #[test]
    fn refresh_clamps_selection_when_the_list_shrinks() {
        let mut app = App::with_parts(
            TuiArgs::default(),
            Arc::new(FixedInvoices(vec![seed_invoices().remove(0)])),
            Arc::new(SimulatedSap::with_parts(
                Duration::ZERO,
                SequentialDocumentNumbers::default(),
            )),
        );
        app.worklist.selected_index = 5;
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.worklist.selected_index, 0);
    }

    #[test]
    fn empty_worklist_ignores_enter_and_navigation() {
        let mut app = App::with_parts(
            TuiArgs::default(),
            Arc::new(FixedInvoices(Vec::new())),
            Arc::new(SimulatedSap::with_parts(
                Duration::ZERO,
                SequentialDocumentNumbers::default(),
            )),
        );
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode, TuiMode::Worklist);
        assert!(app.cockpit.is_none());
    }

    #[test]
    fn help_overlay_toggles_and_swallows_keys() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.worklist.selected_index, 0);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn typing_q_into_an_edit_buffer_does_not_quit() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('q')));

        assert!(app.running);
        let cockpit = app.cockpit.as_ref().unwrap();
        assert!(cockpit.edit_value.ends_with('q'));
    }

    #[test]
    fn expired_status_messages_clear_on_tick() {
        let mut app = test_app();
        app.set_global_status_for("done", false, Duration::ZERO);
        assert!(app.global_status.is_some());
        std::thread::sleep(Duration::from_millis(2));
        app.tick();
        assert!(app.global_status.is_none());
    }
}
