//! Test scaffolding for the TUI
//!
//! Drives the real [`App`] against ratatui's `TestBackend` and exposes the
//! rendered buffer as plain text rows, so tests assert on what a user
//! would actually see.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use facture_erp::{SequentialDocumentNumbers, SimulatedSap};
use facture_schema::{Invoice, InvoiceSource, SeedInvoices};

use super::app::{App, CockpitPhase};
use super::{ui, TuiArgs};

/// Invoice source pinned to a fixed list.
pub(crate) struct FixedInvoices(pub Vec<Invoice>);

impl InvoiceSource for FixedInvoices {
    fn load(&self) -> Vec<Invoice> {
        self.0.clone()
    }
}

/// Seed-backed app with an instant gateway minting ids from suffix 4211.
pub(crate) fn test_app() -> App {
    test_app_with_delay(Duration::ZERO)
}

pub(crate) fn test_app_with_delay(delay: Duration) -> App {
    App::with_parts(
        TuiArgs::default(),
        Arc::new(SeedInvoices),
        Arc::new(SimulatedSap::with_parts(
            delay,
            SequentialDocumentNumbers::starting_at(4211),
        )),
    )
}

/// One rendered frame, row by row.
pub(crate) struct ScreenSnapshot {
    pub rows: Vec<String>,
}

impl ScreenSnapshot {
    fn from_backend(backend: &TestBackend) -> Self {
        let buffer = backend.buffer();
        let area = buffer.area;
        let mut rows = Vec::with_capacity(area.height as usize);
        for y in 0..area.height {
            let mut row = String::with_capacity(area.width as usize);
            for x in 0..area.width {
                let idx = buffer.index_of(area.x + x, area.y + y);
                row.push_str(buffer.content[idx].symbol());
            }
            rows.push(row);
        }
        Self { rows }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.rows.iter().any(|row| row.contains(needle))
    }

    pub fn row_containing(&self, needle: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.contains(needle))
            .map(|row| row.as_str())
    }

    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "expected {:?} on screen:\n{}",
            needle,
            self.annotated()
        );
    }

    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "did not expect {:?} on screen:\n{}",
            needle,
            self.annotated()
        );
    }

    fn annotated(&self) -> String {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| format!("{:02}|{}", idx, row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) struct TuiTestHarness {
    pub terminal: Terminal<TestBackend>,
    pub app: App,
}

impl TuiTestHarness {
    pub fn new() -> Self {
        Self::with_size(120, 40)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self::with_app(test_app(), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal, app }
    }

    /// Harness over an empty worklist.
    pub fn empty() -> Self {
        let app = App::with_parts(
            TuiArgs::default(),
            Arc::new(FixedInvoices(Vec::new())),
            Arc::new(SimulatedSap::with_parts(
                Duration::ZERO,
                SequentialDocumentNumbers::default(),
            )),
        );
        Self::with_app(app, 120, 40)
    }

    pub fn render(&mut self) -> ScreenSnapshot {
        let app = &self.app;
        self.terminal
            .draw(|frame| ui::draw(frame, app))
            .expect("render");
        ScreenSnapshot::from_backend(self.terminal.backend())
    }

    pub fn send_key(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn press_enter(&mut self) {
        self.send_key(KeyCode::Enter);
    }

    pub fn press_escape(&mut self) {
        self.send_key(KeyCode::Esc);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c));
        }
    }

    pub fn tick(&mut self) {
        self.app.tick();
    }

    /// Pump ticks until the in-flight post settles.
    pub fn wait_for_post(&mut self) {
        for _ in 0..500 {
            let processing = self
                .app
                .cockpit
                .as_ref()
                .map_or(false, |cockpit| cockpit.phase == CockpitPhase::Processing);
            if !processing {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
            self.app.tick();
        }
        panic!("post did not settle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_review_and_post_flow() {
        let mut harness =
            TuiTestHarness::with_app(test_app_with_delay(Duration::from_millis(50)), 120, 40);

        // Pick the second record and open it.
        harness.send_key(KeyCode::Down);
        harness.press_enter();
        let screen = harness.render();
        screen.assert_contains("TECHSTART LOGISTICS");
        screen.assert_contains("4,500.00");
        screen.assert_contains("High 92%");
        // Every score on this record clears the alert floor.
        screen.assert_not_contains(" !");

        // Approve: the simulation notice shows while the post runs.
        harness.send_key(KeyCode::Char('p'));
        harness.tick();
        let screen = harness.render();
        screen.assert_contains("Simulating SAP BAPI...");

        harness.wait_for_post();
        let screen = harness.render();
        screen.assert_contains("✓ Posted to SAP");
        screen.assert_contains("SAP Document ID: 5100004211");

        // Back on the worklist, the reference list is untouched.
        harness.press_enter();
        let screen = harness.render();
        screen.assert_contains("Document Worklist");
        let row = screen.row_containing("TechStart Logistics").unwrap();
        assert!(row.contains("Review Needed"));
    }

    #[test]
    fn escape_backs_out_without_posting() {
        let mut harness = TuiTestHarness::new();
        harness.press_enter();
        harness.press_escape();

        let screen = harness.render();
        screen.assert_contains("Document Worklist");
        assert!(harness.app.cockpit.is_none());
    }
}
