//! Key handling for the validation cockpit
//!
//! Input routing depends on the phase. Review mode layers the catalog
//! picker over the edit buffer over field navigation; Processing and
//! Posted accept only the keys that leave the screen.

use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use facture_erp::PostRequest;

use super::{App, CatalogPicker, CockpitPhase, PostOutcome};

impl App {
    pub(super) fn handle_cockpit_key(&mut self, key: KeyEvent) {
        let phase = match self.cockpit.as_ref() {
            Some(cockpit) => cockpit.phase,
            None => return,
        };

        match phase {
            CockpitPhase::Posted => self.handle_posted_key(key),
            CockpitPhase::Processing => self.handle_processing_key(key),
            CockpitPhase::Review => self.handle_review_key(key),
        }
    }

    fn handle_posted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.close_cockpit(),
            _ => {}
        }
    }

    fn handle_processing_key(&mut self, key: KeyEvent) {
        // The post keeps running on its worker; leaving the screen just
        // orphans the outcome, which tick() then discards by generation.
        match key.code {
            KeyCode::Esc => self.close_cockpit(),
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        let picker_open = self
            .cockpit
            .as_ref()
            .map_or(false, |cockpit| cockpit.picker.is_some());
        if picker_open {
            self.handle_picker_key(key);
            return;
        }
        if self.is_text_input_mode() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                if let Some(cockpit) = self.cockpit.as_mut() {
                    cockpit.focus = cockpit.focus.prev();
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if let Some(cockpit) = self.cockpit.as_mut() {
                    cockpit.focus = cockpit.focus.next();
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => self.begin_field_edit(),
            KeyCode::Char('p') => self.start_post(),
            KeyCode::Char('x') => {
                // TODO: rejection workflow is not wired up yet; the hint
                // renders but the key does nothing.
            }
            KeyCode::Esc => self.close_cockpit(),
            _ => {}
        }
    }

    /// Start editing the focused field. Catalog-backed fields open the
    /// picker preselected on the current value; free-text fields get an
    /// edit buffer primed with it.
    fn begin_field_edit(&mut self) {
        if let Some(cockpit) = self.cockpit.as_mut() {
            let focus = cockpit.focus;
            let current = focus.get(&cockpit.draft).value.clone();
            if let Some(options) = focus.options() {
                // Extracted values may carry the bare code while catalog
                // entries append the description, so match on the prefix.
                let selected = options
                    .iter()
                    .position(|opt| *opt == current || opt.starts_with(current.as_str()))
                    .unwrap_or(0);
                cockpit.picker = Some(CatalogPicker {
                    field: focus,
                    options,
                    selected,
                });
            } else {
                cockpit.editing = true;
                cockpit.edit_value = current;
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if let Some(cockpit) = self.cockpit.as_mut() {
            match key.code {
                KeyCode::Esc => {
                    cockpit.editing = false;
                    cockpit.edit_value.clear();
                }
                KeyCode::Enter => {
                    let value = std::mem::take(&mut cockpit.edit_value);
                    cockpit.editing = false;
                    cockpit.focus.set(&mut cockpit.draft, value);
                }
                KeyCode::Backspace => {
                    cockpit.edit_value.pop();
                }
                KeyCode::Char(c) => {
                    cockpit.edit_value.push(c);
                }
                _ => {}
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        if let Some(cockpit) = self.cockpit.as_mut() {
            if let Some(picker) = cockpit.picker.as_mut() {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        if picker.selected > 0 {
                            picker.selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if picker.selected + 1 < picker.options.len() {
                            picker.selected += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let field = picker.field;
                        let chosen = picker
                            .options
                            .get(picker.selected)
                            .map(|opt| opt.to_string());
                        cockpit.picker = None;
                        if let Some(value) = chosen {
                            field.set(&mut cockpit.draft, value);
                        }
                    }
                    KeyCode::Esc => {
                        cockpit.picker = None;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Hand the draft to the gateway on a worker thread. The outcome comes
    /// back through `pending_post`, stamped with this session's generation.
    fn start_post(&mut self) {
        let (generation, request) = match self.cockpit.as_mut() {
            Some(cockpit) if cockpit.phase == CockpitPhase::Review => {
                cockpit.phase = CockpitPhase::Processing;
                cockpit.editing = false;
                cockpit.edit_value.clear();
                cockpit.picker = None;
                (
                    cockpit.generation,
                    PostRequest {
                        invoice: cockpit.draft.clone(),
                    },
                )
            }
            _ => return,
        };

        tracing::info!(invoice = %request.invoice.id, "approve and post");

        let gateway = Arc::clone(&self.gateway);
        let (tx, rx) = mpsc::channel();
        self.pending_post = Some(rx);
        thread::spawn(move || {
            let result = gateway.post_invoice(&request);
            // Receiver is gone when the app quit mid-post; drop the result.
            let _ = tx.send(PostOutcome { generation, result });
        });
    }
}
