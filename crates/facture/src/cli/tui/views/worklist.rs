//! Key handling for the worklist screen

use crossterm::event::{KeyCode, KeyEvent};

use super::App;

impl App {
    pub(super) fn handle_worklist_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.worklist.selected_index > 0 {
                    self.worklist.selected_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.worklist.invoices.len();
                if count > 0 && self.worklist.selected_index < count - 1 {
                    self.worklist.selected_index += 1;
                }
            }
            KeyCode::Enter => {
                let selected = self
                    .worklist
                    .selected_invoice()
                    .map(|invoice| (invoice.id.clone(), invoice.is_posted()));
                if let Some((id, posted)) = selected {
                    if posted {
                        self.set_global_status(format!("{} is already posted", id), false);
                    } else {
                        self.open_cockpit(self.worklist.selected_index);
                    }
                }
            }
            KeyCode::Char('r') => self.refresh_worklist(),
            _ => {}
        }
    }

    /// Reload the list from the source and keep the selection in bounds.
    fn refresh_worklist(&mut self) {
        self.worklist.invoices = self.source.load();
        self.worklist.clamp_selection();
        tracing::debug!(count = self.worklist.invoices.len(), "worklist reloaded");
        self.set_global_status("Worklist refreshed", false);
    }
}
