//! Key hint assembly for the action bar and the help overlay
//!
//! Hints are data, not behavior: the key handlers in the views decide what
//! actually fires. Priorities fall with position so the action bar drops
//! the rightmost hints first on narrow terminals.

use super::app::{App, CockpitPhase, TuiMode};
use super::components::action_bar::ActionHint;

/// Build hints from `(key, label)` pairs, priorities falling left to right.
fn ordered_hints(pairs: &[(&'static str, &'static str)]) -> Vec<ActionHint> {
    pairs
        .iter()
        .enumerate()
        .map(|(idx, (key, label))| {
            let priority = 100u8.saturating_sub((idx as u8).saturating_mul(5)).max(1);
            ActionHint::new(*key, *label, priority)
        })
        .collect()
}

/// Keys that work on every screen outside text entry.
pub fn global_actions() -> Vec<ActionHint> {
    vec![
        ActionHint::new("?", "Help", 15),
        ActionHint::new("q", "Quit", 10),
        ActionHint::new("Ctrl+C", "Quit", 5),
    ]
}

/// Screen-specific hints for the current state, without the global tail.
pub fn screen_actions(app: &App) -> Vec<ActionHint> {
    match app.mode {
        TuiMode::Worklist => worklist_actions(app),
        TuiMode::Cockpit => cockpit_actions(app),
    }
}

/// What the action bar shows: screen hints plus help/quit, except while a
/// text edit owns the keyboard.
pub fn effective_actions(app: &App) -> Vec<ActionHint> {
    let mut hints = screen_actions(app);
    if !app.is_text_input_mode() {
        hints.push(ActionHint::new("?", "Help", 15));
        hints.push(ActionHint::new("q", "Quit", 10));
    }
    hints
}

fn worklist_actions(app: &App) -> Vec<ActionHint> {
    let mut hints = ordered_hints(&[
        ("j/k", "Navigate"),
        ("Enter", "Review"),
        ("r", "Refresh Queue"),
    ]);
    let review_blocked = app
        .worklist
        .selected_invoice()
        .map_or(true, |invoice| invoice.is_posted());
    if review_blocked {
        for hint in hints.iter_mut() {
            if hint.key == "Enter" {
                hint.enabled = false;
            }
        }
    }
    hints
}

fn cockpit_actions(app: &App) -> Vec<ActionHint> {
    let cockpit = match app.cockpit.as_ref() {
        Some(cockpit) => cockpit,
        None => return Vec::new(),
    };

    if cockpit.picker.is_some() {
        return ordered_hints(&[("j/k", "Navigate"), ("Enter", "Select"), ("Esc", "Cancel")]);
    }
    if cockpit.editing {
        return ordered_hints(&[("Enter", "Save"), ("Esc", "Cancel")]);
    }

    match cockpit.phase {
        CockpitPhase::Review => ordered_hints(&[
            ("j/k", "Field"),
            ("Enter", "Edit"),
            ("p", "Approve & Post"),
            ("x", "Reject"),
            ("Esc", "Back to List"),
        ]),
        CockpitPhase::Processing => ordered_hints(&[("Esc", "Back")]),
        CockpitPhase::Posted => ordered_hints(&[("Enter", "Back to Worklist")]),
    }
}
