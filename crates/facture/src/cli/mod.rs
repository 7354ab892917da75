//! CLI module for Facture
//!
//! Scriptable surfaces over the same demo worklist the TUI serves:
//! `worklist` and `show` for inspection, `config` for resolved paths.

pub mod config;
pub mod output;
pub mod show;
pub mod tui;
pub mod worklist;
