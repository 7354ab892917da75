//! Rendering for the TUI
//!
//! Pure function of [`App`]: `draw` never mutates state. The worklist and
//! the cockpit both sit between a one-line title bar and the action bar;
//! the cockpit pairs the document preview with the validation form side by
//! side and collapses to the form alone on narrow terminals.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use facture_schema::{confidence, ConfidenceTier, Invoice, InvoiceStatus};

use super::app::{App, CatalogPicker, CockpitPhase, CockpitState, FormField, TuiMode};
use super::components::action_bar::{
    format_help_lines, render_action_bar, render_action_bar_message,
};
use super::components::modal::{centered_area, render_modal};
use super::keymap;
use super::layout::{form_only, viewport_class, ViewportClass};
use crate::cli::output::{format_money, format_quantity};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0], app);

    match app.mode {
        TuiMode::Worklist => draw_worklist_screen(frame, chunks[1], app),
        TuiMode::Cockpit => draw_cockpit_screen(frame, chunks[1], app),
    }

    draw_action_bar(frame, chunks[2], app);

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

fn tier_style(tier: ConfidenceTier) -> Style {
    match tier {
        ConfidenceTier::High => Style::default().fg(Color::Green),
        ConfidenceTier::Medium => Style::default().fg(Color::Yellow),
        ConfidenceTier::Low => Style::default().fg(Color::Red),
    }
}

// Rejected intentionally shares the warning styling; nothing in the
// workflow produces it yet.
fn status_style(status: InvoiceStatus) -> Style {
    match status {
        InvoiceStatus::Posted => Style::default().fg(Color::Green),
        InvoiceStatus::ReviewNeeded | InvoiceStatus::Rejected => {
            Style::default().fg(Color::Yellow)
        }
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let subtitle = match app.mode {
        TuiMode::Worklist => "Queue: Incoming Invoices (SharePoint)",
        TuiMode::Cockpit => "Validation & Coding",
    };
    let title = Line::from(vec![
        Span::styled(
            " Facture ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::raw(subtitle),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let status = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::styled("System Online ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_worklist_screen(frame: &mut Frame, area: Rect, app: &App) {
    let narrow = matches!(viewport_class(frame.area()), ViewportClass::Narrow);
    let (pending, posted) = app.worklist.stats();
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Document Worklist ({} to review, {} posted) ",
        pending, posted
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if app.worklist.invoices.is_empty() {
        frame.render_widget(
            Paragraph::new("No invoices in the queue.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let mut header = format!(
        "  {:<15}{:<20.20} {:<10.10} {:<10.10} {:>10}",
        "STATUS", "VENDOR", "INVOICE #", "DATE", "AMOUNT"
    );
    if !narrow {
        header.push_str(&format!("  {:<24.24}", "DIMENSIONS"));
    }
    header.push_str("  ACTION");
    let mut lines = vec![Line::from(Span::styled(
        header,
        Style::default().fg(Color::DarkGray),
    ))];

    for (idx, invoice) in app.worklist.invoices.iter().enumerate() {
        let selected = idx == app.worklist.selected_index;
        let base = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, base)];
        let status_cell = format!(
            "{} {:<13}",
            invoice.status.symbol(),
            invoice.status.as_str()
        );
        spans.push(Span::styled(
            status_cell,
            if selected {
                base
            } else {
                status_style(invoice.status)
            },
        ));
        spans.push(Span::styled(
            format!(
                "{:<20.20} {:<10.10} {:<10.10} {:>10}",
                invoice.vendor.value,
                invoice.invoice_number.value,
                invoice.invoice_date.value,
                invoice.total_amount.value
            ),
            base,
        ));
        if !narrow {
            spans.push(Span::styled(
                format!("  {:<24.24}", invoice.dimensions_summary()),
                base,
            ));
        }
        if !invoice.is_posted() {
            spans.push(Span::styled(
                "  review",
                if selected {
                    base
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ));
        }
        lines.push(Line::from(spans));
    }

    // Keep the selected row visible on short terminals; the header row
    // scrolls away before the selection does.
    let visible = inner.height as usize;
    let scroll = if visible <= 1 {
        app.worklist.selected_index
    } else {
        (app.worklist.selected_index + 1).saturating_sub(visible - 1)
    };
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        inner,
    );
}

fn draw_cockpit_screen(frame: &mut Frame, area: Rect, app: &App) {
    let cockpit = match app.cockpit.as_ref() {
        Some(cockpit) => cockpit,
        None => return,
    };

    if cockpit.phase == CockpitPhase::Posted {
        draw_posted_panel(frame, area, cockpit);
        return;
    }

    if form_only(viewport_class(frame.area())) {
        draw_validation_form(frame, area, cockpit);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        draw_document_preview(frame, chunks[0], &cockpit.draft);
        draw_validation_form(frame, chunks[1], cockpit);
    }

    if let Some(picker) = cockpit.picker.as_ref() {
        draw_catalog_picker(frame, area, picker);
    }
}

fn draw_posted_panel(frame: &mut Frame, area: Rect, cockpit: &CockpitState) {
    let panel = centered_area(area, 48, 9);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Posted ");
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let document_id = cockpit.document_id.as_deref().unwrap_or("-");
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "✓ Posted to SAP",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(format!("SAP Document ID: {}", document_id)),
        Line::raw(""),
        Line::from(Span::styled(
            "[Enter] Back to Worklist",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Facsimile of the source document, rendered from the draft so committed
/// edits show up immediately.
fn draw_document_preview(frame: &mut Frame, area: Rect, invoice: &Invoice) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Document Preview ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            invoice.vendor.value.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "INVOICE",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(format!("No:   {}", invoice.invoice_number.value)),
        Line::from(format!("Date: {}", invoice.invoice_date.value)),
        Line::raw(""),
        Line::raw("Bill To: Client Industries Inc."),
        Line::from(format!("Company Code: {}", invoice.company_code.value)),
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                "{:<24.24} {:>5} {:>10} {:>10}",
                "DESCRIPTION", "QTY", "UNIT PRICE", "TOTAL"
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if invoice.line_items.is_empty() {
        // The extractor found no itemization; stand in with a single line
        // carrying the document total, shown verbatim.
        lines.push(Line::from(format!(
            "{:<24.24} {:>5} {:>10} {:>10}",
            "Service Fee (Generated)", "1", invoice.total_amount.value, invoice.total_amount.value
        )));
    } else {
        for item in &invoice.line_items {
            lines.push(Line::from(format!(
                "{:<24.24} {:>5} {:>10} {:>10}",
                item.description,
                format_quantity(item.quantity),
                format_money(item.unit_price),
                format_money(item.line_total)
            )));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{:<24.24} {:>5} {:>10} {:>10}",
            "", "", "TOTAL", invoice.total_amount.value
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_validation_form(frame: &mut Frame, area: Rect, cockpit: &CockpitState) {
    let dim = cockpit.phase == CockpitPhase::Processing;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Validation & Coding ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let or_dim = |style: Style| {
        if dim {
            Style::default().fg(Color::DarkGray)
        } else {
            style
        }
    };
    let section = |label: &'static str| {
        Line::from(Span::styled(
            label,
            or_dim(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ))
    };

    let mut lines = vec![section("Header Data")];
    for field in [
        FormField::Vendor,
        FormField::InvoiceDate,
        FormField::InvoiceNumber,
        FormField::TotalAmount,
    ] {
        lines.push(form_field_line(cockpit, field, dim));
    }
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<15}", "Currency"), or_dim(Style::default())),
        Span::styled(
            format!("{:<26.26}", cockpit.draft.currency),
            or_dim(Style::default()),
        ),
        Span::styled(" read-only", Style::default().fg(Color::DarkGray)),
    ]));

    lines.push(Line::raw(""));
    lines.push(section("SAP Dimensions"));
    for field in [
        FormField::CompanyCode,
        FormField::CostCenter,
        FormField::ProfitCenter,
    ] {
        lines.push(form_field_line(cockpit, field, dim));
    }
    lines.push(Line::from(Span::styled(
        "  AI Insight:",
        or_dim(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    )));
    lines.push(Line::from(Span::styled(
        "  Vendor \"TechStart\" usually maps to CC-OPS-002.",
        or_dim(Style::default().fg(Color::Magenta)),
    )));
    lines.push(Line::from(Span::styled(
        "  Profit center derived from Company Code 1000.",
        or_dim(Style::default().fg(Color::Magenta)),
    )));

    lines.push(Line::raw(""));
    lines.push(section("GL Coding"));
    lines.push(form_field_line(cockpit, FormField::GlAccount, dim));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn form_field_line(cockpit: &CockpitState, field: FormField, dim: bool) -> Line<'static> {
    let extracted = field.get(&cockpit.draft);
    let focused = cockpit.focus == field && !dim;
    let editing = focused && cockpit.editing;

    let or_dim = |style: Style| {
        if dim {
            Style::default().fg(Color::DarkGray)
        } else {
            style
        }
    };

    let prefix = if focused {
        Span::styled(
            "> ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };

    let value_cell = if editing {
        format!("{}▌", cockpit.edit_value)
    } else if field.options().is_some() {
        format!("{} ▾", extracted.value)
    } else {
        extracted.value.clone()
    };
    let value_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        // Low-confidence values stay visually loud until reviewed.
        let mut style = Style::default();
        if extracted.needs_alert() {
            style = style.fg(Color::Red);
        }
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    };

    let badge = confidence::badge(extracted.confidence);
    let alert = if extracted.needs_alert() {
        Span::styled(
            " !",
            or_dim(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        )
    } else {
        Span::raw("  ")
    };

    Line::from(vec![
        prefix,
        Span::styled(format!("{:<15}", field.label()), or_dim(Style::default())),
        Span::styled(format!("{:<26.26}", value_cell), or_dim(value_style)),
        Span::styled(format!("{:>10}", badge), or_dim(tier_style(extracted.tier()))),
        alert,
    ])
}

fn draw_catalog_picker(frame: &mut Frame, area: Rect, picker: &CatalogPicker) {
    let title = match picker.field {
        FormField::CostCenter => " Cost Center ",
        FormField::GlAccount => " GL Account ",
        _ => " Select ",
    };
    let height = picker.options.len() as u16 + 3;
    let layout = render_modal(
        frame,
        area,
        44,
        height,
        title,
        Style::default().fg(Color::Cyan),
    );

    let lines: Vec<Line> = picker
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            if idx == picker.selected {
                Line::from(Span::styled(
                    format!("> {}", option),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", option))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.body);
    frame.render_widget(
        Paragraph::new("[Enter] Select  [Esc] Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout.footer,
    );
}

fn draw_action_bar(frame: &mut Frame, area: Rect, app: &App) {
    let processing = app
        .cockpit
        .as_ref()
        .map_or(false, |cockpit| cockpit.phase == CockpitPhase::Processing);
    if processing && app.mode == TuiMode::Cockpit {
        let spinner = SPINNER_FRAMES[(app.tick_count % SPINNER_FRAMES.len() as u64) as usize];
        render_action_bar_message(
            frame,
            area,
            &format!("{} Simulating SAP BAPI...", spinner),
            Style::default().fg(Color::Yellow),
        );
        return;
    }

    if let Some(status) = app.global_status.as_ref() {
        let style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        render_action_bar_message(frame, area, &status.message, style);
        return;
    }

    let hints = keymap::effective_actions(app);
    render_action_bar(frame, area, &hints);
}

fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_area(frame.area(), 62, 16);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Help ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Global", heading))];
    for entry in format_help_lines(&keymap::global_actions()) {
        lines.push(Line::from(entry));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("This screen", heading)));
    for entry in format_help_lines(&keymap::screen_actions(app)) {
        lines.push(Line::from(entry));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
