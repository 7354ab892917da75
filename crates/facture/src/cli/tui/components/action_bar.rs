//! Bottom action bar: contextual key hints
//!
//! Hints carry a priority. When the bar runs out of width the lowest
//! priority hints drop first and a `(+N more)` marker takes their place;
//! the full list is always available in the help overlay.

use std::borrow::Cow;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionHint {
    pub key: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub enabled: bool,
    pub priority: u8,
}

impl ActionHint {
    pub fn new(
        key: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
        priority: u8,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
            priority,
        }
    }

    /// Rendered width: `[key] label` plus the separating space.
    fn width(&self) -> usize {
        let key = self.key.chars().count() + 2;
        let label = self.label.chars().count();
        if label == 0 {
            key
        } else {
            key + 1 + label
        }
    }
}

const SEPARATOR_WIDTH: usize = 2;

fn more_indicator(dropped: usize) -> String {
    format!("(+{} more)", dropped)
}

/// Greedy line packing over at most `max_lines`. Returns the hint indices
/// per line plus how many hints had to be dropped.
fn fit_hints(hints: &[ActionHint], width: usize, max_lines: usize) -> (Vec<Vec<usize>>, usize) {
    if width == 0 || max_lines == 0 {
        return (Vec::new(), hints.len());
    }

    let mut kept: Vec<usize> = (0..hints.len()).collect();

    loop {
        let dropped = hints.len() - kept.len();
        if let Some(lines) = try_pack(hints, &kept, dropped, width, max_lines) {
            return (lines, dropped);
        }
        if kept.is_empty() {
            return (Vec::new(), hints.len());
        }

        // Drop the lowest priority hint; ties drop from the right.
        let victim = kept
            .iter()
            .enumerate()
            .rev()
            .min_by_key(|(_, idx)| hints[**idx].priority)
            .map(|(pos, _)| pos)
            .unwrap_or(kept.len() - 1);
        kept.remove(victim);
    }
}

fn try_pack(
    hints: &[ActionHint],
    kept: &[usize],
    dropped: usize,
    width: usize,
    max_lines: usize,
) -> Option<Vec<Vec<usize>>> {
    let mut lines: Vec<Vec<usize>> = vec![Vec::new()];
    let mut used = 0usize;
    let trailer = if dropped > 0 {
        SEPARATOR_WIDTH + more_indicator(dropped).chars().count()
    } else {
        0
    };

    for &idx in kept {
        let gap = if used == 0 { 0 } else { SEPARATOR_WIDTH };
        let needed = hints[idx].width();

        if used + gap + needed <= width {
            used += gap + needed;
        } else if lines.len() < max_lines && needed <= width {
            lines.push(Vec::new());
            used = needed;
        } else {
            return None;
        }
        if let Some(line) = lines.last_mut() {
            line.push(idx);
        }
    }

    // The marker rides on the last line.
    if trailer > 0 && used + trailer > width {
        return None;
    }

    Some(lines)
}

fn hint_spans(hint: &ActionHint) -> Vec<Span<'static>> {
    let (key_style, label_style) = if hint.enabled {
        (
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default(),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let mut spans = vec![Span::styled(format!("[{}]", hint.key), key_style)];
    if !hint.label.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(hint.label.clone(), label_style));
    }
    spans
}

pub fn render_action_bar(frame: &mut Frame, area: Rect, hints: &[ActionHint]) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let max_lines = inner.height.min(2) as usize;
    let (lines, dropped) = fit_hints(hints, inner.width as usize, max_lines);

    let mut rendered: Vec<Line> = Vec::new();
    for (line_no, indices) in lines.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        for (pos, &idx) in indices.iter().enumerate() {
            if pos > 0 {
                spans.push(Span::raw("  "));
            }
            spans.extend(hint_spans(&hints[idx]));
        }
        if dropped > 0 && line_no == lines.len() - 1 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                more_indicator(dropped),
                Style::default().fg(Color::DarkGray),
            ));
        }
        rendered.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(rendered).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Replace the hint row with a status message (toast, progress line).
pub fn render_action_bar_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let paragraph = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Key-padded hint listing for the help overlay.
pub fn format_help_lines(hints: &[ActionHint]) -> Vec<String> {
    let key_width = hints
        .iter()
        .map(|hint| hint.key.chars().count())
        .max()
        .unwrap_or(0);
    hints
        .iter()
        .map(|hint| {
            let padding = key_width.saturating_sub(hint.key.chars().count());
            format!("  {}{}  {}", hint.key, " ".repeat(padding), hint.label)
        })
        .collect()
}
