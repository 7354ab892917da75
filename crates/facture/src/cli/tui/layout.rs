//! Viewport classification for responsive layout
//!
//! Narrow terminals lose the worklist DIMENSIONS column; narrow or short
//! ones collapse the cockpit to the form pane alone.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Short,
    Normal,
}

/// Width below which the full worklist column set no longer fits.
const NARROW_WIDTH: u16 = 108;

/// Height below which the preview pane is not worth its rows.
const SHORT_HEIGHT: u16 = 24;

pub fn viewport_class(area: Rect) -> ViewportClass {
    if area.width < NARROW_WIDTH {
        ViewportClass::Narrow
    } else if area.height < SHORT_HEIGHT {
        ViewportClass::Short
    } else {
        ViewportClass::Normal
    }
}

/// True when the cockpit should drop the document preview pane.
pub fn form_only(class: ViewportClass) -> bool {
    !matches!(class, ViewportClass::Normal)
}
