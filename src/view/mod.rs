//! View trait: the capability interface every child of a container implements.
//!
//! Composition over inheritance: a container never knows a child's concrete
//! type, only this trait. Visibility in particular is a capability supplied
//! by the child and queried fresh on every layout pass — a view may decide
//! it is invisible based on the provisional rect it was just handed.

use crate::buffer::{Buffer, Cell, Rgb};
use crate::event::{InputEvent, MouseEvent};
use crate::layout::Rect;

/// A UI component that can be laid out, drawn, and routed events.
///
/// Containers call these capabilities; they never construct them. Default
/// implementations make a minimal static view a one-method impl.
pub trait View {
    /// Whether this view should currently be shown.
    ///
    /// Queried during every layout pass, after the provisional rect has
    /// been assigned; never cached by the caller.
    fn is_visible(&self) -> bool {
        true
    }

    /// Whether this view (or any of its descendants) holds focus.
    fn has_focus(&self) -> bool {
        false
    }

    /// Get the current bounds of this view.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this view.
    ///
    /// Called twice per layout pass: once with the provisional rect (so the
    /// visibility query is honest), and again with the final placement if
    /// the view is visible.
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this view into the buffer, within its bounds.
    ///
    /// Takes `&mut self` because containers recompute their layout here;
    /// leaf views typically only read their state.
    fn draw(&mut self, buffer: &mut Buffer);

    /// Accept focus. Containers delegate here for their focus-attracting
    /// child; hidden views are never offered focus.
    fn focus(&mut self) {}

    /// Release focus.
    fn blur(&mut self) {}

    /// Handle a keyboard input event.
    ///
    /// Returns `true` if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let _ = event;
        false
    }

    /// Handle a mouse event.
    ///
    /// Returns `true` if the event was consumed.
    fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        let _ = event;
        false
    }
}

/// A minimal leaf view: one line of text with a settable visibility flag.
///
/// Mostly useful for demos and as the simplest possible `View` impl; real
/// applications implement [`View`] on their own widgets.
#[derive(Debug)]
pub struct Label {
    text: String,
    fg: Rgb,
    bg: Rgb,
    bounds: Rect,
    visible: bool,
    focused: bool,
}

impl Label {
    /// Create a new visible label with default colors.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            bounds: Rect::ZERO,
            visible: true,
            focused: false,
        }
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub const fn with_colors(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show or hide the label.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl View for Label {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&mut self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.bg));
        if self.bounds.is_empty() {
            return;
        }
        // Clip to the label's own slot, not just the buffer edge.
        let mut col = self.bounds.x;
        for ch in self.text.chars() {
            let width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if col + width > self.bounds.right() {
                break;
            }
            buffer.set(col, self.bounds.y, Cell::new(ch).with_fg(self.fg).with_bg(self.bg));
            col += width;
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_visibility_flag() {
        let mut label = Label::new("hi");
        assert!(label.is_visible());
        label.set_visible(false);
        assert!(!label.is_visible());
    }

    #[test]
    fn test_label_focus() {
        let mut label = Label::new("hi");
        assert!(!label.has_focus());
        label.focus();
        assert!(label.has_focus());
        label.blur();
        assert!(!label.has_focus());
    }

    #[test]
    fn test_label_draw_within_bounds() {
        let mut label = Label::new("abc");
        label.set_bounds(Rect::new(2, 1, 10, 1));
        let mut buffer = Buffer::new(20, 3);
        label.draw(&mut buffer);
        assert_eq!(buffer.get(2, 1).unwrap().ch, 'a');
        assert_eq!(buffer.get(4, 1).unwrap().ch, 'c');
        assert_eq!(buffer.get(2, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_label_draw_clips_to_bounds() {
        let mut label = Label::new("overflowing");
        label.set_bounds(Rect::new(0, 0, 4, 1));
        let mut buffer = Buffer::new(20, 1);
        label.draw(&mut buffer);
        assert_eq!(buffer.get(3, 0).unwrap().ch, 'r');
        // The neighboring slot stays untouched
        assert_eq!(buffer.get(4, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_label_draw_degenerate_bounds() {
        let mut label = Label::new("abc");
        label.set_bounds(Rect::new(0, 0, -5, 1));
        let mut buffer = Buffer::new(20, 3);
        label.draw(&mut buffer); // Must not write or panic
        assert_eq!(buffer.get(0, 0).unwrap().ch, ' ');
    }
}
