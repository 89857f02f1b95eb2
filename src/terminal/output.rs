//! `OutputBuffer`: accumulates a frame's ANSI bytes for a single write.

use crate::buffer::{Buffer, Modifiers, Rgb};
use std::io::Write;

/// Byte buffer a whole frame of escape sequences is built into.
///
/// Emitting the frame as one `write()` keeps partially drawn frames off the
/// screen.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// An output buffer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// An output buffer sized for a typical frame (16KB).
    pub fn new() -> Self {
        Self::with_capacity(16 * 1024)
    }

    /// Drop the accumulated bytes so the buffer can take the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The accumulated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of accumulated bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been accumulated yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Emit a cursor move to a 0-indexed (x, y); ANSI itself is 1-indexed.
    #[inline]
    #[allow(clippy::missing_panics_doc)] // Vec writes are infallible
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Emit a true-color foreground sequence.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Emit a true-color background sequence.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Emit the attribute sequences for a modifier set, resetting first.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.reset_attrs();
        if modifiers.contains(Modifiers::BOLD) {
            self.data.extend_from_slice(b"\x1b[1m");
        }
        if modifiers.contains(Modifiers::DIM) {
            self.data.extend_from_slice(b"\x1b[2m");
        }
        if modifiers.contains(Modifiers::ITALIC) {
            self.data.extend_from_slice(b"\x1b[3m");
        }
        if modifiers.contains(Modifiers::UNDERLINE) {
            self.data.extend_from_slice(b"\x1b[4m");
        }
        if modifiers.contains(Modifiers::REVERSED) {
            self.data.extend_from_slice(b"\x1b[7m");
        }
    }

    /// Emit an attribute reset.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Emit a full frame from a cell grid.
    ///
    /// Each row starts with a cursor move; colors and modifiers are only
    /// re-emitted when they change between adjacent cells.
    pub fn render_frame(&mut self, buffer: &Buffer) {
        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_modifiers = None;
        let mut scratch = [0u8; 4];

        for (y, row) in buffer.rows().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            self.cursor_move(0, y as u16);
            for cell in row {
                if last_modifiers != Some(cell.modifiers) {
                    self.set_modifiers(cell.modifiers);
                    last_modifiers = Some(cell.modifiers);
                    // Attribute reset clobbers colors
                    last_fg = None;
                    last_bg = None;
                }
                if last_fg != Some(cell.fg) {
                    self.set_fg(cell.fg);
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    self.set_bg(cell.bg);
                    last_bg = Some(cell.bg);
                }
                self.data
                    .extend_from_slice(cell.ch.encode_utf8(&mut scratch).as_bytes());
            }
        }
        self.reset_attrs();
    }

    /// Hand the accumulated frame to a writer as one write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_render_frame_contains_cells() {
        let mut buffer = Buffer::new(3, 1);
        buffer.set(0, 0, Cell::new('a'));
        buffer.set(1, 0, Cell::new('b'));
        let mut out = OutputBuffer::new();
        out.render_frame(&buffer);
        let text = String::from_utf8_lossy(out.as_bytes()).into_owned();
        assert!(text.contains("ab "));
    }

    #[test]
    fn test_render_frame_skips_redundant_colors() {
        let mut buffer = Buffer::new(4, 1);
        for x in 0..4 {
            buffer.set(x, 0, Cell::new('x'));
        }
        let mut out = OutputBuffer::new();
        out.render_frame(&buffer);
        let text = String::from_utf8_lossy(out.as_bytes()).into_owned();
        // One fg sequence for the whole identical run
        assert_eq!(text.matches("\x1b[38;2;").count(), 1);
    }
}
