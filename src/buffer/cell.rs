//! Cell: one styled character of terminal output.

use bitflags::bitflags;

/// A 24-bit color.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Foreground used when nothing else is specified.
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Background used when nothing else is specified.
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Build a color from a packed 24-bit value, e.g. `0xFF5500`.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text attributes, combinable with bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold.
        const BOLD = 0b0000_0001;
        /// Dim/faint.
        const DIM = 0b0000_0010;
        /// Italic.
        const ITALIC = 0b0000_0100;
        /// Underlined.
        const UNDERLINE = 0b0000_1000;
        /// Foreground and background swapped.
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// One character plus its colors and attributes.
///
/// A plain `char` is enough here: this crate lays out and fills rectangles,
/// it does not edit text, so grapheme clusters never need to share a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The character shown in this cell.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text attributes.
    pub modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A space with default colors and no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// A cell showing `ch` with default colors.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Columns this cell's character occupies (0 for control, 2 for wide CJK).
    #[inline]
    pub fn width(&self) -> usize {
        unicode_width::UnicodeWidthChar::width(self.ch).unwrap_or(0)
    }

    /// Replace the foreground color, consuming self.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background color, consuming self.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Replace the attributes, consuming self.
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Restore the cell to [`Cell::EMPTY`].
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_packed_hex() {
        let orange: Rgb = 0xFF8000.into();
        assert_eq!(orange, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_cell_builders_compose() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::ITALIC);

        assert_eq!(cell.fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.bg, Rgb::new(0, 0, 255));
        assert!(cell.modifiers.contains(Modifiers::BOLD | Modifiers::ITALIC));
    }

    #[test]
    fn test_cell_width() {
        assert_eq!(Cell::new('A').width(), 1);
        assert_eq!(Cell::new('日').width(), 2);
    }

    #[test]
    fn test_cell_reset_restores_empty() {
        let mut cell = Cell::new('X').with_fg(Rgb::new(255, 0, 0));
        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }
}
