//! Buffer: the cell grid views draw into.
//!
//! The grid itself is unsigned and row-major; the signed [`Rect`]
//! coordinates coming out of layout are clamped here, so degenerate layout
//! output is harmless by construction.

use super::cell::{Cell, Rgb};
use crate::layout::Rect;

/// A row-major grid of styled cells.
///
/// Zero-sized grids are legal (a terminal resized to nothing) and simply
/// absorb all writes.
#[derive(Clone)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Allocate a grid of the given dimensions, every cell empty.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::EMPTY; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The whole grid as a layout rect.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Linear index for signed (x, y), or `None` for anything off the grid,
    /// including the negative coordinates degenerate layouts can produce.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// The cell at (x, y), or `None` off the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at (x, y), or `None` off the grid.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Store a cell at (x, y). Off-grid writes are dropped.
    ///
    /// Returns `false` when the coordinates were off the grid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write a string starting at (x, y), advancing by display width.
    ///
    /// Wide characters advance two columns and the skipped column keeps its
    /// previous content. Writing stops at the right edge of the grid.
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Rgb, bg: Rgb) {
        let mut col = x;
        for ch in s.chars() {
            let advance = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
            if advance == 0 {
                continue;
            }
            if col >= i32::from(self.width) {
                break;
            }
            self.set(col, y, Cell::new(ch).with_fg(fg).with_bg(bg));
            col += advance;
        }
    }

    /// Fill a rectangular region with a cell, clamped to the grid.
    ///
    /// Empty or degenerate rects (zero or negative sizes) fill nothing.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        if rect.is_empty() {
            return;
        }
        let left = rect.x.max(0);
        let top = rect.y.max(0);
        let right = rect.right().min(i32::from(self.width));
        let bottom = rect.bottom().min(i32::from(self.height));
        for y in top..bottom {
            for x in left..right {
                if let Some(idx) = self.index_of(x, y) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Change the grid dimensions, keeping the overlapping region's content.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut resized = vec![Cell::EMPTY; (new_width as usize) * (new_height as usize)];
        let keep_cols = self.width.min(new_width) as usize;
        let keep_rows = self.height.min(new_height) as usize;

        for y in 0..keep_rows {
            let src = y * (self.width as usize);
            let dst = y * (new_width as usize);
            resized[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }

        self.cells = resized;
        self.width = new_width;
        self.height = new_height;
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
