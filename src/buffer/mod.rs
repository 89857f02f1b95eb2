//! Buffer module: the cell grid views draw into.
//!
//! A deliberately small surface: a row-major grid of styled cells with
//! clamped rectangle fills. The layout engine hands views signed rects;
//! anything degenerate (negative or off-grid) dies quietly at this boundary.

mod buffer;
mod cell;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers, Rgb};
