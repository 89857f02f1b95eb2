//! Layout module: geometry and the two-pass space-distribution solver.
//!
//! The solver is pure: it works on plain per-item sizing specs plus a
//! visibility probe, and emits one slot per item along the primary axis.
//! Containers translate slots into child rects; nothing in here touches
//! views or the terminal.

mod rect;
mod scale;
mod solve;

pub use rect::Rect;
pub use scale::scale_factor;
pub use solve::{solve, ItemSpec, Slot};
