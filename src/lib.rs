//! # Slat
//!
//! A visibility-aware flex layout engine for terminal UIs.
//!
//! Slat arranges a sequence of child views along one axis of a rectangular
//! viewport. Each child is either fixed-size or proportionally sized, and any
//! child may be hidden at layout time. When a hidden child has designated
//! *consumer* siblings, its space (fixed and proportional) is redistributed
//! to them exactly, with no integer-rounding drift across repeated layouts.
//!
//! ## Core Concepts
//!
//! - **Two-pass layout**: a provisional pass probes each child's visibility
//!   honestly (children may decide based on their provisional rect), then an
//!   allocation pass partitions the container extent exactly among visible
//!   children.
//! - **Consumption groups**: per-item lists of siblings that absorb a hidden
//!   item's space. Proportions are scaled by the least common multiple of
//!   group sizes so every split is exact.
//! - **Stateless passes**: every layout is recomputed from the registry and
//!   current visibility; nothing is cached between draws.
//!
//! ## Example
//!
//! ```rust,ignore
//! use slat::{Flex, Label, Rect};
//!
//! let mut flex = Flex::row();
//! let _side = flex.add_item(Label::new("side"), 0, 1, false);
//! let main = flex.add_item(Label::new("main"), 0, 2, true);
//! // When `main` hides, the first item absorbs its share.
//! flex.set_consumers(main, &[0]);
//! let placements = flex.layout(Rect::new(0, 0, 90, 24));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod event;
pub mod flex;
pub mod layout;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use event::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
pub use flex::{Direction, Flex, ItemId, Placement};
pub use layout::{scale_factor, solve, ItemSpec, Rect, Slot};
pub use view::{Label, View};
