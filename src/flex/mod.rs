//! Flex container: single-axis layout with visibility-aware redistribution.
//!
//! A [`Flex`] arranges child views along one axis. Each child is either
//! fixed-size or proportionally sized, and any child may declare *consumer*
//! siblings that absorb its space when it hides itself. The container is the
//! boundary adapter around the pure solver in [`crate::layout`]: it owns the
//! item registry, translates solved slots into child rects, and routes
//! focus, keyboard, and mouse events.
//!
//! # Example
//!
//! ```rust,ignore
//! use slat::{Flex, Label, Rect};
//!
//! let mut sidebar = Flex::column();
//! sidebar.add_item(Label::new("files"), 0, 1, true);
//! sidebar.add_item(Label::new("outline"), 0, 1, false);
//!
//! let mut root = Flex::row();
//! let side = root.add_item(sidebar, 30, 0, true);
//! root.add_item(Label::new("editor"), 0, 1, false);
//! // If the sidebar hides, the editor takes its 30 columns.
//! root.set_consumers(side, &[1]);
//! ```

mod container;

pub use container::{Direction, Flex, ItemId, Placement};
