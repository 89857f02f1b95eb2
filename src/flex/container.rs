//! The `Flex` container and its item registry.

use crate::buffer::{Buffer, Cell, Rgb};
use crate::event::{InputEvent, MouseEvent};
use crate::layout::{solve, ItemSpec, Rect, Slot};
use crate::view::View;
use tracing::trace;

/// Unique identifier for an item within a [`Flex`].
///
/// Minted by [`Flex::add_item`]; all by-identity registry operations take
/// one. Ids are never reused within a container's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ItemId(u32);

/// The axis along which a [`Flex`] distributes space.
///
/// The cross axis is always fully spanned by every visible child.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// Children sit side by side; the distributable axis is horizontal.
    Row,
    /// Children stack top to bottom; the distributable axis is vertical.
    Column,
}

/// The final rect assigned to one visible item for one layout pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    /// The item the rect belongs to.
    pub id: ItemId,
    /// Position and size within the container's coordinate space.
    pub rect: Rect,
}

/// One registry entry: the item fields and its consumer list, fused into a
/// single record so the two can never fall out of lockstep.
struct Entry {
    id: ItemId,
    view: Option<Box<dyn View>>,
    fixed: i32,
    proportion: i64,
    attracts_focus: bool,
    consumers: Vec<usize>,
}

/// A single-axis container with visibility-aware space redistribution.
///
/// Every layout pass is recomputed from scratch: item configuration and
/// current visibility in, placements out. Nothing persists between passes,
/// so two passes with the same inputs produce identical placements.
pub struct Flex {
    entries: Vec<Entry>,
    direction: Direction,
    bounds: Rect,
    background: Rgb,
    visibility: Option<Box<dyn Fn() -> bool>>,
    next_id: u32,
}

impl Flex {
    /// Create an empty container distributing along the given axis.
    pub const fn new(direction: Direction) -> Self {
        Self {
            entries: Vec::new(),
            direction,
            bounds: Rect::ZERO,
            background: Rgb::DEFAULT_BG,
            visibility: None,
            next_id: 0,
        }
    }

    /// Create an empty row container (horizontal primary axis).
    pub const fn row() -> Self {
        Self::new(Direction::Row)
    }

    /// Create an empty column container (vertical primary axis).
    pub const fn column() -> Self {
        Self::new(Direction::Column)
    }

    /// Change the distribution axis.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Get the distribution axis.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the background color used for the fill before children draw.
    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    /// Supply the container's own visibility predicate.
    ///
    /// Evaluated fresh on every draw and whenever a parent container probes
    /// this one during layout; never cached. Without a predicate the
    /// container is always visible.
    pub fn set_visibility(&mut self, predicate: impl Fn() -> bool + 'static) {
        self.visibility = Some(Box::new(predicate));
    }

    /// Number of items (including spacers).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the container has no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a child view.
    ///
    /// `fixed` is the item's fixed size along the primary axis (0 = size by
    /// proportion); `proportion` is its weight when `fixed == 0`; an item
    /// with both zero receives zero size. `attracts_focus` marks the item a
    /// candidate for focus delegation.
    ///
    /// Returns the item's id for later registry operations.
    pub fn add_item(
        &mut self,
        view: impl View + 'static,
        fixed: i32,
        proportion: i64,
        attracts_focus: bool,
    ) -> ItemId {
        self.push_entry(Some(Box::new(view)), fixed, proportion, attracts_focus)
    }

    /// Append an empty spacer item.
    ///
    /// Spacers occupy space like any other item but have no content: they
    /// are always visible, never donate, and draw nothing but background.
    pub fn add_spacer(&mut self, fixed: i32, proportion: i64) -> ItemId {
        self.push_entry(None, fixed, proportion, false)
    }

    fn push_entry(
        &mut self,
        view: Option<Box<dyn View>>,
        fixed: i32,
        proportion: i64,
        attracts_focus: bool,
    ) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            view,
            fixed,
            proportion,
            attracts_focus,
            consumers: Vec::new(),
        });
        id
    }

    /// Remove every entry with the given id, preserving the order of the
    /// rest. Consumer lists of surviving items are not rewritten; indices
    /// that now dangle are skipped at layout time.
    pub fn remove_item(&mut self, id: ItemId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change an existing item's sizing in place.
    pub fn resize_item(&mut self, id: ItemId, fixed: i32, proportion: i64) {
        for entry in &mut self.entries {
            if entry.id == id {
                entry.fixed = fixed;
                entry.proportion = proportion;
            }
        }
    }

    /// Replace the consumer list for an item.
    ///
    /// Consumers are positional indices of siblings that absorb the item's
    /// space when it is hidden. Self-references and indices beyond the
    /// current item count are rejected (filtered out) here; removals may
    /// still leave accepted indices dangling later, and those are skipped
    /// during layout.
    pub fn set_consumers(&mut self, id: ItemId, consumers: &[usize]) {
        let count = self.entries.len();
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries[position].consumers = consumers
                .iter()
                .copied()
                .filter(|&index| index < count && index != position)
                .collect();
        }
    }

    /// Compute the layout for the given container rect.
    ///
    /// Runs both passes of the solver, assigns provisional rects so each
    /// child's visibility is probed honestly, then assigns final rects to
    /// visible children and returns their placements in item order. Hidden
    /// children receive no placement. The computation is stateless: calling
    /// it again with unchanged items and visibility yields identical output.
    pub fn layout(&mut self, area: Rect) -> Vec<Placement> {
        self.bounds = area;
        let direction = self.direction;
        let extent = match direction {
            Direction::Row => area.width,
            Direction::Column => area.height,
        };
        trace!(?direction, extent, items = self.entries.len(), "flex layout");

        let slots = self.solve_entries(area, extent);
        let mut placements = Vec::new();
        for (entry, slot) in self.entries.iter_mut().zip(&slots) {
            if !slot.visible {
                continue;
            }
            let rect = slot_rect(direction, area, slot.offset, slot.size);
            if let Some(view) = entry.view.as_mut() {
                view.set_bounds(rect);
            }
            placements.push(Placement { id: entry.id, rect });
        }
        placements
    }

    /// Solved slots along the primary axis, one per item.
    ///
    /// Like [`Flex::layout`] but without assigning final rects; useful for
    /// inspecting what each item (hidden ones included) was given.
    pub fn layout_slots(&mut self, area: Rect) -> Vec<Slot> {
        self.bounds = area;
        let extent = match self.direction {
            Direction::Row => area.width,
            Direction::Column => area.height,
        };
        self.solve_entries(area, extent)
    }

    /// Run both solver passes, assigning provisional rects so visibility is
    /// probed honestly.
    fn solve_entries(&mut self, area: Rect, extent: i32) -> Vec<Slot> {
        let direction = self.direction;
        let specs: Vec<ItemSpec> = self
            .entries
            .iter()
            .map(|entry| ItemSpec {
                fixed: entry.fixed,
                proportion: entry.proportion,
                consumers: entry.consumers.clone(),
            })
            .collect();

        let entries = &mut self.entries;
        solve(&specs, extent, |index, offset, size| {
            match entries[index].view.as_mut() {
                Some(view) => {
                    view.set_bounds(slot_rect(direction, area, offset, size));
                    view.is_visible()
                }
                // A spacer has nothing to ask; it always occupies its slot.
                None => true,
            }
        })
    }
}

/// Translate a primary-axis slot into a rect; the cross axis always spans
/// the full container extent.
const fn slot_rect(direction: Direction, area: Rect, offset: i32, size: i32) -> Rect {
    match direction {
        Direction::Row => Rect::new(area.x + offset, area.y, size, area.height),
        Direction::Column => Rect::new(area.x, area.y + offset, area.width, size),
    }
}

impl View for Flex {
    fn is_visible(&self) -> bool {
        self.visibility.as_ref().map_or(true, |predicate| predicate())
    }

    fn has_focus(&self) -> bool {
        self.entries
            .iter()
            .filter_map(|entry| entry.view.as_deref())
            .any(|view| view.has_focus())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&mut self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.background));
        if !self.is_visible() {
            return;
        }

        let placements = self.layout(self.bounds);

        // Draw the focused child last so its cursor/highlight wins.
        let mut deferred = None;
        for placement in &placements {
            if let Some(view) = self.view_by_id(placement.id) {
                if view.has_focus() {
                    deferred = Some(placement.id);
                } else {
                    view.draw(buffer);
                }
            }
        }
        if let Some(id) = deferred {
            if let Some(view) = self.view_by_id(id) {
                view.draw(buffer);
            }
        }
    }

    /// Delegate focus to the first visible focus-attracting child.
    ///
    /// Hidden children never receive focus, which closes the door on a
    /// hidden element silently holding the keyboard.
    fn focus(&mut self) {
        for entry in &mut self.entries {
            if !entry.attracts_focus {
                continue;
            }
            if let Some(view) = entry.view.as_mut() {
                if view.is_visible() {
                    view.focus();
                    return;
                }
            }
        }
    }

    fn blur(&mut self) {
        for entry in &mut self.entries {
            if let Some(view) = entry.view.as_mut() {
                view.blur();
            }
        }
    }

    /// Route a keyboard event to the focused child.
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        for entry in &mut self.entries {
            if let Some(view) = entry.view.as_mut() {
                if view.has_focus() {
                    return view.handle_input(event);
                }
            }
        }
        false
    }

    /// Offer a mouse event to visible children in order until one consumes
    /// it. Events outside the container's bounds are ignored.
    fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        if !self.bounds.contains(event.x, event.y) {
            return false;
        }
        for entry in &mut self.entries {
            if let Some(view) = entry.view.as_mut() {
                if view.is_visible() && view.handle_mouse(event) {
                    return true;
                }
            }
        }
        false
    }
}

impl Flex {
    fn view_by_id(&mut self, id: ItemId) -> Option<&mut Box<dyn View>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.view.as_mut())
    }
}

impl std::fmt::Debug for Flex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flex")
            .field("direction", &self.direction)
            .field("bounds", &self.bounds)
            .field("items", &self.entries.len())
            .finish()
    }
}
