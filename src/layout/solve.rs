//! Two-pass solver: redistribution then allocation.
//!
//! The solver is the whole reason this crate exists. Given per-item sizing
//! specs, a container extent, and a visibility probe, it produces one slot
//! per item along the primary axis such that:
//!
//! - visible items partition the distributable extent exactly (no gaps, no
//!   overlaps, no rounding loss);
//! - a hidden item's space (fixed and proportional) is split evenly across
//!   its consumer siblings, remainder units going to the first consumers in
//!   list order;
//! - a hidden item with no consumers simply drops its share;
//! - the result is deterministic and idempotent for a given visibility state.
//!
//! Pass 1 walks items in order, provisionally sizing each one with a running
//! largest-remainder method, and probes visibility *after* assigning the
//! provisional slot, so a child whose visibility depends on its own size is
//! answered honestly. Hidden donors' shares are accumulated into per-consumer
//! delta arrays. Pass 2 re-walks with the deltas applied and emits final
//! slots for visible items only.

use super::scale::scale_factor;
use tracing::trace;

/// Per-item sizing input for the solver.
///
/// Exactly one of `fixed > 0` or `proportion > 0` determines how the item
/// competes for space; an item with both zero receives zero size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSpec {
    /// Fixed size along the primary axis; `0` means "size by proportion".
    pub fixed: i32,
    /// Proportional weight, used when `fixed == 0`.
    pub proportion: i64,
    /// Indices of siblings that absorb this item's space when it is hidden.
    /// Empty means the space is dropped, not redistributed.
    pub consumers: Vec<usize>,
}

impl ItemSpec {
    /// A fixed-size item.
    pub const fn fixed(size: i32) -> Self {
        Self {
            fixed: size,
            proportion: 0,
            consumers: Vec::new(),
        }
    }

    /// A proportionally-sized item.
    pub const fn weighted(proportion: i64) -> Self {
        Self {
            fixed: 0,
            proportion,
            consumers: Vec::new(),
        }
    }

    /// Attach a consumer list (builder pattern).
    #[must_use]
    pub fn with_consumers(mut self, consumers: Vec<usize>) -> Self {
        self.consumers = consumers;
        self
    }
}

/// One solved slot along the primary axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Offset from the container origin along the primary axis.
    pub offset: i32,
    /// Extent along the primary axis. Zero for hidden items.
    pub size: i32,
    /// Whether the item is visible and should receive a placement.
    pub visible: bool,
}

/// Split `total` into `parts` equal integer shares plus a remainder.
///
/// Returns `(per, rem)`: positions `< rem` in the consumer list receive one
/// extra unit, making the split deterministic with a list-order tie-break.
const fn split_even(total: i64, parts: i64) -> (i64, i64) {
    (total / parts, total % parts)
}

/// Run both layout passes over `specs` for a container of `extent` cells.
///
/// `probe(index, offset, size)` is called once per item during pass 1 with
/// the item's provisional slot, and must return the item's current
/// visibility. Callers typically assign the provisional rect to the child
/// and then ask the child itself.
///
/// The solver never fails: degenerate inputs (zero or negative extent, zero
/// proportion sum, consumer indices that reference removed items) degrade to
/// zero-sized or dropped slots rather than errors.
#[allow(clippy::cast_possible_truncation)]
pub fn solve<F>(specs: &[ItemSpec], extent: i32, mut probe: F) -> Vec<Slot>
where
    F: FnMut(usize, i32, i32) -> bool,
{
    let scale = scale_factor(specs.iter().map(|s| s.consumers.len()));
    trace!(scale, extent, items = specs.len(), "layout pass");

    // How much space can we distribute? Fixed items always reserve their
    // size, hidden or not: a hidden fixed item with no consumers wastes its
    // reservation rather than returning it to the pool.
    let mut dist_size = i64::from(extent);
    let mut proportion_sum: i64 = 0;
    for spec in specs {
        if spec.fixed > 0 {
            dist_size -= i64::from(spec.fixed);
        } else {
            proportion_sum += spec.proportion * scale;
        }
    }

    // Pass 1: provisional sizes, honest visibility, consumer deltas.
    let mut proportion_delta = vec![0i64; specs.len()];
    let mut fixed_delta = vec![0i64; specs.len()];
    let mut visible = vec![true; specs.len()];
    let mut proportion_left = proportion_sum;
    let mut dist_left = dist_size;
    let mut pos: i64 = 0;

    for (i, spec) in specs.iter().enumerate() {
        let mut size = i64::from(spec.fixed);
        if spec.fixed <= 0 {
            if proportion_left > 0 {
                // Running largest-remainder: the share is recomputed against
                // what is left, so the provisional sizes sum to dist_size.
                size = dist_left * spec.proportion * scale / proportion_left;
                dist_left -= size;
                proportion_left -= spec.proportion * scale;
            } else {
                size = 0;
            }
        }

        visible[i] = probe(i, pos as i32, size as i32);

        if !visible[i] && !spec.consumers.is_empty() {
            let parts = spec.consumers.len() as i64;
            // With `scale` the LCM of all group sizes, the proportional
            // split is exact; the remainder path still covers fixed sizes.
            let (prop_per, prop_rem) = split_even(spec.proportion * scale, parts);
            let (fixed_per, fixed_rem) = split_even(i64::from(spec.fixed), parts);
            trace!(donor = i, prop_per, fixed_per, fixed_rem, "redistributing hidden item");
            for (slot, &consumer) in spec.consumers.iter().enumerate() {
                // Removals can leave dangling indices; skip them silently.
                if consumer >= specs.len() {
                    continue;
                }
                let slot = slot as i64;
                proportion_delta[consumer] += prop_per + i64::from(slot < prop_rem);
                fixed_delta[consumer] += fixed_per + i64::from(slot < fixed_rem);
            }
        }

        pos += size;
    }

    // Pass 2: apply deltas and emit final slots. Hidden items keep their
    // undonated weight in `proportion_left`, so their share is dropped
    // rather than silently flowing to whoever comes last.
    let mut slots = Vec::with_capacity(specs.len());
    proportion_left = proportion_sum;
    dist_left = dist_size;
    pos = 0;

    for (i, spec) in specs.iter().enumerate() {
        let mut size = i64::from(spec.fixed) + fixed_delta[i];
        let weight = spec.proportion * scale + proportion_delta[i];
        if visible[i] && proportion_left > 0 {
            let share = dist_left * weight / proportion_left;
            dist_left -= share;
            proportion_left -= weight;
            size += share;
        }

        if visible[i] {
            slots.push(Slot {
                offset: pos as i32,
                size: size as i32,
                visible: true,
            });
            // The running position only advances past items that are drawn.
            pos += size;
        } else {
            slots.push(Slot {
                offset: pos as i32,
                size: 0,
                visible: false,
            });
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe that reports every item visible.
    fn all_visible(_: usize, _: i32, _: i32) -> bool {
        true
    }

    /// Probe that hides the listed indices.
    fn hide(hidden: &[usize]) -> impl FnMut(usize, i32, i32) -> bool + '_ {
        move |i, _, _| !hidden.contains(&i)
    }

    fn sizes(slots: &[Slot]) -> Vec<i32> {
        slots.iter().map(|s| s.size).collect()
    }

    #[test]
    fn test_exact_partition() {
        // Adversarial extent: 100 does not divide by 3.
        let specs = vec![ItemSpec::weighted(1), ItemSpec::weighted(1), ItemSpec::weighted(1)];
        let slots = solve(&specs, 100, all_visible);
        let total: i32 = slots.iter().map(|s| s.size).sum();
        assert_eq!(total, 100);
        assert_eq!(sizes(&slots), vec![33, 33, 34]);
    }

    #[test]
    fn test_exact_partition_no_gaps_no_overlaps() {
        let specs = vec![
            ItemSpec::weighted(3),
            ItemSpec::fixed(7),
            ItemSpec::weighted(2),
            ItemSpec::weighted(5),
        ];
        let slots = solve(&specs, 97, all_visible);
        let mut pos = 0;
        for slot in &slots {
            assert_eq!(slot.offset, pos);
            pos += slot.size;
        }
        assert_eq!(pos, 97);
    }

    #[test]
    fn test_proportional_scenario() {
        // Extent 90: A(prop=1) gets 30, B(prop=2) gets 60.
        let specs = vec![ItemSpec::weighted(1), ItemSpec::weighted(2)];
        let slots = solve(&specs, 90, all_visible);
        assert_eq!(sizes(&slots), vec![30, 60]);
    }

    #[test]
    fn test_hidden_with_consumer_inherits_everything() {
        // B hides, A consumes; A is the only visible item and takes all 90.
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(2).with_consumers(vec![0]),
        ];
        let slots = solve(&specs, 90, hide(&[1]));
        assert_eq!(slots[0], Slot { offset: 0, size: 90, visible: true });
        assert!(!slots[1].visible);
        assert_eq!(slots[1].size, 0);
    }

    #[test]
    fn test_single_consumer_gains_exact_weight() {
        // Donor prop=2 with one consumer among three items: the consumer's
        // effective weight rises by exactly 2 base units.
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(2).with_consumers(vec![0]),
            ItemSpec::weighted(1),
        ];
        let slots = solve(&specs, 80, hide(&[1]));
        // Weights after donation: A=3, C=1 of a live total 4 (80 -> 60/20).
        assert_eq!(slots[0].size, 60);
        assert_eq!(slots[2].size, 20);
        assert_eq!(slots[2].offset, 60);
    }

    #[test]
    fn test_two_consumers_split_exactly() {
        // Two consumers force the scale factor to 2, so the donated
        // proportion splits without loss.
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(1).with_consumers(vec![0, 2]),
            ItemSpec::weighted(1),
        ];
        let slots = solve(&specs, 90, hide(&[1]));
        assert_eq!(slots[0].size, 45);
        assert_eq!(slots[2].size, 45);
        assert_eq!(slots[2].offset, 45);
    }

    #[test]
    fn test_fixed_split_remainder_first_consumers() {
        // Donor fixed=5 across two consumers: first in list order gets 3.
        let specs = vec![
            ItemSpec::fixed(10),
            ItemSpec::fixed(5).with_consumers(vec![2, 0]),
            ItemSpec::fixed(10),
        ];
        let slots = solve(&specs, 25, hide(&[1]));
        assert_eq!(slots[2].size, 13); // First in the consumer list
        assert_eq!(slots[0].size, 12);
    }

    #[test]
    fn test_fixed_size_priority() {
        // A fixed item keeps its reservation no matter the sibling weights.
        let specs = vec![ItemSpec::fixed(10), ItemSpec::weighted(999)];
        let slots = solve(&specs, 50, all_visible);
        assert_eq!(slots[0].size, 10);
        assert_eq!(slots[1].size, 40);
    }

    #[test]
    fn test_no_consumer_drop() {
        // Hiding B with no consumers shrinks the total; nobody compensates.
        let specs = vec![ItemSpec::weighted(1), ItemSpec::weighted(1), ItemSpec::weighted(1)];
        let all = solve(&specs, 90, all_visible);
        let dropped = solve(&specs, 90, hide(&[1]));
        assert_eq!(sizes(&all), vec![30, 30, 30]);
        assert_eq!(dropped[0].size, 30);
        assert_eq!(dropped[2].size, 30);
        assert_eq!(dropped[2].offset, 30); // Closes the gap
        let total: i32 = dropped.iter().map(|s| s.size).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_hidden_fixed_no_consumers_wastes_reservation() {
        // A hidden fixed item keeps its reservation out of the pool.
        let specs = vec![ItemSpec::weighted(1), ItemSpec::fixed(30)];
        let slots = solve(&specs, 90, hide(&[1]));
        assert_eq!(slots[0].size, 60);
    }

    #[test]
    fn test_idempotence() {
        let specs = vec![
            ItemSpec::weighted(3).with_consumers(vec![1]),
            ItemSpec::weighted(2),
            ItemSpec::fixed(11).with_consumers(vec![0, 1]),
        ];
        let first = solve(&specs, 121, hide(&[2]));
        let second = solve(&specs, 121, hide(&[2]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_probe_sees_provisional_slots() {
        // The probe must be offered an honest provisional (offset, size)
        // before visibility is decided.
        let specs = vec![ItemSpec::weighted(1), ItemSpec::weighted(2)];
        let mut probed = Vec::new();
        solve(&specs, 90, |i, offset, size| {
            probed.push((i, offset, size));
            true
        });
        assert_eq!(probed, vec![(0, 0, 30), (1, 30, 60)]);
    }

    #[test]
    fn test_pass_one_position_advances_past_hidden() {
        // Provisional offsets accumulate over all items, hidden or not.
        let specs = vec![ItemSpec::fixed(10), ItemSpec::fixed(20), ItemSpec::fixed(5)];
        let mut probed = Vec::new();
        solve(&specs, 35, |i, offset, _| {
            probed.push((i, offset));
            i != 1
        });
        assert_eq!(probed, vec![(0, 0), (1, 10), (2, 30)]);
    }

    #[test]
    fn test_dangling_consumer_index_skipped() {
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(1).with_consumers(vec![7]),
        ];
        // Must not panic; the donated share is dropped.
        let slots = solve(&specs, 90, hide(&[1]));
        assert_eq!(slots[0].size, 45);
    }

    #[test]
    fn test_zero_extent() {
        let specs = vec![ItemSpec::weighted(1), ItemSpec::fixed(10)];
        let slots = solve(&specs, 0, all_visible);
        assert!(slots.iter().all(|s| s.size <= 0 || s.size == 10));
        assert_eq!(slots[1].size, 10);
    }

    #[test]
    fn test_negative_extent_degrades() {
        let specs = vec![ItemSpec::weighted(1), ItemSpec::weighted(1)];
        let slots = solve(&specs, -20, all_visible);
        // No panic; sizes are negative-but-unused and clamp downstream.
        assert!(slots.iter().all(|s| s.size <= 0));
    }

    #[test]
    fn test_all_fixed_no_proportions() {
        // proportion_sum == 0 is not an error; fixed items just stack.
        let specs = vec![ItemSpec::fixed(10), ItemSpec::fixed(20)];
        let slots = solve(&specs, 80, all_visible);
        assert_eq!(sizes(&slots), vec![10, 20]);
        assert_eq!(slots[1].offset, 10);
    }

    #[test]
    fn test_zero_fixed_zero_proportion_gets_nothing() {
        let specs = vec![ItemSpec::weighted(1), ItemSpec::default()];
        let slots = solve(&specs, 50, all_visible);
        assert_eq!(slots[0].size, 50);
        assert_eq!(slots[1].size, 0);
    }

    #[test]
    fn test_hidden_consumer_drops_inherited_space() {
        // B donates to C, but C is itself hidden (no consumers of its own):
        // the inherited space is dropped, not forwarded.
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(1).with_consumers(vec![2]),
            ItemSpec::weighted(1),
        ];
        let slots = solve(&specs, 90, hide(&[1, 2]));
        assert_eq!(slots[0].size, 30);
        assert!(!slots[1].visible);
        assert!(!slots[2].visible);
    }

    #[test]
    fn test_empty_specs() {
        let slots = solve(&[], 90, all_visible);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_lcm_prevents_rounding_loss() {
        // Proportion 2 consumed by 3 items: without scaling, 2/3 would
        // truncate to 0 per consumer and lose the donor's entire weight.
        let specs = vec![
            ItemSpec::weighted(1),
            ItemSpec::weighted(2).with_consumers(vec![0, 2, 3]),
            ItemSpec::weighted(1),
            ItemSpec::weighted(1),
        ];
        let slots = solve(&specs, 90, hide(&[1]));
        let total: i32 = slots.iter().map(|s| s.size).sum();
        // All 90 cells stay distributed: the donated weight survived intact.
        assert_eq!(total, 90);
        // Scale is 3; donated weight 2*3=6 splits as 2 per consumer, so the
        // live weights are 5, 5, 5 of 15.
        assert_eq!(sizes(&slots), vec![30, 0, 30, 30]);
    }
}
