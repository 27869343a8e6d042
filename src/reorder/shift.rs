//! Slot-shifting operations: move, place, add.
//!
//! None of these normalize. Entries outside the affected range keep their
//! orders, gaps and ties included.

use tracing::trace;

use crate::types::{Order, OrderMap};

/// Move an existing id to `order`, shifting only the ids between its old and
/// new slot.
///
/// - Unknown `id`: map returned unchanged
/// - `id` already at `order`: unchanged
/// - `order` free: `id` takes it, nothing else moves
/// - Moving down (`order > existing`): every id in `[existing, order]` is
///   decremented by one
/// - Moving up (`order < existing`): every id in `[order, existing]` is
///   incremented by one
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::move_at_order;
///
/// let map: OrderMap = [("a", 0), ("b", 1), ("c", 2), ("d", 3)].into_iter().collect();
/// let moved = move_at_order(map, "a", 2);
///
/// let expected: OrderMap = [("a", 2), ("b", 0), ("c", 1), ("d", 3)].into_iter().collect();
/// assert_eq!(moved, expected);
/// ```
pub fn move_at_order(mut map: OrderMap, id: &str, order: Order) -> OrderMap {
    let Some(existing) = map.get(id) else {
        trace!(id, order, "move skipped, id not present");
        return map;
    };

    if existing == order {
        return map;
    }

    if map.holder_of(order).is_some() {
        if order > existing {
            map.shift_where(|held| held >= existing && held <= order, -1);
        } else {
            map.shift_where(|held| held >= order && held <= existing, 1);
        }
    }

    trace!(id, from = existing, to = order, "moved");
    map.set_existing(id, order);
    map
}

/// Put `id` at `order`, bumping every id at or after `order` by one if the
/// slot is taken.
///
/// Works whether or not `id` is present, but never closes the slot a
/// present `id` leaves behind. If `id` sat below `order`, a gap remains
/// there. Prefer [`add_at_order`] for new ids and [`move_at_order`] for
/// existing ones.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::place_at_order;
///
/// let map: OrderMap = [("a", 0), ("b", 1)].into_iter().collect();
/// let placed = place_at_order(map, "n", 1);
///
/// let expected: OrderMap = [("a", 0), ("b", 2), ("n", 1)].into_iter().collect();
/// assert_eq!(placed, expected);
/// ```
pub fn place_at_order(mut map: OrderMap, id: &str, order: Order) -> OrderMap {
    if map.get(id) == Some(order) {
        return map;
    }

    if map.holder_of(order).is_some() {
        map.shift_where(|held| held >= order, 1);
    }

    trace!(id, order, "placed");
    map.insert(id, order);
    map
}

/// Insert a new id at `order` via [`place_at_order`].
///
/// An id that is already present leaves the map unchanged, wherever it sits.
pub fn add_at_order(map: OrderMap, id: &str, order: Order) -> OrderMap {
    if map.contains(id) {
        trace!(id, order, "add skipped, id already present");
        return map;
    }

    place_at_order(map, id, order)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> OrderMap {
        [("a", 0), ("b", 1), ("c", 2), ("d", 3)].into_iter().collect()
    }

    fn map_of(entries: &[(&str, Order)]) -> OrderMap {
        entries.iter().map(|&(id, order)| (id, order)).collect()
    }

    // ------------------------------------------------------------------------
    // move_at_order
    // ------------------------------------------------------------------------

    #[test]
    fn test_move_missing_id_is_noop() {
        let moved = move_at_order(abcd(), "missing", 1);
        assert!(moved.same_sequence(&abcd()));
    }

    #[test]
    fn test_move_to_own_order_is_noop() {
        let moved = move_at_order(abcd(), "c", 2);
        assert!(moved.same_sequence(&abcd()));
    }

    #[test]
    fn test_move_down_shifts_range() {
        let moved = move_at_order(abcd(), "a", 2);
        assert_eq!(moved, map_of(&[("a", 2), ("b", 0), ("c", 1), ("d", 3)]));
    }

    #[test]
    fn test_move_up_shifts_range() {
        let moved = move_at_order(abcd(), "d", 1);
        assert_eq!(moved, map_of(&[("a", 0), ("b", 2), ("c", 3), ("d", 1)]));
    }

    #[test]
    fn test_move_to_free_slot_touches_nothing_else() {
        let map = map_of(&[("a", 0), ("b", 5), ("c", 9)]);

        let moved = move_at_order(map, "a", 7);

        assert_eq!(moved, map_of(&[("a", 7), ("b", 5), ("c", 9)]));
    }

    #[test]
    fn test_move_keeps_gaps_outside_range() {
        // Gap between c (4) and d (10) is outside the affected range
        let map = map_of(&[("a", 0), ("b", 2), ("c", 4), ("d", 10)]);

        let moved = move_at_order(map, "c", 2);

        assert_eq!(moved, map_of(&[("a", 0), ("b", 3), ("c", 2), ("d", 10)]));
    }

    #[test]
    fn test_move_keeps_iteration_order() {
        let moved = move_at_order(abcd(), "d", 0);
        assert_eq!(moved.ids().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_move_with_negative_orders() {
        let map = map_of(&[("a", -2), ("b", -1), ("c", 0)]);

        let moved = move_at_order(map, "c", -2);

        assert_eq!(moved, map_of(&[("a", -1), ("b", 0), ("c", -2)]));
    }

    // ------------------------------------------------------------------------
    // place_at_order
    // ------------------------------------------------------------------------

    #[test]
    fn test_place_new_id_bumps_tail() {
        let placed = place_at_order(abcd(), "n", 2);

        assert_eq!(
            placed,
            map_of(&[("a", 0), ("b", 1), ("c", 3), ("d", 4), ("n", 2)])
        );
        assert_eq!(placed.ids().last(), Some("n"));
    }

    #[test]
    fn test_place_into_free_slot() {
        let placed = place_at_order(abcd(), "n", 8);
        assert_eq!(
            placed,
            map_of(&[("a", 0), ("b", 1), ("c", 2), ("d", 3), ("n", 8)])
        );
    }

    #[test]
    fn test_place_at_own_order_is_noop() {
        let placed = place_at_order(abcd(), "b", 1);
        assert!(placed.same_sequence(&abcd()));
    }

    #[test]
    fn test_place_existing_id_leaves_gap() {
        // a leaves slot 0 empty; b, c, d are bumped rather than closing it
        let placed = place_at_order(abcd(), "a", 2);

        assert_eq!(placed, map_of(&[("a", 2), ("b", 1), ("c", 3), ("d", 4)]));
        assert!(placed.holder_of(0).is_none());
    }

    // ------------------------------------------------------------------------
    // add_at_order
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_existing_id_is_noop() {
        let added = add_at_order(abcd(), "b", 0);
        assert!(added.same_sequence(&abcd()));
    }

    #[test]
    fn test_add_new_id_delegates_to_place() {
        let added = add_at_order(abcd(), "n", 0);

        assert_eq!(
            added,
            map_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("n", 0)])
        );
    }

    #[test]
    fn test_add_to_empty_map() {
        let added = add_at_order(OrderMap::new(), "first", 3);
        assert_eq!(added, map_of(&[("first", 3)]));
    }
}
