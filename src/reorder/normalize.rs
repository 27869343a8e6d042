//! Renumbering operations: normalize, translate, splice.

use crate::types::{Order, OrderMap};

/// Convert a map to canonical form: sorted ascending, orders `0..N`.
///
/// The sort is stable, so ids sharing an order are ranked by iteration
/// order.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::normalize;
///
/// let map: OrderMap = [("x", 40), ("y", -3), ("z", 40)].into_iter().collect();
/// let normalized = normalize(map);
///
/// assert_eq!(
///     normalized.iter().collect::<Vec<_>>(),
///     vec![("y", 0), ("x", 1), ("z", 2)]
/// );
/// ```
pub fn normalize(mut map: OrderMap) -> OrderMap {
    map.sort_by_order();
    for (rank, order) in map.orders_mut().enumerate() {
        *order = rank as Order;
    }
    map
}

/// Translate every order so the lowest one becomes `new_min`.
///
/// The result is sorted ascending but keeps gaps and ties: this is a pure
/// translation, not a renormalization. An empty map is returned as is.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::change_min_order;
///
/// let map: OrderMap = [("a", 5), ("b", 7)].into_iter().collect();
/// let shifted = change_min_order(map, 0);
///
/// assert_eq!(shifted.get("a"), Some(0));
/// assert_eq!(shifted.get("b"), Some(2));
/// ```
pub fn change_min_order(mut map: OrderMap, new_min: Order) -> OrderMap {
    let Some(min) = map.min_order() else {
        return map;
    };

    let bump = new_min.saturating_sub(min);
    map.sort_by_order();
    map.shift_where(|_| true, bump);
    map
}

/// Splice `tail` after `head`.
///
/// `tail` is translated to start right after the highest order of `head`
/// (or at 0 when `head` is empty) and its ids are appended. Ids already in
/// `head` keep their `head` order. The result is sorted ascending but not
/// normalized.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::append_after;
///
/// let head: OrderMap = [("a", 0), ("b", 1)].into_iter().collect();
/// let tail: OrderMap = [("y", 10), ("x", 12)].into_iter().collect();
///
/// let spliced = append_after(head, tail);
///
/// assert_eq!(
///     spliced.iter().collect::<Vec<_>>(),
///     vec![("a", 0), ("b", 1), ("y", 2), ("x", 4)]
/// );
/// ```
pub fn append_after(head: OrderMap, tail: OrderMap) -> OrderMap {
    let start = head.max_order().map_or(0, |max| max.saturating_add(1));
    let tail = change_min_order(tail, start);

    let mut spliced = head;
    spliced.sort_by_order();
    for (id, order) in tail {
        if !spliced.contains(&id) {
            spliced.insert(id, order);
        }
    }
    spliced
}

// ============================================================================
// Unit Tests
// ============================================================================
