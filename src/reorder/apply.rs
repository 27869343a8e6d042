//! Reconciliation of a partial reorder request against a stored map.
//!
//! ## Processing Rules
//!
//! 1. The base map is stable-sorted by order. Orders are not renumbered, so
//!    gaps in the stored map still count.
//! 2. Request entries are applied one at a time, in request iteration order:
//!    - id not in the working map: [`add_at_order`]
//!    - id in the working map: [`move_at_order`]
//! 3. The working map is normalized.
//!
//! Later entries see the effect of earlier ones. When two requested slots
//! collide, the entry processed last wins the slot.

use tracing::debug;

use crate::reorder::normalize::normalize;
use crate::reorder::shift::{add_at_order, move_at_order};
use crate::store::fingerprint;
use crate::types::{Order, OrderMap, ReorderReceipt};

/// Counts collected while applying a request
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    moved: u64,
    inserted: u64,
}

/// Apply a partial reorder request to `base` and return the normalized map.
///
/// `new_mappings` may name only some ids, and may name ids missing from
/// `base`. Any `(id, order)` iterator works, including `&OrderMap`.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::apply_mappings;
///
/// let base: OrderMap = [("a", 0), ("b", 1), ("c", 2)].into_iter().collect();
/// let result = apply_mappings(base, [("c", 0), ("z", 5)]);
///
/// let expected: OrderMap = [("c", 0), ("a", 1), ("b", 2), ("z", 3)].into_iter().collect();
/// assert!(result.same_sequence(&expected));
/// ```
pub fn apply_mappings<I, K>(base: OrderMap, new_mappings: I) -> OrderMap
where
    I: IntoIterator<Item = (K, Order)>,
    K: AsRef<str>,
{
    let (result, tally) = reconcile(base, new_mappings);
    debug!(
        moved = tally.moved,
        inserted = tally.inserted,
        len = result.len(),
        "applied order mappings"
    );
    result
}

/// Same as [`apply_mappings`], plus a [`ReorderReceipt`] describing the
/// change.
///
/// # Example
///
/// ```
/// use ordinal_map::OrderMap;
/// use ordinal_map::reorder::apply_mappings_with_receipt;
///
/// let base: OrderMap = [("a", 0), ("b", 1)].into_iter().collect();
/// let (result, receipt) = apply_mappings_with_receipt(base, [("b", 0), ("n", 9)]);
///
/// assert_eq!(result.ids().collect::<Vec<_>>(), vec!["b", "a", "n"]);
/// assert_eq!(receipt.moved, 1);
/// assert_eq!(receipt.inserted, 1);
/// assert!(!receipt.is_noop());
/// ```
pub fn apply_mappings_with_receipt<I, K>(
    base: OrderMap,
    new_mappings: I,
) -> (OrderMap, ReorderReceipt)
where
    I: IntoIterator<Item = (K, Order)>,
    K: AsRef<str>,
{
    let before = fingerprint(&base);
    let (result, tally) = reconcile(base, new_mappings);
    let receipt = ReorderReceipt::new(tally.moved, tally.inserted, before, fingerprint(&result));

    debug!(
        moved = receipt.moved,
        inserted = receipt.inserted,
        before = %receipt.before_hex(),
        after = %receipt.after_hex(),
        "applied order mappings"
    );
    (result, receipt)
}

fn reconcile<I, K>(base: OrderMap, new_mappings: I) -> (OrderMap, Tally)
where
    I: IntoIterator<Item = (K, Order)>,
    K: AsRef<str>,
{
    let mut working = base;
    working.sort_by_order();

    let mut tally = Tally::default();
    for (id, order) in new_mappings {
        let id = id.as_ref();
        working = match working.get(id) {
            None => {
                tally.inserted += 1;
                add_at_order(working, id, order)
            }
            Some(current) => {
                if current != order {
                    tally.moved += 1;
                }
                move_at_order(working, id, order)
            }
        };
    }

    (normalize(working), tally)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: &[(&str, Order)]) -> OrderMap {
        entries.iter().map(|&(id, order)| (id, order)).collect()
    }

    fn sequence(map: &OrderMap) -> Vec<&str> {
        map.ids().collect()
    }

    #[test]
    fn test_apply_end_to_end() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2)]);
        let request = map_of(&[("c", 0), ("z", 5)]);

        let result = apply_mappings(base, &request);

        assert!(result.same_sequence(&map_of(&[("c", 0), ("a", 1), ("b", 2), ("z", 3)])));
    }

    #[test]
    fn test_apply_empty_request_normalizes() {
        let base = map_of(&[("b", 20), ("a", 10)]);

        let result = apply_mappings(base, Vec::<(&str, Order)>::new());

        assert!(result.same_sequence(&map_of(&[("a", 0), ("b", 1)])));
    }

    #[test]
    fn test_apply_to_empty_base() {
        let result = apply_mappings(OrderMap::new(), [("y", 4), ("x", 1)]);
        assert!(result.same_sequence(&map_of(&[("x", 0), ("y", 1)])));
    }

    #[test]
    fn test_apply_respects_gaps_in_base() {
        // Slot 3 is free in the stored map, so moving `a` there shifts nothing
        let base = map_of(&[("a", 0), ("b", 2), ("c", 4)]);

        let result = apply_mappings(base, [("a", 3)]);

        assert_eq!(sequence(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_apply_sorts_base_before_processing() {
        // Unsorted base: iteration order must not leak into the result
        let base = map_of(&[("c", 2), ("a", 0), ("b", 1)]);

        let result = apply_mappings(base, [("a", 1)]);

        assert_eq!(sequence(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_apply_processing_order_matters() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2)]);

        // Both request slot 0; the entry processed last ends up first
        let a_then_c = apply_mappings(base.clone(), [("a", 0), ("c", 0)]);
        let c_then_b = apply_mappings(base, [("c", 0), ("b", 0)]);

        assert_eq!(sequence(&a_then_c), vec!["c", "a", "b"]);
        assert_eq!(sequence(&c_then_b), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_apply_inserts_in_the_middle() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2)]);

        let result = apply_mappings(base, [("n", 1)]);

        assert_eq!(sequence(&result), vec!["a", "n", "b", "c"]);
        assert!(result.is_normalized());
    }

    #[test]
    fn test_apply_drag_to_end() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2), ("d", 3)]);

        let result = apply_mappings(base, [("a", 3)]);

        assert_eq!(sequence(&result), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_receipt_counts() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2)]);

        let (_, receipt) =
            apply_mappings_with_receipt(base, [("a", 0), ("c", 1), ("x", 0), ("y", 7)]);

        // `a` is already at 0, so only `c` counts as moved
        assert_eq!(receipt.moved, 1);
        assert_eq!(receipt.inserted, 2);
        assert_eq!(receipt.touched(), 3);
    }

    #[test]
    fn test_receipt_noop_for_sparse_base() {
        let base = map_of(&[("a", 10), ("b", 20)]);

        let (result, receipt) = apply_mappings_with_receipt(base, [("a", 10)]);

        assert!(receipt.is_noop());
        assert_eq!(receipt.moved, 0);
        assert_eq!(receipt.after, fingerprint(&result));
    }

    #[test]
    fn test_receipt_matches_plain_apply() {
        let base = map_of(&[("a", 0), ("b", 1), ("c", 2), ("d", 3)]);
        let request = map_of(&[("d", 0), ("b", 3), ("e", 2)]);

        let plain = apply_mappings(base.clone(), &request);
        let (with_receipt, _) = apply_mappings_with_receipt(base, &request);

        assert!(plain.same_sequence(&with_receipt));
    }
}
