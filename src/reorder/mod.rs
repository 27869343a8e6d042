//! Reorder operations for order maps.
//!
//! ## Design Principles
//!
//! Every operation consumes an [`OrderMap`](crate::OrderMap) and returns the
//! updated map:
//!
//! 1. **Pure**: No shared state, no I/O (beyond `tracing` events)
//! 2. **Permissive**: Unknown ids and odd orders are never errors
//! 3. **Deterministic**: Iteration order breaks every tie
//!
//! ## Operations
//!
//! | Operation | Normalizes? | Purpose |
//! |-----------|-------------|---------|
//! | [`apply_mappings`] | yes | Reconcile a partial reorder request |
//! | [`move_at_order`] | no | Drag an existing id to a new slot |
//! | [`place_at_order`] | no | Open a slot and put an id in it |
//! | [`add_at_order`] | no | `place_at_order` for new ids only |
//! | [`normalize`] | yes | Dense `0..N` ranks |
//! | [`change_min_order`] | no | Translate all orders |
//! | [`append_after`] | no | Splice one list after another |
//!
//! ## Move vs Place
//!
//! `move_at_order` closes the gap the moved id leaves behind.
//! `place_at_order` only bumps everything at or after the target slot, so
//! placing an id that already sits at a lower order leaves a hole where it
//! used to be. Use `add_at_order` for new ids and `move_at_order` for
//! existing ones.
//!
//! ## Example
//!
//! ```
//! use ordinal_map::OrderMap;
//! use ordinal_map::reorder::apply_mappings;
//!
//! let stored: OrderMap = [("a", 0), ("b", 1), ("c", 2)].into_iter().collect();
//! let request: OrderMap = [("c", 0), ("z", 5)].into_iter().collect();
//!
//! let result = apply_mappings(stored, &request);
//!
//! assert_eq!(result.ids().collect::<Vec<_>>(), vec!["c", "a", "b", "z"]);
//! assert!(result.is_normalized());
//! ```

pub mod apply;
pub mod normalize;
pub mod shift;

pub use apply::{apply_mappings, apply_mappings_with_receipt};
pub use normalize::{append_after, change_min_order, normalize};
pub use shift::{add_at_order, move_at_order, place_at_order};
