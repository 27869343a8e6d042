//! # ordinal-map
//!
//! Order-map reconciliation for persisted drag-and-drop ordering.
//!
//! An order map assigns each identifier (a settings section, a product, ...)
//! an integer ordinal. Admin screens persist the map, users drag entries
//! around, and the screen submits a partial request such as "put `c` at 0".
//! This crate reconciles such requests against the stored map.
//!
//! ## Architecture
//!
//! - **Types**: [`OrderMap`] (insertion-ordered `id -> order`) and
//!   [`ReorderReceipt`]
//! - **Reorder**: Pure operations that consume a map and return the
//!   updated one
//! - **Store**: JSON codec for the persisted shape and SHA-256 fingerprints
//!   for optimistic locking
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Iteration order breaks every tie, so identical inputs
//!    give identical outputs
//! 2. **Permissive Input**: Unknown ids are no-ops, odd orders are accepted
//! 3. **Caller-Owned Persistence**: No I/O, no shared state
//!
//! ## Example
//!
//! ```
//! use ordinal_map::{apply_mappings, store};
//!
//! let stored = store::from_json_str(r#"{"a": 0, "b": 1, "c": 2}"#).unwrap();
//! let request = store::from_json_str(r#"{"c": 0, "z": 5}"#).unwrap();
//!
//! let result = apply_mappings(stored, &request);
//!
//! assert_eq!(
//!     store::to_json_string(&result).unwrap(),
//!     r#"{"c":0,"a":1,"b":2,"z":3}"#
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: OrderMap, ReorderReceipt
pub mod types;

/// Reorder operations: apply, move, place, add, normalize
pub mod reorder;

/// Persisted-store codec and fingerprints
pub mod store;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Id, Order, OrderMap, ReorderReceipt};
pub use reorder::{
    add_at_order, append_after, apply_mappings, apply_mappings_with_receipt, change_min_order,
    move_at_order, normalize, place_at_order,
};
pub use store::StoreError;
