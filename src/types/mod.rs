//! Core data types for ordinal-map
//!
//! ## Types
//!
//! - [`OrderMap`]: Insertion-ordered mapping from [`Id`] to [`Order`]
//! - [`ReorderReceipt`]: Summary of one reorder request
//!
//! ## Orders
//!
//! Orders are plain `i64` ordinals. Only their relative values carry
//! meaning until a map is normalized to `0, 1, ..., N-1`.

mod order_map;
mod receipt;

/// Identifier of an ordered entry (a setting key, a product id, ...)
pub type Id = String;

/// Relative sequence position of an entry
pub type Order = i64;

// Re-export all types at module level
pub use order_map::OrderMap;
pub use receipt::ReorderReceipt;
