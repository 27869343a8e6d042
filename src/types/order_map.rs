//! Insertion-ordered map from identifier to ordinal.
//!
//! ## Iteration Order
//!
//! Iteration order is part of the value. It is the order ids were first
//! inserted, and it decides ties when two ids share an ordinal:
//!
//! - [`normalize`](fn@crate::reorder::normalize) ranks tied ids by iteration order
//! - [`apply_mappings`](crate::reorder::apply_mappings) processes a request in
//!   iteration order
//!
//! Overwriting the order of an existing id keeps its position.
//!
//! ## Equality
//!
//! `==` compares ids and orders only. Use [`OrderMap::same_sequence`] when the
//! iteration order matters as well.
//!
//! ## Serialization
//!
//! Serializes as a plain JSON object (`{"id": order, ...}`), keys in
//! iteration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{Id, Order};

/// A mapping from identifier to integer ordinal.
///
/// ## Example
///
/// ```
/// use ordinal_map::OrderMap;
///
/// let map: OrderMap = [("b", 1), ("a", 0)].into_iter().collect();
///
/// assert_eq!(map.get("a"), Some(0));
/// assert_eq!(map.ids().collect::<Vec<_>>(), vec!["b", "a"]);
/// assert_eq!(map.holder_of(1), Some("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderMap {
    entries: IndexMap<Id, Order>,
}

impl OrderMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty map with room for `capacity` ids
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Size and Lookup
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the order of an id
    #[inline]
    pub fn get(&self, id: &str) -> Option<Order> {
        self.entries.get(id).copied()
    }

    /// Check if an id is present
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Find the first id (in iteration order) currently holding `order`
    pub fn holder_of(&self, order: Order) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, held)| **held == order)
            .map(|(id, _)| id.as_str())
    }

    /// Lowest order in the map, or None if empty
    pub fn min_order(&self) -> Option<Order> {
        self.entries.values().copied().min()
    }

    /// Highest order in the map, or None if empty
    pub fn max_order(&self) -> Option<Order> {
        self.entries.values().copied().max()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set the order of an id
    ///
    /// A new id is appended to the iteration order; an existing id keeps
    /// its position.
    ///
    /// # Returns
    ///
    /// The previous order, or None if the id is new
    pub fn insert(&mut self, id: impl Into<Id>, order: Order) -> Option<Order> {
        self.entries.insert(id.into(), order)
    }

    /// Overwrite the order of an id that is already present.
    /// Unknown ids are ignored.
    pub(crate) fn set_existing(&mut self, id: &str, order: Order) {
        if let Some(slot) = self.entries.get_mut(id) {
            *slot = order;
        }
    }

    /// Add `delta` to every order matching `affected`, saturating at the
    /// `i64` bounds.
    pub(crate) fn shift_where<F>(&mut self, affected: F, delta: Order)
    where
        F: Fn(Order) -> bool,
    {
        for order in self.entries.values_mut() {
            if affected(*order) {
                *order = order.saturating_add(delta);
            }
        }
    }

    /// Stable sort by ascending order. Tied ids keep their relative position.
    pub(crate) fn sort_by_order(&mut self) {
        self.entries.sort_by(|_, a, _, b| a.cmp(b));
    }

    pub(crate) fn orders_mut(&mut self) -> impl Iterator<Item = &mut Order> {
        self.entries.values_mut()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over `(id, order)` pairs in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Order)> + '_ {
        self.entries.iter().map(|(id, &order)| (id.as_str(), order))
    }

    /// Iterate over ids in iteration order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over orders in iteration order
    pub fn orders(&self) -> impl Iterator<Item = Order> + '_ {
        self.entries.values().copied()
    }

    // ========================================================================
    // Shape Checks
    // ========================================================================

    /// Check if the map is in canonical form: orders `0, 1, ..., N-1` in
    /// iteration order.
    pub fn is_normalized(&self) -> bool {
        self.orders()
            .enumerate()
            .all(|(rank, order)| order == rank as Order)
    }

    /// Compare ids, orders and iteration order.
    pub fn same_sequence(&self, other: &OrderMap) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<IndexMap<Id, Order>> for OrderMap {
    fn from(entries: IndexMap<Id, Order>) -> Self {
        Self { entries }
    }
}

impl<K: Into<Id>> FromIterator<(K, Order)> for OrderMap {
    fn from_iter<I: IntoIterator<Item = (K, Order)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, order)| (id.into(), order)).collect(),
        }
    }
}

impl<K: Into<Id>> Extend<(K, Order)> for OrderMap {
    fn extend<I: IntoIterator<Item = (K, Order)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(id, order)| (id.into(), order)));
    }
}

impl IntoIterator for OrderMap {
    type Item = (Id, Order);
    type IntoIter = indexmap::map::IntoIter<Id, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderMap {
    type Item = (&'a str, Order);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, Order)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
