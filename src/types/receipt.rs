//! Receipt summarizing one applied reorder request.
//!
//! The receipt carries the fingerprints of the map before and after the
//! request, so the persistence layer can compare them against its stored
//! version token and skip no-op writes.

/// Receipt for one [`apply_mappings_with_receipt`] call.
///
/// ## Fingerprints
///
/// `before` and `after` are SHA-256 digests computed by
/// [`fingerprint`](crate::store::fingerprint). Both describe the
/// normalized sequence, so a sparse stored map and its dense form share a
/// fingerprint.
///
/// ## Example
///
/// ```
/// use ordinal_map::ReorderReceipt;
///
/// let receipt = ReorderReceipt::new(
///     2,          // moved
///     1,          // inserted
///     [0u8; 32],  // before
///     [1u8; 32],  // after
/// );
///
/// assert_eq!(receipt.touched(), 3);
/// assert!(!receipt.is_noop());
/// ```
///
/// [`apply_mappings_with_receipt`]: crate::reorder::apply_mappings_with_receipt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReorderReceipt {
    /// Request entries for ids already present whose order changed
    pub moved: u64,

    /// Request entries for ids that were not present
    pub inserted: u64,

    /// Fingerprint of the base map
    pub before: [u8; 32],

    /// Fingerprint of the resulting map
    pub after: [u8; 32],
}

impl ReorderReceipt {
    /// Create a new receipt
    pub fn new(moved: u64, inserted: u64, before: [u8; 32], after: [u8; 32]) -> Self {
        Self {
            moved,
            inserted,
            before,
            after,
        }
    }

    /// Number of request entries that moved or inserted an id
    pub fn touched(&self) -> u64 {
        self.moved.saturating_add(self.inserted)
    }

    /// True if the resulting sequence is identical to the base sequence
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }

    /// Get the base fingerprint as a hex string
    pub fn before_hex(&self) -> String {
        hex::encode(self.before)
    }

    /// Get the resulting fingerprint as a hex string
    pub fn after_hex(&self) -> String {
        hex::encode(self.after)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
