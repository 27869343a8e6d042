//! Persisted-store codec and fingerprints.
//!
//! ## Stored Shape
//!
//! The settings layer persists an order map as a JSON object of string keys
//! to integer orders:
//!
//! ```text
//! {"shipping": 0, "payments": 1, "emails": 2}
//! ```
//!
//! Option stores often round-trip numbers as strings, so integer-valued
//! strings (`"2"`) are accepted on decode. Key order is preserved.
//!
//! ## Fingerprint
//!
//! [`fingerprint`] is a SHA-256 digest of the normalized sequence. The
//! caller can persist it next to the map and compare it on write for
//! optimistic locking. Each entry, in ascending order, is encoded as:
//!
//! ```text
//! id_len: u64 LE | id: UTF-8 bytes | rank: i64 LE
//! ```
//!
//! ## Example
//!
//! ```
//! use ordinal_map::store::{fingerprint, from_json_str, to_json_string};
//!
//! let map = from_json_str(r#"{"b": "10", "a": 3}"#).unwrap();
//! assert_eq!(map.get("b"), Some(10));
//! assert_eq!(to_json_string(&map).unwrap(), r#"{"b":10,"a":3}"#);
//!
//! let dense = from_json_str(r#"{"a": 0, "b": 1}"#).unwrap();
//! assert_eq!(fingerprint(&map), fingerprint(&dense));
//! ```

use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::types::{Order, OrderMap};

/// Errors decoding or encoding a persisted order map
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored order map must be a JSON object")]
    NotAnObject,

    #[error("order for `{id}` is not an integer: {value}")]
    InvalidOrder { id: String, value: Value },
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a persisted order map from a JSON string
pub fn from_json_str(s: &str) -> Result<OrderMap, StoreError> {
    let value: Value = serde_json::from_str(s)?;
    from_json_value(value)
}

/// Decode a persisted order map from an already-parsed JSON value
pub fn from_json_value(value: Value) -> Result<OrderMap, StoreError> {
    let Value::Object(object) = value else {
        return Err(StoreError::NotAnObject);
    };

    let mut map = OrderMap::with_capacity(object.len());
    for (id, raw) in object {
        match parse_order(&raw) {
            Some(order) => {
                map.insert(id, order);
            }
            None => return Err(StoreError::InvalidOrder { id, value: raw }),
        }
    }
    Ok(map)
}

fn parse_order(raw: &Value) -> Option<Order> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode an order map as a compact JSON object
pub fn to_json_string(map: &OrderMap) -> Result<String, StoreError> {
    Ok(serde_json::to_string(map)?)
}

/// Encode an order map as an indented JSON object
pub fn to_json_string_pretty(map: &OrderMap) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(map)?)
}

// ============================================================================
// Fingerprint
// ============================================================================

/// Compute the SHA-256 fingerprint of a map's normalized sequence.
///
/// Maps that normalize to the same sequence share a fingerprint,
/// regardless of gaps or offsets in their stored orders.
pub fn fingerprint(map: &OrderMap) -> [u8; 32] {
    let mut entries: Vec<(&str, Order)> = map.iter().collect();
    entries.sort_by_key(|&(_, order)| order);

    let mut hasher = Sha256::new();
    for (rank, (id, _)) in entries.into_iter().enumerate() {
        hasher.update((id.len() as u64).to_le_bytes());
        hasher.update(id.as_bytes());
        hasher.update((rank as i64).to_le_bytes());
    }
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Get the fingerprint of a map as a hex string
pub fn fingerprint_hex(map: &OrderMap) -> String {
    hex::encode(fingerprint(map))
}

// ============================================================================
// Unit Tests
// ============================================================================
