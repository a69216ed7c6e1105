// Rust guideline compliant 2026-10-12

//! Hash-based task identifiers.

use crate::{Error, Result, Task, TaskId};
use sha2::{Digest, Sha256};

/// Prefix carried by every generated identifier.
pub const ID_PREFIX: &str = "tsk-";

const HASH_LEN: usize = 8;

/// Generates a task ID from its name, creation time and a nonce.
///
/// The same inputs always yield the same ID; callers bump the nonce to
/// step past collisions.
///
/// # Arguments
///
/// * `name` - Trimmed task name
/// * `timestamp_nanos` - Creation time in nanoseconds since the Unix epoch
/// * `nonce` - Collision counter
#[must_use]
pub fn generate_id(name: &str, timestamp_nanos: u128, nonce: u32) -> TaskId {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(timestamp_nanos.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    TaskId::new(format!("{}{}", ID_PREFIX, &hex[..HASH_LEN]))
}

/// Generates an ID that no task in `existing` already carries.
#[must_use]
pub fn unique_id(name: &str, timestamp_nanos: u128, existing: &[Task]) -> TaskId {
    let mut nonce = 0u32;
    loop {
        let id = generate_id(name, timestamp_nanos, nonce);
        if !existing.iter().any(|task| task.id == id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Checks that an ID has the generated shape (`tsk-` plus 8 hex digits).
///
/// Stored ids are opaque and never rejected on load; this is for callers
/// that want to tell generated ids apart from foreign ones.
///
/// # Errors
///
/// Returns an error if the ID does not match the generated format.
pub fn validate_id_format(id: &TaskId) -> Result<()> {
    let hash = id
        .as_str()
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::InvalidInput(format!("ID must start with '{}': {}", ID_PREFIX, id)))?;

    if hash.len() != HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput(format!(
            "ID must have {} hex digits after the prefix: {}",
            HASH_LEN, id
        )));
    }

    Ok(())
}

/// Current time in nanoseconds since the Unix epoch (zero if the clock is
/// before the epoch).
#[must_use]
pub fn now_nanos() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_nanos()
}
