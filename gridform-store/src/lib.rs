//! Storage access for gridform sections.
//!
//! Form sections persist their snapshots through the [`Store`] trait instead
//! of touching a storage medium directly, so the grid core stays
//! storage-agnostic and sections can be tested against [`MemoryStore`].
//! [`DirStore`] keeps one JSON-value file per key under a root directory.

mod memory;
pub use memory::MemoryStore;

mod dir;
pub use dir::DirStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key contains characters the backing medium cannot represent.
    #[error("invalid store key '{0}': keys must be non-empty and must not contain path separators")]
    InvalidKey(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A minimal key-value store injected into components that need persistence.
///
/// Reads are tolerant: a missing entry is `Ok(None)`, and implementations
/// degrade unreadable entries to `Ok(None)` as well, so a corrupt store never
/// aborts a form load.
pub trait Store {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing a missing key is a
    /// no-op.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Reject keys that would escape a file-per-key layout.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_validation() {
        assert!(check_key("mobility_demands").is_ok());
        assert!(check_key("section-2").is_ok());
        assert!(check_key("").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key("..").is_err());
    }
}
