use crate::errors::CoreError;

/// Durable per-profile key-value storage (browser localStorage or equivalent).
///
/// Values are JSON-encoded strings. An absent key means "first run" for
/// whatever lives under it. Implementations use interior mutability so a
/// store can be shared behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value. `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}
