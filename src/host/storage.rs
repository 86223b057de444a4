// src/host/storage.rs

use async_trait::async_trait;

/// The host's persisted key-value primitive, narrowed to the one schema this
/// widget stores: a boolean selection flag per namespaced key.
///
/// A read error and an absent key are deliberately the same from the widget's
/// point of view (both leave the default, unselected, in place), but the
/// trait still distinguishes them so host adapters can report transport
/// failures honestly.
#[async_trait]
pub trait SelectionStore: Send + Sync {
  /// Reads a previously persisted flag. `Ok(None)` means no value was ever
  /// written under this key.
  async fn read(&self, key: &str) -> anyhow::Result<Option<bool>>;

  /// Persists the flag under the given key, overwriting any prior value.
  async fn write(&self, key: &str, value: bool) -> anyhow::Result<()>;
}
