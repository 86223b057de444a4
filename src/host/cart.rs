// src/host/cart.rs

use async_trait::async_trait;

/// One of the two cart mutation intents the widget can submit. The widget
/// never assumes exclusive access to the cart: other extensions and the
/// shopper's own checkout actions mutate it concurrently, which is exactly
/// why reconciliation re-runs on every snapshot change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLineChange {
  /// Add `quantity` units of the given merchandise as a new line.
  Add { merchandise_id: String, quantity: u32 },
  /// Remove `quantity` units from the line with the given host-assigned
  /// identifier. The widget always passes the line's full current quantity,
  /// so the managed line is removed whole, never partially.
  Remove { line_id: String, quantity: u32 },
}

/// The host's cart mutation capability.
#[async_trait]
pub trait CartEditor: Send + Sync {
  /// Submits one mutation intent. An error means the host rejected it (e.g.
  /// inventory unavailable); the widget propagates that rejection unhandled
  /// and schedules no retry of its own.
  async fn apply(&self, change: CartLineChange) -> anyhow::Result<()>;
}
