// src/core/state.rs

use crate::core::model::{CartLine, VariantDisplay, VariantRef};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// In-memory state of one widget activation. Everything here is transient and
/// re-derived on activation; the only durably owned value (the selection flag)
/// lives in the host's key-value store and is mirrored into `selected`.
#[derive(Debug, Default)]
pub struct WidgetState {
  /// Merchant-configured variant reference. Absent until settings deliver one;
  /// absence suppresses all effects and all rendering.
  pub variant_ref: Option<VariantRef>,
  /// Display data for the configured variant, set by a successful catalog
  /// fetch. The widget renders nothing while this is unset.
  pub display: Option<VariantDisplay>,
  /// The shopper's current yes/no choice for the upsell. Defaults to false;
  /// overridden by a persisted value when one exists.
  pub selected: bool,
  /// Latest cart snapshot pushed by the host.
  pub cart_lines: Vec<CartLine>,
}

/// A wrapper for widget state providing shared ownership and interior
/// mutability using parking_lot::RwLock.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct SharedState<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> SharedState<T> {
  pub fn new(data: T) -> Self {
    SharedState(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock. The returned guard MUST be dropped before any
  /// `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write lock. The returned guard MUST be dropped before any
  /// `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }
}

impl<T: Send + Sync + 'static> Clone for SharedState<T> {
  fn clone(&self) -> Self {
    SharedState(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for SharedState<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}

impl WidgetState {
  /// Locates the cart line the widget manages: the one whose merchandise
  /// identifier equals the configured variant reference. At most one such line
  /// exists once reconciliation has completed for the current cycle.
  pub fn managed_line(&self) -> Option<&CartLine> {
    let variant = self.variant_ref.as_ref()?;
    self.cart_lines.iter().find(|line| line.merchandise_id == variant.as_str())
  }
}
