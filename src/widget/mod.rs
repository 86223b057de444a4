// src/widget/mod.rs

//! The upsell widget: three reactive effects (fetch display data, restore the
//! persisted selection, reconcile the managed cart line) plus a pure render
//! decision, over host-supplied capabilities.

pub mod effects;
pub mod render;

pub use render::{UpsellRow, UpsellView, UPSELL_HEADING};

use crate::core::state::{SharedState, WidgetState};
use crate::host::{CartEditor, CatalogQuery, SelectionStore};

/// One widget activation, generic over the host's three capabilities.
///
/// The widget owns no durable state of its own: everything in `state` is
/// transient and re-derived, except the selection flag which is mirrored from
/// the host's key-value store. Effects run on whatever single-threaded,
/// event-loop-driven scheduling the host provides; the widget adds no threads,
/// no locks beyond the state cell, and no cancellation.
pub struct UpsellWidget<Q, S, C>
where
  Q: CatalogQuery,
  S: SelectionStore,
  C: CartEditor,
{
  pub(crate) catalog: Q,
  pub(crate) store: S,
  pub(crate) cart: C,
  pub(crate) state: SharedState<WidgetState>,
}

impl<Q, S, C> UpsellWidget<Q, S, C>
where
  Q: CatalogQuery,
  S: SelectionStore,
  C: CartEditor,
{
  pub fn new(catalog: Q, store: S, cart: C) -> Self {
    Self {
      catalog,
      store,
      cart,
      state: SharedState::default(),
    }
  }

  /// Shared handle to the widget's state cell, e.g. for host adapters that
  /// want to snapshot it outside a dispatch.
  pub fn state(&self) -> SharedState<WidgetState> {
    self.state.clone()
  }

  /// Pure render decision over the current state: `None` (render nothing)
  /// unless both the variant reference and its display data are present.
  pub fn view(&self) -> Option<render::UpsellView> {
    let guard = self.state.read();
    render::decide(guard.variant_ref.as_ref(), guard.display.as_ref(), guard.selected)
  }
}
