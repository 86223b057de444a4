// src/core/event.rs

//! Defines the state-change events the widget reacts to and the outcome types
//! a dispatch reports back.

use crate::core::model::CartLine;

/// A state-change event delivered by the host environment. Each variant maps
/// to the dependency set of one reactive effect: a new variant reference
/// triggers the display fetch and selection restore, a flag change or a cart
/// snapshot change triggers reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
  /// The merchant settings became available or changed. `None` (or an empty
  /// string upstream) means no variant is configured.
  VariantConfigured(Option<String>),
  /// The shopper set the selection flag. The checkbox toggle and the row
  /// press both funnel into this one event.
  SelectionSet(bool),
  /// The host pushed a fresh cart line snapshot, for any reason, including
  /// the shopper removing the managed line through another UI surface.
  CartUpdated(Vec<CartLine>),
}

/// What a single cart reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
  /// The flag was on and no managed line existed: one unit was added.
  AddedLine,
  /// The flag was off and a managed line existed: it was removed in full.
  RemovedLine,
  /// Cart already agreed with the flag; no mutation was issued.
  Unchanged,
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectRun {
  /// No variant reference is configured; the event was absorbed without any
  /// external call.
  Skipped,
  /// The triggered effects ran; reconciliation took the reported action.
  Ran(ReconcileAction),
}
