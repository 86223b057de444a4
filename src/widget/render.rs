// src/widget/render.rs

//! The pure presentation decision: a function from (optional variant
//! reference, optional display data, selection flag) to an optional view
//! model. All side-effecting fetch/reconcile logic lives in `effects`; nothing
//! here touches a host capability.

use crate::core::event::WidgetEvent;
use crate::core::model::{VariantDisplay, VariantRef};

/// Fixed promotional heading shown above the upsell row.
pub const UPSELL_HEADING: &str = "Pensez à vous faire installer votre climatiseur";

/// The single pressable row: a checkbox bound to the selection flag, a
/// thumbnail, the parent product's title, and the raw price label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsellRow {
  pub checked: bool,
  /// Variant image url, or the empty source when the variant has none.
  pub thumbnail_url: String,
  /// Alt text for the thumbnail: the parent product title.
  pub thumbnail_alt: String,
  pub product_title: String,
  /// Amount immediately followed by currency code, no locale formatting.
  pub price_label: String,
}

impl UpsellRow {
  /// Event for a press anywhere in the row: a larger hit-target alias for the
  /// checkbox, flipping the flag identically.
  pub fn press_event(&self) -> WidgetEvent {
    WidgetEvent::SelectionSet(!self.checked)
  }
}

/// What the host renders after the divider: the heading and the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsellView {
  pub heading: &'static str,
  pub row: UpsellRow,
}

/// Readiness guard plus view construction. Renders nothing until both the
/// variant reference and its display data are available.
pub fn decide(
  variant_ref: Option<&VariantRef>,
  display: Option<&VariantDisplay>,
  selected: bool,
) -> Option<UpsellView> {
  variant_ref?;
  let display = display?;

  Some(UpsellView {
    heading: UPSELL_HEADING,
    row: UpsellRow {
      checked: selected,
      thumbnail_url: display.image.as_ref().map(|image| image.url.clone()).unwrap_or_default(),
      thumbnail_alt: display.product.title.clone(),
      product_title: display.product.title.clone(),
      price_label: display.price.label(),
    },
  })
}
