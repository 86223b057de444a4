// src/core/model.rs

//! Domain types for the upsell widget: the configured variant reference, the
//! display data fetched from the host's catalog, and the cart line snapshot.

use serde::Deserialize;
use std::fmt;

/// Fixed prefix for persisted selection keys. Two distinct variant
/// configurations therefore never collide in the host's key-value store.
pub const SELECTION_KEY_PREFIX: &str = "isSelected_";

/// The merchant-selected product variant identifier, chosen at configuration
/// time outside this widget. Opaque to the widget; only ever compared against
/// cart line merchandise identifiers and interpolated into the catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantRef(String);

impl VariantRef {
  /// Builds a reference from a raw settings value. Empty strings are treated
  /// as "no variant configured" and suppress all widget behavior.
  pub fn new(raw: impl Into<String>) -> Option<Self> {
    let raw = raw.into();
    if raw.is_empty() {
      None
    } else {
      Some(Self(raw))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Key under which the shopper's selection flag is persisted for this
  /// variant: the fixed prefix followed by the raw identifier.
  pub fn selection_key(&self) -> String {
    format!("{}{}", SELECTION_KEY_PREFIX, self.0)
  }
}

impl fmt::Display for VariantRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A price as the catalog reports it. Amount stays a raw string; the widget
/// does no numeric parsing or locale formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
  pub amount: String,
  pub currency_code: String,
}

impl Money {
  /// Raw concatenation of amount and currency code, exactly how the row
  /// renders it ("49.00EUR").
  pub fn label(&self) -> String {
    format!("{}{}", self.amount, self.currency_code)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
  pub url: String,
  #[serde(default)]
  pub alt_text: Option<String>,
}

/// The parent product of the configured variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDisplay {
  pub title: String,
  #[serde(default)]
  pub featured_image: Option<ImageRef>,
}

/// Read-only snapshot of the variant's presentation data, fetched once per
/// distinct variant reference and held only in volatile widget state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDisplay {
  pub title: String,
  pub price: Money,
  #[serde(default)]
  pub image: Option<ImageRef>,
  pub product: ProductDisplay,
}

/// One entry of the host-owned cart. The widget treats the list as read-mostly
/// and only ever submits add/remove intents for the single line it manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
  /// Host-assigned line identifier, required to remove the line.
  pub id: String,
  /// Identifier of the purchased variant; matched against the configured
  /// variant reference.
  pub merchandise_id: String,
  pub quantity: u32,
}
