// src/settings.rs

use crate::core::model::VariantRef;
use crate::error::{UpsellError, UpsellResult};
use serde::Deserialize;

/// The widget's single configuration input: the variant the merchant picked
/// for the upsell. Delivered by the host as a JSON settings payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetSettings {
  #[serde(default)]
  pub selected_variant: Option<String>,
}

impl WidgetSettings {
  /// Deserializes the host's settings payload. Unknown keys are ignored; a
  /// payload that is not an object at all is a configuration error.
  pub fn from_value(value: serde_json::Value) -> UpsellResult<Self> {
    serde_json::from_value(value).map_err(|e| UpsellError::Settings { source: e.into() })
  }

  /// The configured variant reference, with empty strings normalized to
  /// absent. Absence suppresses all widget behavior.
  pub fn variant_ref(&self) -> Option<VariantRef> {
    self.selected_variant.as_deref().and_then(VariantRef::new)
  }

  /// The widget event a host adapter dispatches when these settings are
  /// delivered or change.
  pub fn configured_event(&self) -> crate::core::event::WidgetEvent {
    crate::core::event::WidgetEvent::VariantConfigured(self.variant_ref().map(|v| v.as_str().to_string()))
  }
}
