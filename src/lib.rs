// src/lib.rs

//! checkout-upsell: an ASYNC, host-pluggable checkout upsell widget.
//!
//! The widget renders an "add installation service" style line item inside a
//! hosted checkout flow, with:
//!  - A display-data fetch for the merchant-configured product variant.
//!  - A persisted selection flag restored across activations, keyed per variant.
//!  - Cart line reconciliation keeping at most one managed line in sync with
//!    the shopper's choice.
//!  - A pure render decision that stays hidden until the variant reference and
//!    its display data are both available.
//!
//! The host's query engine, key-value storage, and cart mutation service are
//! consumed through narrow async traits (`CatalogQuery`, `SelectionStore`,
//! `CartEditor`); the widget reimplements none of them.

pub mod core;
pub mod error;
pub mod host;
pub mod settings;
pub mod widget;

// --- Re-exports for the Public API ---

// Core types that host adapters interact with frequently
pub use crate::core::event::{EffectRun, ReconcileAction, WidgetEvent};
pub use crate::core::model::{CartLine, ImageRef, Money, ProductDisplay, VariantDisplay, VariantRef, SELECTION_KEY_PREFIX};
pub use crate::core::state::{SharedState, WidgetState};

// The host capability seams
pub use crate::host::{CartEditor, CartLineChange, CatalogQuery, SelectionStore};

// Configuration input
pub use crate::settings::WidgetSettings;

// The widget and its view model
pub use crate::widget::{UpsellRow, UpsellView, UpsellWidget, UPSELL_HEADING};

pub use crate::error::{UpsellError, UpsellResult};

/*
    Core Workflow:
    1. Implement the three capability traits over the host's query, storage,
       and cart mutation services.
    2. Build an `UpsellWidget` from those capabilities.
    3. Forward host state changes as `WidgetEvent`s:
       - settings delivered/changed -> `VariantConfigured`
       - checkbox toggled or row pressed -> `SelectionSet`
       - cart snapshot pushed -> `CartUpdated`
    4. After each dispatch, call `widget.view()` and render the returned
       `UpsellView` (or nothing when it is `None`).
*/
