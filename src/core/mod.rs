pub mod event;
pub mod model;
pub mod state;

// Re-export key types for easier access from other widget modules (and lib.rs)
pub use event::{EffectRun, ReconcileAction, WidgetEvent};
pub use model::{CartLine, ImageRef, Money, ProductDisplay, VariantDisplay, VariantRef, SELECTION_KEY_PREFIX};
pub use state::{SharedState, WidgetState};
