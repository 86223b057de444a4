// src/host/mod.rs

//! Narrow interfaces over the three capabilities the host checkout supplies:
//! a read-only catalog query service, a key-value persistence primitive, and
//! a cart line mutation service. The widget only ever consumes these; it never
//! reimplements the engines behind them.

pub mod cart;
pub mod query;
pub mod storage;

pub use cart::{CartEditor, CartLineChange};
pub use query::{extract_variant_node, variant_display_query, CatalogQuery};
pub use storage::SelectionStore;
