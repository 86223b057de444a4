// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use checkout_upsell::{CartEditor, CartLine, CartLineChange, CatalogQuery, SelectionStore, UpsellWidget};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

pub const VARIANT_ID: &str = "gid://shopify/ProductVariant/1";
pub const OTHER_VARIANT_ID: &str = "gid://shopify/ProductVariant/2";

// --- Fake catalog ---

/// Catalog fake returning a canned `data` payload (or an error) and counting
/// invocations.
#[derive(Clone)]
pub struct FakeCatalog {
  response: Arc<Mutex<Result<serde_json::Value, String>>>,
  pub calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
  pub fn with_payload(payload: serde_json::Value) -> Self {
    Self {
      response: Arc::new(Mutex::new(Ok(payload))),
      calls: Arc::new(AtomicUsize::new(0)),
    }
  }

  pub fn failing(message: &str) -> Self {
    Self {
      response: Arc::new(Mutex::new(Err(message.to_string()))),
      calls: Arc::new(AtomicUsize::new(0)),
    }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl CatalogQuery for FakeCatalog {
  async fn run_query(&self, _document: &str) -> anyhow::Result<serde_json::Value> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    match &*self.response.lock() {
      Ok(payload) => Ok(payload.clone()),
      Err(message) => Err(anyhow::anyhow!("{}", message)),
    }
  }
}

/// The `data` payload the host query service would return for the
/// installation-kit variant.
pub fn installation_kit_payload() -> serde_json::Value {
  serde_json::json!({
    "node": {
      "title": "Default Title",
      "price": { "amount": "49.00", "currencyCode": "EUR" },
      "image": { "url": "https://cdn.example/unit.png", "altText": "unit" },
      "product": {
        "title": "Installation Kit",
        "featuredImage": { "url": "https://cdn.example/kit.png", "altText": "kit" }
      }
    }
  })
}

// --- Fake selection store ---

/// In-memory key-value store with togglable read failure, recording every
/// write in order.
#[derive(Clone, Default)]
pub struct FakeStore {
  values: Arc<Mutex<HashMap<String, bool>>>,
  pub writes: Arc<Mutex<Vec<(String, bool)>>>,
  pub fail_reads: Arc<Mutex<bool>>,
}

impl FakeStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn seeded(key: &str, value: bool) -> Self {
    let store = Self::default();
    store.values.lock().insert(key.to_string(), value);
    store
  }

  pub fn value(&self, key: &str) -> Option<bool> {
    self.values.lock().get(key).copied()
  }

  pub fn write_log(&self) -> Vec<(String, bool)> {
    self.writes.lock().clone()
  }
}

#[async_trait]
impl SelectionStore for FakeStore {
  async fn read(&self, key: &str) -> anyhow::Result<Option<bool>> {
    if *self.fail_reads.lock() {
      return Err(anyhow::anyhow!("storage transport failed"));
    }
    Ok(self.values.lock().get(key).copied())
  }

  async fn write(&self, key: &str, value: bool) -> anyhow::Result<()> {
    self.values.lock().insert(key.to_string(), value);
    self.writes.lock().push((key.to_string(), value));
    Ok(())
  }
}

// --- Fake cart editor ---

/// Records every submitted cart mutation; optionally rejects them all.
#[derive(Clone, Default)]
pub struct FakeCart {
  pub changes: Arc<Mutex<Vec<CartLineChange>>>,
  pub reject: Arc<Mutex<bool>>,
}

impl FakeCart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn rejecting() -> Self {
    let cart = Self::default();
    *cart.reject.lock() = true;
    cart
  }

  pub fn submitted(&self) -> Vec<CartLineChange> {
    self.changes.lock().clone()
  }
}

#[async_trait]
impl CartEditor for FakeCart {
  async fn apply(&self, change: CartLineChange) -> anyhow::Result<()> {
    self.changes.lock().push(change);
    if *self.reject.lock() {
      return Err(anyhow::anyhow!("inventory unavailable"));
    }
    Ok(())
  }
}

// --- Builders ---

pub fn widget_with(
  catalog: FakeCatalog,
  store: FakeStore,
  cart: FakeCart,
) -> UpsellWidget<FakeCatalog, FakeStore, FakeCart> {
  UpsellWidget::new(catalog, store, cart)
}

pub fn line(id: &str, merchandise_id: &str, quantity: u32) -> CartLine {
  CartLine {
    id: id.to_string(),
    merchandise_id: merchandise_id.to_string(),
    quantity,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
