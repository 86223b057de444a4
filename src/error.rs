// src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Error taxonomy for the widget's external calls. Shallow and uniform: every
/// host capability can fail, none of the failures is fatal to the widget, and
/// none surfaces to the shopper as visible UI. Query and storage-read failures
/// are absorbed inside the effects; only cart mutation and storage-write
/// failures propagate to the host environment.
#[derive(Debug, Error)]
pub enum UpsellError {
  #[error("Catalog query failed. Source: {source}")]
  Query {
    #[source]
    source: AnyhowError,
  },

  #[error("Catalog payload malformed for variant '{variant}'. Source: {source}")]
  MalformedDisplayData {
    variant: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Selection storage failed for key '{key}'. Source: {source}")]
  Storage {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Cart line mutation rejected by host. Source: {source}")]
  CartMutation {
    #[source]
    source: AnyhowError,
  },

  #[error("Widget settings payload invalid. Source: {source}")]
  Settings {
    #[source]
    source: AnyhowError,
  },
}

pub type UpsellResult<T, E = UpsellError> = std::result::Result<T, E>;
