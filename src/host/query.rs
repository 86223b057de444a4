// src/host/query.rs

//! The host's read query capability, plus the one query document this widget
//! ever issues: the variant display selection.

use crate::core::model::{VariantDisplay, VariantRef};
use crate::error::{UpsellError, UpsellResult};
use async_trait::async_trait;

/// Read-only access to the host's product catalog. One invocation per fetch
/// trigger; no batching, no caching beyond the widget's own variant-keyed
/// re-fetch trigger.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
  /// Runs a query document and returns the `data` payload, or an error when
  /// the host rejects the query or the transport fails.
  async fn run_query(&self, document: &str) -> anyhow::Result<serde_json::Value>;
}

/// Builds the single query document the widget issues: the variant's title,
/// price, image, and the parent product's title and featured image.
pub fn variant_display_query(variant: &VariantRef) -> String {
  format!(
    r#"{{
  node(id: "{id}") {{
    ... on ProductVariant {{
      title
      price {{
        amount
        currencyCode
      }}
      image {{
        url
        altText
      }}
      product {{
        title
        featuredImage {{
          url
          altText
        }}
      }}
    }}
  }}
}}"#,
    id = variant.as_str()
  )
}

/// Pulls the variant node out of a query `data` payload. A missing or null
/// node (unknown id, non-variant node) counts as a malformed payload, and the
/// fetch that received it is treated as failed.
pub fn extract_variant_node(variant: &VariantRef, data: serde_json::Value) -> UpsellResult<VariantDisplay> {
  let node = match data.get("node") {
    Some(node) if !node.is_null() => node.clone(),
    _ => {
      return Err(UpsellError::MalformedDisplayData {
        variant: variant.to_string(),
        source: anyhow::anyhow!("query data contains no variant node"),
      });
    }
  };

  serde_json::from_value(node).map_err(|e| UpsellError::MalformedDisplayData {
    variant: variant.to_string(),
    source: e.into(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn variant() -> VariantRef {
    VariantRef::new("gid://shopify/ProductVariant/1").unwrap()
  }

  #[test]
  fn query_document_interpolates_variant_id() {
    let document = variant_display_query(&variant());
    assert!(document.contains(r#"node(id: "gid://shopify/ProductVariant/1")"#));
    assert!(document.contains("featuredImage"));
    assert!(document.contains("currencyCode"));
  }

  #[test]
  fn missing_node_is_malformed() {
    let err = extract_variant_node(&variant(), serde_json::json!({})).unwrap_err();
    assert!(matches!(err, UpsellError::MalformedDisplayData { .. }));

    let err = extract_variant_node(&variant(), serde_json::json!({ "node": null })).unwrap_err();
    assert!(matches!(err, UpsellError::MalformedDisplayData { .. }));
  }

  #[test]
  fn well_formed_node_extracts() {
    let data = serde_json::json!({
      "node": {
        "title": "Default Title",
        "price": { "amount": "49.00", "currencyCode": "EUR" },
        "image": { "url": "https://cdn.example/unit.png", "altText": null },
        "product": { "title": "Installation Kit", "featuredImage": null }
      }
    });
    let display = extract_variant_node(&variant(), data).unwrap();
    assert_eq!(display.product.title, "Installation Kit");
    assert_eq!(display.price.label(), "49.00EUR");
  }
}
