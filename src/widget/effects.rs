// src/widget/effects.rs

//! Contains the widget's event dispatch and its three reactive effects. Each
//! effect is an independent unit of suspension with a single await point (the
//! catalog query, the storage read, or the cart mutation); nothing here holds
//! a state lock across an await.

use crate::core::event::{EffectRun, ReconcileAction, WidgetEvent};
use crate::core::model::VariantRef;
use crate::error::{UpsellError, UpsellResult};
use crate::host::{CartEditor, CartLineChange, CatalogQuery, SelectionStore};
use crate::widget::UpsellWidget;
use tracing::{event, instrument, Level};

impl<Q, S, C> UpsellWidget<Q, S, C>
where
  Q: CatalogQuery,
  S: SelectionStore,
  C: CartEditor,
{
  /// Dispatches one state-change event to the effects keyed to it:
  ///
  /// - `VariantConfigured` runs the display fetch, the selection restore, and
  ///   an initial reconciliation, in that order.
  /// - `SelectionSet` and `CartUpdated` record the change and reconcile.
  ///
  /// Every arm is a no-op returning `EffectRun::Skipped` while no variant
  /// reference is configured. Catalog and storage-read failures are absorbed
  /// here (the widget just keeps rendering nothing); cart mutation and
  /// storage-write failures propagate to the host unhandled.
  #[instrument(
        name = "UpsellWidget::handle",
        skip_all,
        fields(event = ?std::mem::discriminant(&event)),
        err(Display)
    )]
  pub async fn handle(&self, event: WidgetEvent) -> UpsellResult<EffectRun> {
    match event {
      WidgetEvent::VariantConfigured(raw) => {
        let variant = raw.and_then(VariantRef::new);
        let configured = variant.is_some();
        {
          let mut guard = self.state.write();
          guard.variant_ref = variant;
          // A (re)configured variant starts from the unselected default; the
          // restore effect overrides it when a persisted value exists.
          guard.selected = false;
        }
        if !configured {
          event!(Level::DEBUG, "No variant configured; widget stays inert.");
          return Ok(EffectRun::Skipped);
        }
        self.fetch_display().await;
        self.restore_selection().await;
        Ok(EffectRun::Ran(self.reconcile().await?))
      }
      WidgetEvent::SelectionSet(value) => {
        let configured = {
          let mut guard = self.state.write();
          if guard.variant_ref.is_some() {
            guard.selected = value;
            true
          } else {
            false
          }
        };
        if !configured {
          return Ok(EffectRun::Skipped);
        }
        Ok(EffectRun::Ran(self.reconcile().await?))
      }
      WidgetEvent::CartUpdated(lines) => {
        let configured = {
          let mut guard = self.state.write();
          guard.cart_lines = lines;
          guard.variant_ref.is_some()
        };
        if !configured {
          return Ok(EffectRun::Skipped);
        }
        Ok(EffectRun::Ran(self.reconcile().await?))
      }
    }
  }

  /// Effect 1: fetch the variant's display data. One query per trigger, no
  /// retry; any failure (transport, missing node, malformed shape) is logged
  /// and leaves the display data unset, so the widget keeps rendering nothing
  /// rather than raising to the host.
  #[instrument(name = "UpsellWidget::fetch_display", skip_all)]
  async fn fetch_display(&self) {
    let variant = match self.state.read().variant_ref.clone() {
      Some(variant) => variant,
      None => return,
    };

    let document = crate::host::variant_display_query(&variant);
    match self.catalog.run_query(&document).await {
      Ok(data) => match crate::host::extract_variant_node(&variant, data) {
        Ok(display) => {
          event!(Level::DEBUG, variant = %variant, "Variant display data fetched.");
          self.state.write().display = Some(display);
        }
        Err(error) => {
          event!(Level::WARN, variant = %variant, %error, "Catalog payload unusable; display data stays unset.");
        }
      },
      Err(source) => {
        let error = UpsellError::Query { source };
        event!(Level::WARN, variant = %variant, %error, "Catalog query failed; display data stays unset.");
      }
    }
  }

  /// Effect 2: restore the persisted selection for the configured variant.
  /// A present value overrides the in-memory default; an absent value and a
  /// read failure are indistinguishable, both leaving the default in place.
  #[instrument(name = "UpsellWidget::restore_selection", skip_all)]
  async fn restore_selection(&self) {
    let variant = match self.state.read().variant_ref.clone() {
      Some(variant) => variant,
      None => return,
    };

    let key = variant.selection_key();
    match self.store.read(&key).await {
      Ok(Some(saved)) => {
        event!(Level::DEBUG, %key, saved, "Restored persisted selection.");
        self.state.write().selected = saved;
      }
      Ok(None) => {
        event!(Level::DEBUG, %key, "No persisted selection; default stands.");
      }
      Err(error) => {
        // Same outcome as "not present": the default selection stands.
        event!(Level::WARN, %key, %error, "Selection read failed; default stands.");
      }
    }
  }

  /// Effect 3: reconcile the managed cart line with the selection flag, then
  /// unconditionally persist the flag. This is the only persistence write
  /// path.
  ///
  /// The flag is persisted even when the cart mutation fails, as the
  /// shopper's stated intent; the mutation rejection then propagates, and the
  /// next reconciliation-triggering event naturally retries the same
  /// add/remove decision.
  #[instrument(name = "UpsellWidget::reconcile", skip_all, err(Display))]
  async fn reconcile(&self) -> UpsellResult<ReconcileAction> {
    let snapshot = {
      let guard = self.state.read();
      guard
        .variant_ref
        .clone()
        .map(|variant| (variant, guard.selected, guard.managed_line().cloned()))
    };
    let (variant, selected, existing) = match snapshot {
      Some(parts) => parts,
      None => return Ok(ReconcileAction::Unchanged),
    };

    let change = match (selected, &existing) {
      (true, None) => Some(CartLineChange::Add {
        merchandise_id: variant.as_str().to_string(),
        quantity: 1,
      }),
      (false, Some(line)) => Some(CartLineChange::Remove {
        line_id: line.id.clone(),
        quantity: line.quantity,
      }),
      // Cart already agrees with the flag; idempotent no-op.
      _ => None,
    };
    let action = match &change {
      Some(CartLineChange::Add { .. }) => ReconcileAction::AddedLine,
      Some(CartLineChange::Remove { .. }) => ReconcileAction::RemovedLine,
      None => ReconcileAction::Unchanged,
    };

    let mutation_result = match change {
      Some(change) => {
        event!(Level::INFO, variant = %variant, ?action, "Submitting cart line change.");
        self.cart.apply(change).await
      }
      None => Ok(()),
    };

    let key = variant.selection_key();
    let write_result = self.store.write(&key, selected).await;

    if let Err(source) = mutation_result {
      event!(Level::ERROR, variant = %variant, "Cart mutation rejected by host.");
      return Err(UpsellError::CartMutation { source });
    }
    write_result.map_err(|source| UpsellError::Storage { key, source })?;

    Ok(action)
  }
}
