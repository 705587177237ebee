//! # Bill Session
//!
//! One bill being split, as seen by a UI.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Session                                         │
//! │                                                                         │
//! │  UI Action               Session Command          Effect                │
//! │  ─────────               ───────────────          ──────                │
//! │                                                                         │
//! │  Add friend ───────────► add_participant() ─────► store + cache reset  │
//! │  Remove friend ────────► remove_participant() ──► cascade + reset      │
//! │  Save item ────────────► add_item() ────────────► store + cache reset  │
//! │  Edit item ────────────► update_item() ─────────► store + cache reset  │
//! │  Delete item ──────────► remove_item() ─────────► store + cache reset  │
//! │  Change % ─────────────► update_charges() ──────► store + cache reset  │
//! │                                                                         │
//! │  Render summary ───────► summary() ─────────────► cached until the     │
//! │                                                   store revision moves │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is an ordinary owned value: single writer, no locks, no
//! background recomputation.

use std::cell::OnceCell;

use rust_decimal::Decimal;
use serde::Serialize;
use splitbill_core::{
    calculate_totals, BillStore, BillTotals, Charges, ChargesPatch, Item, ItemId, ItemPatch,
    Participant, ParticipantId, PersonSummary,
};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::SessionConfig;
use crate::result::MutationResult;

/// Summary computed for a particular store revision.
#[derive(Debug)]
struct CachedSummary {
    revision: u64,
    summary: Vec<PersonSummary>,
    totals: BillTotals,
}

/// A bill-splitting session: the bill, its configuration and a memoized
/// summary.
#[derive(Debug)]
pub struct BillSession {
    store: BillStore,
    config: SessionConfig,
    cache: OnceCell<CachedSummary>,
}

impl BillSession {
    /// Starts an empty bill with the config's default charges.
    ///
    /// Default charges outside `[0, 100]` are rejected and logged; the bill
    /// then starts at 0% / 0%.
    pub fn new(config: SessionConfig) -> Self {
        let mut store = BillStore::new();

        if let Err(err) = store.update_charges(config.default_charges()) {
            warn!(error = %err, "Ignoring configured default charges");
        }

        info!(
            currency = %config.currency_code,
            charges = ?store.charges(),
            "Bill session started"
        );

        BillSession {
            store,
            config,
            cache: OnceCell::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &BillStore {
        &self.store
    }

    pub fn participants(&self) -> &[Participant] {
        self.store.participants()
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn charges(&self) -> Charges {
        self.store.charges()
    }

    /// Per-person breakdown, recomputed only after the bill changed.
    pub fn summary(&self) -> &[PersonSummary] {
        &self.cached().summary
    }

    /// Grand totals, cached together with the summary.
    pub fn totals(&self) -> &BillTotals {
        &self.cached().totals
    }

    /// Plain-data copy of everything an export or rendering step needs.
    pub fn snapshot(&self) -> BillSnapshot {
        let cached = self.cached();
        BillSnapshot {
            currency_code: self.config.currency_code.clone(),
            currency_symbol: self.config.currency_symbol.clone(),
            participants: self.store.participants().to_vec(),
            items: self.store.items().to_vec(),
            charges: self.store.charges(),
            summary: cached.summary.clone(),
            totals: cached.totals.clone(),
        }
    }

    /// Formats an amount with the session's currency symbol.
    pub fn format_currency(&self, amount: Decimal) -> String {
        self.config.format_currency(amount)
    }

    fn cached(&self) -> &CachedSummary {
        let cached = self.cache.get_or_init(|| {
            let summary = self.store.summary();
            let totals = calculate_totals(&summary, self.store.items());
            debug!(revision = self.store.revision(), "Summary recalculated");
            CachedSummary {
                revision: self.store.revision(),
                summary,
                totals,
            }
        });
        debug_assert_eq!(cached.revision, self.store.revision());
        cached
    }

    /// Drops the cached summary if the store moved past it.
    fn invalidate_if_changed(&mut self) {
        let stale = self
            .cache
            .get()
            .is_some_and(|cached| cached.revision != self.store.revision());
        if stale {
            self.cache.take();
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    pub fn add_participant(&mut self, name: &str) -> MutationResult<Participant> {
        let result = self.store.add_participant(name);
        self.invalidate_if_changed();

        match &result {
            Ok(p) => debug!(id = %p.id, name = %p.name, "Participant added"),
            Err(err) => warn!(%name, error = %err, "add_participant rejected"),
        }
        result.into()
    }

    /// Removes a participant; `data` is empty when the id was unknown.
    pub fn remove_participant(&mut self, id: ParticipantId) -> MutationResult<Participant> {
        let removed = self.store.remove_participant(id);
        self.invalidate_if_changed();

        match &removed {
            Some(p) => debug!(%id, name = %p.name, "Participant removed"),
            None => debug!(%id, "remove_participant: unknown id"),
        }
        removed.into()
    }

    pub fn add_item(
        &mut self,
        name: &str,
        price: Decimal,
        shared_by: &[ParticipantId],
    ) -> MutationResult<Item> {
        let result = self.store.add_item(name, price, shared_by);
        self.invalidate_if_changed();

        match &result {
            Ok(item) => debug!(
                id = %item.id,
                price = %item.price,
                per_person = ?item.share_per_person(),
                "Item added"
            ),
            Err(err) => warn!(%name, %price, error = %err, "add_item rejected"),
        }
        result.into()
    }

    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> MutationResult<Item> {
        let result = self.store.update_item(id, patch);
        self.invalidate_if_changed();

        match &result {
            Ok(item) => debug!(
                %id,
                price = %item.price,
                per_person = ?item.share_per_person(),
                "Item updated"
            ),
            Err(err) => warn!(%id, error = %err, "update_item rejected"),
        }
        result.into()
    }

    /// Removes an item; `data` is empty when the id was unknown.
    pub fn remove_item(&mut self, id: ItemId) -> MutationResult<Item> {
        let removed = self.store.remove_item(id);
        self.invalidate_if_changed();

        debug!(%id, removed = removed.is_some(), "remove_item");
        removed.into()
    }

    pub fn update_charges(&mut self, patch: ChargesPatch) -> MutationResult<Charges> {
        let result = self.store.update_charges(patch);
        self.invalidate_if_changed();

        match &result {
            Ok(charges) => debug!(
                service_charge = %charges.service_charge,
                tax = %charges.tax,
                "Charges updated"
            ),
            Err(err) => warn!(error = %err, "update_charges rejected"),
        }
        result.into()
    }
}

impl Default for BillSession {
    fn default() -> Self {
        BillSession::new(SessionConfig::default())
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything needed to render or export the bill, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillSnapshot {
    pub currency_code: String,
    pub currency_symbol: String,
    pub participants: Vec<Participant>,
    pub items: Vec<Item>,
    pub charges: Charges,
    pub summary: Vec<PersonSummary>,
    pub totals: BillTotals,
}

impl BillSnapshot {
    /// Pretty-printed JSON for handing to an exporter.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
