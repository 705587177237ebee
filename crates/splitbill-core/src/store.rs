//! # Bill State Store
//!
//! Owns the participants, items and charges of one bill and is the only
//! way to change them.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Store Operations                                │
//! │                                                                         │
//! │  Operation               Validation                 State Change        │
//! │  ─────────               ──────────                 ────────────        │
//! │                                                                         │
//! │  add_participant() ────► name, uniqueness ────────► participants.push  │
//! │                                                                         │
//! │  remove_participant() ─► (none, idempotent) ──────► participants.retain│
//! │                                                     + cascade shared_by │
//! │                                                                         │
//! │  add_item() ───────────► name, price, shared_by ──► items.push         │
//! │                                                                         │
//! │  update_item() ────────► exists + provided fields ► items[i] = updated │
//! │                                                                         │
//! │  remove_item() ────────► (none, idempotent) ──────► items.retain       │
//! │                                                                         │
//! │  update_charges() ─────► merged values in range ──► charges = merged   │
//! │                                                                         │
//! │  NOTE: validation always finishes before the first write, so a failed  │
//! │        call leaves the store exactly as it was.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Participant names are trimmed, 1-50 chars, unique ignoring case
//! - Item names are trimmed, 1-100 chars; prices positive with ≤ 2 decimals
//! - Every id in an item's `shared_by` names a current participant
//! - `revision` changes exactly when the stored state changes

use rust_decimal::Decimal;

use crate::error::{BillError, BillResult};
use crate::summary::{calculate_summary, calculate_totals};
use crate::types::{
    BillTotals, Charges, ChargesPatch, Item, ItemId, ItemPatch, Participant, ParticipantId,
    PersonSummary,
};
use crate::validation::{
    validate_item_name, validate_participant_name, validate_price, validate_service_charge,
    validate_shared_by, validate_tax,
};

/// In-memory state of a single bill.
///
/// There is no global instance: whoever runs a bill-splitting session
/// creates a store and passes it around by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillStore {
    participants: Vec<Participant>,
    items: Vec<Item>,
    charges: Charges,

    /// Bumped by every mutation that changes state.
    revision: u64,
}

impl BillStore {
    /// Creates an empty bill with zero charges.
    pub fn new() -> Self {
        BillStore::default()
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn charges(&self) -> Charges {
        self.charges
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Counter that changes whenever participants, items or charges change.
    ///
    /// Suitable as a cache key for anything derived from the store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Items left with nobody sharing them after participant removals.
    pub fn unassigned_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_unassigned())
    }

    /// Per-person breakdown of the current state.
    pub fn summary(&self) -> Vec<PersonSummary> {
        calculate_summary(&self.participants, &self.items, &self.charges)
    }

    /// Grand totals of the current state.
    pub fn totals(&self) -> BillTotals {
        calculate_totals(&self.summary(), &self.items)
    }

    // -------------------------------------------------------------------------
    // Participant Operations
    // -------------------------------------------------------------------------

    /// Adds a participant.
    ///
    /// ## Errors
    /// - `EmptyName` if the name is blank after trimming
    /// - `NameTooLong` if longer than 50 characters
    /// - `DuplicateName` if someone already has that name, ignoring case
    pub fn add_participant(&mut self, name: &str) -> BillResult<Participant> {
        let name = validate_participant_name(name, &self.participants)?;

        let participant = Participant {
            id: ParticipantId::generate(),
            name,
        };
        self.participants.push(participant.clone());
        self.touch();

        Ok(participant)
    }

    /// Removes a participant and drops their id from every item.
    ///
    /// Unknown ids are ignored. Items left with nobody sharing them stay
    /// in the bill (see [`BillStore::unassigned_items`]).
    pub fn remove_participant(&mut self, id: ParticipantId) -> Option<Participant> {
        let position = self.participants.iter().position(|p| p.id == id)?;
        let removed = self.participants.remove(position);

        for item in &mut self.items {
            item.shared_by.retain(|pid| *pid != id);
        }
        self.touch();

        Some(removed)
    }

    // -------------------------------------------------------------------------
    // Item Operations
    // -------------------------------------------------------------------------

    /// Adds an item shared by the given participants.
    ///
    /// ## Errors
    /// Checked in this order:
    /// - `EmptyItemName` / `ItemNameTooLong`
    /// - `InvalidPrice` (not positive, or more than 2 decimals)
    /// - `NoParticipantsSelected`
    /// - `UnknownParticipant`
    pub fn add_item(
        &mut self,
        name: &str,
        price: Decimal,
        shared_by: &[ParticipantId],
    ) -> BillResult<Item> {
        let name = validate_item_name(name)?;
        let price = validate_price(price)?;
        let shared_by = validate_shared_by(shared_by, &self.participants)?;

        let item = Item {
            id: ItemId::generate(),
            name,
            price,
            shared_by,
        };
        self.items.push(item.clone());
        self.touch();

        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// Provided fields are validated with the same rules as [`add_item`];
    /// the item is replaced only if all of them pass.
    ///
    /// ## Errors
    /// `ItemNotFound` if `id` is unknown, otherwise the first failing field.
    ///
    /// [`add_item`]: BillStore::add_item
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> BillResult<Item> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(BillError::ItemNotFound(id))?;

        let mut updated = self.items[position].clone();

        if let Some(name) = patch.name.as_deref() {
            updated.name = validate_item_name(name)?;
        }
        if let Some(price) = patch.price {
            updated.price = validate_price(price)?;
        }
        if let Some(shared_by) = patch.shared_by.as_deref() {
            updated.shared_by = validate_shared_by(shared_by, &self.participants)?;
        }

        if updated != self.items[position] {
            self.items[position] = updated.clone();
            self.touch();
        }

        Ok(updated)
    }

    /// Removes an item. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(position);
        self.touch();

        Some(removed)
    }

    // -------------------------------------------------------------------------
    // Charges
    // -------------------------------------------------------------------------

    /// Merges the provided percentages onto the current charges.
    ///
    /// Both merged values are checked before either is stored, so the
    /// charges are always replaced as a pair.
    ///
    /// ## Errors
    /// - `ServiceChargeOutOfRange` (checked first)
    /// - `TaxOutOfRange`
    pub fn update_charges(&mut self, patch: ChargesPatch) -> BillResult<Charges> {
        let service_charge = patch
            .service_charge
            .unwrap_or_else(|| self.charges.service_charge.value());
        let tax = patch.tax.unwrap_or_else(|| self.charges.tax.value());

        let merged = Charges {
            service_charge: validate_service_charge(service_charge)?,
            tax: validate_tax(tax)?,
        };

        if merged != self.charges {
            self.charges = merged;
            self.touch();
        }

        Ok(merged)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceIssue;
    use rust_decimal_macros::dec;

    fn store_with(names: &[&str]) -> (BillStore, Vec<ParticipantId>) {
        let mut store = BillStore::new();
        let ids = names
            .iter()
            .map(|name| store.add_participant(name).unwrap().id)
            .collect();
        (store, ids)
    }

    #[test]
    fn test_add_participant() {
        let mut store = BillStore::new();
        let alice = store.add_participant("  Alice  ").unwrap();

        assert_eq!(alice.name, "Alice");
        assert_eq!(store.participants(), &[alice.clone()]);
        assert_eq!(store.participant(alice.id), Some(&alice));
    }

    #[test]
    fn test_add_participant_rejects_duplicate_ignoring_case() {
        let (mut store, _) = store_with(&["Alice"]);
        let before = store.clone();

        let err = store.add_participant(" alice ").unwrap_err();
        assert!(matches!(err, BillError::DuplicateName { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_participant_errors() {
        let mut store = BillStore::new();
        assert_eq!(store.add_participant("   "), Err(BillError::EmptyName));
        assert_eq!(
            store.add_participant(&"n".repeat(51)),
            Err(BillError::NameTooLong { max: 50 })
        );
        assert!(store.participants().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_remove_participant_cascades() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let shared = store.add_item("Pizza", dec!(100), &[ids[0], ids[1]]).unwrap();
        let solo = store.add_item("Coke", dec!(20), &[ids[0]]).unwrap();

        let removed = store.remove_participant(ids[0]).unwrap();
        assert_eq!(removed.name, "A");

        assert_eq!(store.item(shared.id).unwrap().shared_by, vec![ids[1]]);
        assert!(store.item(solo.id).unwrap().shared_by.is_empty());

        let unassigned: Vec<ItemId> = store.unassigned_items().map(|i| i.id).collect();
        assert_eq!(unassigned, vec![solo.id]);
    }

    #[test]
    fn test_remove_unknown_participant_is_noop() {
        let (mut store, _) = store_with(&["A"]);
        let before = store.clone();

        assert!(store.remove_participant(ParticipantId::generate()).is_none());
        assert_eq!(store, before);
        assert_eq!(store.revision(), before.revision());
    }

    #[test]
    fn test_add_item() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let item = store.add_item(" Beer ", dec!(12.99), &[ids[1], ids[0]]).unwrap();

        assert_eq!(item.name, "Beer");
        assert_eq!(item.price.satang(), 1299);
        assert_eq!(item.shared_by, vec![ids[1], ids[0]]);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_add_item_validation_order() {
        let (mut store, ids) = store_with(&["A"]);

        assert_eq!(
            store.add_item("", dec!(-1), &[]),
            Err(BillError::EmptyItemName)
        );
        assert!(matches!(
            store.add_item("x", dec!(0), &[]),
            Err(BillError::InvalidPrice {
                reason: PriceIssue::NotPositive,
                ..
            })
        ));
        assert_eq!(
            store.add_item("x", dec!(1), &[]),
            Err(BillError::NoParticipantsSelected)
        );

        let stranger = ParticipantId::generate();
        assert_eq!(
            store.add_item("x", dec!(1), &[ids[0], stranger]),
            Err(BillError::UnknownParticipant(stranger))
        );
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_price_boundaries() {
        let (mut store, ids) = store_with(&["A"]);

        for bad in [dec!(0), dec!(-5), dec!(12.999)] {
            assert!(matches!(
                store.add_item("x", bad, &ids),
                Err(BillError::InvalidPrice { .. })
            ));
        }
        assert!(store.add_item("x", dec!(12.99), &ids).is_ok());
    }

    #[test]
    fn test_update_item_partial() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let item = store.add_item("Pizza", dec!(100), &[ids[0]]).unwrap();

        let updated = store
            .update_item(item.id, ItemPatch::default().price(dec!(150.5)))
            .unwrap();

        assert_eq!(updated.name, "Pizza");
        assert_eq!(updated.price.satang(), 15050);
        assert_eq!(updated.shared_by, vec![ids[0]]);
        assert_eq!(store.item(item.id), Some(&updated));
    }

    #[test]
    fn test_update_item_all_or_nothing() {
        let (mut store, ids) = store_with(&["A"]);
        let item = store.add_item("Pizza", dec!(100), &ids).unwrap();
        let before = store.clone();

        // Valid name, invalid shared_by: nothing is applied.
        let result = store.update_item(
            item.id,
            ItemPatch::default()
                .name("Calzone")
                .shared_by(vec![ParticipantId::generate()]),
        );
        assert!(matches!(result, Err(BillError::UnknownParticipant(_))));
        assert_eq!(store, before);

        let result = store.update_item(item.id, ItemPatch::default().shared_by(vec![]));
        assert_eq!(result, Err(BillError::NoParticipantsSelected));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_missing_item() {
        let mut store = BillStore::new();
        let id = ItemId::generate();
        assert_eq!(
            store.update_item(id, ItemPatch::default().name("x")),
            Err(BillError::ItemNotFound(id))
        );
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let (mut store, ids) = store_with(&["A"]);
        let item = store.add_item("Pizza", dec!(100), &ids).unwrap();

        assert!(store.remove_item(item.id).is_some());
        let after_first = store.clone();

        assert!(store.remove_item(item.id).is_none());
        assert_eq!(store, after_first);
        assert_eq!(store.revision(), after_first.revision());
    }

    #[test]
    fn test_update_charges_merges() {
        let mut store = BillStore::new();

        store
            .update_charges(ChargesPatch::default().service_charge(dec!(10)))
            .unwrap();
        let charges = store
            .update_charges(ChargesPatch::default().tax(dec!(7)))
            .unwrap();

        assert_eq!(charges.service_charge.value(), dec!(10));
        assert_eq!(charges.tax.value(), dec!(7));
        assert_eq!(store.charges(), charges);
    }

    #[test]
    fn test_update_charges_rejects_out_of_range_as_a_pair() {
        let mut store = BillStore::new();
        store
            .update_charges(ChargesPatch::default().service_charge(dec!(10)).tax(dec!(7)))
            .unwrap();
        let before = store.clone();

        let result = store.update_charges(
            ChargesPatch::default()
                .service_charge(dec!(15))
                .tax(dec!(101)),
        );
        assert!(matches!(result, Err(BillError::TaxOutOfRange { .. })));
        assert_eq!(store, before);

        let result = store.update_charges(
            ChargesPatch::default()
                .service_charge(dec!(-1))
                .tax(dec!(200)),
        );
        assert!(matches!(
            result,
            Err(BillError::ServiceChargeOutOfRange { .. })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut store = BillStore::new();
        assert_eq!(store.revision(), 0);

        let a = store.add_participant("A").unwrap();
        assert_eq!(store.revision(), 1);

        let _ = store.add_participant("a");
        assert_eq!(store.revision(), 1);

        store.add_item("x", dec!(1), &[a.id]).unwrap();
        assert_eq!(store.revision(), 2);

        // Re-submitting current charges changes nothing.
        store.update_charges(ChargesPatch::default()).unwrap();
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_summary_matches_calculator() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.add_item("Pizza", dec!(100), &ids[..2]).unwrap();
        store
            .update_charges(ChargesPatch::default().service_charge(dec!(10)).tax(dec!(7)))
            .unwrap();

        let summary = store.summary();
        assert_eq!(summary[0].total, dec!(58.5));
        assert_eq!(summary[1].total, dec!(58.5));
        assert_eq!(summary[2].total, dec!(0));
        assert_eq!(store.totals().total, dec!(117));
    }
}
