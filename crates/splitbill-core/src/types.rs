//! # Domain Types
//!
//! Core domain types used throughout splitbill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Participant    │   │      Item       │   │    Charges      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──┤  shared_by[]    │   │  service_charge │       │
//! │  │  name           │   │  id (UUID)      │   │  tax            │       │
//! │  └─────────────────┘   │  name           │   │  (Percentage)   │       │
//! │                        │  price (Money)  │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  Derived (never stored):                                               │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  PersonSummary  │   │   BillTotals    │                             │
//! │  │  one per person │   │  column sums    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stored entities are owned by [`crate::store::BillStore`]; the UI only
//! ever sees clones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{Money, Percentage};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque participant identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        ParticipantId(Uuid::new_v4())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque item identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Participant
// =============================================================================

/// A person among whom costs are divided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,

    /// Trimmed display name, unique case-insensitively.
    pub name: String,
}

// =============================================================================
// Item
// =============================================================================

/// A purchased line and the participants sharing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,

    /// Trimmed display name.
    pub name: String,

    /// Always positive. Serialized as a decimal string (`"12.99"`).
    pub price: Money,

    /// Participants sharing this item, in the order they were selected.
    ///
    /// Has no duplicates. May become empty when participants are removed.
    pub shared_by: Vec<ParticipantId>,
}

impl Item {
    /// Number of participants sharing the item.
    #[inline]
    pub fn share_count(&self) -> usize {
        self.shared_by.len()
    }

    pub fn is_shared_by(&self, participant: ParticipantId) -> bool {
        self.shared_by.contains(&participant)
    }

    /// Whether nobody is paying for this item any more.
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        self.shared_by.is_empty()
    }

    /// Each sharer's portion of the price, at full precision.
    ///
    /// `None` when the item is unassigned.
    pub fn share_per_person(&self) -> Option<Decimal> {
        match self.share_count() {
            0 => None,
            n => Some(self.price.to_decimal() / Decimal::from(n as u64)),
        }
    }
}

// =============================================================================
// Charges
// =============================================================================

/// Service charge and tax, applied to every participant's subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Charges {
    pub service_charge: Percentage,
    pub tax: Percentage,
}

// =============================================================================
// Mutation Inputs
// =============================================================================

/// Partial update for an item. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[ts(type = "string | null")]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub shared_by: Option<Vec<ParticipantId>>,
}

impl ItemPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn shared_by(mut self, shared_by: impl Into<Vec<ParticipantId>>) -> Self {
        self.shared_by = Some(shared_by.into());
        self
    }
}

/// Partial update for the charges. `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChargesPatch {
    #[serde(default)]
    #[ts(type = "string | null")]
    pub service_charge: Option<Decimal>,

    #[serde(default)]
    #[ts(type = "string | null")]
    pub tax: Option<Decimal>,
}

impl ChargesPatch {
    pub fn service_charge(mut self, value: Decimal) -> Self {
        self.service_charge = Some(value);
        self
    }

    pub fn tax(mut self, value: Decimal) -> Self {
        self.tax = Some(value);
        self
    }
}

// =============================================================================
// Derived Summaries
// =============================================================================

/// What one participant owes. All amounts are full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub person_id: ParticipantId,
    pub person_name: String,
    #[ts(type = "string")]
    pub subtotal: Decimal,
    #[ts(type = "string")]
    pub service_charge: Decimal,
    #[ts(type = "string")]
    pub tax: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,
}

impl PersonSummary {
    /// A zeroed summary for `participant`.
    pub fn empty(participant: &Participant) -> Self {
        PersonSummary {
            person_id: participant.id,
            person_name: participant.name.clone(),
            subtotal: Decimal::ZERO,
            service_charge: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Grand totals across every participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    #[ts(type = "string")]
    pub subtotal: Decimal,
    #[ts(type = "string")]
    pub service_charge: Decimal,
    #[ts(type = "string")]
    pub tax: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,

    /// Summed price of items nobody shares. Not part of `total`.
    #[ts(type = "string")]
    pub unassigned: Decimal,
}

// =============================================================================
// Unit Tests
// =============================================================================
