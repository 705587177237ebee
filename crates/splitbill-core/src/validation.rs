//! # Validation Module
//!
//! Input rules applied by [`crate::store::BillStore`] before anything is
//! committed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  ├── Input masking (digits, one dot, 2 decimals)                       │
//! │  └── Parsing text into Decimal                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim + length of names                                            │
//! │  ├── Price positive, ≤ 2 decimals                                      │
//! │  ├── Percentages in [0, 100]                                           │
//! │  └── shared_by non-empty and referencing known participants            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: BillStore commit (only reached when every rule passed)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator is pure and returns the normalized value it accepted,
//! so the store commits exactly what was checked.

use rust_decimal::Decimal;

use crate::error::{BillError, BillResult, PriceIssue};
use crate::money::{Money, Percentage};
use crate::types::{Participant, ParticipantId};
use crate::{MAX_ITEM_NAME_CHARS, MAX_PARTICIPANT_NAME_CHARS};

// =============================================================================
// Name Validators
// =============================================================================

/// Validates a participant name and returns it trimmed.
///
/// ## Rules
/// - Not blank after trimming
/// - At most 50 characters (counted as Unicode scalar values, so Thai
///   names are not penalised for their UTF-8 width)
/// - Not equal, ignoring case, to any name in `existing`
///
/// ## Example
/// ```rust
/// use splitbill_core::validation::validate_participant_name;
///
/// assert_eq!(validate_participant_name("  Alice ", &[]).unwrap(), "Alice");
/// assert!(validate_participant_name("   ", &[]).is_err());
/// ```
pub fn validate_participant_name(name: &str, existing: &[Participant]) -> BillResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(BillError::EmptyName);
    }

    if name.chars().count() > MAX_PARTICIPANT_NAME_CHARS {
        return Err(BillError::NameTooLong {
            max: MAX_PARTICIPANT_NAME_CHARS,
        });
    }

    let folded = name.to_lowercase();
    if existing.iter().any(|p| p.name.to_lowercase() == folded) {
        return Err(BillError::DuplicateName {
            name: name.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Not blank after trimming
/// - At most 100 characters
pub fn validate_item_name(name: &str) -> BillResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(BillError::EmptyItemName);
    }

    if name.chars().count() > MAX_ITEM_NAME_CHARS {
        return Err(BillError::ItemNameTooLong {
            max: MAX_ITEM_NAME_CHARS,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price and converts it to [`Money`].
///
/// ## Rules
/// - Must be greater than zero
/// - At most 2 fractional digits once trailing zeros are dropped
///   (`12.990` is accepted as `12.99`)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Item form: price                                                      │
/// │                                                                         │
/// │  validate_price(p)                                                     │
/// │       │                                                                 │
/// │       ├── p <= 0?         → InvalidPrice (NotPositive)                 │
/// │       ├── > 2 decimals?   → InvalidPrice (TooPrecise)                  │
/// │       ├── overflows i64?  → InvalidPrice (Overflow)                    │
/// │       └── OK → Money (satang)                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use splitbill_core::validation::validate_price;
///
/// assert_eq!(validate_price(Decimal::new(1299, 2)).unwrap().satang(), 1299);
/// assert!(validate_price(Decimal::ZERO).is_err());
/// assert!(validate_price(Decimal::new(12999, 3)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> BillResult<Money> {
    let invalid = |reason| BillError::InvalidPrice {
        price: price.to_string(),
        reason,
    };

    if price <= Decimal::ZERO {
        return Err(invalid(PriceIssue::NotPositive));
    }

    if price.normalize().scale() > crate::money::CURRENCY_DECIMALS {
        return Err(invalid(PriceIssue::TooPrecise));
    }

    Money::from_decimal(price).ok_or_else(|| invalid(PriceIssue::Overflow))
}

/// Validates a service-charge percentage.
pub fn validate_service_charge(value: Decimal) -> BillResult<Percentage> {
    Percentage::new(value).ok_or_else(|| BillError::ServiceChargeOutOfRange {
        value: value.to_string(),
    })
}

/// Validates a tax percentage.
pub fn validate_tax(value: Decimal) -> BillResult<Percentage> {
    Percentage::new(value).ok_or_else(|| BillError::TaxOutOfRange {
        value: value.to_string(),
    })
}

// =============================================================================
// Reference Validators
// =============================================================================

/// Validates the participants sharing an item.
///
/// ## Rules
/// - At least one participant
/// - Every id belongs to `participants`
///
/// Duplicates are collapsed, keeping the first occurrence, so the returned
/// list is a set in selection order.
pub fn validate_shared_by(
    shared_by: &[ParticipantId],
    participants: &[Participant],
) -> BillResult<Vec<ParticipantId>> {
    if shared_by.is_empty() {
        return Err(BillError::NoParticipantsSelected);
    }

    let mut accepted: Vec<ParticipantId> = Vec::with_capacity(shared_by.len());
    for id in shared_by {
        if !participants.iter().any(|p| p.id == *id) {
            return Err(BillError::UnknownParticipant(*id));
        }
        if !accepted.contains(id) {
            accepted.push(*id);
        }
    }

    Ok(accepted)
}

// =============================================================================
// Unit Tests
// =============================================================================
