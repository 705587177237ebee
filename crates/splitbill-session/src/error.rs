//! # API Error Type
//!
//! What a UI receives when a bill mutation is rejected.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session.add_item("", ...)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  BillStore::add_item ── BillError::EmptyItemName                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiError { code: EMPTY_ITEM_NAME, message: "Item name cannot ..." }   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  MutationResult { success: false, error, code }  ──►  UI               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use splitbill_core::BillError;
use ts_rs::TS;

/// A rejected mutation, ready to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes, one per domain error.
///
/// ## Usage in Frontend
/// ```typescript
/// const result = await addItem(form);
/// if (!result.success) {
///   switch (result.code) {
///     case 'INVALID_PRICE':
///       priceField.setError(result.error);
///       break;
///     case 'NO_PARTICIPANTS_SELECTED':
///       peopleField.setError(result.error);
///       break;
///     default:
///       banner.show(result.error);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyName,
    NameTooLong,
    DuplicateName,
    EmptyItemName,
    ItemNameTooLong,
    InvalidPrice,
    NoParticipantsSelected,
    UnknownParticipant,
    ItemNotFound,
    ServiceChargeOutOfRange,
    TaxOutOfRange,
}

impl ErrorCode {
    /// Which form field the error belongs to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ErrorCode::EmptyName | ErrorCode::NameTooLong | ErrorCode::DuplicateName => {
                Some("personName")
            }
            ErrorCode::EmptyItemName | ErrorCode::ItemNameTooLong => Some("itemName"),
            ErrorCode::InvalidPrice => Some("price"),
            ErrorCode::NoParticipantsSelected | ErrorCode::UnknownParticipant => Some("sharedBy"),
            ErrorCode::ServiceChargeOutOfRange => Some("serviceCharge"),
            ErrorCode::TaxOutOfRange => Some("tax"),
            ErrorCode::ItemNotFound => None,
        }
    }
}

impl From<&BillError> for ErrorCode {
    fn from(err: &BillError) -> Self {
        match err {
            BillError::EmptyName => ErrorCode::EmptyName,
            BillError::NameTooLong { .. } => ErrorCode::NameTooLong,
            BillError::DuplicateName { .. } => ErrorCode::DuplicateName,
            BillError::EmptyItemName => ErrorCode::EmptyItemName,
            BillError::ItemNameTooLong { .. } => ErrorCode::ItemNameTooLong,
            BillError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            BillError::NoParticipantsSelected => ErrorCode::NoParticipantsSelected,
            BillError::UnknownParticipant(_) => ErrorCode::UnknownParticipant,
            BillError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            BillError::ServiceChargeOutOfRange { .. } => ErrorCode::ServiceChargeOutOfRange,
            BillError::TaxOutOfRange { .. } => ErrorCode::TaxOutOfRange,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Converts domain errors to API errors.
impl From<&BillError> for ApiError {
    fn from(err: &BillError) -> Self {
        ApiError::new(ErrorCode::from(err), err.to_string())
    }
}

impl From<BillError> for ApiError {
    fn from(err: BillError) -> Self {
        ApiError::from(&err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use splitbill_core::{ItemId, PriceIssue};

    #[test]
    fn test_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::NoParticipantsSelected).unwrap();
        assert_eq!(json, "\"NO_PARTICIPANTS_SELECTED\"");
    }

    #[test]
    fn test_from_bill_error() {
        let err: ApiError = BillError::InvalidPrice {
            price: "0".to_string(),
            reason: PriceIssue::NotPositive,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert_eq!(err.message, "Invalid price 0: price must be greater than zero");
        assert_eq!(err.code.field(), Some("price"));
    }

    #[test]
    fn test_item_not_found_has_no_field() {
        let err: ApiError = BillError::ItemNotFound(ItemId::generate()).into();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(err.code.field(), None);
        assert!(err.to_string().starts_with("[ItemNotFound] Item not found: "));
    }
}
