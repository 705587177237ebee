//! # Error Types
//!
//! Domain-specific error types for splitbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  splitbill-core errors (this file)                                     │
//! │  └── BillError        - Validation / lookup failures of a mutation     │
//! │                                                                         │
//! │  splitbill-session errors (separate crate)                             │
//! │  ├── ApiError         - What the UI sees (code + message)              │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: BillError → ApiError → MutationResult → UI                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant is recoverable; nothing in the core panics
//! 3. Display strings are the messages shown next to the form field

use thiserror::Error;

use crate::types::{ItemId, ParticipantId};

// =============================================================================
// Bill Error
// =============================================================================

/// Reasons a store mutation can be rejected.
///
/// A rejected mutation never touches the store: callers can show the
/// message and let the user correct the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    /// Participant name is blank after trimming.
    #[error("Person name cannot be empty")]
    EmptyName,

    /// Participant name exceeds the length limit.
    #[error("Person name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    /// Another participant already has this name (case-insensitive).
    ///
    /// ## User Workflow
    /// ```text
    /// add_participant("Alice")   → Ok
    /// add_participant(" alice ") → trimmed: "alice"
    ///      │
    ///      ▼
    /// "alice".to_lowercase() == "Alice".to_lowercase()
    ///      │
    ///      ▼
    /// DuplicateName { name: "alice" }
    /// ```
    #[error("Person name '{name}' already exists")]
    DuplicateName { name: String },

    /// Item name is blank after trimming.
    #[error("Item name cannot be empty")]
    EmptyItemName,

    /// Item name exceeds the length limit.
    #[error("Item name cannot exceed {max} characters")]
    ItemNameTooLong { max: usize },

    /// Price is not positive or has more than 2 decimal places.
    #[error("Invalid price {price}: {reason}")]
    InvalidPrice { price: String, reason: PriceIssue },

    /// An item must be shared by at least one participant.
    #[error("At least one person must be selected")]
    NoParticipantsSelected,

    /// A `shared_by` entry does not reference a current participant.
    #[error("Selected person does not exist: {0}")]
    UnknownParticipant(ParticipantId),

    /// Item to update does not exist.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Merged service charge is outside `[0, 100]`.
    #[error("Service charge must be between 0 and 100, got {value}")]
    ServiceChargeOutOfRange { value: String },

    /// Merged tax is outside `[0, 100]`.
    #[error("Tax must be between 0 and 100, got {value}")]
    TaxOutOfRange { value: String },
}

/// Why a price was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceIssue {
    #[error("price must be greater than zero")]
    NotPositive,

    #[error("price must have at most 2 decimal places")]
    TooPrecise,

    #[error("price is too large")]
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BillError.
pub type BillResult<T> = Result<T, BillError>;

// =============================================================================
// Unit Tests
// =============================================================================
