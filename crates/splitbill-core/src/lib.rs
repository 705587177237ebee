//! # splitbill-core: Pure Business Logic for Bill Splitting
//!
//! This crate holds every rule about a shared bill: who took part, what was
//! bought and by whom, which surcharges apply, and what each person owes.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        splitbill Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (any UI)                        │   │
//! │  │    People form ──► Item form ──► Charges form ──► Summary      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    splitbill-session                            │   │
//! │  │    BillSession, MutationResult, config, logging                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ splitbill-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │  summary  │  │   │
//! │  │   │Participant│  │   Money   │  │ BillStore │  │ per-person│  │   │
//! │  │   │   Item    │  │Percentage │  │ mutations │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Participant, Item, Charges, summaries, patches
//! - [`money`] - Money (integer satang) and Percentage
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//! - [`store`] - The bill state store
//! - [`summary`] - Per-person breakdown and grand totals
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use splitbill_core::{BillStore, ChargesPatch};
//!
//! let mut bill = BillStore::new();
//! let a = bill.add_participant("Alice").unwrap();
//! let b = bill.add_participant("Bob").unwrap();
//! bill.add_item("Pizza", Decimal::from(100u64), &[a.id, b.id]).unwrap();
//! bill.update_charges(ChargesPatch::default().service_charge(Decimal::from(10u64)))
//!     .unwrap();
//!
//! let summary = bill.summary();
//! assert_eq!(summary[0].total, Decimal::from(55u64));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BillError, BillResult, PriceIssue};
pub use money::{Money, Percentage};
pub use store::BillStore;
pub use summary::{calculate_summary, calculate_totals};
pub use types::*;

/// Re-exported so callers build prices and percentages with the same type.
pub use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a participant name, in characters.
pub const MAX_PARTICIPANT_NAME_CHARS: usize = 50;

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_CHARS: usize = 100;
