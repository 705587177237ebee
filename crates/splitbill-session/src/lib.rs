//! # splitbill-session: The Bill Session API
//!
//! This crate is what a presentation layer binds against. It wraps a
//! [`splitbill_core::BillStore`] in a [`BillSession`] that:
//!
//! - answers every command with a serializable [`MutationResult`]
//! - memoizes the per-person summary until the bill changes
//! - starts from a [`SessionConfig`] (currency, default charges, log filter)
//! - logs every accepted and rejected mutation through `tracing`
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI forms ──► BillSession command ──► BillStore mutation                │
//! │                     │                        │                          │
//! │                     │                        ▼                          │
//! │                     │               BillResult<T> (core)                │
//! │                     ▼                        │                          │
//! │            MutationResult<T> ◄───────────────┘                          │
//! │            { success, error?, code?, data? }                            │
//! │                                                                         │
//! │  Summary view ──► BillSession::summary() ──► cached Vec<PersonSummary>  │
//! │  Export ───────► BillSession::snapshot() ──► BillSnapshot (JSON)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use rust_decimal::Decimal;
//! use splitbill_session::{BillSession, SessionConfig};
//!
//! let mut session = BillSession::new(SessionConfig::default());
//! let alice = session.add_participant("Alice").into_result().unwrap().unwrap();
//!
//! let rejected = session.add_item("Som tam", Decimal::ZERO, &[alice.id]);
//! assert!(!rejected.is_success());
//!
//! session.add_item("Som tam", Decimal::from(80u64), &[alice.id]);
//! assert_eq!(session.format_currency(session.summary()[0].total), "฿80.00");
//! ```

use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod result;
pub mod session;

pub use config::{SessionConfig, DEFAULT_LOG_FILTER};
pub use error::{ApiError, ErrorCode};
pub use result::MutationResult;
pub use session::{BillSession, BillSnapshot};

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Never produced by the library itself
/// - WARN: Rejected mutations, ignored configuration values
/// - INFO: Session start
/// - DEBUG: Accepted mutations, summary recalculation
///
/// `RUST_LOG` wins over `filter` when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// [`init_tracing`] with the session's configured filter
/// (`SPLITBILL_LOG`, or [`DEFAULT_LOG_FILTER`]).
pub fn init_tracing_from(config: &SessionConfig) -> bool {
    init_tracing(&config.log_filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_once() {
        let config = SessionConfig::from_lookup(|key| {
            (key == "SPLITBILL_LOG").then(|| "warn,splitbill=trace".to_string())
        });
        assert_eq!(config.log_filter, "warn,splitbill=trace");

        let _ = init_tracing_from(&config);
        assert!(!init_tracing(DEFAULT_LOG_FILTER));
    }
}
