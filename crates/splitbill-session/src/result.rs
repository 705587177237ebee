//! # Mutation Results
//!
//! Every session command answers with a [`MutationResult`], so a form can
//! render feedback without looking at the bill itself:
//!
//! ```json
//! { "success": false, "error": "Person name 'alice' already exists", "code": "DUPLICATE_NAME", "field": "personName" }
//! { "success": true, "data": { "id": "…", "name": "Alice" } }
//! ```

use serde::Serialize;
use splitbill_core::BillResult;
use ts_rs::TS;

use crate::error::{ApiError, ErrorCode};

/// Outcome of a bill mutation.
///
/// Fields are private so `success` always agrees with `error`/`code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult<T> {
    success: bool,

    /// Display message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    code: Option<ErrorCode>,

    /// Form field the error belongs to, see [`ErrorCode::field`].
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    field: Option<String>,

    /// The created, updated or removed entity, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    data: Option<T>,
}

impl<T> MutationResult<T> {
    pub fn ok(data: T) -> Self {
        MutationResult {
            success: true,
            error: None,
            code: None,
            field: None,
            data: Some(data),
        }
    }

    /// Success with nothing to return (e.g. removing an unknown id).
    pub fn ok_empty() -> Self {
        MutationResult {
            success: true,
            error: None,
            code: None,
            field: None,
            data: None,
        }
    }

    pub fn failure(err: ApiError) -> Self {
        MutationResult {
            success: false,
            field: err.code.field().map(str::to_string),
            error: Some(err.message),
            code: Some(err.code),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Converts back into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.code {
            Some(code) => Err(ApiError::new(code, self.error.unwrap_or_default())),
            None => Ok(self.data),
        }
    }
}

impl<T> From<BillResult<T>> for MutationResult<T> {
    fn from(result: BillResult<T>) -> Self {
        match result {
            Ok(data) => MutationResult::ok(data),
            Err(err) => MutationResult::failure(err.into()),
        }
    }
}

impl<T> From<Option<T>> for MutationResult<T> {
    fn from(removed: Option<T>) -> Self {
        match removed {
            Some(data) => MutationResult::ok(data),
            None => MutationResult::ok_empty(),
        }
    }
}
