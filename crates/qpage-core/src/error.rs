//! Error types for qpage-core.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while reading a parameter bag from a request.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Invalid number for `{key}`: {value}")]
    #[diagnostic(
        code(qpage_core::invalid_number),
        help("`page`, `limit` and `per_page` must be non-negative integers")
    )]
    InvalidNumber { key: String, value: String },

    #[error("Invalid parameter bag: {0}")]
    #[diagnostic(
        code(qpage_core::invalid_params),
        help("Expected a JSON object with `sort`, `page`, `limit` or `per_page`")
    )]
    Malformed(String),
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        ParamsError::Malformed(err.to_string())
    }
}

/// Rejection raised by a [`crate::validate::FieldValidator`].
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sorting by `{0}` is not allowed")]
    #[diagnostic(
        code(qpage_core::field_not_allowed),
        help("Use one of the sortable fields configured for this endpoint")
    )]
    FieldNotAllowed(String),

    #[error("Field `{field}` does not match pattern `{pattern}`")]
    #[diagnostic(code(qpage_core::field_pattern))]
    FieldPattern { field: String, pattern: String },

    #[error("Invalid sort direction `{direction}` for `{field}`")]
    #[diagnostic(
        code(qpage_core::invalid_direction),
        help("Use `asc` or `desc`")
    )]
    InvalidDirection { field: String, direction: String },

    #[error("{0}")]
    #[diagnostic(code(qpage_core::rejected))]
    Rejected(String),
}

/// Error returned by [`crate::Paginator::apply`].
///
/// `E` is the error type of the underlying query expression.
#[derive(Error, Debug)]
pub enum PaginateError<E> {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Query builder rejected clause: {0}")]
    Query(E),
}

impl<E> PaginateError<E> {
    /// Returns the query builder error, if that is what failed.
    pub fn into_query_error(self) -> Option<E> {
        match self {
            PaginateError::Query(err) => Some(err),
            PaginateError::Validation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParamsError>;
