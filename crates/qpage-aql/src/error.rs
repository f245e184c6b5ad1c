//! Error types for qpage-aql.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building an AQL query.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AqlError {
    #[error("Invalid attribute reference: `{0}`")]
    #[diagnostic(
        code(qpage_aql::invalid_reference),
        help("References look like `doc.field` or `doc.nested.field`")
    )]
    InvalidReference(String),

    #[error("Unknown sort direction: `{0}`")]
    #[diagnostic(
        code(qpage_aql::invalid_direction),
        help("Use `ASC` or `DESC` (case-insensitive)")
    )]
    InvalidDirection(String),

    #[error("Invalid variable name: `{0}`")]
    #[diagnostic(
        code(qpage_aql::invalid_variable),
        help("Variable names start with a letter or `_` and contain only letters, digits and `_`")
    )]
    InvalidVariable(String),

    #[error("Invalid collection name: `{0}`")]
    #[diagnostic(
        code(qpage_aql::invalid_collection),
        help("Collection names start with a letter or `_`, then letters, digits, `_` or `-`")
    )]
    InvalidCollection(String),
}

/// Result type alias for qpage-aql operations.
pub type Result<T> = std::result::Result<T, AqlError>;
