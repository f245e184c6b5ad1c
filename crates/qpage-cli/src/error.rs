//! Error types for the qpage binary.

use miette::Diagnostic;
use qpage_aql::AqlError;
use qpage_config::error::ConfigError;
use qpage_core::{PaginateError, ParamsError, ValidationError};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Aql(#[from] AqlError),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(qpage::json))]
    Json(#[from] serde_json::Error),
}

impl From<PaginateError<AqlError>> for CliError {
    fn from(err: PaginateError<AqlError>) -> Self {
        match err {
            PaginateError::Validation(err) => CliError::Validation(err),
            PaginateError::Query(err) => CliError::Aql(err),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
