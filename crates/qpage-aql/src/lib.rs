//! A small AQL query builder.
//!
//! [`AqlQuery`] renders `FOR ... IN ...` queries with SORT, LIMIT and RETURN
//! statements and implements [`qpage_core::QueryExpression`], so it can be
//! handed to [`qpage_core::paginate`].

pub mod error;
pub mod names;
pub mod query;

pub use error::AqlError;
pub use names::{is_identifier, is_reference};
pub use query::*;
