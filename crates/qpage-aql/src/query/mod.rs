//! The AQL query builder.
//!
//! Start with [`AqlQuery::for_in`] and chain methods to construct a
//! `FOR ... IN ...` query:
//!
//! ```ignore
//! use qpage_aql::AqlQuery;
//!
//! let aql = AqlQuery::for_in("doc", "users")?
//!     .sort("doc.created_at", Some("desc"))?
//!     .limit(0, 10)?
//!     .to_aql();
//! ```

pub mod clause;
pub mod for_in;

pub use clause::Direction;
pub use for_in::AqlQuery;
