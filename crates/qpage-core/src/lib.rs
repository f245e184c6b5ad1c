//! Sorting and pagination for query builder expressions.
//!
//! [`paginate`] takes any [`QueryExpression`], the name of the loop variable
//! the query iterates with, and a [`PageParams`] bag, and appends one sort
//! clause per requested key followed by a single limit clause.
//!
//! ```rust
//! use qpage_core::{paginate, PageParams, QueryExpression};
//!
//! #[derive(Default)]
//! struct Aql(String);
//!
//! impl QueryExpression for Aql {
//!     type Error = std::convert::Infallible;
//!
//!     fn sort(mut self, path: &str, direction: Option<&str>) -> Result<Self, Self::Error> {
//!         self.0.push_str(&format!(" SORT {path} {}", direction.unwrap_or("ASC")));
//!         Ok(self)
//!     }
//!
//!     fn limit(mut self, offset: u64, count: u64) -> Result<Self, Self::Error> {
//!         self.0.push_str(&format!(" LIMIT {offset}, {count}"));
//!         Ok(self)
//!     }
//! }
//!
//! let params = PageParams::new().sort("date, name desc").limit(100).page(5);
//! let query = paginate(Aql::default(), "doc", &params).unwrap();
//! assert_eq!(
//!     query.0,
//!     " SORT doc.date ASC SORT doc.name desc LIMIT 400, 100"
//! );
//! ```

pub mod error;
pub mod paginate;
pub mod params;
pub mod sort;
pub mod traits;
pub mod validate;

pub use error::{PaginateError, ParamsError, ValidationError};
pub use paginate::{paginate, PagePlan, Paginator};
pub use params::{PageDefaults, PageParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use sort::SortKey;
pub use traits::QueryExpression;
pub use validate::{AllOf, AllowList, FieldPattern, FieldValidator, StrictDirections};
