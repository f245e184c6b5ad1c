//! Appending sort and limit clauses to a query expression.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    error::{PaginateError, ValidationError},
    params::{skip_for, PageDefaults, PageParams},
    sort::SortKey,
    traits::QueryExpression,
    validate::FieldValidator,
};

/// Adds sorting and pagination to `query` from request parameters.
///
/// Each key of `params.sort` becomes one `sort` call on `doc.<field>`, in the
/// order listed, so the first key is the primary one. A single
/// `limit((page - 1) * page_size, page_size)` call follows, with `page`
/// defaulting to 1 and the page size (`limit`, else `per_page`) to 30.
///
/// Field names and directions are passed to the builder as given. Any error
/// the builder raises is returned unchanged.
///
/// # Example
///
/// ```ignore
/// let query = AqlQuery::for_in("doc", "users");
/// let params = PageParams::from_query_str("sort=date,name%20desc&limit=100&page=5")?;
/// let query = paginate(query, "doc", &params)?;
/// // FOR doc IN users SORT doc.date, doc.name DESC LIMIT 400, 100
/// ```
pub fn paginate<Q: QueryExpression>(
    query: Q,
    doc: &str,
    params: &PageParams,
) -> Result<Q, Q::Error> {
    Paginator::new().plan(doc, params).apply_to(query)
}

/// The clauses a [`Paginator`] will append, computed without a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagePlan {
    /// `(path, direction)` pairs, primary key first.
    pub sorts: Vec<(String, Option<String>)>,
    pub skip: u64,
    pub count: u64,
}

impl PagePlan {
    /// Replays the plan onto a query expression.
    pub fn apply_to<Q: QueryExpression>(&self, query: Q) -> Result<Q, Q::Error> {
        let mut query = query;
        for (path, direction) in &self.sorts {
            trace!("sort {path} {}", direction.as_deref().unwrap_or("<none>"));
            query = query.sort(path, direction.as_deref())?;
        }
        debug!("limit {}, {}", self.skip, self.count);
        query.limit(self.skip, self.count)
    }
}

/// Configurable form of [`paginate`].
///
/// `Paginator::new()` behaves exactly like [`paginate`]. Defaults, a page size
/// ceiling and a [`FieldValidator`] can be layered on top; none of them are
/// active unless set.
#[derive(Default)]
pub struct Paginator {
    defaults: PageDefaults,
    max_page_size: Option<u64>,
    validator: Option<Box<dyn FieldValidator>>,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: PageDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Caps the page size. Requests above the cap get the cap.
    pub fn with_max_page_size(mut self, max: u64) -> Self {
        self.max_page_size = Some(max);
        self
    }

    pub fn with_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn defaults(&self) -> &PageDefaults {
        &self.defaults
    }

    pub fn max_page_size(&self) -> Option<u64> {
        self.max_page_size
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Works out the clauses for `params` without validating them.
    pub fn plan(&self, doc: &str, params: &PageParams) -> PagePlan {
        let page = params.page_number(&self.defaults);
        let mut count = params.page_size(&self.defaults);
        if let Some(max) = self.max_page_size {
            count = count.min(max);
        }

        let keys = params.sort_keys();
        debug!(page, count, sort_keys = keys.len(), "planning pagination");

        PagePlan {
            sorts: keys
                .iter()
                .map(|key| (key.path(doc), key.direction.clone()))
                .collect(),
            skip: skip_for(page, count),
            count,
        }
    }

    /// Checks every sort key against the installed validator, if any.
    pub fn validate(&self, params: &PageParams) -> Result<Vec<SortKey>, ValidationError> {
        let keys = params.sort_keys();
        if let Some(ref validator) = self.validator {
            for key in &keys {
                validator.validate(key)?;
            }
        }
        Ok(keys)
    }

    /// Validates, then appends the clauses to `query`.
    ///
    /// No clause is appended if any sort key is rejected.
    pub fn apply<Q: QueryExpression>(
        &self,
        query: Q,
        doc: &str,
        params: &PageParams,
    ) -> Result<Q, PaginateError<Q::Error>> {
        self.validate(params)?;

        self.plan(doc, params)
            .apply_to(query)
            .map_err(PaginateError::Query)
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("defaults", &self.defaults)
            .field("max_page_size", &self.max_page_size)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
