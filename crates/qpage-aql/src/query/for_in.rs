//! The `FOR ... IN ...` query builder.

use qpage_core::QueryExpression;
use tracing::trace;

use crate::{
    error::{AqlError, Result},
    names::{is_collection_name, is_identifier, is_reference},
    query::clause::{Direction, SortClause, Statement},
};

/// An AQL query over one collection.
///
/// Constructed via [`AqlQuery::for_in`], then chained with `.sort()` and
/// `.limit()` and finally rendered with [`AqlQuery::to_aql`]. Statements are
/// emitted in the order they were added, except that consecutive `.sort()`
/// calls share one `SORT` statement, the first call providing the primary
/// key.
///
/// # Example
///
/// ```rust
/// use qpage_aql::AqlQuery;
///
/// let aql = AqlQuery::for_in("doc", "users")
///     .unwrap()
///     .sort("doc.date", None)
///     .unwrap()
///     .sort("doc.name", Some("desc"))
///     .unwrap()
///     .limit(400, 100)
///     .unwrap()
///     .to_aql();
///
/// assert_eq!(
///     aql,
///     "FOR doc IN users SORT doc.date, doc.name DESC LIMIT 400, 100 RETURN doc"
/// );
/// ```
pub struct AqlQuery {
    variable: String,
    collection: String,
    statements: Vec<Statement>,
    returns: Option<String>,
}

impl AqlQuery {
    /// Starts a new query iterating `collection` as `variable`.
    ///
    /// # Parameters
    ///
    /// - `variable`: loop variable name (e.g., `"doc"`)
    /// - `collection`: collection name (e.g., `"users"`)
    pub fn for_in(variable: &str, collection: &str) -> Result<Self> {
        if !is_identifier(variable) {
            return Err(AqlError::InvalidVariable(variable.to_string()));
        }
        if !is_collection_name(collection) {
            return Err(AqlError::InvalidCollection(collection.to_string()));
        }

        Ok(Self {
            variable: variable.to_string(),
            collection: collection.to_string(),
            statements: vec![],
            returns: None,
        })
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Adds a sort key on `path`.
    ///
    /// `direction` must be `ASC` or `DESC` in any case; `None` leaves it to
    /// AQL, which sorts ascending.
    pub fn sort(mut self, path: &str, direction: Option<&str>) -> Result<Self> {
        if !is_reference(path) {
            return Err(AqlError::InvalidReference(path.to_string()));
        }
        let direction = direction.map(str::parse::<Direction>).transpose()?;
        trace!("SORT {path} {direction:?}");

        let clause = SortClause {
            path: path.to_string(),
            direction,
        };
        match self.statements.last_mut() {
            Some(Statement::Sort(keys)) => keys.push(clause),
            _ => self.statements.push(Statement::Sort(vec![clause])),
        }
        Ok(self)
    }

    /// Adds a LIMIT statement.
    pub fn limit(mut self, offset: u64, count: u64) -> Result<Self> {
        self.statements.push(Statement::Limit {
            offset,
            count,
        });
        Ok(self)
    }

    /// Sets the RETURN expression. Defaults to the loop variable.
    pub fn return_value(mut self, expr: impl Into<String>) -> Self {
        self.returns = Some(expr.into());
        self
    }

    /// Renders the query.
    pub fn to_aql(&self) -> String {
        let mut aql = format!("FOR {} IN {}", self.variable, self.collection);

        for statement in &self.statements {
            match statement {
                Statement::Sort(keys) => {
                    let keys = keys.iter().map(|k| k.to_string()).collect::<Vec<_>>();
                    aql.push_str(&format!(" SORT {}", keys.join(", ")));
                }
                Statement::Limit {
                    offset,
                    count,
                } => {
                    aql.push_str(&format!(" LIMIT {offset}, {count}"));
                }
            }
        }

        let returns = self.returns.as_deref().unwrap_or(&self.variable);
        aql.push_str(&format!(" RETURN {returns}"));

        aql
    }
}

impl QueryExpression for AqlQuery {
    type Error = AqlError;

    fn sort(self, path: &str, direction: Option<&str>) -> Result<Self> {
        AqlQuery::sort(self, path, direction)
    }

    fn limit(self, offset: u64, count: u64) -> Result<Self> {
        AqlQuery::limit(self, offset, count)
    }
}

#[cfg(test)]
mod tests {
    use qpage_core::{paginate, AllowList, PageParams, PaginateError, Paginator};

    use super::*;

    fn users() -> AqlQuery {
        AqlQuery::for_in("doc", "users").unwrap()
    }

    #[test]
    fn test_bare_query() {
        assert_eq!(users().to_aql(), "FOR doc IN users RETURN doc");
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            AqlQuery::for_in("doc.x", "users"),
            Err(AqlError::InvalidVariable(_))
        ));
        assert!(matches!(
            AqlQuery::for_in("doc", "users; REMOVE"),
            Err(AqlError::InvalidCollection(_))
        ));
        assert!(AqlQuery::for_in("d", "my-collection_2").is_ok());
    }

    #[test]
    fn test_sort_merges_consecutive_keys() {
        let aql = users()
            .sort("doc.a", Some("desc"))
            .unwrap()
            .sort("doc.b", None)
            .unwrap()
            .to_aql();
        assert_eq!(aql, "FOR doc IN users SORT doc.a DESC, doc.b RETURN doc");
    }

    #[test]
    fn test_sort_after_limit_starts_new_statement() {
        let aql = users()
            .sort("doc.a", None)
            .unwrap()
            .limit(0, 10)
            .unwrap()
            .sort("doc.b", Some("Asc"))
            .unwrap()
            .to_aql();
        assert_eq!(
            aql,
            "FOR doc IN users SORT doc.a LIMIT 0, 10 SORT doc.b ASC RETURN doc"
        );
    }

    #[test]
    fn test_sort_rejects_bad_input() {
        assert_eq!(
            users().sort("doc.", None).err(),
            Some(AqlError::InvalidReference("doc.".into()))
        );
        assert_eq!(
            users().sort("doc.a", Some("sideways")).err(),
            Some(AqlError::InvalidDirection("sideways".into()))
        );
    }

    #[test]
    fn test_return_value() {
        let aql = users()
            .limit(0, 1)
            .unwrap()
            .return_value("doc._key")
            .to_aql();
        assert_eq!(aql, "FOR doc IN users LIMIT 0, 1 RETURN doc._key");
    }

    #[test]
    fn test_paginate_scenario() {
        let params =
            PageParams::from_query_str("sort=date,%20name%20desc&limit=100&page=5").unwrap();
        let query = paginate(users(), "doc", &params).unwrap();
        assert_eq!(
            query.to_aql(),
            "FOR doc IN users SORT doc.date, doc.name DESC LIMIT 400, 100 RETURN doc"
        );
    }

    #[test]
    fn test_paginate_defaults() {
        let query = paginate(users(), "doc", &PageParams::new()).unwrap();
        assert_eq!(query.to_aql(), "FOR doc IN users LIMIT 0, 30 RETURN doc");
    }

    #[test]
    fn test_paginate_propagates_builder_error() {
        let err = paginate(users(), "doc", &PageParams::new().sort("name upward")).err();
        assert_eq!(err, Some(AqlError::InvalidDirection("upward".into())));

        let err = paginate(users(), "doc", &PageParams::new().sort("a,,b")).err();
        assert_eq!(err, Some(AqlError::InvalidReference("doc.".into())));
    }

    #[test]
    fn test_paginator_with_allow_list() {
        let paginator = Paginator::new().with_validator(AllowList::new(["date", "name"]));
        let params = PageParams::new().sort("name desc").per_page(5).page(2);
        let query = paginator.apply(users(), "doc", &params).unwrap();
        assert_eq!(
            query.to_aql(),
            "FOR doc IN users SORT doc.name DESC LIMIT 5, 5 RETURN doc"
        );

        let err = paginator
            .apply(users(), "doc", &PageParams::new().sort("password"))
            .err();
        assert!(matches!(err, Some(PaginateError::Validation(_))));
    }
}
