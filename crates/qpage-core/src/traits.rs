//! The capability a query builder must offer to be paginated.

/// A sortable, limitable query expression.
///
/// Implementors are treated as opaque: every method consumes the expression
/// and returns the next one, so both fluent (mutate-and-return) and
/// immutable (copy-on-write) builders fit.
///
/// Errors are the builder's own. [`crate::paginate`] hands them back to the
/// caller untouched.
///
/// # Example
///
/// ```rust
/// use qpage_core::QueryExpression;
///
/// #[derive(Default)]
/// struct Clauses(Vec<String>);
///
/// impl QueryExpression for Clauses {
///     type Error = std::convert::Infallible;
///
///     fn sort(mut self, path: &str, direction: Option<&str>) -> Result<Self, Self::Error> {
///         self.0.push(format!("SORT {path} {}", direction.unwrap_or("ASC")));
///         Ok(self)
///     }
///
///     fn limit(mut self, offset: u64, count: u64) -> Result<Self, Self::Error> {
///         self.0.push(format!("LIMIT {offset}, {count}"));
///         Ok(self)
///     }
/// }
/// ```
pub trait QueryExpression: Sized {
    type Error;

    /// Appends a sort key on `path`.
    ///
    /// `direction` is passed through exactly as the caller supplied it; `None`
    /// means no explicit direction and leaves the choice to the builder.
    fn sort(self, path: &str, direction: Option<&str>) -> Result<Self, Self::Error>;

    /// Restricts the result to `count` rows after skipping `offset`.
    fn limit(self, offset: u64, count: u64) -> Result<Self, Self::Error>;
}
