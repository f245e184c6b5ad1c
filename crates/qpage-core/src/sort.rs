//! Parsing of the `sort` request parameter.

use std::fmt;

use serde::Serialize;

/// One entry of a `sort` parameter: a field and an optional direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub field: String,
    pub direction: Option<String>,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: Option<&str>) -> Self {
        Self {
            field: field.into(),
            direction: direction.map(String::from),
        }
    }

    /// Qualifies the field with the loop variable, e.g. `doc.name`.
    pub fn path(&self, doc: &str) -> String {
        format!("{doc}.{}", self.field)
    }

    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(ref direction) => write!(f, "{} {direction}", self.field),
            None => write!(f, "{}", self.field),
        }
    }
}

/// Splits a `sort` parameter into its keys, in the order given.
///
/// Entries are separated by `,`. Within an entry the first word is the field
/// and the second, if any, is the direction; anything after that is ignored.
/// Neither part is validated. An empty entry (as in `"a,,b"`) produces a key
/// with an empty field, and an empty input produces no keys at all.
///
/// # Examples
///
/// ```
/// use qpage_core::sort::{parse_sort, SortKey};
///
/// let keys = parse_sort("date, name desc");
/// assert_eq!(
///     keys,
///     vec![SortKey::new("date", None), SortKey::new("name", Some("desc"))]
/// );
/// ```
pub fn parse_sort(sort: &str) -> Vec<SortKey> {
    if sort.is_empty() {
        return Vec::new();
    }

    sort.split(',')
        .map(|entry| {
            let mut words = entry.split_whitespace();
            let field = words.next().unwrap_or_default();
            SortKey::new(field, words.next())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        assert_eq!(parse_sort("a"), vec![SortKey::new("a", None)]);
    }

    #[test]
    fn test_field_with_direction() {
        let keys = parse_sort("a desc, b");
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0], SortKey::new("a", Some("desc")));
        assert_eq!(keys[1], SortKey::new("b", None));
    }

    #[test]
    fn test_empty_is_no_keys() {
        assert!(parse_sort("").is_empty());
    }

    #[test]
    fn test_direction_passed_through() {
        let keys = parse_sort("rank sideways");
        assert_eq!(keys[0].direction(), Some("sideways"));
    }

    #[test]
    fn test_extra_words_ignored() {
        let keys = parse_sort("name DESC NULLS LAST");
        assert_eq!(keys, vec![SortKey::new("name", Some("DESC"))]);
    }

    #[test]
    fn test_empty_entry_keeps_position() {
        let keys = parse_sort("a,,b");
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[1].field, "");
        assert_eq!(keys[1].path("doc"), "doc.");
    }

    #[test]
    fn test_path_and_display() {
        let key = SortKey::new("created_at", Some("asc"));
        assert_eq!(key.path("u"), "u.created_at");
        assert_eq!(key.to_string(), "created_at asc");
        assert_eq!(SortKey::new("id", None).to_string(), "id");
    }
}
