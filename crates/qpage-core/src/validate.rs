//! Opt-in checks on sort keys before they reach the query builder.
//!
//! Nothing here runs unless a validator is installed on a
//! [`crate::Paginator`]; [`crate::paginate`] never validates.

use std::collections::HashSet;

use regex::Regex;

use crate::{error::ValidationError, sort::SortKey};

/// Accepts or rejects a single sort key.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError>;
}

impl<F> FieldValidator for F
where
    F: Fn(&SortKey) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError> {
        self(key)
    }
}

/// Only permits sorting on a fixed set of fields.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    fields: HashSet<String>,
    strict_directions: bool,
}

impl AllowList {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            strict_directions: false,
        }
    }

    /// Also reject directions other than `asc` and `desc` (any case).
    pub fn strict_directions(mut self, strict: bool) -> Self {
        self.strict_directions = strict;
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

impl FieldValidator for AllowList {
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError> {
        if !self.contains(&key.field) {
            return Err(ValidationError::FieldNotAllowed(key.field.clone()));
        }
        if self.strict_directions {
            StrictDirections.validate(key)?;
        }
        Ok(())
    }
}

/// Only permits `asc` and `desc` (any case) as directions. Keys without a
/// direction pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictDirections;

impl FieldValidator for StrictDirections {
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError> {
        match key.direction() {
            None => Ok(()),
            Some(dir) if dir.eq_ignore_ascii_case("asc") || dir.eq_ignore_ascii_case("desc") => {
                Ok(())
            }
            Some(dir) => Err(ValidationError::InvalidDirection {
                field: key.field.clone(),
                direction: dir.to_string(),
            }),
        }
    }
}

/// Requires every field name to match a regular expression.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    regex: Regex,
}

impl FieldPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FieldValidator for FieldPattern {
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError> {
        if self.regex.is_match(&key.field) {
            Ok(())
        } else {
            Err(ValidationError::FieldPattern {
                field: key.field.clone(),
                pattern: self.as_str().to_string(),
            })
        }
    }
}

/// Runs several validators in order, stopping at the first rejection.
#[derive(Default)]
pub struct AllOf {
    validators: Vec<Box<dyn FieldValidator>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl FieldValidator for AllOf {
    fn validate(&self, key: &SortKey) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|v| v.validate(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        let allow = AllowList::new(["date", "name"]);
        assert!(allow.validate(&SortKey::new("date", None)).is_ok());
        assert!(allow.validate(&SortKey::new("name", Some("whatever"))).is_ok());
        assert_eq!(
            allow.validate(&SortKey::new("password", None)),
            Err(ValidationError::FieldNotAllowed("password".into()))
        );
    }

    #[test]
    fn test_allow_list_strict_directions() {
        let allow = AllowList::new(["name"]).strict_directions(true);
        assert!(allow.validate(&SortKey::new("name", Some("DESC"))).is_ok());
        assert!(allow.validate(&SortKey::new("name", None)).is_ok());
        assert!(matches!(
            allow.validate(&SortKey::new("name", Some("sideways"))),
            Err(ValidationError::InvalidDirection { .. })
        ));
    }

    #[test]
    fn test_strict_directions() {
        assert!(StrictDirections.validate(&SortKey::new("any", None)).is_ok());
        assert!(StrictDirections.validate(&SortKey::new("any", Some("Asc"))).is_ok());
        assert!(StrictDirections.validate(&SortKey::new("any", Some("DESC"))).is_ok());
        assert_eq!(
            StrictDirections.validate(&SortKey::new("any", Some("up"))),
            Err(ValidationError::InvalidDirection {
                field: "any".into(),
                direction: "up".into(),
            })
        );
    }

    #[test]
    fn test_field_pattern() {
        let pattern = FieldPattern::new(r"^[a-z_]+$").unwrap();
        assert!(pattern.validate(&SortKey::new("created_at", None)).is_ok());
        assert!(matches!(
            pattern.validate(&SortKey::new("a) RETURN 1 //", None)),
            Err(ValidationError::FieldPattern { .. })
        ));
    }

    #[test]
    fn test_closure_validator() {
        let no_underscore = |key: &SortKey| {
            if key.field.starts_with('_') {
                Err(ValidationError::Rejected("system attributes are hidden".into()))
            } else {
                Ok(())
            }
        };
        assert!(no_underscore.validate(&SortKey::new("name", None)).is_ok());
        assert!(no_underscore.validate(&SortKey::new("_key", None)).is_err());
    }

    #[test]
    fn test_all_of_stops_at_first_rejection() {
        let all = AllOf::new()
            .with(AllowList::new(["name"]))
            .with(FieldPattern::new("^x").unwrap());
        assert_eq!(
            all.validate(&SortKey::new("date", None)),
            Err(ValidationError::FieldNotAllowed("date".into()))
        );
        assert!(matches!(
            all.validate(&SortKey::new("name", None)),
            Err(ValidationError::FieldPattern { .. })
        ));
    }
}
