//! Internal representation of query statements.
//!
//! Only [`Direction`] is public; the clauses are internal to [`super::AqlQuery`].

use std::{fmt, str::FromStr};

use crate::error::AqlError;

/// Sort direction accepted by AQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = AqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Direction::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Direction::Desc)
        } else {
            Err(AqlError::InvalidDirection(s.to_string()))
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// One key of a SORT statement.
pub(crate) struct SortClause {
    pub path: String,
    pub direction: Option<Direction>,
}

impl fmt::Display for SortClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {}", self.path, direction),
            None => write!(f, "{}", self.path),
        }
    }
}

pub(crate) enum Statement {
    Sort(Vec<SortClause>),
    Limit { offset: u64, count: u64 },
}
