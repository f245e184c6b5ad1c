//! Syntax checks for the names that end up verbatim in rendered AQL.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("unable to compile identifier regex")
});

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("unable to compile reference regex")
});

static COLLECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").expect("unable to compile collection regex")
});

/// Whether `s` is a plain AQL identifier (`doc`, `_key`).
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Whether `s` is a dotted attribute reference (`doc`, `doc.a.b`).
pub fn is_reference(s: &str) -> bool {
    REFERENCE_RE.is_match(s)
}

/// Whether `s` is a collection name (`users`, `audit-log_2`).
pub fn is_collection_name(s: &str) -> bool {
    COLLECTION_RE.is_match(s)
}
