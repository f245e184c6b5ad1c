//! The request parameters that drive sorting and pagination.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::{
    error::{ParamsError, Result},
    sort::{parse_sort, SortKey},
};

/// Page number used when the request does not name one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request names neither `limit` nor `per_page`.
pub const DEFAULT_PAGE_SIZE: u64 = 30;

/// Fallback values for absent parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefaults {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sorting and pagination parameters, typically taken from a request's query
/// string.
///
/// The page size may be given as `limit` or `per_page`. When both are
/// present `limit` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub per_page: Option<u64>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Parses an URL query string such as `sort=date,name%20desc&page=5`.
    ///
    /// A leading `?` is accepted. Unknown keys are ignored, empty values count
    /// as absent and a repeated key keeps its last value.
    pub fn from_query_str(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "sort" => params.sort = Some(value.into_owned()),
                "page" => params.page = Some(parse_number(&key, &value)?),
                "limit" => params.limit = Some(parse_number(&key, &value)?),
                "per_page" => params.per_page = Some(parse_number(&key, &value)?),
                other => trace!("ignoring query parameter `{other}`"),
            }
        }

        Ok(params)
    }

    /// Reads the parameters from a JSON object.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Sort keys in the order they were listed. Empty when `sort` is absent
    /// or empty.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        self.sort.as_deref().map(parse_sort).unwrap_or_default()
    }

    pub fn page_number(&self, defaults: &PageDefaults) -> u64 {
        self.page.unwrap_or(defaults.page)
    }

    pub fn page_size(&self, defaults: &PageDefaults) -> u64 {
        self.limit.or(self.per_page).unwrap_or(defaults.page_size)
    }

    /// Rows to skip before the requested page: `(page - 1) * page_size`.
    ///
    /// Saturates instead of wrapping, so page 0 behaves like page 1.
    pub fn skip(&self, defaults: &PageDefaults) -> u64 {
        skip_for(self.page_number(defaults), self.page_size(defaults))
    }
}

pub(crate) fn skip_for(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ParamsError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn deserialize_number<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::new();
        let defaults = PageDefaults::default();
        assert_eq!(params.page_number(&defaults), 1);
        assert_eq!(params.page_size(&defaults), 30);
        assert_eq!(params.skip(&defaults), 0);
        assert!(params.sort_keys().is_empty());
    }

    #[test]
    fn test_limit_takes_precedence() {
        let defaults = PageDefaults::default();
        let params = PageParams::new().per_page(10);
        assert_eq!(params.page_size(&defaults), 10);

        let params = params.limit(25);
        assert_eq!(params.page_size(&defaults), 25);
    }

    #[test]
    fn test_skip() {
        let defaults = PageDefaults::default();
        assert_eq!(PageParams::new().page(3).limit(10).skip(&defaults), 20);
        assert_eq!(PageParams::new().page(5).limit(100).skip(&defaults), 400);
        assert_eq!(PageParams::new().page(0).skip(&defaults), 0);
        assert_eq!(PageParams::new().page(u64::MAX).limit(u64::MAX).skip(&defaults), u64::MAX);
    }

    #[test]
    fn test_from_query_str() {
        let params = PageParams::from_query_str("?sort=date,name%20desc&page=5&limit=100").unwrap();
        assert_eq!(params.sort.as_deref(), Some("date,name desc"));
        assert_eq!(params.page, Some(5));
        assert_eq!(params.limit, Some(100));
        assert_eq!(params.per_page, None);
    }

    #[test]
    fn test_from_query_str_plus_is_space() {
        let params = PageParams::from_query_str("sort=name+desc&per_page=15&q=ignored").unwrap();
        assert_eq!(params.sort.as_deref(), Some("name desc"));
        assert_eq!(params.per_page, Some(15));
    }

    #[test]
    fn test_from_query_str_empty_values() {
        let params = PageParams::from_query_str("sort=&page=").unwrap();
        assert_eq!(params, PageParams::default());
    }

    #[test]
    fn test_from_query_str_invalid_number() {
        let err = PageParams::from_query_str("page=two").unwrap_err();
        assert_eq!(
            err,
            ParamsError::InvalidNumber {
                key: "page".into(),
                value: "two".into(),
            }
        );
    }

    #[test]
    fn test_from_json() {
        let params = PageParams::from_json(&json!({
            "sort": "date, name desc",
            "page": "5",
            "limit": 100
        }))
        .unwrap();
        assert_eq!(params.page, Some(5));
        assert_eq!(params.limit, Some(100));
        assert_eq!(params.sort_keys().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = PageParams::from_json(&json!({ "page": "soon" })).unwrap_err();
        assert!(matches!(err, ParamsError::Malformed(_)));

        let err = PageParams::from_json(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ParamsError::Malformed(_)));
    }
}
