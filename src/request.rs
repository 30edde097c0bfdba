//! Incoming request view: pathname plus decoded query parameters.
//!
//! Only the request target matters to the posts routes; method, headers and
//! body are never inspected, so they are not carried here.

use url::{Url, form_urlencoded};

use crate::error::ApiError;

/// Base every request target is resolved against. Only its path and query
/// survive into a [`Request`].
const BASE_URL: &str = "http://localhost/";

/// The parts of an incoming request the dispatcher and handlers read.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub(crate) path: String,
    pub(crate) query: Query,
}

impl Request {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self { path: path.into(), query }
    }

    /// Splits a hyper URI into pathname and query.
    ///
    /// A request target in absolute form (`http://host/posts.get`) routes by
    /// its path component just like origin form does.
    pub fn from_uri(uri: &http::Uri) -> Result<Self, ApiError> {
        let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
        Self::from_target(target)
    }

    /// Resolves a raw request target against `http://localhost/` with WHATWG
    /// URL rules, so `/a/../posts.get` and `/./posts.get` name `/posts.get`.
    pub fn from_target(target: &str) -> Result<Self, ApiError> {
        let url = Url::parse(BASE_URL)
            .and_then(|base| base.join(target))
            .map_err(|_| ApiError::MalformedTarget)?;
        Ok(Self::new(url.path(), Query::parse(url.query().unwrap_or(""))))
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> &Query { &self.query }

    /// Returns a query parameter. Shorthand for `req.query().get(key)`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    /// Reads `key` as a number, the way JavaScript's `Number()` would.
    ///
    /// Missing and empty values are rejected, as is anything that coerces to
    /// NaN. Fractional, negative and infinite values pass; whether they name
    /// a post is the caller's problem.
    pub fn numeric_param(&self, key: &'static str) -> Result<f64, ApiError> {
        self.param(key)
            .filter(|raw| !raw.is_empty())
            .and_then(coerce_number)
            .ok_or(ApiError::Validation(key))
    }
}

/// Decoded `application/x-www-form-urlencoded` query parameters.
///
/// Multi-valued keys are not modeled: lookups return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parses a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when `key` appears at all, even with an empty value.
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }
}

/// JavaScript `Number(string)` coercion. Returns `None` where JS gives `NaN`.
///
/// Accepts surrounding whitespace, an all-blank string (→ 0), decimal and
/// exponent notation with an optional sign, `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integer literals.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(n) = radix_literal(s) {
        return n;
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Rust's float grammar also admits "inf", "nan" and friends; JS does not.
    let decimal = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && unsigned.bytes().any(|b| b.is_ascii_digit());
    if !decimal {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|n| sign * n)
}

/// `Some(result)` when `s` carries a radix prefix, `None` when it doesn't.
fn radix_literal(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }
    Some(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_decodes_plus_and_percent() {
        let q = Query::parse("content=hello+big%20world&id=3");
        assert_eq!(q.get("content"), Some("hello big world"));
        assert_eq!(q.get("id"), Some("3"));
        assert_eq!(q.get("missing"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let q = Query::parse("id=1&id=2");
        assert_eq!(q.get("id"), Some("1"));
    }

    #[test]
    fn empty_value_is_present() {
        let q = Query::parse("content=");
        assert!(q.has("content"));
        assert_eq!(q.get("content"), Some(""));

        let q = Query::parse("content");
        assert!(q.has("content"));
        assert!(!q.has("id"));
    }

    #[test]
    fn from_uri_splits_path_and_query() {
        let uri: http::Uri = "/posts.getById?id=12".parse().unwrap();
        let req = Request::from_uri(&uri).unwrap();
        assert_eq!(req.path(), "/posts.getById");
        assert_eq!(req.param("id"), Some("12"));

        let uri: http::Uri = "http://localhost:9999/posts.get".parse().unwrap();
        let req = Request::from_uri(&uri).unwrap();
        assert_eq!(req.path(), "/posts.get");
        assert!(!req.query().has("id"));
    }

    #[test]
    fn dot_segments_are_resolved() {
        for target in ["/x/../posts.get", "/./posts.get", "/a/b/../../posts.get", "/../posts.get"] {
            let req = Request::from_target(target).unwrap();
            assert_eq!(req.path(), "/posts.get", "{target}");
        }

        let uri: http::Uri = "/x/../posts.edit?id=1&content=a+b".parse().unwrap();
        let req = Request::from_uri(&uri).unwrap();
        assert_eq!(req.path(), "/posts.edit");
        assert_eq!(req.param("content"), Some("a b"));
    }

    #[test]
    fn unparsable_target_is_rejected() {
        assert_eq!(Request::from_target("//host:99999/posts.get").unwrap_err(), ApiError::MalformedTarget);
    }

    #[test]
    fn coercion_follows_js_number() {
        assert_eq!(coerce_number("42"), Some(42.0));
        assert_eq!(coerce_number(" 7 "), Some(7.0));
        assert_eq!(coerce_number("   "), Some(0.0));
        assert_eq!(coerce_number("-3"), Some(-3.0));
        assert_eq!(coerce_number("+1.5"), Some(1.5));
        assert_eq!(coerce_number(".5"), Some(0.5));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number("0x1F"), Some(31.0));
        assert_eq!(coerce_number("0b101"), Some(5.0));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));

        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("1a"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0xZZ"), None);
        assert_eq!(coerce_number("-"), None);
        assert_eq!(coerce_number("--1"), None);
        assert_eq!(coerce_number("-0x10"), None);
        assert_eq!(coerce_number("."), None);
    }

    #[test]
    fn numeric_param_rejects_missing_and_empty() {
        let req = Request::new("/x", Query::parse("id="));
        assert_eq!(req.numeric_param("id"), Err(ApiError::Validation("id")));

        let req = Request::new("/x", Query::parse(""));
        assert_eq!(req.numeric_param("id"), Err(ApiError::Validation("id")));

        let req = Request::new("/x", Query::parse("id=abc"));
        assert_eq!(req.numeric_param("id"), Err(ApiError::Validation("id")));

        let req = Request::new("/x", Query::parse("id=2.5"));
        assert_eq!(req.numeric_param("id"), Ok(2.5));
    }
}
