//! Query-string mapping and path-template substitution.
//!
//! `QueryParams` keeps insertion order and drops absent values, so an
//! omitted optional parameter never shows up in the URL. Both query items
//! and path segments are percent-encoded with everything outside the RFC
//! 3986 unreserved set escaped.

use std::fmt::Display;

use crate::error::ApiError;

/// Ordered list of query items built from optional values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    items: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name=value` if `value` is present; skip it otherwise.
    pub fn opt<V: Display>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.items.push((name, value.to_string()));
        }
        self
    }

    pub fn items(&self) -> &[(&'static str, String)] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render as `a=1&b=2` with names and values percent-encoded.
    pub fn to_query_string(&self) -> String {
        self.items
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Replace each `{name}` in `template` with the matching percent-encoded
/// value from `params`.
///
/// An empty value is rejected as a missing parameter. A placeholder with no
/// matching entry is also reported as missing.
pub fn expand_path(
    template: &'static str,
    params: &[(&'static str, &str)],
) -> Result<String, ApiError> {
    let mut path = String::with_capacity(template.len());
    let mut rest: &'static str = template;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            path.push_str(&rest[open..]);
            return Ok(path);
        };
        let name = &after[..close];
        let (key, value) = params
            .iter()
            .find(|(key, _)| *key == name)
            .ok_or(ApiError::MissingParameter(name))?;
        if value.is_empty() {
            return Err(ApiError::MissingParameter(*key));
        }
        path.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }

    path.push_str(rest);
    Ok(path)
}
