//! Stateless HTTP request builders and response parser for the controller API.
//!
//! # Design
//! `Endpoints` holds only a `base_url` and the headers attached to every
//! request, and carries no mutable state between calls. Each REST operation
//! has a `build_*` method that produces an `HttpRequest`; every operation
//! shares [`parse_response`], which consumes the `HttpResponse`. Whoever
//! executes the round-trip in between (a [`Transport`](crate::Transport) or
//! the host directly) keeps this layer deterministic and free of I/O.

mod image;
mod task;
mod topology;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::QueryParams;

const JSON: &str = "application/json";

/// Request builders for every controller endpoint.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Attach `headers` to every built request, ahead of per-operation headers.
    pub fn with_default_headers(mut self, headers: &BTreeMap<String, String>) -> Self {
        self.default_headers = headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str, query: QueryParams) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path, &query),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: QueryParams,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = self.default_headers.clone();
        headers.push(("content-type".to_string(), JSON.to_string()));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(path, &query),
            headers,
            body: Some(body),
        })
    }

    fn url(&self, path: &str, query: &QueryParams) -> String {
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{}", self.base_url, query.to_query_string())
        }
    }
}

/// Decode a response body into `R`, mapping non-2xx statuses to errors.
pub fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
