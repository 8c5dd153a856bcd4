//! One pending API call: a built request bound to a transport.
//!
//! # Design
//! Endpoint methods never fail up front. A request that could not be built
//! (missing parameter, unserializable body) is carried inside the builder
//! and surfaces from `send` / `execute` like any other failure, so every
//! call resolves exactly once with either a value or an error.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoints::parse_response;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::Transport;

/// A request ready to dispatch, decoding into `R` on success.
#[must_use = "a RequestBuilder does nothing until sent"]
pub struct RequestBuilder<'c, T, R> {
    transport: &'c T,
    request: Result<HttpRequest, ApiError>,
    _response: PhantomData<fn() -> R>,
}

impl<'c, T, R> RequestBuilder<'c, T, R>
where
    T: Transport,
    R: DeserializeOwned,
{
    pub(crate) fn new(transport: &'c T, request: Result<HttpRequest, ApiError>) -> Self {
        Self {
            transport,
            request,
            _response: PhantomData,
        }
    }

    /// The request that will be sent, or the error that prevented building it.
    pub fn request(&self) -> Result<&HttpRequest, &ApiError> {
        self.request.as_ref()
    }

    /// Dispatch once and decode the response.
    pub async fn send(self) -> Result<R, ApiError> {
        let request = self.request?;
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "dispatching request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %url, error = %e, "transport failed");
                return Err(e);
            }
        };

        debug!(%method, %url, status = response.status, "received response");
        if !response.is_success() {
            warn!(%method, %url, status = response.status, "request failed");
        }
        parse_response(response)
    }

    /// Dispatch once and hand the outcome to `callback`, which runs exactly once.
    pub async fn execute<F>(self, callback: F)
    where
        F: FnOnce(Result<R, ApiError>),
    {
        callback(self.send().await);
    }
}
