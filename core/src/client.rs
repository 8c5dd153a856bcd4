//! Async client for the network-management controller API.
//!
//! # Design
//! `NetworkClient` pairs the stateless [`Endpoints`] builders with a
//! [`Transport`]. It holds no mutable state, so one client can serve any
//! number of concurrent calls. Operations are grouped the way the
//! controller groups them: [`images`](NetworkClient::images),
//! [`tasks`](NetworkClient::tasks) and [`topology`](NetworkClient::topology).

use serde::de::DeserializeOwned;

use crate::api::{ImageApi, TaskApi, TopologyApi};
use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::request::RequestBuilder;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone)]
pub struct NetworkClient<T> {
    endpoints: Endpoints,
    transport: T,
}

impl NetworkClient<ReqwestTransport> {
    /// Client over a `reqwest` transport configured from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(config, ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> NetworkClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            endpoints: Endpoints::new(&config.base_url)
                .with_default_headers(&config.default_headers),
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Software image management.
    pub fn images(&self) -> ImageApi<'_, T> {
        ImageApi::new(self)
    }

    /// Task tracking.
    pub fn tasks(&self) -> TaskApi<'_, T> {
        TaskApi::new(self)
    }

    /// Network topology.
    pub fn topology(&self) -> TopologyApi<'_, T> {
        TopologyApi::new(self)
    }

    pub(crate) fn dispatch<R: DeserializeOwned>(
        &self,
        request: Result<HttpRequest, ApiError>,
    ) -> RequestBuilder<'_, T, R> {
        RequestBuilder::new(&self.transport, request)
    }
}
