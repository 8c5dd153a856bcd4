//! Async API client core for a network-management controller.
//!
//! # Overview
//! Covers three operation groups: software image management, task
//! tracking, and network topology. Each operation encodes its parameters
//! into a path, query string, or JSON body, dispatches one request through
//! a [`Transport`], and resolves once with the decoded body or an
//! [`ApiError`].
//!
//! # Design
//! - [`Endpoints`] is stateless and does no I/O: `build_*` produces an
//!   [`HttpRequest`], [`parse_response`] consumes an [`HttpResponse`]. Hosts
//!   that run their own HTTP stack can use it directly.
//! - [`NetworkClient`] binds `Endpoints` to a [`Transport`] and exposes one
//!   method per endpoint, grouped by [`images`](NetworkClient::images),
//!   [`tasks`](NetworkClient::tasks) and [`topology`](NetworkClient::topology).
//! - [`ReqwestTransport`] is the stock transport. No retries, caching, or
//!   session handling happen in this crate.
//!
//! ```no_run
//! use netmgmt_core::{ClientConfig, NetworkClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://10.0.0.5").with_header("X-Auth-Token", "token");
//! let client = NetworkClient::from_config(&config)?;
//! let task = client.tasks().get_task_by_id("abc123").send().await?;
//! println!("{:?}", task.response.progress);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod params;
pub mod request;
pub mod transport;
pub mod types;

pub use client::NetworkClient;
pub use config::ClientConfig;
pub use endpoints::{parse_response, Endpoints};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{expand_path, QueryParams};
pub use request::RequestBuilder;
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
