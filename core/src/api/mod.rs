//! Operation groups exposed by [`NetworkClient`](crate::NetworkClient).
//!
//! Every method returns a [`RequestBuilder`](crate::RequestBuilder); nothing
//! is sent until it is awaited with `send` or `execute`.

mod image;
mod task;
mod topology;

pub use image::ImageApi;
pub use task::TaskApi;
pub use topology::TopologyApi;
