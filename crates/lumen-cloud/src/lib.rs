//! # lumen-cloud
//!
//! Remote collaborators over HTTP: server-side post/user search and the
//! trending aggregate endpoint. [`RemoteApi`] implements the
//! `IRemoteDirectory` and `IRemoteTrending` ports from `lumen-core`.
//!
//! Requests go out only with the `cloud` feature (on by default). Without
//! it every call fails with a network error, which the engines treat like
//! any other outage.

pub mod api;
pub mod transport;

pub use api::RemoteApi;
pub use transport::{HttpClient, HttpClientConfig};
