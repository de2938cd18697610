//! Synchronous client for the ServerPilot hosting API.
//!
//! # Overview
//! `ServerPilot` exposes servers, system users, apps, SSL, databases, SSH
//! keys and action status as plain method calls. Each call is one blocking
//! HTTP round trip with basic auth; a 200 yields the decoded JSON (or the
//! raw body when decoding is off) and anything else a typed `ApiError`.
//!
//! # Design
//! - `ClientConfig` is immutable once built; the client stores nothing per
//!   call, so one instance can be shared across threads.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`).
//!   Building and parsing are pure; only a `Transport` does I/O, and
//!   `UreqTransport` is the default one.
//! - Every endpoint goes through the same `send_request` and the same
//!   status-to-error mapping.
//!
//! ```no_run
//! use serverpilot_core::{ClientConfig, ServerPilot};
//!
//! let config = ClientConfig::new("my-client-id", "my-api-key")?;
//! let sp = ServerPilot::new(config);
//! let servers = sp.server_list()?;
//! println!("{:?}", servers.as_json());
//! # Ok::<(), serverpilot_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{service_error, ServerPilot};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Action, ActionStatus, ApiResponse, Envelope, Wordpress};
