//! Client for the items service.
//!
//! # Overview
//! [`ItemClient`] builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network, so it can be driven by any HTTP
//! stack. [`Client`] pairs it with a `ureq` agent for callers that just want
//! blocking calls against a running service.
//!
//! # Design
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the request/response mapping is testable
//!   without a server.
//! - Update is sent as `PATCH`; the service treats it as a partial update.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod blocking;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use blocking::Client;
pub use client::{ItemClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, DeleteResponse, Item, ItemList, PingResponse, UpdateItem};
