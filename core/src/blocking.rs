//! Blocking client that performs the round-trip with `ureq`.
//!
//! Each method builds the request with `ItemClient`, executes it once and
//! hands the response back to the matching `parse_*` method. There is no
//! retry and no caching.

use crate::client::ItemClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, DeleteResponse, Item, ItemList, PingResponse, UpdateItem};

#[derive(Clone)]
pub struct Client {
    inner: ItemClient,
    agent: ureq::Agent,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url())
            .finish_non_exhaustive()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::from_item_client(ItemClient::default())
    }
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self::from_item_client(ItemClient::new(base_url))
    }

    pub fn from_item_client(inner: ItemClient) -> Self {
        Self {
            inner,
            agent: agent(),
        }
    }

    pub fn ping(&self) -> Result<PingResponse, ApiError> {
        let resp = self.send(self.inner.build_ping())?;
        self.inner.parse_ping(resp)
    }

    pub fn create(&self, input: &CreateItem) -> Result<Item, ApiError> {
        let resp = self.send(self.inner.build_create_item(input)?)?;
        self.inner.parse_create_item(resp)
    }

    pub fn list(&self) -> Result<ItemList, ApiError> {
        let resp = self.send(self.inner.build_list_items())?;
        self.inner.parse_list_items(resp)
    }

    pub fn get(&self, id: &str) -> Result<Item, ApiError> {
        let resp = self.send(self.inner.build_get_item(id))?;
        self.inner.parse_get_item(resp)
    }

    pub fn update(&self, id: &str, input: &UpdateItem) -> Result<Item, ApiError> {
        let resp = self.send(self.inner.build_update_item(id, input)?)?;
        self.inner.parse_update_item(resp)
    }

    pub fn delete(&self, id: &str) -> Result<DeleteResponse, ApiError> {
        let resp = self.send(self.inner.build_delete_item(id))?;
        self.inner.parse_delete_item(resp)
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        execute(&self.agent, req)
    }
}

/// Agent that returns 4xx/5xx responses as data so `ItemClient` can
/// interpret the status itself.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute `req` on `agent` and capture status and body.
pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::debug!(method = %req.method, url = %req.path, "sending request");

    let result = match req.method {
        HttpMethod::Get => with_headers(agent.get(&req.path), &req.headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&req.path), &req.headers).call(),
        HttpMethod::Post => send_body(agent.post(&req.path), &req.headers, req.body.as_deref()),
        HttpMethod::Patch => send_body(agent.patch(&req.path), &req.headers, req.body.as_deref()),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    tracing::debug!(status, "received response");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key, value);
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    headers: &[(String, String)],
    body: Option<&str>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let builder = with_headers(builder, headers);
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
